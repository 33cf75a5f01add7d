use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgraphql_explorer::document::OperationKind;
use libgraphql_explorer::session::ExplorerSession;

#[derive(Debug, clap::Args)]
pub(crate) struct FieldsCmd {
    #[arg(
        help="Look the operation up among the mutations instead of the \
             queries.",
        long,
    )]
    mutation: bool,

    #[arg(
        help="Name of the query (or mutation) to describe.",
        name="OPERATION",
    )]
    operation: String,
}

#[inherent::inherent]
impl RunnableCommand for FieldsCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let catalog = match cli.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        let kind =
            if self.mutation {
                OperationKind::Mutation
            } else {
                OperationKind::Query
            };

        let mut session = ExplorerSession::new(&catalog);
        if let Err(e) = session.select_operation(kind, &self.operation) {
            return CommandResult::stderr(format_args!("{} {e}", output_utils::RED_X));
        }
        let lines = match session.active_operation() {
            Some(operation) => output_utils::operation_lines(&session, operation.field(), None),
            None => vec![],
        };

        CommandResult::stdout(format_args!("{kind} {}", lines.join("\n")))
    }
}
