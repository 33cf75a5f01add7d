use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::BuildOptions;
use crate::commands::parse_field_arg;
use crate::commands::parse_field_path;
use crate::commands::parse_key_value;
use crate::output_utils;
use libgraphql_explorer::ExplorerError;
use libgraphql_explorer::document::OperationKind;
use libgraphql_explorer::session::ExplorerSession;

#[derive(Debug, clap::Args)]
pub(crate) struct QueryCmd {
    #[arg(
        help="Value for one of the operation's arguments.",
        long="arg",
        value_name="NAME=VALUE",
        value_parser=parse_key_value,
    )]
    pub(crate) args: Vec<(String, String)>,

    #[command(flatten)]
    pub(crate) build_options: BuildOptions,

    #[arg(
        help="Send the document to the endpoint and print the result.",
        long,
    )]
    pub(crate) execute: bool,

    #[arg(
        help="Value for an argument of a selected field (the field is \
             selected if it isn't already).",
        long="field-arg",
        value_name="FIELD.ARG=VALUE",
        value_parser=parse_field_arg,
    )]
    pub(crate) field_args: Vec<(String, String, String)>,

    #[arg(
        help="Build a mutation instead of a query.",
        long,
    )]
    pub(crate) mutation: bool,

    #[arg(
        help="Name of the query (or mutation) to build.",
        name="OPERATION",
    )]
    pub(crate) operation: String,

    #[arg(
        help="Fields to select, replacing the default selection.",
        long,
        value_delimiter=',',
    )]
    pub(crate) select: Vec<String>,

    #[arg(
        help="Node field to select on a connection field (the connection \
             field is selected if it isn't already).",
        long="subfield",
        value_name="FIELD.SUBFIELD",
        value_parser=parse_field_path,
    )]
    pub(crate) subfields: Vec<(String, String)>,
}
impl QueryCmd {
    pub(crate) fn kind(&self) -> OperationKind {
        if self.mutation {
            OperationKind::Mutation
        } else {
            OperationKind::Query
        }
    }

    /// Replay the command line's choices onto `session`.
    pub(crate) fn apply(&self, session: &mut ExplorerSession<'_>) -> Result<(), ExplorerError> {
        session.select_operation(self.kind(), &self.operation)?;

        if !self.select.is_empty() {
            session.clear_selections()?;
            for field_name in &self.select {
                check_field(session, field_name.trim())?;
            }
        }
        for (argument_name, raw_value) in &self.args {
            session.set_argument(argument_name, raw_value)?;
        }
        for (field_name, subfield_name) in &self.subfields {
            check_field(session, field_name)?;
            check_subfield(session, field_name, subfield_name)?;
        }
        for (field_name, argument_name, raw_value) in &self.field_args {
            check_field(session, field_name)?;
            session.set_subfield_argument(field_name, argument_name, raw_value)?;
        }
        Ok(())
    }
}

#[inherent::inherent]
impl RunnableCommand for QueryCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let catalog = match cli.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let mut session =
            ExplorerSession::with_config(&catalog, self.build_options.session_config());
        let built = match self.apply(&mut session).and_then(|_| session.preview_query()) {
            Ok(built) => built,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };
        let mut lines = output_utils::built_operation_lines(&built);
        if !self.execute {
            return CommandResult::stdout(format_args!("{}", lines.join("\n")));
        }

        match execute(&cli, &mut session).await {
            Ok(data) => {
                lines.push("Result:".to_string());
                lines.push(output_utils::pretty_json(&data));
                CommandResult::stdout(format_args!("{}", lines.join("\n")))
            },
            Err(e) => CommandResult::stderr(format_args!(
                "{}\n{} {e:#}",
                lines.join("\n"),
                output_utils::RED_X,
            )),
        }
    }
}

async fn execute(
    cli: &Cli,
    session: &mut ExplorerSession<'_>,
) -> anyhow::Result<serde_json::Value> {
    let endpoint = cli.endpoint()?;
    let transport = cli.http_transport()?;
    Ok(session.execute(&transport, &endpoint).await?)
}

/// Check `field_name` unless it is checked already.
fn check_field(session: &mut ExplorerSession<'_>, field_name: &str) -> Result<(), ExplorerError> {
    let is_checked =
        session.active_operation()
            .is_some_and(|operation| operation.selections().contains(field_name));
    if !is_checked {
        session.toggle_field(field_name)?;
    }
    Ok(())
}

/// Check a connection's node field unless it is checked already.
fn check_subfield(
    session: &mut ExplorerSession<'_>,
    field_name: &str,
    subfield_name: &str,
) -> Result<(), ExplorerError> {
    let is_checked =
        session.active_operation()
            .and_then(|operation| operation.selections().get(field_name))
            .is_some_and(|selection| {
                selection.subfields().iter().any(|name| name == subfield_name)
            });
    if !is_checked {
        session.set_connection_subfield(field_name, subfield_name)?;
    }
    Ok(())
}
