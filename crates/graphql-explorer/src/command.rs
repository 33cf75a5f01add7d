use crate::Cli;
use crate::CommandResult;

/// A `graphql-explorer` subcommand. Global options (endpoint, schema file,
/// timeout) arrive through `cli`.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
