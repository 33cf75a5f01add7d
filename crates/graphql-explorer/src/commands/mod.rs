mod build_options;
mod explore;
mod fields;
mod parse_utils;
mod presets;
mod query;
mod schema;

use crate::Cli;
use crate::CommandResult;
pub(crate) use build_options::BuildOptions;
pub(crate) use explore::ExploreCmd;
pub(crate) use fields::FieldsCmd;
pub(crate) use parse_utils::parse_field_arg;
pub(crate) use parse_utils::parse_field_path;
pub(crate) use parse_utils::parse_key_value;
pub(crate) use presets::PresetsCmd;
pub(crate) use query::QueryCmd;
pub(crate) use schema::SchemaCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-explorer")]
pub(crate) enum CommandEnum {
    /// Build queries one step at a time in an interactive session.
    Explore(Box<ExploreCmd>),

    /// Describe the arguments and selectable fields of one operation.
    Fields(Box<FieldsCmd>),

    /// List the preset endpoints.
    Presets(PresetsCmd),

    /// Build (and optionally execute) a query or mutation.
    Query(Box<QueryCmd>),

    /// List the queries and mutations the schema offers.
    Schema(SchemaCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Explore(cmd) => cmd.run(cli).await,
            Self::Fields(cmd) => cmd.run(cli).await,
            Self::Presets(cmd) => cmd.run(cli).await,
            Self::Query(cmd) => cmd.run(cli).await,
            Self::Schema(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
