use anyhow::Context;
use clap::CommandFactory;
use crate::commands;
use crate::http_transport::HttpTransport;
use crate::presets;
use libgraphql_explorer::catalog::TypeCatalog;
use libgraphql_explorer::catalog::fetch_schema;
use std::path::PathBuf;
use std::time::Duration;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql-explorer", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        env="GRAPHQL_ENDPOINT",
        global=true,
        help="URL of the GraphQL endpoint to explore.",
        long,
    )]
    pub(crate) endpoint: Option<String>,

    #[arg(
        global=true,
        help="Name of a preset endpoint to explore instead of --endpoint \
             (see the `presets` command).",
        long,
    )]
    pub(crate) preset: Option<String>,

    #[arg(
        global=true,
        help="Load the schema from a saved introspection result instead of \
             introspecting the endpoint.",
        long,
    )]
    pub(crate) schema_file: Option<PathBuf>,

    #[arg(
        default_value_t=30,
        global=true,
        help="Seconds to wait for the endpoint before giving up on a request.",
        long,
    )]
    pub(crate) timeout_secs: u64,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    /// The endpoint selected by `--preset`, falling back to `--endpoint`
    /// (or `GRAPHQL_ENDPOINT`).
    pub(crate) fn endpoint(&self) -> anyhow::Result<String> {
        if let Some(preset_name) = &self.preset {
            let preset =
                presets::find(preset_name)
                    .with_context(|| format!(
                        "Unknown preset `{preset_name}`. Run `graphql-explorer \
                        presets` to list the available presets.",
                    ))?;
            return preset.url().with_context(|| format!(
                "Preset `{}` is unavailable: {}",
                preset.name,
                preset.requirement().unwrap_or_default(),
            ));
        }

        self.endpoint.clone().context(
            "No endpoint given. Pass --endpoint (or set GRAPHQL_ENDPOINT) or \
            pick one of the --preset endpoints.",
        )
    }

    pub(crate) fn http_transport(&self) -> anyhow::Result<HttpTransport> {
        Ok(HttpTransport::new(Duration::from_secs(self.timeout_secs))?)
    }

    /// Load the schema from `--schema-file` if one was given, otherwise by
    /// introspecting the selected endpoint.
    pub(crate) async fn load_catalog(&self) -> anyhow::Result<TypeCatalog> {
        if let Some(schema_file) = &self.schema_file {
            log::debug!("Loading the schema from {schema_file:#?}...");
            let json =
                std::fs::read_to_string(schema_file)
                    .with_context(|| format!(
                        "Unable to read schema file {schema_file:#?}",
                    ))?;
            let catalog = TypeCatalog::from_response_json(&json)?;
            log::debug!("Loaded {} types from {schema_file:#?}.", catalog.len());
            return Ok(catalog);
        }

        let endpoint = self.endpoint()?;
        let transport = self.http_transport()?;
        fetch_schema(&transport, &endpoint)
            .await
            .with_context(|| format!("Unable to introspect `{endpoint}`"))
    }
}
