use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::presets::PRESETS;
use crate::presets::THEGRAPH_API_KEY_VAR;

#[derive(Debug, clap::Args)]
pub(crate) struct PresetsCmd {}

#[inherent::inherent]
impl RunnableCommand for PresetsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let placeholder_key = format!("${THEGRAPH_API_KEY_VAR}");
        let lines: Vec<String> =
            PRESETS.iter()
                .map(|preset| {
                    let shown_url =
                        preset.url_with_api_key(Some(&placeholder_key))
                            .unwrap_or_default();
                    let availability =
                        match (preset.url(), preset.requirement()) {
                            (None, Some(requirement)) =>
                                format!("  (unavailable: {requirement})"),
                            _ => String::new(),
                        };
                    format!(
                        "  {:<12} {}{availability}\n  {:<12} {shown_url}",
                        preset.name,
                        preset.label,
                        "",
                    )
                })
                .collect();

        CommandResult::stdout(format_args!(
            "Preset endpoints (use with --preset):\n{}",
            lines.join("\n"),
        ))
    }
}
