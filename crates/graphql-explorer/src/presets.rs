/// Environment variable holding the API key for The Graph's gateway.
pub(crate) const THEGRAPH_API_KEY_VAR: &str = "THEGRAPH_API_KEY";

#[derive(Debug)]
enum PresetSource {
    Fixed(&'static str),
    TheGraphSubgraph {
        subgraph_id: &'static str,
    },
}

/// A well-known endpoint selectable with `--preset`.
#[derive(Debug)]
pub(crate) struct Preset {
    pub(crate) label: &'static str,
    pub(crate) name: &'static str,
    source: PresetSource,
}
impl Preset {
    /// The endpoint URL, or `None` if the preset needs configuration that is
    /// missing from the environment.
    pub(crate) fn url(&self) -> Option<String> {
        let api_key = std::env::var(THEGRAPH_API_KEY_VAR).ok();
        self.url_with_api_key(api_key.as_deref())
    }

    pub(crate) fn url_with_api_key(&self, api_key: Option<&str>) -> Option<String> {
        match &self.source {
            PresetSource::Fixed(url) => Some(url.to_string()),
            PresetSource::TheGraphSubgraph { subgraph_id } =>
                api_key
                    .map(str::trim)
                    .filter(|api_key| !api_key.is_empty())
                    .map(|api_key| format!(
                        "https://gateway.thegraph.com/api/{api_key}/subgraphs/id/{subgraph_id}",
                    )),
        }
    }

    /// What must be configured before [`url`](Preset::url) is available.
    pub(crate) fn requirement(&self) -> Option<String> {
        match &self.source {
            PresetSource::Fixed(_) => None,
            PresetSource::TheGraphSubgraph { .. } =>
                Some(format!("set `{THEGRAPH_API_KEY_VAR}` to a gateway API key")),
        }
    }
}

pub(crate) const PRESETS: &[Preset] = &[
    Preset {
        label: "PulseChain Scan",
        name: "pulsechain",
        source: PresetSource::Fixed("https://api.scan.pulsechain.com/api/v1/graphql"),
    },
    Preset {
        label: "The Graph Gateway",
        name: "thegraph",
        source: PresetSource::TheGraphSubgraph {
            subgraph_id: "5zvR82QoaXYFyDEKLZ9t6v9adgnptxYpKpSbxtgVENFV",
        },
    },
];

pub(crate) fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}
