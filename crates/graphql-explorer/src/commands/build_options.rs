use libgraphql_explorer::classify::ConnectionDetection;
use libgraphql_explorer::document::DocumentShape;
use libgraphql_explorer::session::SessionConfig;
use libgraphql_explorer::synthesis::SynthesizerConfig;

/// Options shared by every command that builds documents.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct BuildOptions {
    #[arg(
        default_value_t=SessionConfig::default().default_connection_subfields,
        help="Number of node fields to check automatically when a connection \
             field is checked.",
        long,
    )]
    pub(crate) connection_subfields: usize,

    #[arg(
        help="Embed argument values in the document as literals instead of \
             sending them as variables.",
        long,
    )]
    pub(crate) inline: bool,

    #[arg(
        default_value_t=SynthesizerConfig::default().max_depth,
        help="Nesting level at which object fields stop being expanded.",
        long,
    )]
    pub(crate) max_depth: usize,

    #[arg(
        default_value_t=SynthesizerConfig::default().max_object_fields,
        help="Number of default fields an object field expands to.",
        long,
    )]
    pub(crate) max_object_fields: usize,

    #[arg(
        help="Also treat types with a `nodes` field as connections.",
        long,
    )]
    pub(crate) nodes_connections: bool,
}
impl BuildOptions {
    pub(crate) fn session_config(&self) -> SessionConfig {
        SessionConfig {
            default_connection_subfields: self.connection_subfields,
            shape:
                if self.inline {
                    DocumentShape::InlineLiterals
                } else {
                    DocumentShape::Variables
                },
            synthesizer: SynthesizerConfig {
                connection_detection:
                    if self.nodes_connections {
                        ConnectionDetection::EdgesOrNodes
                    } else {
                        ConnectionDetection::Edges
                    },
                max_depth: self.max_depth,
                max_object_fields: self.max_object_fields,
            },
        }
    }
}
