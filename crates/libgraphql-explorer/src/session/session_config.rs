use crate::document::DocumentShape;
use crate::synthesis::SynthesizerConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SessionConfig {
    /// How many of a connection's node leaf fields are pre-checked when the
    /// connection field itself is checked.
    pub default_connection_subfields: usize,

    pub shape: DocumentShape,

    pub synthesizer: SynthesizerConfig,
}
impl std::default::Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_connection_subfields: 5,
            shape: DocumentShape::default(),
            synthesizer: SynthesizerConfig::default(),
        }
    }
}
