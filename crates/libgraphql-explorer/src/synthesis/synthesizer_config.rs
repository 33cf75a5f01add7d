use crate::classify::ConnectionDetection;

/// Limits and heuristics for [`SelectionSetSynthesizer`](crate::synthesis::SelectionSetSynthesizer).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SynthesizerConfig {
    /// Which field names mark a type as a connection.
    pub connection_detection: ConnectionDetection,

    /// Nesting level at which default expansion of object fields stops. A
    /// top-level object field sits at level 1; an object reached at this
    /// level selects only `__typename`.
    pub max_depth: usize,

    /// How many default fields an object field expands to.
    pub max_object_fields: usize,
}
impl std::default::Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            connection_detection: ConnectionDetection::default(),
            max_depth: 3,
            max_object_fields: 5,
        }
    }
}
