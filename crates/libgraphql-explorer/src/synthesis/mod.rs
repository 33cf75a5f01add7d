mod selection_set_synthesizer;
mod synthesizer_config;

pub use selection_set_synthesizer::SelectionSetSynthesizer;
pub use selection_set_synthesizer::TYPENAME_FIELD;
pub use synthesizer_config::SynthesizerConfig;

#[cfg(test)]
mod tests;
