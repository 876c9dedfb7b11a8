use thiserror::Error;

/// Errors emitted by the generation engine.
///
/// Only failures of the output stream itself land here. Bad per-stanza
/// parameters become [`crate::SkipReason`]s, and checkpoint save failures
/// are logged and reported rather than raised; both are local to one stanza.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
