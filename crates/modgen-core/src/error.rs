use thiserror::Error;

/// Fatal configuration errors.
///
/// Without a usable configuration the process cannot know what to generate,
/// so every variant here aborts the whole invocation. Per-stanza problems
/// (a bad `num_events` value, checkpoint trouble) are deliberately not part
/// of this type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The payload is not parseable markup at all.
    #[error("malformed configuration payload: {0}")]
    Xml(#[from] roxmltree::Error),
    /// The payload has no `configuration` element.
    #[error("payload has no configuration element")]
    MissingConfiguration,
    /// The payload has no `checkpoint_dir` text element.
    #[error("payload has no checkpoint_dir element")]
    MissingCheckpointDir,
    /// A `stanza` element carries no `name` attribute.
    #[error("stanza is missing its name attribute")]
    MissingStanzaName,
    /// A `param` element carries no `name` attribute.
    #[error("param in stanza '{stanza}' is missing its name attribute")]
    MissingParamName { stanza: String },
    /// A `param` element carries no text value.
    #[error("param '{param}' in stanza '{stanza}' has no value")]
    MissingParamValue { stanza: String, param: String },
}
