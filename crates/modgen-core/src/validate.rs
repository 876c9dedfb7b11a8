use roxmltree::Document;
use thiserror::Error;
use tracing::debug;

/// Reasons a proposed stanza is rejected.
///
/// Validation answers "would this stanza be acceptable," never "what happens
/// if it runs". It reads only the proposed document and never touches the
/// checkpoint store. Rejections surface as exit code 1 in the CLI.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("malformed stanza payload: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("payload has no item element")]
    MissingItem,
    #[error("param is missing its name attribute")]
    MissingParamName,
    #[error("param '{param}' has no value")]
    MissingValue { param: String },
    #[error("param '{param}': '{value}' is not an integer")]
    NotAnInteger { param: String, value: String },
    #[error("param '{param}' must be at least 1, got {value}")]
    OutOfRange { param: String, value: i64 },
}

type ParamRule = fn(&str, &str) -> Result<(), ValidationError>;

/// Validation rules keyed by parameter name. Params with no registered rule
/// only need a present value.
const RULES: &[(&str, ParamRule)] = &[("num_events", positive_int)];

/// Validate a single proposed stanza document.
///
/// The document carries one `item` element with a `name` attribute and
/// `param` children; each param with a registered rule must satisfy it.
pub fn validate_stanza(payload: &str) -> Result<(), ValidationError> {
    let doc = Document::parse(payload)?;

    let item = doc
        .descendants()
        .find(|node| node.has_tag_name("item"))
        .ok_or(ValidationError::MissingItem)?;
    let stanza_name = item.attribute("name").unwrap_or("");
    debug!(stanza = stanza_name, "validating proposed stanza");

    for param in item.descendants().filter(|n| n.has_tag_name("param")) {
        let name = param
            .attribute("name")
            .ok_or(ValidationError::MissingParamName)?;
        let value = param.text().ok_or_else(|| ValidationError::MissingValue {
            param: name.to_string(),
        })?;

        if let Some((_, rule)) = RULES.iter().find(|(rule_name, _)| *rule_name == name) {
            rule(name, value)?;
        }
        debug!(stanza = stanza_name, param = name, value, "param validated");
    }

    Ok(())
}

fn positive_int(param: &str, value: &str) -> Result<(), ValidationError> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger {
            param: param.to_string(),
            value: value.to_string(),
        })?;
    if parsed < 1 {
        return Err(ValidationError::OutOfRange {
            param: param.to_string(),
            value: parsed,
        });
    }
    Ok(())
}
