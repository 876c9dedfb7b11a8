use std::collections::BTreeMap;
use std::path::PathBuf;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::ConfigError;

/// Parameters of a single stanza, keyed by param name.
pub type ParamMap = BTreeMap<String, String>;

/// One named configuration block from the host payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    pub name: String,
    pub params: ParamMap,
}

/// The full configuration delivered on stdin in streaming mode.
///
/// Stanzas keep the order in which the payload declared them; that order is
/// the processing order. The value is rebuilt from scratch on every
/// invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub stanzas: Vec<Stanza>,
    pub checkpoint_dir: PathBuf,
}

impl Configuration {
    /// Look up a stanza by name.
    pub fn stanza(&self, name: &str) -> Option<&Stanza> {
        self.stanzas.iter().find(|stanza| stanza.name == name)
    }
}

/// Parse the host's configuration payload into a typed [`Configuration`].
///
/// The document root must contain a `configuration` element holding zero or
/// more `stanza` elements (each with a `name` attribute and `param` children
/// carrying text values) and a sibling `checkpoint_dir` text element. All
/// structural problems are fatal; an empty `configuration` element is valid
/// and yields an empty stanza list.
pub fn parse_configuration(payload: &str) -> Result<Configuration, ConfigError> {
    let doc = Document::parse(payload)?;

    let conf_node = doc
        .descendants()
        .find(|node| node.has_tag_name("configuration"))
        .ok_or(ConfigError::MissingConfiguration)?;

    let mut stanzas = Vec::new();
    for node in conf_node.children().filter(|n| n.has_tag_name("stanza")) {
        stanzas.push(parse_stanza(&node)?);
    }

    let checkpoint_dir = doc
        .descendants()
        .find(|node| node.has_tag_name("checkpoint_dir"))
        .and_then(|node| node.text())
        .map(PathBuf::from)
        .ok_or(ConfigError::MissingCheckpointDir)?;

    debug!(
        stanzas = stanzas.len(),
        checkpoint_dir = %checkpoint_dir.display(),
        "configuration parsed"
    );

    Ok(Configuration {
        stanzas,
        checkpoint_dir,
    })
}

fn parse_stanza(node: &Node<'_, '_>) -> Result<Stanza, ConfigError> {
    let name = node
        .attribute("name")
        .ok_or(ConfigError::MissingStanzaName)?
        .to_string();

    let mut params = ParamMap::new();
    for param in node.children().filter(|n| n.has_tag_name("param")) {
        let param_name = param
            .attribute("name")
            .ok_or_else(|| ConfigError::MissingParamName {
                stanza: name.clone(),
            })?;
        let value = param
            .text()
            .ok_or_else(|| ConfigError::MissingParamValue {
                stanza: name.clone(),
                param: param_name.to_string(),
            })?;
        params.insert(param_name.to_string(), value.to_string());
    }

    debug!(stanza = %name, params = params.len(), "stanza parsed");

    Ok(Stanza { name, params })
}
