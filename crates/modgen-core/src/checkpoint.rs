use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors while persisting a checkpoint.
///
/// Load failures never surface as errors (see [`Checkpoint::load`]); only
/// saves report them, and the generation engine logs and swallows those.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable per-stanza counter state.
///
/// This is the only state that survives a process exit. Both fields default
/// to zero so a checkpoint file written by an older build with fewer fields
/// still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Epoch seconds of the last completed generation pass.
    #[serde(default)]
    pub last_run: i64,
    /// Running total of events emitted for this stanza across invocations.
    #[serde(default)]
    pub events_generated: u64,
}

/// Resolve the checkpoint file for a stanza.
///
/// Pure function of the configured directory and the stanza name: the digest
/// keeps arbitrary stanza names (`scheme://host` and friends) filesystem-safe
/// while two invocations with the same name always address the same file.
pub fn checkpoint_path(checkpoint_dir: &Path, stanza_name: &str) -> PathBuf {
    let digest = Sha256::digest(stanza_name.as_bytes());
    checkpoint_dir.join(format!("modinputname_{}", hex::encode(digest)))
}

impl Checkpoint {
    /// Load the checkpoint at `path`, degrading to the empty checkpoint.
    ///
    /// An absent, unreadable, or undecodable file is indistinguishable from
    /// "this stanza has never run," so generation always proceeds as a first
    /// run instead of blocking on a broken file.
    pub fn load(path: &Path) -> Checkpoint {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no checkpoint, starting fresh");
                return Checkpoint::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(checkpoint) => checkpoint,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "discarding undecodable checkpoint");
                Checkpoint::default()
            }
        }
    }

    /// Serialize the checkpoint to `path`, overwriting any prior content.
    pub fn save(&self, path: &Path) -> Result<(), CheckpointError> {
        fs::write(path, serde_json::to_vec(self)?)?;
        debug!(path = %path.display(), events_generated = self.events_generated, "checkpoint saved");
        Ok(())
    }
}
