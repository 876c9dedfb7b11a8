//! Core contracts for the modgen modular input.
//!
//! This crate defines the configuration model and XML parser, the stanza
//! validator, the durable checkpoint store, and the capability scheme shared
//! by the generation engine and the CLI.

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod scheme;
pub mod validate;

pub use checkpoint::{Checkpoint, CheckpointError, checkpoint_path};
pub use config::{Configuration, ParamMap, Stanza, parse_configuration};
pub use error::ConfigError;
pub use scheme::{SCHEME, scheme};
pub use validate::{ValidationError, validate_stanza};
