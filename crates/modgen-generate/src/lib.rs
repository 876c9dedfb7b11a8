//! Event generation engine for the modgen modular input.
//!
//! Consumes a parsed [`modgen_core::Configuration`], resumes each stanza's
//! counter from its checkpoint, streams synthetic records to a writer, and
//! persists the advanced counters.

pub mod clock;
pub mod engine;
pub mod errors;
pub mod model;

pub use clock::{Clock, SystemClock};
pub use engine::{GenerationEngine, HOSTS, MESSAGES};
pub use errors::GenerationError;
pub use model::{RunReport, SkipReason, StanzaOutcome, StanzaReport};
