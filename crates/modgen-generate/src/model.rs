use serde::Serialize;
use thiserror::Error;

/// Why a stanza produced no events.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum SkipReason {
    #[error("num_events is not set")]
    MissingNumEvents,
    #[error("num_events '{0}' is not an integer")]
    NotAnInteger(String),
    #[error("num_events must be at least 1, got {0}")]
    NonPositive(i64),
}

/// Outcome of one stanza's pass through the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum StanzaOutcome {
    /// Records were emitted and the counter advanced.
    Generated {
        /// Records emitted during this invocation.
        events_emitted: u64,
        /// Final running total written to the checkpoint.
        events_generated: u64,
        /// False when the checkpoint save failed; the next invocation will
        /// silently reuse stale counters.
        checkpoint_saved: bool,
    },
    /// The stanza was skipped before generation; its checkpoint is untouched.
    Skipped { reason: SkipReason },
}

/// Per-stanza result record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StanzaReport {
    pub stanza: String,
    #[serde(flatten)]
    pub outcome: StanzaOutcome,
}

/// Summary of a full streaming run, one entry per stanza in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub stanzas: Vec<StanzaReport>,
}

impl RunReport {
    pub fn generated(&self) -> usize {
        self.stanzas
            .iter()
            .filter(|report| matches!(report.outcome, StanzaOutcome::Generated { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.stanzas.len() - self.generated()
    }
}
