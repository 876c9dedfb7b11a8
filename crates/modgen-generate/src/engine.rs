use std::io::Write;

use rand::Rng;
use tracing::{info, warn};

use modgen_core::{Checkpoint, Configuration, ParamMap, Stanza, checkpoint_path};

use crate::clock::{Clock, SystemClock};
use crate::errors::GenerationError;
use crate::model::{RunReport, SkipReason, StanzaOutcome, StanzaReport};

/// Fixed host labels attached to generated records.
pub const HOSTS: [&str; 3] = ["host1", "host2", "host3"];

/// Fixed message payloads attached to generated records.
pub const MESSAGES: [&str; 3] = ["Test Message #1", "Test Message #2", "Test Message #3"];

/// Per-stanza generation state machine.
///
/// For each stanza, in discovery order: load the checkpoint, parse
/// `num_events`, emit that many records with a strictly increasing sequence
/// number resumed from the checkpoint, then persist the advanced counter.
/// A bad `num_events` skips only that stanza; a failed checkpoint save is
/// logged and reported but never aborts the run.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine<C = SystemClock> {
    clock: C,
}

impl GenerationEngine<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> GenerationEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Run the engine over every stanza in `config`, writing records to `out`.
    pub fn run<W, R>(
        &self,
        config: &Configuration,
        out: &mut W,
        rng: &mut R,
    ) -> Result<RunReport, GenerationError>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        let mut report = RunReport::default();
        for stanza in &config.stanzas {
            let outcome = self.run_stanza(config, stanza, out, rng)?;
            report.stanzas.push(StanzaReport {
                stanza: stanza.name.clone(),
                outcome,
            });
        }
        info!(
            stanzas = report.stanzas.len(),
            generated = report.generated(),
            skipped = report.skipped(),
            "run finished"
        );
        Ok(report)
    }

    fn run_stanza<W, R>(
        &self,
        config: &Configuration,
        stanza: &Stanza,
        out: &mut W,
        rng: &mut R,
    ) -> Result<StanzaOutcome, GenerationError>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        let path = checkpoint_path(&config.checkpoint_dir, &stanza.name);
        let mut checkpoint = Checkpoint::load(&path);

        let requested = match parse_num_events(&stanza.params) {
            Ok(requested) => requested,
            Err(reason) => {
                warn!(stanza = %stanza.name, reason = %reason, "skipping stanza");
                return Ok(StanzaOutcome::Skipped { reason });
            }
        };

        info!(
            stanza = %stanza.name,
            requested,
            resumed_from = checkpoint.events_generated,
            "generating events"
        );

        let mut counter = checkpoint.events_generated;
        for _ in 0..requested {
            let now = self.clock.now();
            let host = HOSTS[rng.random_range(0..HOSTS.len())];
            let message = MESSAGES[rng.random_range(0..MESSAGES.len())];
            counter += 1;
            writeln!(
                out,
                "{} {} {} Event Number {}",
                now.format("%Y-%m-%d %H:%M:%S"),
                host,
                message,
                counter
            )?;
        }
        out.flush()?;

        checkpoint.last_run = self.clock.now().timestamp();
        checkpoint.events_generated = counter;
        let checkpoint_saved = match checkpoint.save(&path) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    stanza = %stanza.name,
                    path = %path.display(),
                    error = %err,
                    "could not save checkpoint; next run will reuse stale counters"
                );
                false
            }
        };

        Ok(StanzaOutcome::Generated {
            events_emitted: requested,
            events_generated: counter,
            checkpoint_saved,
        })
    }
}

fn parse_num_events(params: &ParamMap) -> Result<u64, SkipReason> {
    let value = params
        .get("num_events")
        .ok_or(SkipReason::MissingNumEvents)?;
    let requested: i64 = value
        .trim()
        .parse()
        .map_err(|_| SkipReason::NotAnInteger(value.clone()))?;
    if requested < 1 {
        return Err(SkipReason::NonPositive(requested));
    }
    Ok(requested as u64)
}
