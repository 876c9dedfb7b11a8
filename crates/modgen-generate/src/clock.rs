use chrono::{DateTime, Local};

/// Wall-clock source for record timestamps and checkpoint times.
///
/// Injected into the engine so tests can pin time and assert exact record
/// lines.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
