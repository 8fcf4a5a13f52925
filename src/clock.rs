//! Injectable time source.
//!
//! Every "now"-dependent query in this crate goes through a [`Clock`] so the
//! rest of the logic stays a pure function of its inputs. Production code
//! uses [`SystemClock`]; tests pin the current time with [`FixedClock`].

use crate::calendar::Instant;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The wall clock of the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        let seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            // Host clock set before the epoch
            Err(err) => -(err.duration().as_secs() as i64),
        };

        Instant::from_epoch_seconds(seconds)
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Instant);

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    pub const fn new(instant: Instant) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
