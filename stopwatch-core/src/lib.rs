//! Pure lap-timer logic with no platform dependencies.
//! Testable on host with a manual clock, driven by a real clock and pump in the app.

mod analyzer;
mod clock;
mod controls;
mod error;
mod session;
mod stopwatch;

pub use analyzer::{analyze, AnnotatedLap};
pub use clock::{Clock, ManualClock, SystemClock, Ticker};
pub use controls::{Action, Button, Controls};
pub use error::TransitionError;
pub use session::{SessionState, TimerSession};
pub use stopwatch::{Stopwatch, DEFAULT_TICK_INTERVAL_MS};

use std::fmt;

const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;
const MS_PER_CENTISECOND: u64 = 10;

/// A duration split into the fields shown on the lap display.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeParts {
    pub minutes: u64,
    pub seconds: u64,
    pub centiseconds: u64,
}

impl TimeParts {
    /// Rebuild the millisecond count, truncated to centisecond resolution.
    pub fn to_ms(self) -> u64 {
        self.minutes
            .saturating_mul(MS_PER_MINUTE)
            .saturating_add(self.seconds.saturating_mul(MS_PER_SECOND))
            .saturating_add(self.centiseconds.saturating_mul(MS_PER_CENTISECOND))
    }
}

/// Renders as "MM:SS,cc". Minutes are not wrapped at the hour.
impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02},{:02}", self.minutes, self.seconds, self.centiseconds)
    }
}

/// Split milliseconds into minutes, seconds and centiseconds
pub fn format_parts(ms: u64) -> TimeParts {
    TimeParts {
        minutes: ms / MS_PER_MINUTE,
        seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        centiseconds: (ms % MS_PER_SECOND) / MS_PER_CENTISECOND,
    }
}

/// Format milliseconds as "MM:SS,cc"
pub fn format_lap_time(ms: u64) -> String {
    format_parts(ms).to_string()
}
