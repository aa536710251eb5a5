use log::warn;

use crate::analyzer::{analyze, AnnotatedLap};
use crate::controls::Action;
use crate::error::TransitionError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    Idle,
    Running,
    Paused,
}

/// The lap in progress. It may be spread over several running segments
/// when the session is stopped and resumed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct CurrentLap {
    banked_ms: u64,
    segment_start_ms: Option<u64>,
}

impl CurrentLap {
    fn running_since(start_ms: u64) -> Self {
        Self {
            banked_ms: 0,
            segment_start_ms: Some(start_ms),
        }
    }

    fn is_running(&self) -> bool {
        self.segment_start_ms.is_some()
    }

    fn live_ms(&self, now_ms: u64) -> u64 {
        self.segment_start_ms
            .map(|start| now_ms.saturating_sub(start))
            .unwrap_or(0)
    }
}

/// Stopwatch state: closed laps plus the current lap, if any.
///
/// Every transition takes the current clock reading and validates before it
/// mutates, so a rejected action leaves the session exactly as it was.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TimerSession {
    // Oldest first.
    closed_laps: Vec<u64>,
    current: Option<CurrentLap>,
    now_ms: u64,
    max_laps: Option<usize>,
}

impl TimerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that refuses to close more than `max_laps` laps.
    pub fn with_max_laps(max_laps: usize) -> Self {
        Self {
            max_laps: Some(max_laps),
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        match self.current {
            None => SessionState::Idle,
            Some(lap) if lap.is_running() => SessionState::Running,
            Some(_) => SessionState::Paused,
        }
    }

    /// Latest clock reading seen by the session.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Refresh the clock reading. Lap data is never touched.
    ///
    /// A reading earlier than the last one means the clock went backwards.
    /// It is reported and ignored so durations cannot shrink.
    pub fn tick(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            warn!(
                "clock went backwards by {} ms, keeping last reading {}",
                self.now_ms - now_ms,
                self.now_ms
            );
            return;
        }
        self.now_ms = now_ms;
    }

    pub fn start(&mut self, now_ms: u64) -> Result<(), TransitionError> {
        if self.current.is_some() {
            return Err(TransitionError::invalid(Action::Start, self.state()));
        }
        self.tick(now_ms);
        self.current = Some(CurrentLap::running_since(self.now_ms));
        Ok(())
    }

    /// Close the current lap and open the next one at the same instant.
    /// Returns the duration of the closed lap.
    pub fn lap(&mut self, now_ms: u64) -> Result<u64, TransitionError> {
        let state = self.state();
        let Some(lap) = self.current.filter(CurrentLap::is_running) else {
            return Err(TransitionError::invalid(Action::Lap, state));
        };
        if let Some(max) = self.max_laps {
            if self.closed_laps.len() >= max {
                return Err(TransitionError::LapLimitReached { max });
            }
        }
        self.tick(now_ms);
        let finished_ms = lap.banked_ms + lap.live_ms(self.now_ms);
        self.closed_laps.push(finished_ms);
        self.current = Some(CurrentLap::running_since(self.now_ms));
        Ok(finished_ms)
    }

    /// Pause the current lap without closing it. No lap is recorded.
    /// Returns the time added to the current lap by the segment just ended.
    pub fn stop(&mut self, now_ms: u64) -> Result<u64, TransitionError> {
        let state = self.state();
        let Some(lap) = self.current.filter(CurrentLap::is_running) else {
            return Err(TransitionError::invalid(Action::Stop, state));
        };
        self.tick(now_ms);
        let segment_ms = lap.live_ms(self.now_ms);
        self.current = Some(CurrentLap {
            banked_ms: lap.banked_ms + segment_ms,
            segment_start_ms: None,
        });
        Ok(segment_ms)
    }

    /// Continue timing the paused lap.
    pub fn resume(&mut self, now_ms: u64) -> Result<(), TransitionError> {
        let state = self.state();
        let Some(lap) = self.current.filter(|lap| !lap.is_running()) else {
            return Err(TransitionError::invalid(Action::Resume, state));
        };
        self.tick(now_ms);
        self.current = Some(CurrentLap {
            segment_start_ms: Some(self.now_ms),
            ..lap
        });
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), TransitionError> {
        let state = self.state();
        if state != SessionState::Paused {
            return Err(TransitionError::invalid(Action::Reset, state));
        }
        *self = Self {
            max_laps: self.max_laps,
            ..Self::default()
        };
        Ok(())
    }

    /// Closed laps plus the current lap, including the live running segment.
    pub fn total_elapsed_ms(&self) -> u64 {
        let closed: u64 = self.closed_laps.iter().sum();
        let current = self
            .current
            .map(|lap| lap.banked_ms + lap.live_ms(self.now_ms))
            .unwrap_or(0);
        closed + current
    }

    /// Laps newest first. Index 0 is the current lap without its live segment.
    pub fn laps(&self) -> Vec<u64> {
        let Some(current) = self.current else {
            return Vec::new();
        };
        std::iter::once(current.banked_ms)
            .chain(self.closed_laps.iter().rev().copied())
            .collect()
    }

    /// Time the running segment adds on top of `laps()[0]`.
    pub fn open_lap_extra_ms(&self) -> u64 {
        self.current
            .map(|lap| lap.live_ms(self.now_ms))
            .unwrap_or(0)
    }

    /// Closed laps, oldest first.
    pub fn closed_laps(&self) -> &[u64] {
        &self.closed_laps
    }

    pub fn annotated_laps(&self) -> Vec<AnnotatedLap> {
        analyze(&self.laps(), self.open_lap_extra_ms())
    }
}
