use log::{debug, error, info};

use crate::analyzer::AnnotatedLap;
use crate::clock::{Clock, Ticker};
use crate::controls::{Action, Controls};
use crate::error::TransitionError;
use crate::session::{SessionState, TimerSession};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// A `TimerSession` bound to a clock and a tick source.
///
/// The ticker runs exactly while the session is running. It is released once
/// on stop, reset or drop, and never twice.
pub struct Stopwatch<C: Clock, T: Ticker> {
    session: TimerSession,
    clock: C,
    ticker: T,
    tick_interval_ms: u64,
    ticking: bool,
}

impl<C: Clock, T: Ticker> Stopwatch<C, T> {
    pub fn new(clock: C, ticker: T) -> Self {
        Self::with_session(TimerSession::new(), clock, ticker)
    }

    pub fn with_session(session: TimerSession, clock: C, ticker: T) -> Self {
        Self {
            session,
            clock,
            ticker,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            ticking: false,
        }
    }

    pub fn with_tick_interval(mut self, interval_ms: u64) -> Self {
        self.tick_interval_ms = interval_ms.max(1);
        self
    }

    pub fn start(&mut self) -> Result<(), TransitionError> {
        let now = self.clock.now_ms();
        self.session.start(now).map_err(log_failure)?;
        self.start_ticker();
        info!("stopwatch started");
        Ok(())
    }

    pub fn lap(&mut self) -> Result<u64, TransitionError> {
        let now = self.clock.now_ms();
        let lap_ms = self.session.lap(now).map_err(log_failure)?;
        info!("lap {} closed: {} ms", self.session.closed_laps().len(), lap_ms);
        Ok(lap_ms)
    }

    pub fn stop(&mut self) -> Result<u64, TransitionError> {
        let now = self.clock.now_ms();
        let segment_ms = self.session.stop(now).map_err(log_failure)?;
        self.stop_ticker();
        info!("stopwatch stopped at {} ms", self.session.total_elapsed_ms());
        Ok(segment_ms)
    }

    pub fn resume(&mut self) -> Result<(), TransitionError> {
        let now = self.clock.now_ms();
        self.session.resume(now).map_err(log_failure)?;
        self.start_ticker();
        info!("stopwatch resumed");
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.session.reset().map_err(log_failure)?;
        self.stop_ticker();
        info!("stopwatch reset");
        Ok(())
    }

    /// Run the transition a button stands for.
    pub fn press(&mut self, action: Action) -> Result<(), TransitionError> {
        match action {
            Action::Start => self.start(),
            Action::Lap => self.lap().map(|_| ()),
            Action::Stop => self.stop().map(|_| ()),
            Action::Resume => self.resume(),
            Action::Reset => self.reset(),
        }
    }

    /// Tick callback. A late tick after stop is dropped.
    pub fn on_tick(&mut self) {
        if self.session.state() != SessionState::Running {
            debug!("tick ignored while {:?}", self.session.state());
            return;
        }
        let now = self.clock.now_ms();
        self.session.tick(now);
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn session(&self) -> &TimerSession {
        &self.session
    }

    pub fn total_elapsed_ms(&self) -> u64 {
        self.session.total_elapsed_ms()
    }

    pub fn annotated_laps(&self) -> Vec<AnnotatedLap> {
        self.session.annotated_laps()
    }

    pub fn controls(&self) -> Controls {
        Controls::for_state(self.session.state())
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    fn start_ticker(&mut self) {
        if !self.ticking {
            self.ticking = true;
            self.ticker.start(self.tick_interval_ms);
        }
    }

    fn stop_ticker(&mut self) {
        if self.ticking {
            self.ticking = false;
            self.ticker.stop();
        }
    }
}

impl<C: Clock, T: Ticker> Drop for Stopwatch<C, T> {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

fn log_failure(err: TransitionError) -> TransitionError {
    error!("rejected transition: {}", err);
    err
}
