use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of "current time" in milliseconds. Readings must never decrease.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Cancellable repeating signal. Each tick is delivered back to the owner of
/// the stopwatch, which calls `Stopwatch::on_tick`.
pub trait Ticker {
    fn start(&mut self, interval_ms: u64);
    fn stop(&mut self);
}

/// Monotonic milliseconds since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// A clock that only moves when told to. Clones share the same reading.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(now_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_shared() {
        let clock = ManualClock::new(100);
        let view = clock.clone();
        clock.advance(250);
        assert_eq!(view.now_ms(), 350);
        view.set(1000);
        assert_eq!(clock.now_ms(), 1000);
    }

    #[test]
    fn test_system_clock_does_not_go_backwards() {
        let clock = SystemClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(second >= first);
    }
}
