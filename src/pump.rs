use std::io;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use stopwatch_core::Ticker;

use crate::app::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PumpOp {
    Start(u64),
    Stop,
    Quit,
}

/// Background thread that turns a sleep loop into `AppEvent::Tick`s.
pub struct Pump {
    control: Sender<PumpOp>,
    handle: JoinHandle<()>,
}

impl Pump {
    pub fn spawn(events: Sender<AppEvent>) -> io::Result<Self> {
        let (control, ops) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("pump".into())
            .spawn(move || pump_thread(ops, events))?;
        Ok(Self { control, handle })
    }

    pub fn ticker(&self) -> PumpTicker {
        PumpTicker {
            control: self.control.clone(),
        }
    }

    pub fn shutdown(self) {
        self.control.send(PumpOp::Quit).ok();
        if self.handle.join().is_err() {
            log::error!("pump thread panicked");
        }
    }
}

/// `Ticker` handle that drives the pump thread.
#[derive(Clone)]
pub struct PumpTicker {
    control: Sender<PumpOp>,
}

impl PumpTicker {
    fn send(&self, op: PumpOp) {
        if let Err(e) = self.control.send(op) {
            log::error!("pump is gone, dropped {:?}", e.0);
        }
    }
}

impl Ticker for PumpTicker {
    fn start(&mut self, interval_ms: u64) {
        self.send(PumpOp::Start(interval_ms));
    }

    fn stop(&mut self) {
        self.send(PumpOp::Stop);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PumpState {
    Stopped,
    Running(u64),
    Quit,
}

impl PumpState {
    fn apply(self, op: PumpOp) -> Self {
        match (self, op) {
            (PumpState::Quit, _) | (_, PumpOp::Quit) => PumpState::Quit,
            (_, PumpOp::Start(ms)) => PumpState::Running(ms.max(1)),
            (_, PumpOp::Stop) => PumpState::Stopped,
        }
    }
}

/// Apply every queued command. A closed control channel means quit.
fn drain_ops(ops: &Receiver<PumpOp>, mut state: PumpState) -> PumpState {
    loop {
        match ops.try_recv() {
            Ok(op) => state = state.apply(op),
            Err(TryRecvError::Empty) => return state,
            Err(TryRecvError::Disconnected) => return PumpState::Quit,
        }
    }
}

fn pump_thread(ops: Receiver<PumpOp>, events: Sender<AppEvent>) {
    let mut state = PumpState::Stopped;

    loop {
        match state {
            PumpState::Running(interval_ms) => {
                thread::sleep(Duration::from_millis(interval_ms));
                if events.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            // Block until the next command while stopped
            PumpState::Stopped => match ops.recv() {
                Ok(op) => state = state.apply(op),
                Err(_) => break,
            },
            PumpState::Quit => break,
        }
        state = drain_ops(&ops, state);
        if state == PumpState::Quit {
            break;
        }
    }
    log::debug!("pump thread exiting");
}
