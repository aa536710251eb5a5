use std::io::{self, Write};

use log::{debug, info};
use stopwatch_core::{Action, Clock, SessionState, Stopwatch, Ticker};

use crate::ui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One line of input, without its newline.
    Key(String),
    Tick,
    InputClosed,
}

pub struct LapTimerApp<C: Clock, T: Ticker, W: Write> {
    stopwatch: Stopwatch<C, T>,
    out: W,
    clear_screen: bool,
    status: Option<String>,
}

impl<C: Clock, T: Ticker, W: Write> LapTimerApp<C, T, W> {
    pub fn new(stopwatch: Stopwatch<C, T>, out: W, clear_screen: bool) -> Self {
        Self {
            stopwatch,
            out,
            clear_screen,
            status: None,
        }
    }

    /// Returns `Ok(false)` once the app should exit.
    pub fn handle_event(&mut self, event: AppEvent) -> io::Result<bool> {
        match event {
            AppEvent::Key(key) => self.handle_key(&key),
            AppEvent::Tick => {
                self.handle_tick()?;
                Ok(true)
            }
            AppEvent::InputClosed => {
                info!("input closed");
                self.quit()?;
                Ok(false)
            }
        }
    }

    fn handle_key(&mut self, key: &str) -> io::Result<bool> {
        let action = match key.trim() {
            "" => self.stopwatch.controls().right.action,
            "l" => Action::Lap,
            "r" => Action::Reset,
            "q" => {
                self.quit()?;
                return Ok(false);
            }
            other => {
                debug!("unbound key {:?}", other);
                return Ok(true);
            }
        };

        // Only act on buttons currently on screen
        if !self.stopwatch.controls().offers(action) {
            debug!("{:?} not offered while {:?}", action, self.stopwatch.state());
            return Ok(true);
        }

        // Rejections are logged by the stopwatch and shown on the status line
        self.status = self.stopwatch.press(action).err().map(|e| e.to_string());
        self.redraw()?;
        Ok(true)
    }

    fn handle_tick(&mut self) -> io::Result<()> {
        self.stopwatch.on_tick();
        if self.stopwatch.state() == SessionState::Running {
            self.redraw()?;
        }
        Ok(())
    }

    /// Pause a running session before leaving so the final frame is frozen.
    fn quit(&mut self) -> io::Result<()> {
        if self.stopwatch.state() == SessionState::Running {
            self.stopwatch.stop().ok();
            self.redraw()?;
        }
        Ok(())
    }

    pub fn redraw(&mut self) -> io::Result<()> {
        let frame = ui::draw_stopwatch(
            self.stopwatch.total_elapsed_ms(),
            &self.stopwatch.controls(),
            &self.stopwatch.annotated_laps(),
            self.status.as_deref(),
        );
        if self.clear_screen {
            self.out.write_all(ui::CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
