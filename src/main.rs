mod app;
mod config;
mod pump;
mod ui;

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Sender};
use std::thread;

use clap::Parser;
use stopwatch_core::{Stopwatch, SystemClock, TimerSession};

use crate::app::{AppEvent, LapTimerApp};
use crate::config::Config;
use crate::pump::Pump;

fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();
}

/// Forward stdin lines as key events. The thread is left detached since it
/// may stay blocked on a read after the main loop exits.
fn spawn_input_thread(events: Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new().name("input".into()).spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if events.send(AppEvent::Key(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    log::error!("failed to read stdin: {}", e);
                    break;
                }
            }
        }
        events.send(AppEvent::InputClosed).ok();
    })?;
    Ok(())
}

fn main() -> io::Result<()> {
    let config = Config::parse();
    init_logging(&config);
    log::info!("lap timer starting, tick every {} ms", config.tick_ms);

    let (events, received) = mpsc::channel();
    let pump = Pump::spawn(events.clone())?;
    spawn_input_thread(events)?;

    let session = match config.max_laps {
        Some(max) => TimerSession::with_max_laps(max),
        None => TimerSession::new(),
    };
    let stopwatch = Stopwatch::with_session(session, SystemClock::new(), pump.ticker())
        .with_tick_interval(config.tick_ms);
    let mut app = LapTimerApp::new(stopwatch, io::stdout(), !config.no_clear);
    app.redraw()?;

    for event in received.iter() {
        if !app.handle_event(event)? {
            break;
        }
    }

    // Dropping the app releases the tick subscription before the pump quits
    drop(app);
    pump.shutdown();
    log::info!("lap timer exiting");
    Ok(())
}
