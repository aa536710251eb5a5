use std::fmt::Write;

use stopwatch_core::{format_lap_time, AnnotatedLap, Button, Controls};

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const BUTTON_GAP: usize = 16;

fn button_text(button: &Button) -> String {
    if button.enabled {
        format!("[ {} ]", button.action.label())
    } else {
        format!("( {} )", button.action.label())
    }
}

fn lap_tag(lap: &AnnotatedLap) -> &'static str {
    match (lap.is_fastest, lap.is_slowest) {
        (true, true) => "  (fastest, slowest)",
        (true, false) => "  (fastest)",
        (false, true) => "  (slowest)",
        (false, false) => "",
    }
}

/// Render one full frame: total time, buttons, lap list and key help.
pub fn draw_stopwatch(
    total_ms: u64,
    controls: &Controls,
    laps: &[AnnotatedLap],
    status: Option<&str>,
) -> String {
    let mut frame = String::new();

    writeln!(frame, "STOPWATCH").unwrap();
    writeln!(frame).unwrap();
    writeln!(frame, "  {}", format_lap_time(total_ms)).unwrap();
    writeln!(frame).unwrap();
    writeln!(
        frame,
        "  {:<width$}{}",
        button_text(&controls.left),
        button_text(&controls.right),
        width = BUTTON_GAP
    )
    .unwrap();
    writeln!(frame).unwrap();

    for lap in laps {
        writeln!(
            frame,
            "  Lap {:<4} {}{}",
            lap.number,
            format_lap_time(lap.duration_ms),
            lap_tag(lap)
        )
        .unwrap();
    }

    if let Some(status) = status {
        writeln!(frame).unwrap();
        writeln!(frame, "  ! {}", status).unwrap();
    }

    writeln!(frame).unwrap();
    writeln!(frame, "Enter: Start/Stop  l: Lap  r: Reset  q: Quit").unwrap();
    frame
}
