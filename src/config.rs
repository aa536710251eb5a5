use clap::Parser;
use log::LevelFilter;
use stopwatch_core::DEFAULT_TICK_INTERVAL_MS;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Terminal stopwatch with lap splits. Enter starts/stops, l laps, r resets, q quits."
)]
pub struct Config {
    #[arg(
        long = "tick-ms",
        default_value_t = DEFAULT_TICK_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Display refresh interval while running, in milliseconds"
    )]
    pub tick_ms: u64,

    #[arg(long = "max-laps", help = "Refuse to record more than this many laps")]
    pub max_laps: Option<usize>,

    #[arg(
        long = "log-level",
        default_value = "warn",
        help = "Log level written to stderr. RUST_LOG overrides it."
    )]
    pub log_level: LevelFilter,

    #[arg(long = "no-clear", help = "Append each redraw instead of clearing the terminal")]
    pub no_clear: bool,
}
