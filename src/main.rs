//! # Dungeon Roller Entry Point
//!
//! Parses arguments, rolls the weekly schedule and prints it to stdout.

use clap::Parser;
use dungeon_roller::{render, Args, RollerResult, Schedule, GUILD_CATALOG};
use log::{debug, info, LevelFilter};
use std::io::Write;

fn main() -> RollerResult<()> {
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.log_level);

    info!("Starting dungeon roller v{}", dungeon_roller::VERSION);
    GUILD_CATALOG.validate()?;

    let config = args.roll_config();
    let today = args.today();
    debug!("Roll configuration: {:?}, today: {}", config, today);

    let schedule = Schedule::roll(&GUILD_CATALOG, &config, today)?;
    let output = render(&schedule, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    info!("Schedule for {} written", schedule.event_date);
    Ok(())
}

/// Initializes stderr logging at `level`; `RUST_LOG` takes precedence when set.
fn initialize_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();
}
