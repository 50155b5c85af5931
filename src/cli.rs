//! # Command Line Interface
//!
//! Argument definitions and boundary validation. Tier counts are checked
//! against the guild catalog while parsing, so an oversized request is a
//! usage error before any rolling starts.

use crate::{local_today, Difficulty, OutputFormat, RollConfig, SamplingStrategy, GUILD_CATALOG};
use chrono::NaiveDate;
use clap::Parser;
use log::LevelFilter;

/// Command line arguments for the dungeon roller.
#[derive(Parser, Debug)]
#[command(name = "dungeon-roller")]
#[command(about = "Rolls the weekly guild dungeon schedule")]
#[command(version)]
pub struct Args {
    /// Number of easy paths to roll
    #[arg(short, long, default_value_t = crate::config::DEFAULT_EASY_PATHS, value_parser = parse_easy_count)]
    pub easy: usize,

    /// Number of medium paths to roll
    #[arg(short, long, default_value_t = crate::config::DEFAULT_MEDIUM_PATHS, value_parser = parse_medium_count)]
    pub medium: usize,

    /// Number of hard paths to roll
    #[arg(short = 'H', long, default_value_t = crate::config::DEFAULT_HARD_PATHS, value_parser = parse_hard_count)]
    pub hard: usize,

    /// Random seed for a reproducible roll
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How paths are drawn from the catalog
    #[arg(long, value_enum, default_value_t = SamplingStrategy::Shuffle)]
    pub strategy: SamplingStrategy,

    /// Date to count the next Friday from (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Args {
    /// Roll configuration described by these arguments.
    pub fn roll_config(&self) -> RollConfig {
        RollConfig {
            easy: self.easy,
            medium: self.medium,
            hard: self.hard,
            seed: self.seed,
            strategy: self.strategy,
        }
    }

    /// The date the schedule is rolled from.
    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(local_today)
    }
}

fn parse_easy_count(value: &str) -> Result<usize, String> {
    parse_tier_count(value, Difficulty::Easy)
}

fn parse_medium_count(value: &str) -> Result<usize, String> {
    parse_tier_count(value, Difficulty::Medium)
}

fn parse_hard_count(value: &str) -> Result<usize, String> {
    parse_tier_count(value, Difficulty::Hard)
}

/// Parses a tier count and checks it lies in `0..eligible`.
fn parse_tier_count(value: &str, difficulty: Difficulty) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("`{}` is not a non-negative integer", value))?;

    let eligible = GUILD_CATALOG.eligible_count(difficulty);
    if count >= eligible {
        return Err(format!(
            "{} is not in 0..{} for {} paths",
            count, eligible, difficulty
        ));
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["dungeon-roller"]).unwrap();
        assert_eq!(args.easy, 3);
        assert_eq!(args.medium, 2);
        assert_eq!(args.hard, 1);
        assert_eq!(args.seed, None);
        assert_eq!(args.strategy, SamplingStrategy::Shuffle);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from(["dungeon-roller", "-e", "0", "-m", "8", "-H", "4"]).unwrap();
        assert_eq!(args.roll_config(), RollConfig::new(0, 8, 4));
    }

    #[test]
    fn test_upper_bounds_are_exclusive() {
        for (flag, max) in [("--easy", 18), ("--medium", 9), ("--hard", 5)] {
            let ok = Args::try_parse_from(["dungeon-roller", flag, (max - 1).to_string().as_str()]);
            assert!(ok.is_ok(), "{} {}", flag, max - 1);

            let err = Args::try_parse_from(["dungeon-roller", flag, max.to_string().as_str()]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{} {}", flag, max);
        }
    }

    #[test]
    fn test_rejects_non_integers() {
        for value in ["-1", "two", "1.5", ""] {
            let result = Args::try_parse_from(["dungeon-roller", "--hard", value]);
            assert!(result.is_err(), "{:?}", value);
        }
    }

    #[test]
    fn test_date_override() {
        let args = Args::try_parse_from(["dungeon-roller", "--date", "2024-05-11"]).unwrap();
        assert_eq!(args.today(), NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());

        assert!(Args::try_parse_from(["dungeon-roller", "--date", "next friday"]).is_err());
    }

    #[test]
    fn test_strategy_and_format() {
        let args = Args::try_parse_from([
            "dungeon-roller",
            "--strategy",
            "rejection",
            "--format",
            "json",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(args.strategy, SamplingStrategy::Rejection);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.roll_config().seed, Some(42));
    }
}
