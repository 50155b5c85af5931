//! # Weekly Schedule
//!
//! Rolls every tier of the weekly schedule and pins it to an event date.

use super::{utils, Sampler, SamplingStrategy, Selection};
use crate::utils::next_friday;
use crate::{config, Catalog, Difficulty, RollerResult};
use chrono::NaiveDate;
use log::info;
use rand::rngs::StdRng;
use serde::Serialize;

/// Configuration for a schedule roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollConfig {
    /// Easy paths to select
    pub easy: usize,
    /// Medium paths to select
    pub medium: usize,
    /// Hard paths to select
    pub hard: usize,
    /// Random seed; `None` seeds from system entropy
    pub seed: Option<u64>,
    /// Sampling strategy
    pub strategy: SamplingStrategy,
}

impl RollConfig {
    /// Creates a configuration with the given tier counts.
    pub fn new(easy: usize, medium: usize, hard: usize) -> Self {
        Self {
            easy,
            medium,
            hard,
            ..Self::default()
        }
    }

    /// Creates a seeded configuration with the default tier counts.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Number of paths requested for a tier.
    pub fn quantity(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            easy: config::DEFAULT_EASY_PATHS,
            medium: config::DEFAULT_MEDIUM_PATHS,
            hard: config::DEFAULT_HARD_PATHS,
            seed: None,
            strategy: SamplingStrategy::default(),
        }
    }
}

/// The rolled paths of every tier plus the event date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Date the dungeon night takes place
    #[serde(rename = "date")]
    pub event_date: NaiveDate,
    pub easy: Vec<Selection>,
    pub medium: Vec<Selection>,
    pub hard: Vec<Selection>,
}

impl Schedule {
    /// Rolls a schedule for the Friday on or after `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use dungeon_roller::{RollConfig, Schedule, GUILD_CATALOG};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(); // a Monday
    /// let schedule = Schedule::roll(&GUILD_CATALOG, &RollConfig::for_testing(1), today).unwrap();
    /// assert_eq!(schedule.event_date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
    /// assert_eq!(schedule.easy.len(), 3);
    /// assert_eq!(schedule.medium.len(), 2);
    /// assert_eq!(schedule.hard.len(), 1);
    /// ```
    pub fn roll(catalog: &Catalog, config: &RollConfig, today: NaiveDate) -> RollerResult<Self> {
        let sampler = config.strategy.sampler();
        let mut rng = utils::create_rng(config.seed);

        info!(
            "Rolling schedule with {} (seed: {})",
            sampler.sampler_type(),
            config
                .seed
                .map_or_else(|| "entropy".to_string(), |seed| seed.to_string())
        );

        Self::roll_with(catalog, config, sampler.as_ref(), &mut rng, today)
    }

    /// Rolls a schedule with an explicit sampler and generator.
    ///
    /// Tiers are rolled easy, medium, hard, each independently of the others.
    pub fn roll_with(
        catalog: &Catalog,
        config: &RollConfig,
        sampler: &dyn Sampler,
        rng: &mut StdRng,
        today: NaiveDate,
    ) -> RollerResult<Self> {
        let mut roll_tier = |difficulty: Difficulty| {
            sampler.select(catalog, config.quantity(difficulty), difficulty, rng)
        };

        Ok(Self {
            event_date: next_friday(today),
            easy: roll_tier(Difficulty::Easy)?,
            medium: roll_tier(Difficulty::Medium)?,
            hard: roll_tier(Difficulty::Hard)?,
        })
    }

    /// Selections for one tier.
    pub fn tier(&self, difficulty: Difficulty) -> &[Selection] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Whether no tier holds any selection.
    pub fn is_empty(&self) -> bool {
        Difficulty::ALL.iter().all(|d| self.tier(*d).is_empty())
    }
}
