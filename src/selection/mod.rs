//! # Selection Module
//!
//! Random selection of dungeon paths for the weekly schedule.
//!
//! A [`Sampler`] picks a number of distinct, non-forbidden paths of one
//! difficulty from a [`Catalog`]. Two strategies are provided:
//!
//! - [`ShuffleSampler`] shuffles the eligible paths and takes a prefix. Every
//!   eligible path is equally likely.
//! - [`RejectionSampler`] draws a random dungeon, then a random path inside
//!   it, and keeps the draw only if it fits. Paths in dungeons with fewer
//!   paths come up more often.

pub mod rejection;
pub mod schedule;
pub mod shuffle;

pub use rejection::*;
pub use schedule::*;
pub use shuffle::*;

use crate::{config, Catalog, Difficulty, Dungeon, Path, PathId, RollerError, RollerResult};
use rand::rngs::StdRng;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// One dungeon path placed on the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub dungeon: &'static Dungeon,
    pub path: &'static Path,
}

impl Selection {
    pub fn new(dungeon: &'static Dungeon, path: &'static Path) -> Self {
        Self { dungeon, path }
    }

    /// Structural identity of the selected path.
    pub fn id(&self) -> PathId {
        PathId::of(self.dungeon, self.path)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.path.difficulty
    }
}

impl fmt::Display for Selection {
    /// Formats as an announcement line, without indentation.
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_roller::{Selection, GUILD_CATALOG};
    ///
    /// let manor = GUILD_CATALOG.dungeon("Caudecus Manor").unwrap();
    /// let selection = Selection::new(manor, manor.path(3).unwrap());
    /// assert_eq!(selection.to_string(), "Caudecus Manor       - Path 3 (Butler)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<width$} - Path {} ({})",
            self.dungeon.name,
            self.path.number,
            self.path.name,
            width = config::DUNGEON_NAME_WIDTH
        )
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Selection", 4)?;
        state.serialize_field("dungeon", self.dungeon.name)?;
        state.serialize_field("path", &self.path.number)?;
        state.serialize_field("name", self.path.name)?;
        state.serialize_field("difficulty", &self.path.difficulty)?;
        state.end()
    }
}

/// Trait for path samplers.
///
/// Implementations return exactly `quantity` distinct selections of the
/// requested difficulty, none of them forbidden, or an error if the catalog
/// cannot supply that many.
pub trait Sampler {
    /// Selects `quantity` paths of `difficulty` from `catalog`.
    fn select(
        &self,
        catalog: &Catalog,
        quantity: usize,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> RollerResult<Vec<Selection>>;

    /// Gets the sampler type name for logging and debugging.
    fn sampler_type(&self) -> &'static str;
}

/// Available sampling strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SamplingStrategy {
    /// Shuffle the eligible paths and take the first ones
    #[default]
    Shuffle,
    /// Draw a random dungeon, then a random path, until enough fit
    Rejection,
}

impl SamplingStrategy {
    /// Builds the sampler for this strategy.
    pub fn sampler(self) -> Box<dyn Sampler> {
        match self {
            SamplingStrategy::Shuffle => Box::new(ShuffleSampler),
            SamplingStrategy::Rejection => Box::new(RejectionSampler),
        }
    }
}

/// Ensures the catalog holds at least `quantity` eligible paths of the tier.
///
/// Returns the eligible count on success.
pub fn check_quantity(
    catalog: &Catalog,
    quantity: usize,
    difficulty: Difficulty,
) -> RollerResult<usize> {
    let eligible = catalog.eligible_count(difficulty);
    if quantity > eligible {
        return Err(RollerError::InvalidQuantity {
            difficulty,
            requested: quantity,
            eligible,
        });
    }
    Ok(eligible)
}

/// Utility functions for selection.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates the run's random number generator.
    ///
    /// A fixed seed reproduces a schedule; without one the generator is
    /// seeded from system entropy.
    pub fn create_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GUILD_CATALOG;

    #[test]
    fn test_selection_line_padding() {
        let catacombs = GUILD_CATALOG.dungeon("Ascalonian Catacombs").unwrap();
        let story = Selection::new(catacombs, catacombs.path(0).unwrap());
        assert_eq!(story.to_string(), "Ascalonian Catacombs - Path 0 (Story)");

        let arbor = GUILD_CATALOG.dungeon("Twilight Arbor").unwrap();
        let aetherpath = Selection::new(arbor, arbor.path(3).unwrap());
        assert_eq!(
            aetherpath.to_string(),
            "Twilight Arbor       - Path 3 (Aetherpath)"
        );
    }

    #[test]
    fn test_selection_json() {
        let waves = GUILD_CATALOG.dungeon("Honor of the Waves").unwrap();
        let selection = Selection::new(waves, waves.path(0).unwrap());
        let value = serde_json::to_value(selection).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "dungeon": "Honor of the Waves",
                "path": 0,
                "name": "Story",
                "difficulty": "medium",
            })
        );
    }

    #[test]
    fn test_check_quantity() {
        assert_eq!(check_quantity(&GUILD_CATALOG, 5, Difficulty::Hard).unwrap(), 5);
        assert_eq!(check_quantity(&GUILD_CATALOG, 0, Difficulty::Hard).unwrap(), 5);

        match check_quantity(&GUILD_CATALOG, 6, Difficulty::Hard) {
            Err(RollerError::InvalidQuantity {
                difficulty,
                requested,
                eligible,
            }) => {
                assert_eq!(difficulty, Difficulty::Hard);
                assert_eq!(requested, 6);
                assert_eq!(eligible, 5);
            }
            other => panic!("expected InvalidQuantity, got {:?}", other),
        }
    }

    #[test]
    fn test_strategy_builds_matching_sampler() {
        assert_eq!(SamplingStrategy::Shuffle.sampler().sampler_type(), "ShuffleSampler");
        assert_eq!(
            SamplingStrategy::Rejection.sampler().sampler_type(),
            "RejectionSampler"
        );
        assert_eq!(SamplingStrategy::default(), SamplingStrategy::Shuffle);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;

        let mut a = utils::create_rng(Some(7));
        let mut b = utils::create_rng(Some(7));
        for _ in 0..16 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }
}
