//! # Rejection Sampler
//!
//! Two-stage draw: a uniformly random dungeon, then a uniformly random path
//! inside it. Draws of the wrong difficulty, forbidden paths and repeats are
//! thrown away until enough selections are collected.

use super::{check_quantity, Sampler, Selection};
use crate::{Catalog, Difficulty, Dungeon, RollerResult};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;

/// Dungeon-then-path rejection sampler.
///
/// Selections come back in acceptance order. The quantity is checked against
/// the eligible count before drawing, so the loop always has enough paths
/// left to accept and terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectionSampler;

impl Sampler for RejectionSampler {
    fn select(
        &self,
        catalog: &Catalog,
        quantity: usize,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> RollerResult<Vec<Selection>> {
        check_quantity(catalog, quantity, difficulty)?;

        let dungeons: &'static [Dungeon] = catalog.dungeons;
        let mut selected: Vec<Selection> = Vec::with_capacity(quantity);
        let mut draws: u64 = 0;

        while selected.len() < quantity {
            draws += 1;

            let dungeon = &dungeons[rng.gen_range(0..dungeons.len())];
            if dungeon.paths.is_empty() {
                continue;
            }
            let path = &dungeon.paths[rng.gen_range(0..dungeon.paths.len())];

            if path.difficulty != difficulty || catalog.is_forbidden(dungeon, path) {
                continue;
            }

            let candidate = Selection::new(dungeon, path);
            if selected.iter().any(|s| s.id() == candidate.id()) {
                continue;
            }

            trace!("Accepted {} on draw {}", candidate.id(), draws);
            selected.push(candidate);
        }

        debug!(
            "{} selected {} {} paths in {} draws",
            self.sampler_type(),
            selected.len(),
            difficulty,
            draws
        );

        Ok(selected)
    }

    fn sampler_type(&self) -> &'static str {
        "RejectionSampler"
    }
}
