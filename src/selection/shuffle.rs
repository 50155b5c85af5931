//! # Shuffle Sampler
//!
//! Uniform selection over individual paths: collect the eligible paths,
//! shuffle them and keep the first `quantity`.

use super::{check_quantity, Sampler, Selection};
use crate::{Catalog, Difficulty, RollerResult};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShuffleSampler;

impl Sampler for ShuffleSampler {
    fn select(
        &self,
        catalog: &Catalog,
        quantity: usize,
        difficulty: Difficulty,
        rng: &mut StdRng,
    ) -> RollerResult<Vec<Selection>> {
        check_quantity(catalog, quantity, difficulty)?;

        let mut eligible = catalog.eligible(difficulty);
        let pool = eligible.len();
        let (chosen, _) = eligible.partial_shuffle(rng, quantity);
        let selected = chosen.to_vec();

        debug!(
            "{} selected {} of {} eligible {} paths",
            self.sampler_type(),
            selected.len(),
            pool,
            difficulty
        );

        Ok(selected)
    }

    fn sampler_type(&self) -> &'static str {
        "ShuffleSampler"
    }
}
