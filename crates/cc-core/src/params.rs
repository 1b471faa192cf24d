//! Run parameters.
//!
//! Typically filled from the defaults below or loaded from a JSON/TOML file
//! by the application (enable the `serde` feature).  Numeric inputs are never
//! rejected, only clamped; the one hard failure is an unsupported race label,
//! which cannot be represented by [`Race`] and so fails while parsing.

use crate::Race;

/// Top-level model configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParams {
    /// Number of individuals, which is also the number of network nodes.
    pub population_size: usize,

    /// Target mean number of relationships per individual.
    pub avg_degree: f64,

    /// Individuals incarcerated at month 0.  Clamped to `population_size`.
    pub initial_outbreak_size: usize,

    /// Race category of the community; selects the sentence distribution.
    pub race: Race,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl ModelParams {
    /// Outbreak size after clamping to the population.
    #[inline]
    pub fn clamped_outbreak(&self) -> usize {
        self.initial_outbreak_size.min(self.population_size)
    }

    /// Edge probability `p = avg_degree / population_size`, clamped to
    /// `[0, 1]`.  Zero for an empty population or a NaN degree.
    pub fn edge_probability(&self) -> f64 {
        if self.population_size == 0 || self.avg_degree.is_nan() {
            return 0.0;
        }
        (self.avg_degree / self.population_size as f64).clamp(0.0, 1.0)
    }
}

impl Default for ModelParams {
    /// The interactive defaults: 100 people, 3 relationships each, 10 in
    /// prison at the start, black community.
    fn default() -> Self {
        Self {
            population_size:       100,
            avg_degree:            3.0,
            initial_outbreak_size: 10,
            race:                  Race::Black,
            seed:                  42,
        }
    }
}
