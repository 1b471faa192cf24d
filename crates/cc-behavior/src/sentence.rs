//! Sentence-length sampling.
//!
//! A two-stage Gamma–Poisson draw:
//!
//! ```text
//! rate     ~ Gamma(shape = a, scale = 1 / b)      a = 1.2
//! sentence ~ Poisson(rate)
//! ```
//!
//! `b` depends on the community's race category: `a / 17` for black and
//! `a / 14` for white, giving mean sentences of 17 and 14 months.  The
//! compound draw is over-dispersed relative to a plain Poisson.
//!
//! One sentence is drawn per run and shared by the whole population.

use log::debug;
use rand_distr::{Distribution, Gamma, Poisson};

use cc_core::{CcError, CcResult, Race, Sentence, SimRng};

/// Gamma shape constant `a`.
pub const SENTENCE_SHAPE: f64 = 1.2;

/// Samples sentence lengths for one race category.
#[derive(Clone, Debug)]
pub struct SentenceSampler {
    race:  Race,
    gamma: Gamma<f64>,
}

impl SentenceSampler {
    pub fn new(race: Race) -> CcResult<Self> {
        let scale = 1.0 / Self::rate_constant(race);
        let gamma = Gamma::new(SENTENCE_SHAPE, scale)
            .map_err(|e| CcError::Distribution(format!("gamma(a={SENTENCE_SHAPE}, scale={scale}): {e}")))?;
        Ok(Self { race, gamma })
    }

    /// Sampler for a race label.  Fails with
    /// [`CcError::UnsupportedRace`] for anything but `"black"` / `"white"`.
    pub fn for_label(label: &str) -> CcResult<Self> {
        Self::new(label.parse()?)
    }

    /// The constant `b` for `race`.
    pub fn rate_constant(race: Race) -> f64 {
        match race {
            Race::Black => SENTENCE_SHAPE / 17.0,
            Race::White => SENTENCE_SHAPE / 14.0,
        }
    }

    pub fn race(&self) -> Race {
        self.race
    }

    /// Expected sentence in months, `a / b`.
    pub fn mean_months(&self) -> f64 {
        SENTENCE_SHAPE / Self::rate_constant(self.race)
    }

    /// Draw one sentence.
    pub fn sample(&self, rng: &mut SimRng) -> CcResult<Sentence> {
        let rate: f64 = self.gamma.sample(rng.inner());
        // Poisson rejects a zero mean; a zero rate can only yield zero.
        if rate.is_nan() || rate <= 0.0 {
            return Ok(Sentence(0));
        }
        let poisson = Poisson::new(rate)
            .map_err(|e| CcError::Distribution(format!("poisson(lambda={rate}): {e}")))?;
        let months: f64 = poisson.sample(rng.inner());
        let sentence = Sentence(months.min(u32::MAX as f64) as u32);
        debug!("{} sentence: rate {:.3} -> {}", self.race, rate, sentence);
        Ok(sentence)
    }
}
