//! The neighbour infection rule.

use cc_core::{Sex, SimRng};

/// Decides whether an infectious agent converts one susceptible neighbour.
///
/// Called once per (acting agent, susceptible neighbour) pair per month, in
/// the acting agent's turn.  Implementations must draw only from `rng` so
/// runs stay reproducible.
///
/// # Example
///
/// ```rust
/// use cc_behavior::InfectionRule;
/// use cc_core::{Sex, SimRng};
///
/// /// Only same-sex ties transmit.
/// struct SameSexOnly(f64);
///
/// impl InfectionRule for SameSexOnly {
///     fn attempt(&self, source: Sex, target: Sex, rng: &mut SimRng) -> bool {
///         source == target && rng.gen_bool(self.0)
///     }
/// }
/// ```
pub trait InfectionRule {
    /// One Bernoulli trial: `true` means the target becomes incarcerated.
    fn attempt(&self, source: Sex, target: Sex, rng: &mut SimRng) -> bool;
}

// ── TransmissionTable ─────────────────────────────────────────────────────────

/// Monthly transmission probabilities keyed by `(source sex, target sex)`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransmissionTable {
    /// `p[source.index()][target.index()]`.
    p: [[f64; 2]; 2],
}

impl TransmissionTable {
    /// Estimated monthly probabilities per tie.
    pub const DEFAULT: TransmissionTable = TransmissionTable {
        p: [
            [0.0301729987453868, 0.000436688659218365], // male   → male, female
            [0.0332053842229949, 0.00801193753900653],  // female → male, female
        ],
    };

    /// Build a table from the four entries, each clamped to `[0, 1]`
    /// (NaN becomes 0).
    pub fn new(male_male: f64, male_female: f64, female_male: f64, female_female: f64) -> Self {
        let c = |p: f64| if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        Self {
            p: [
                [c(male_male), c(male_female)],
                [c(female_male), c(female_female)],
            ],
        }
    }

    /// Same probability for every pair.
    pub fn uniform(p: f64) -> Self {
        Self::new(p, p, p, p)
    }

    #[inline]
    pub fn probability(&self, source: Sex, target: Sex) -> f64 {
        self.p[source.index()][target.index()]
    }
}

impl Default for TransmissionTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ── SexPairRule ───────────────────────────────────────────────────────────────

/// Bernoulli trial with probability looked up in a [`TransmissionTable`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SexPairRule {
    pub table: TransmissionTable,
}

impl SexPairRule {
    pub fn new(table: TransmissionTable) -> Self {
        Self { table }
    }
}

impl InfectionRule for SexPairRule {
    #[inline]
    fn attempt(&self, source: Sex, target: Sex, rng: &mut SimRng) -> bool {
        rng.gen_bool(self.table.probability(source, target))
    }
}
