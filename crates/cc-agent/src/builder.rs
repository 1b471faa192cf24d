//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use cc_agent::{AgentStoreBuilder, IncarcerationState};
//! use cc_core::{AgentId, Sentence, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new(100)
//!     .draw_sexes(&mut rng)
//!     .build(Sentence(17));
//!
//! assert_eq!(store.count, 100);
//! assert_eq!(store.state(AgentId(0)), IncarcerationState::Susceptible);
//! ```

use cc_core::{Sentence, Sex, SimRng};

use crate::AgentStore;

/// Fluent builder for [`AgentStore`].
///
/// Agents start `Susceptible` with `time_served = 0`.  Sexes default to all
/// male until drawn or supplied.
pub struct AgentStoreBuilder {
    count: usize,
    sexes: Vec<Sex>,
}

impl AgentStoreBuilder {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            sexes: vec![Sex::Male; count],
        }
    }

    /// Draw every agent's sex uniformly from {male, female}, in ascending
    /// `AgentId` order.
    pub fn draw_sexes(mut self, rng: &mut SimRng) -> Self {
        for sex in &mut self.sexes {
            *sex = if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female };
        }
        self
    }

    /// Supply sexes explicitly.  The vector length sets the agent count.
    pub fn sexes(mut self, sexes: Vec<Sex>) -> Self {
        self.count = sexes.len();
        self.sexes = sexes;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Construct the store; `sentence` is shared by every agent.
    pub fn build(self, sentence: Sentence) -> AgentStore {
        AgentStore::new(self.sexes, sentence)
    }
}
