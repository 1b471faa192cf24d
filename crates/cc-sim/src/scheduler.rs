//! Random activation: every agent acts once per month in a fresh order.

use cc_core::{AgentId, SimRng};

/// Produces one uniform random permutation of all agents per step.
///
/// The buffer is reset to identity before each shuffle, so each step's order
/// is independent of the previous one.
#[derive(Clone, Debug)]
pub struct RandomActivation {
    order: Vec<AgentId>,
}

impl RandomActivation {
    pub fn new(agent_count: usize) -> Self {
        Self {
            order: (0..agent_count as u32).map(AgentId).collect(),
        }
    }

    pub fn agent_count(&self) -> usize {
        self.order.len()
    }

    /// Draw this step's activation order.
    pub fn shuffle(&mut self, rng: &mut SimRng) -> &[AgentId] {
        for (i, slot) in self.order.iter_mut().enumerate() {
            *slot = AgentId(i as u32);
        }
        rng.shuffle(&mut self.order);
        &self.order
    }

    /// The most recently drawn order (identity before the first step).
    pub fn last_order(&self) -> &[AgentId] {
        &self.order
    }
}
