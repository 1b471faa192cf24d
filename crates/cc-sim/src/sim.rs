//! The `Sim` struct and its monthly step loop.

use log::trace;

use cc_agent::{AgentStore, AgentView, ClockOutcome, IncarcerationState, StateCounts};
use cc_behavior::{InfectionRule, SexPairRule};
use cc_core::{AgentId, CcError, Month, MonthClock, ModelParams, NodeId, Sentence, Sex, SimRng};
use cc_network::ContactNetwork;

use crate::{DataCollector, NoopObserver, RandomActivation, SimObserver, SimResult};

/// Transitions that happened during one step.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StepStats {
    /// Susceptible agents convicted by a neighbour.
    pub convictions: usize,
    /// Incarcerated agents whose sentence ran out.
    pub releases:    usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each [`step`](Self::step) is one month:
///
/// 1. **Activation order**: draw a fresh uniform permutation of all agents.
/// 2. **Sweep** (sequential, in that order): each agent, if incarcerated or
///    released, runs the infection rule once against every neighbour that
///    is susceptible *at that moment*, then advances its own incarceration
///    clock.  Convictions are visible immediately to agents later in the
///    sweep.
/// 3. **Collect**: advance the month counter and append a snapshot.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: InfectionRule = SexPairRule> {
    /// Parameters the run was built from (outbreak size as requested, not
    /// clamped).
    pub params: ModelParams,

    pub(crate) clock:     MonthClock,
    pub(crate) network:   ContactNetwork,
    pub(crate) agents:    AgentStore,
    pub(crate) scheduler: RandomActivation,
    pub(crate) collector: DataCollector,
    pub(crate) rule:      R,
    pub(crate) rng:       SimRng,
}

impl<R: InfectionRule> Sim<R> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one month.
    pub fn step(&mut self) -> StepStats {
        self.step_observed(&mut NoopObserver)
    }

    /// Advance `n` months.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Advance `n` months, calling observer hooks around every step and once
    /// at the end.
    pub fn run_observed<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_observed(observer);
        }
        observer.on_run_end(self.clock.current(), &self.collector.latest());
    }

    /// Advance one month with observer hooks.
    pub fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> StepStats {
        observer.on_step_start(self.clock.current());

        // Explicit field borrows so the borrow checker sees disjoint access.
        let network = &self.network;
        let agents  = &mut self.agents;
        let rule    = &self.rule;
        let rng     = &mut self.rng;

        let mut stats = StepStats::default();
        for &agent in self.scheduler.shuffle(rng) {
            agent_turn(agent, network, agents, rule, rng, &mut stats);
        }

        self.clock.advance();
        let counts = self.agents.counts();
        debug_assert_eq!(counts.total(), self.agents.count);
        self.collector.record(counts);

        trace!("{}: {} ({:?})", self.clock.current(), counts, stats);
        observer.on_step_end(self.clock.current(), &stats, &counts);
        stats
    }

    // ── Read surface ──────────────────────────────────────────────────────

    /// Months elapsed since construction.
    pub fn month(&self) -> Month {
        self.clock.current()
    }

    pub fn clock(&self) -> &MonthClock {
        &self.clock
    }

    pub fn population_size(&self) -> usize {
        self.agents.count
    }

    pub fn network(&self) -> &ContactNetwork {
        &self.network
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn collector(&self) -> &DataCollector {
        &self.collector
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The sentence every agent serves in this run.
    pub fn sentence(&self) -> Sentence {
        self.agents.sentence()
    }

    /// Current aggregate counts (same as the latest snapshot).
    pub fn counts(&self) -> StateCounts {
        self.collector.latest()
    }

    /// Attributes of one agent, or [`CcError::AgentNotFound`].
    pub fn agent(&self, agent: AgentId) -> SimResult<AgentView> {
        if agent.index() >= self.agents.count {
            return Err(CcError::AgentNotFound(agent).into());
        }
        Ok(self.agents.view(agent))
    }

    /// Current state of `agent`.  Panics if out of range; see
    /// [`agent`](Self::agent) for a checked lookup.
    pub fn state(&self, agent: AgentId) -> IncarcerationState {
        self.agents.state(agent)
    }

    pub fn sex(&self, agent: AgentId) -> Sex {
        self.agents.sex(agent)
    }

    /// Network neighbours of `agent`, ascending.
    pub fn neighbors(&self, agent: AgentId) -> impl Iterator<Item = AgentId> + '_ {
        self.network
            .neighbors(NodeId::from(agent))
            .iter()
            .map(|&n| AgentId::from(n))
    }

    /// Every node's current attributes in `AgentId` order.  Together with
    /// [`ContactNetwork::edges`] this is enough to draw the network.
    pub fn node_views(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.agents.agent_ids().map(|a| self.agents.view(a))
    }
}

// ── Agent turn ────────────────────────────────────────────────────────────────

/// One agent's update: expose susceptible neighbours if infectious, then
/// advance the incarceration clock.
fn agent_turn<R: InfectionRule>(
    agent:   AgentId,
    network: &ContactNetwork,
    agents:  &mut AgentStore,
    rule:    &R,
    rng:     &mut SimRng,
    stats:   &mut StepStats,
) {
    if agents.state(agent).is_infectious() {
        let source = agents.sex(agent);
        for &node in network.neighbors(NodeId::from(agent)) {
            let target = AgentId::from(node);
            if agents.state(target) != IncarcerationState::Susceptible {
                continue;
            }
            if rule.attempt(source, agents.sex(target), rng) && agents.convict(target) {
                stats.convictions += 1;
            }
        }
    }

    if agents.advance_clock(agent) == ClockOutcome::Released {
        stats.releases += 1;
    }
}
