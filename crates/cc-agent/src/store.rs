//! Population storage: `AgentStore` (SoA data) and the per-agent update
//! primitives the simulation loop calls.
//!
//! Every `Vec` has exactly `count` elements and `AgentId::index()` indexes
//! all of them:
//!
//! ```ignore
//! let s = store.state(agent);  // states[agent.index()]
//! ```
//!
//! The sentence is *not* a per-agent array.  One value is drawn per run and
//! every agent serves the same length; it is stored once and read by all.

use cc_core::{AgentId, Sentence, Sex};

use crate::state::{IncarcerationState, StateCounts, StateEvent};

/// What happened when an agent's incarceration clock was advanced.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ClockOutcome {
    /// Agent was not incarcerated; nothing changed.
    Idle,
    /// `time_served` went up by one month.
    Served(u32),
    /// Sentence complete; the agent is now `Released`.
    Released,
}

/// Read-only copy of one agent's attributes, for renderers and tests.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AgentView {
    pub id:          AgentId,
    pub state:       IncarcerationState,
    pub sex:         Sex,
    pub time_served: u32,
}

/// Structure-of-Arrays storage for all agent state.
///
/// `sexes` is fixed at construction.  `states` and `time_served` change only
/// through [`convict`](Self::convict) and
/// [`advance_clock`](Self::advance_clock), which enforce the transition
/// rules of [`IncarcerationState`].
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    states:      Vec<IncarcerationState>,
    sexes:       Vec<Sex>,
    time_served: Vec<u32>,
    sentence:    Sentence,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self, agent: AgentId) -> IncarcerationState {
        self.states[agent.index()]
    }

    #[inline]
    pub fn sex(&self, agent: AgentId) -> Sex {
        self.sexes[agent.index()]
    }

    /// Months served so far.  Only meaningful while `Incarcerated`; frozen
    /// at the sentence length once released.
    #[inline]
    pub fn time_served(&self, agent: AgentId) -> u32 {
        self.time_served[agent.index()]
    }

    /// The population-wide sentence.
    #[inline]
    pub fn sentence(&self) -> Sentence {
        self.sentence
    }

    pub fn states(&self) -> &[IncarcerationState] {
        &self.states
    }

    pub fn sexes(&self) -> &[Sex] {
        &self.sexes
    }

    pub fn view(&self, agent: AgentId) -> AgentView {
        let i = agent.index();
        AgentView {
            id:          agent,
            state:       self.states[i],
            sex:         self.sexes[i],
            time_served: self.time_served[i],
        }
    }

    /// Current aggregate counts.  O(count).
    pub fn counts(&self) -> StateCounts {
        StateCounts::tally(self.states.iter().copied())
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Move a susceptible agent to `Incarcerated` with a fresh clock.
    ///
    /// Returns `false` (and changes nothing) if the agent was not
    /// susceptible.
    pub fn convict(&mut self, agent: AgentId) -> bool {
        let i = agent.index();
        match self.states[i].transition(StateEvent::Convicted) {
            Some(next) => {
                self.states[i] = next;
                self.time_served[i] = 0;
                true
            }
            None => false,
        }
    }

    /// Advance an incarcerated agent's clock by one month: release it if
    /// `time_served` has reached the sentence, otherwise add one month.
    pub fn advance_clock(&mut self, agent: AgentId) -> ClockOutcome {
        let i = agent.index();
        if self.states[i] != IncarcerationState::Incarcerated {
            return ClockOutcome::Idle;
        }
        if self.time_served[i] >= self.sentence.months() {
            if let Some(next) = self.states[i].transition(StateEvent::SentenceServed) {
                self.states[i] = next;
            }
            ClockOutcome::Released
        } else {
            self.time_served[i] += 1;
            ClockOutcome::Served(self.time_served[i])
        }
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(sexes: Vec<Sex>, sentence: Sentence) -> Self {
        let count = sexes.len();
        Self {
            count,
            states: vec![IncarcerationState::Susceptible; count],
            sexes,
            time_served: vec![0; count],
            sentence,
        }
    }
}
