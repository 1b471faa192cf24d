//! The per-agent state machine.
//!
//! ```text
//!   Susceptible ──Convicted──▶ Incarcerated ──SentenceServed──▶ Released
//! ```
//!
//! Transitions only move right.  `Released` is absorbing, and a released
//! agent stays infectious: it keeps exposing its neighbours every month.

use std::fmt;

// ── IncarcerationState ────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IncarcerationState {
    #[default]
    Susceptible,
    Incarcerated,
    Released,
}

/// Something that happens to an agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StateEvent {
    /// Infected by a neighbour or chosen for the initial outbreak.
    Convicted,
    /// `time_served` reached the sentence at the agent's turn.
    SentenceServed,
}

impl IncarcerationState {
    pub const ALL: [IncarcerationState; 3] = [
        IncarcerationState::Incarcerated,
        IncarcerationState::Susceptible,
        IncarcerationState::Released,
    ];

    /// Next state after `event`, or `None` if the event does not apply in
    /// this state.
    pub fn transition(self, event: StateEvent) -> Option<IncarcerationState> {
        use IncarcerationState::*;
        match (self, event) {
            (Susceptible, StateEvent::Convicted)       => Some(Incarcerated),
            (Incarcerated, StateEvent::SentenceServed) => Some(Released),
            _ => None,
        }
    }

    /// `true` if the agent exposes its susceptible neighbours on its turn.
    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(self, IncarcerationState::Incarcerated | IncarcerationState::Released)
    }

    /// Series label used by the data collector.
    pub fn label(self) -> &'static str {
        match self {
            IncarcerationState::Susceptible  => "Susceptible",
            IncarcerationState::Incarcerated => "Incarcerated",
            IncarcerationState::Released     => "Released",
        }
    }

    /// Node colour for network renderers.
    pub fn colour(self) -> &'static str {
        match self {
            IncarcerationState::Incarcerated => "#FF0000",
            IncarcerationState::Susceptible  => "#008000",
            IncarcerationState::Released     => "#FFA500",
        }
    }
}

impl fmt::Display for IncarcerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Aggregate population counts at one instant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub incarcerated: usize,
    pub susceptible:  usize,
    pub released:     usize,
}

impl StateCounts {
    /// Tally a sequence of states.
    pub fn tally<I: IntoIterator<Item = IncarcerationState>>(states: I) -> Self {
        let mut counts = StateCounts::default();
        for s in states {
            match s {
                IncarcerationState::Incarcerated => counts.incarcerated += 1,
                IncarcerationState::Susceptible  => counts.susceptible += 1,
                IncarcerationState::Released     => counts.released += 1,
            }
        }
        counts
    }

    pub fn get(&self, state: IncarcerationState) -> usize {
        match state {
            IncarcerationState::Incarcerated => self.incarcerated,
            IncarcerationState::Susceptible  => self.susceptible,
            IncarcerationState::Released     => self.released,
        }
    }

    pub fn total(&self) -> usize {
        self.incarcerated + self.susceptible + self.released
    }
}

impl fmt::Display for StateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Incarcerated: {}, Susceptible: {}, Released: {}",
            self.incarcerated, self.susceptible, self.released
        )
    }
}
