//! `cc-agent`: per-individual state for the carceral contagion model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `IncarcerationState`, `StateEvent`, `StateCounts`         |
//! | [`store`]     | `AgentStore` (SoA arrays), `AgentView`, `ClockOutcome`    |
//! | [`builder`]   | `AgentStoreBuilder`                                       |
//!
//! Agents are created once, one per network node, and never destroyed.
//! `AgentId(i)` is the index into every SoA array and equals `NodeId(i)`.

pub mod builder;
pub mod state;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use state::{IncarcerationState, StateCounts, StateEvent};
pub use store::{AgentStore, AgentView, ClockOutcome};
