//! `cc-sim`: monthly step loop orchestrator for the carceral contagion model.
//!
//! # Step loop
//!
//! ```text
//! build:  network → agents (all susceptible) → shared sentence
//!         → seed outbreak → snapshot[0]
//!
//! step:   order = fresh random permutation of all agents
//!         for agent in order:
//!             if incarcerated or released:
//!                 for each susceptible neighbour: Bernoulli(p[sex, sex]) → incarcerated
//!             if incarcerated:
//!                 time_served >= sentence ? released : time_served += 1
//!         month += 1; snapshot[month]
//! ```
//!
//! Everything is single-threaded and draws from one seeded RNG, so a run is
//! a pure function of its [`ModelParams`][cc_core::ModelParams].
//!
//! # Quick-start
//!
//! ```rust
//! use cc_core::ModelParams;
//! use cc_sim::{LogObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(ModelParams::default()).build()?;
//! sim.run_observed(12, &mut LogObserver::new(6));
//! let incarcerated = sim.collector().series("Incarcerated").unwrap();
//! assert_eq!(incarcerated.len(), 13);
//! # Ok::<(), cc_sim::SimError>(())
//! ```

pub mod builder;
pub mod collector;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::{NetworkModel, SimBuilder};
pub use collector::DataCollector;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use scheduler::RandomActivation;
pub use sim::{Sim, StepStats};
