//! `cc-behavior`: the stochastic rules agents follow.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`infection`]  | `InfectionRule` trait, `TransmissionTable`, `SexPairRule`    |
//! | [`sentence`]   | `SentenceSampler`: Gamma–Poisson sentence lengths            |
//!
//! # Design notes
//!
//! Both rules draw from the run's single [`SimRng`][cc_core::SimRng] and hold
//! no mutable state.  The simulation is generic over [`InfectionRule`]; the
//! sentence sampler is concrete, with one distribution per race category.

pub mod infection;
pub mod sentence;


pub use infection::{InfectionRule, SexPairRule, TransmissionTable};
pub use sentence::{SENTENCE_SHAPE, SentenceSampler};
