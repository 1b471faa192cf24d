//! `cc-core`: foundational types for the carceral contagion model.
//!
//! Every other `cc-*` crate depends on this one.  It has no `cc-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`                                   |
//! | [`demography`]  | `Sex`, `Race`                                         |
//! | [`time`]        | `Month`, `MonthClock`, `Sentence`                     |
//! | [`params`]      | `ModelParams`                                         |
//! | [`rng`]         | `SimRng`: the single random source of a run           |
//! | [`error`]       | `CcError`, `CcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types so      |
//! |         | `ModelParams` can be loaded from JSON/TOML files.          |

pub mod demography;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use demography::{Race, Sex};
pub use error::{CcError, CcResult};
pub use ids::{AgentId, NodeId};
pub use params::ModelParams;
pub use rng::SimRng;
pub use time::{Month, MonthClock, Sentence};
