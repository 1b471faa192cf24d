//! `cc-network`: the social network agents live on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`network`]   | `ContactNetwork` (undirected CSR), `ContactNetworkBuilder`|
//! | [`generator`] | `ErdosRenyi`: G(n, p) random graphs                       |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                        |
//!
//! The network is built once per run and is read-only afterwards: no node or
//! edge is added or removed while the simulation steps.

pub mod error;
pub mod generator;
pub mod network;


pub use error::{NetworkError, NetworkResult};
pub use generator::ErdosRenyi;
pub use network::{ContactNetwork, ContactNetworkBuilder};
