//! Read-only environment injected into a game: the item catalog and the RNG oracle.
mod catalog;
pub mod rng;

pub use catalog::{ItemCatalog, ItemTemplate};
pub use rng::{PcgRng, RngOracle, compute_seed};
