//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML data files that parameterize
//! a session:
//! - Item catalogs (data-driven via RON)
//! - Session rules (data-driven via TOML)
//!
//! Content is injected into [`sentinel_core::Game`] at construction and never
//! changes afterwards. The stock files live in this crate's `data/` directory
//! and are also embedded, see [`embedded`].

#[cfg(feature = "loaders")]
pub mod embedded;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalogFile, ItemLoader, LoadResult};
