//! Scripted session driver for automated rules testing.
//!
//! This crate replays [`Scenario`]s (a character class plus an ordered list of
//! commands) against a fresh [`sentinel_core::Game`] and records every
//! player-facing message in a [`Transcript`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error and result types
//! - [`scenario`] defines scripts and loads them from RON
//! - [`runner`] executes scripts and builds transcripts
pub mod api;
pub mod runner;
pub mod scenario;

pub use api::{Result, RuntimeError};
pub use runner::{ScenarioRunner, Transcript, TranscriptEntry};
pub use scenario::{Command, Scenario, ScenarioLoader};
