//! Common error infrastructure for sentinel-core.
//!
//! Two families of failure exist:
//!
//! - **Rejections** ([`Rejection`]): the session is in the wrong state for the
//!   requested operation. Nothing is mutated and the `Game` stays usable. These
//!   are ordinary values, and their `Display` text is the message shown to players.
//! - **Hard errors** ([`ParseActionError`], [`NoActiveSession`],
//!   [`ConfigError`](crate::ConfigError)): the caller handed the engine input
//!   it cannot interpret.

use crate::state::GameState;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the same request can succeed once the session state changes.
    ///
    /// Examples: acting while paused, resuming while playing
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown action name, zero max level in config
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all sentinel-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// An operation refused because of the current [`GameState`].
///
/// The display strings are stable and shown verbatim to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    #[error("Cannot perform action: Game is in {state} state")]
    NotPlaying { state: GameState },

    #[error("Cannot pause: Game is in {state} state")]
    CannotPause { state: GameState },

    #[error("Cannot resume: Game is in {state} state")]
    CannotResume { state: GameState },
}

impl Rejection {
    /// State the session was in when the operation was refused.
    pub fn state(&self) -> GameState {
        match *self {
            Self::NotPlaying { state }
            | Self::CannotPause { state }
            | Self::CannotResume { state } => state,
        }
    }
}

impl GameError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        if self.state().is_terminal() {
            ErrorSeverity::Validation
        } else {
            ErrorSeverity::Recoverable
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlaying { .. } => "NOT_PLAYING",
            Self::CannotPause { .. } => "CANNOT_PAUSE",
            Self::CannotResume { .. } => "CANNOT_RESUME",
        }
    }
}

/// An action name that does not map to any [`ActionKind`](crate::ActionKind).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized action '{name}'")]
pub struct ParseActionError {
    pub name: String,
}

impl GameError for ParseActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "UNRECOGNIZED_ACTION"
    }
}

/// Character data was requested before any session was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no session has been started")]
pub struct NoActiveSession;

impl GameError for NoActiveSession {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "NO_ACTIVE_SESSION"
    }
}
