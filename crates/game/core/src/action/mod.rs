//! Player actions and their structured results.
//!
//! [`ActionKind`] is the closed set of commands a player can issue while a
//! session is playing. Resolving one yields an [`ActionReport`] whose `Display`
//! is the message shown to the player.
mod outcome;

pub use outcome::{ActionOutcome, ActionReport, Response, VictorySummary};

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::ParseActionError;

/// Commands accepted by [`Game::perform_action`](crate::Game::perform_action).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Attack,
    Defend,
    CollectItem,
    UseItem,
}

/// Accepts exactly the snake_case names used by `Display` and serde.
impl FromStr for ActionKind {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.as_ref() == s)
            .ok_or_else(|| ParseActionError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in ActionKind::iter() {
            assert_eq!(kind.to_string().parse::<ActionKind>(), Ok(kind));
        }
        assert_eq!(ActionKind::CollectItem.as_ref(), "collect_item");
    }

    #[test]
    fn parsing_requires_exact_names() {
        assert_eq!("use_item".parse::<ActionKind>(), Ok(ActionKind::UseItem));
        assert!("Attack".parse::<ActionKind>().is_err());
        assert!(" attack ".parse::<ActionKind>().is_err());
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "dance".parse::<ActionKind>().unwrap_err();
        assert_eq!(err.name, "dance");
        assert_eq!(err.to_string(), "unrecognized action 'dance'");
    }
}
