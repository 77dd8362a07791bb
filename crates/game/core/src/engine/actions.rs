//! Action resolution.

use super::Game;
use crate::action::{ActionKind, ActionOutcome, ActionReport};
use crate::env::rng::context;
use crate::env::{RngOracle, compute_seed};
use crate::error::{GameError, ParseActionError, Rejection};
use crate::state::{Character, GameState, Item};

impl<R: RngOracle> Game<R> {
    /// Resolves one action against the current session.
    ///
    /// Outside `Playing` nothing changes and the refusal names the blocking
    /// state. An accepted action always counts toward `actions_performed`, and
    /// is always followed by the leveling check.
    pub fn perform_action(&mut self, action: ActionKind) -> Result<ActionReport, Rejection> {
        let state = self.state;
        if state != GameState::Playing {
            let rejection = Rejection::NotPlaying { state };
            tracing::warn!(
                %action,
                %rejection,
                code = rejection.error_code(),
                severity = rejection.severity().as_str(),
                "action refused"
            );
            return Err(rejection);
        }
        let Some(character) = self.character.as_mut() else {
            return Err(Rejection::NotPlaying { state });
        };

        let seed = self.game_seed;
        let nonce = self.nonce;
        self.nonce += 1;
        self.stats.actions_performed += 1;

        let outcome = match action {
            ActionKind::Attack => {
                let roll = self.rng.range(
                    compute_seed(seed, nonce, context::DAMAGE_ROLL),
                    self.config.damage_roll.min,
                    self.config.damage_roll.max,
                );
                let damage = attack_damage(character, roll);
                ActionOutcome::Attacked { damage }
            }
            ActionKind::Defend => {
                character.heal(self.config.defend_heal);
                ActionOutcome::Defended {
                    healed: self.config.defend_heal,
                }
            }
            ActionKind::CollectItem => {
                let picked = self
                    .rng
                    .pick_index(compute_seed(seed, nonce, context::ITEM_PICK), self.catalog.len())
                    .and_then(|index| self.catalog.get(index));
                match picked {
                    Some(template) => {
                        character.push_item(Item::from_template(template));
                        self.stats.items_collected += 1;
                        ActionOutcome::Collected {
                            item: template.name.clone(),
                        }
                    }
                    None => ActionOutcome::NoItemsAvailable,
                }
            }
            ActionKind::UseItem => match character.pop_item() {
                Some(mut item) => {
                    if item.use_item() {
                        ActionOutcome::UsedItem {
                            item: item.name().to_owned(),
                            power: item.power(),
                        }
                    } else {
                        ActionOutcome::ItemBroken {
                            item: item.name().to_owned(),
                        }
                    }
                }
                None => ActionOutcome::NothingToUse,
            },
        };

        self.score = self.score.saturating_add(outcome.score_gained());
        tracing::debug!(%action, %outcome, score = self.score, "action resolved");

        let mut report = ActionReport::new(outcome);
        self.check_level_threshold(&mut report);
        Ok(report)
    }

    /// String entry point for scripted callers.
    ///
    /// An unknown name is a hard error and leaves every counter untouched.
    pub fn perform_named_action(
        &mut self,
        name: &str,
    ) -> Result<Result<ActionReport, Rejection>, ParseActionError> {
        let action: ActionKind = name.parse()?;
        Ok(self.perform_action(action))
    }
}

/// `primary stat * 2 + roll`
fn attack_damage(character: &Character, roll: u32) -> u64 {
    u64::from(character.primary_stat()) * 2 + u64::from(roll)
}
