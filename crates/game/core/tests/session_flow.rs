use sentinel_core::{
    ActionKind, CharacterClass, Game, GameState, ItemCatalog, Rejection, Response, SessionConfig,
};

fn seeded(class: CharacterClass) -> Game {
    let mut game =
        Game::with_config(SessionConfig::with_seed(0x5eed), ItemCatalog::standard()).unwrap();
    game.start_new_game(class);
    game
}

#[test]
fn warrior_starts_with_base_stats() {
    let game = seeded(CharacterClass::Warrior);
    let character = game.character_snapshot().unwrap();

    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.current_level(), 1);
    assert_eq!(character.class, CharacterClass::Warrior);
    assert_eq!((character.strength, character.magic, character.agility), (15, 5, 8));
    assert_eq!(character.level, 1);
    assert_eq!((character.health, character.max_health), (100, 100));
}

#[test]
fn each_class_leads_with_its_own_stat() {
    let mage = seeded(CharacterClass::Mage).character_snapshot().unwrap();
    assert_eq!((mage.strength, mage.magic, mage.agility), (5, 15, 8));

    let rogue = seeded(CharacterClass::Rogue).character_snapshot().unwrap();
    assert_eq!((rogue.strength, rogue.magic, rogue.agility), (8, 5, 15));
}

#[test]
fn every_action_produces_a_message() {
    let mut game = seeded(CharacterClass::Rogue);
    for action in [
        ActionKind::Attack,
        ActionKind::Defend,
        ActionKind::CollectItem,
        ActionKind::UseItem,
    ] {
        let message = game.perform_action(action).message();
        assert!(!message.is_empty(), "{action} produced no message");
    }
    assert_eq!(game.stats().actions_performed, 4);
}

#[test]
fn forced_score_crosses_first_threshold() {
    let mut game = seeded(CharacterClass::Warrior);
    game.set_score(99);

    let message = game.perform_action(ActionKind::Attack).message();
    assert!(message.contains("Advanced to level 2"), "{message}");
    assert_eq!(game.current_level(), 2);

    let character = game.character_snapshot().unwrap();
    assert_eq!(character.max_health, 120);
    assert_eq!(character.health, 120);
}

#[test]
fn paused_session_ignores_actions() {
    let mut game = seeded(CharacterClass::Mage);

    assert_eq!(game.pause_game().message(), "Game paused");
    assert_eq!(game.state(), GameState::Paused);

    let rejected = game.perform_action(ActionKind::Attack);
    assert_eq!(
        rejected,
        Err(Rejection::NotPlaying {
            state: GameState::Paused
        })
    );
    assert_eq!(game.score(), 0);
    assert_eq!(game.stats().actions_performed, 0);

    assert_eq!(game.resume_game().message(), "Game resumed");
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn statistics_after_quit() {
    let mut game = seeded(CharacterClass::Warrior);
    game.perform_action(ActionKind::Attack).unwrap();
    game.perform_action(ActionKind::CollectItem).unwrap();
    assert_eq!(game.quit_game().to_string(), "Game quit");

    let stats = game.stats_snapshot();
    assert_eq!(game.state(), GameState::GameOver);
    assert!(stats.duration_secs >= 0.0);
    assert!(game.stats().end_time().is_some());
    assert_eq!(stats.actions_performed, 2);
    assert_eq!(stats.items_collected, 1);
    assert_eq!(stats.levels_completed, 0);
}

#[test]
fn terminal_states_refuse_everything_but_restart() {
    let mut game = seeded(CharacterClass::Rogue);
    game.quit_game();

    assert!(game.perform_action(ActionKind::Defend).is_err());
    assert!(game.pause_game().is_err());
    assert!(game.resume_game().is_err());

    game.start_new_game(CharacterClass::Rogue);
    assert!(game.perform_action(ActionKind::Defend).is_ok());
}

#[test]
fn driving_every_class_to_victory() {
    for class in [CharacterClass::Warrior, CharacterClass::Mage, CharacterClass::Rogue] {
        let mut game = seeded(class);
        let mut attacks = 0;
        while game.state() == GameState::Playing {
            game.perform_action(ActionKind::Attack).unwrap();
            attacks += 1;
            assert!(attacks < 100, "{class} never won");
        }

        assert_eq!(game.state(), GameState::Victory);
        assert_eq!(game.stats().levels_completed, 5);
        let summary = game.last_summary().unwrap();
        assert_eq!(summary.final_score, game.score());
        assert_eq!(summary.actions_performed, attacks);
        assert!(summary.duration_secs >= 0.0);

        let character = game.character_snapshot().unwrap();
        assert_eq!(character.level, 6);
        assert_eq!(character.max_health, 200);
    }
}
