//! Determinism, snapshot and shared-access tests.
//!
//! These verify that a battle can be reproduced or resumed:
//! - Replaying the command history from the same seed
//! - Restoring from an encoded snapshot or checkpoint
//! - Serializing commands from several threads

use std::sync::{Arc, Mutex};
use std::thread;

use pokecard_battle::engine::snapshot;
use pokecard_battle::{
    BattleConfig, BattleEngine, BattleEvent, BattleState, CardCatalog, Checkpoint, Command, CommandError, PlayerId,
    ReplayError, RestoreError, SharedBattle, StateError,
};

/// Play a game by always taking the first legal command that is not `EndTurn`,
/// ending the turn when nothing else is available.
fn play_greedy(engine: &mut BattleEngine, max_commands: usize) {
    for _ in 0..max_commands {
        let legal = engine.legal_commands();
        let Some(command) = legal.first().cloned() else {
            break;
        };
        engine.apply(command).unwrap();
    }
}

/// Test replaying the history reproduces the exact final state.
#[test]
fn test_replay_reproduces_game() {
    let config = BattleConfig::default().with_seed(1234);
    let mut engine = BattleEngine::new(config.clone()).unwrap();
    engine.start_game("Ash", "Gary").unwrap();
    play_greedy(&mut engine, 200);

    let records: Vec<_> = engine.history().iter().cloned().collect();
    let replayed = BattleEngine::replay(config, CardCatalog::starter(), &records).unwrap();

    assert_eq!(replayed.state(), engine.state());
    assert_eq!(replayed.history(), engine.history());
}

/// Test replay across several games, including a second start.
#[test]
fn test_replay_multiple_games() {
    let config = BattleConfig::default().with_seed(77);
    let mut engine = BattleEngine::new(config.clone()).unwrap();
    engine.start_game("Ash", "Gary").unwrap();
    play_greedy(&mut engine, 20);
    engine.start_game("Misty", "Brock").unwrap();
    play_greedy(&mut engine, 20);

    let records: Vec<_> = engine.history().iter().cloned().collect();
    let replayed = BattleEngine::replay(config, CardCatalog::starter(), &records).unwrap();

    assert_eq!(replayed.state(), engine.state());
}

/// Test different seeds deal different games.
#[test]
fn test_seed_changes_deal() {
    let deal = |seed| {
        let mut engine = BattleEngine::new(BattleConfig::default().with_seed(seed)).unwrap();
        engine.start_game("Ash", "Gary").unwrap();
        let p1 = engine.state().player(PlayerId::Player1);
        p1.hand.iter().chain(p1.deck.iter()).map(|c| c.id).collect::<Vec<_>>()
    };

    let distinct = (0..8u64).map(deal).collect::<std::collections::HashSet<_>>();
    assert!(distinct.len() > 1);
}

/// Test a corrupted history is reported with its sequence number.
#[test]
fn test_replay_reports_rejected_record() {
    let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
    engine.start_game("Ash", "Gary").unwrap();
    engine.end_turn().unwrap();

    let mut records: Vec<_> = engine.history().iter().cloned().collect();
    records.remove(0);

    let err = BattleEngine::replay(BattleConfig::default(), CardCatalog::starter(), &records).unwrap_err();
    assert!(matches!(err, ReplayError::Rejected { sequence: 1, error: CommandError::IllegalState(_) }));
}

/// Test an encoded snapshot restores into a working engine.
#[test]
fn test_restore_from_snapshot() {
    let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
    engine.start_game("Ash", "Gary").unwrap();
    engine.end_turn().unwrap();

    let bytes = snapshot::encode(engine.state()).unwrap();
    let state = snapshot::decode(&bytes).unwrap();
    let mut restored = BattleEngine::restore(BattleConfig::default(), CardCatalog::starter(), state).unwrap();

    assert_eq!(restored.state(), engine.state());
    assert_eq!(restored.end_turn().unwrap(), engine.end_turn().unwrap());
    assert_eq!(restored.state(), engine.state());
}

/// Test tampered saved states are refused instead of resumed.
#[test]
fn test_restore_rejects_tampered_state() {
    let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
    engine.start_game("Ash", "Gary").unwrap();
    let saved = serde_json::to_value(engine.state()).unwrap();

    let mut hp = saved.clone();
    hp["players"]["data"][0]["hand"][0]["hp"] = serde_json::json!(999);
    assert!(serde_json::from_value::<BattleState>(hp).is_err());

    let mut turn = saved.clone();
    turn["players"]["data"][1]["is_turn"] = serde_json::json!(true);
    let state: BattleState = serde_json::from_value(turn).unwrap();
    let err = BattleEngine::restore(BattleConfig::default(), CardCatalog::starter(), state).unwrap_err();
    assert_eq!(err, RestoreError::State(StateError::TurnFlagMismatch { turn: 1 }));

    let mut energy = saved;
    energy["players"]["data"][0]["energy"] = serde_json::json!(50);
    let state: BattleState = serde_json::from_value(energy).unwrap();
    let err = BattleEngine::restore(BattleConfig::default(), CardCatalog::starter(), state).unwrap_err();
    assert_eq!(
        err,
        RestoreError::State(StateError::EnergyAboveMax { player: PlayerId::Player1, energy: 50, max_energy: 1 })
    );
    assert!(snapshot::decode(&snapshot::encode(engine.state()).unwrap()).is_ok());
}

/// Test a checkpoint carries the RNG so the next game deals identically.
#[test]
fn test_checkpoint_resume() {
    let mut engine = BattleEngine::new(BattleConfig::default().with_seed(5)).unwrap();
    engine.start_game("Ash", "Gary").unwrap();

    let bytes = engine.checkpoint().encode().unwrap();
    let mut resumed = BattleEngine::from_checkpoint(Checkpoint::decode(&bytes).unwrap(), CardCatalog::starter()).unwrap();

    engine.start_game("Ash", "Gary").unwrap();
    resumed.start_game("Ash", "Gary").unwrap();
    assert_eq!(resumed.state(), engine.state());
}

/// Test the state serializes to JSON for presentation layers.
#[test]
fn test_state_json() {
    let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
    engine.start_game("Ash", "Gary").unwrap();

    let json = serde_json::to_string(engine.state()).unwrap();
    assert!(json.contains("\"phase\":\"main\""));

    let back: BattleState = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, engine.state());
}

/// Test commands from several threads are serialized and observed in order.
#[test]
fn test_shared_battle_observers() {
    let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
    let turns = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&turns);
    engine.subscribe(move |_: &BattleState, events: &[BattleEvent]| {
        for event in events {
            if let BattleEvent::TurnStarted { turn, .. } = event {
                sink.lock().unwrap().push(*turn);
            }
        }
    });

    let shared = SharedBattle::new(engine);
    shared.start_game("Ash", "Gary").unwrap();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..4 {
                    shared.apply(Command::EndTurn).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(*turns.lock().unwrap(), (2..=13).collect::<Vec<u32>>());
    assert_eq!(shared.snapshot().turn, 13);
}
