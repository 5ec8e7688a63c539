//! Game controller integration tests.
//!
//! Full sessions driven through the controller: resume, the gap, undo,
//! restart and provider failures.

use std::cell::Cell;

use smash_or_pass::core::{Appraisal, PokemonId, TypeName};
use smash_or_pass::error::GameError;
use smash_or_pass::game::{
    FeedbackCue, Frame, GameConfig, GameController, UIRenderer, RESTART_WARNING,
};
use smash_or_pass::pokemon::{ProviderError, Record, StaticProvider};
use smash_or_pass::sequence::{FIRST, LAST};
use smash_or_pass::store::{MemoryStore, StoreExt, StoreKey};

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Default)]
struct Screen {
    frames: Vec<Frame>,
    failures: Vec<PokemonId>,
}

impl Screen {
    fn last(&self) -> &Frame {
        self.frames.last().expect("nothing rendered")
    }
}

impl UIRenderer for Screen {
    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn render_failure(&mut self, id: PokemonId, _error: &GameError) {
        self.failures.push(id);
    }
}

fn record_for(id: u32) -> Record {
    let types: &[&str] = match id % 3 {
        0 => &["fire"],
        1 => &["grass", "poison"],
        _ => &["water"],
    };
    Record::new(format!("mon-{id}"), types.iter().copied())
}

fn provider_with(ids: impl IntoIterator<Item = u32>) -> StaticProvider {
    let mut provider = StaticProvider::new();
    for id in ids {
        provider.insert(PokemonId::new(id), record_for(id));
    }
    provider
}

fn provider_around_gap() -> StaticProvider {
    provider_with((1..=5).chain(900..=905).chain(10001..=10005).chain(10245..=LAST))
}

type Game = GameController<StaticProvider, Screen, MemoryStore, Vec<FeedbackCue>>;

fn new_game(store: MemoryStore) -> Game {
    GameController::new(GameConfig::default(), provider_around_gap(), Screen::default(), store)
        .with_feedback(Vec::new())
}

fn store_at(last: u32) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_raw("lastPokemonId", last.to_string());
    store.insert_raw("passedIDs", format!("[{last}]"));
    store.insert_raw("appraisals", r#"["passed"]"#);
    store.insert_raw("listOfTypes", r#"["water"]"#);
    store.insert_raw("counter:passed:water", "1");
    store
}

// =============================================================================
// Start and Resume
// =============================================================================

#[test]
fn test_fresh_start_at_first() {
    let mut game = new_game(MemoryStore::new());
    game.start().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(FIRST));
    assert_eq!(game.renderer().last().name, "MON-1");
}

#[test]
fn test_resume_after_last_decision() {
    let mut game = new_game(store_at(3));
    game.start().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(4));
}

#[test]
fn test_resume_across_gap() {
    let mut game = new_game(store_at(905));
    game.start().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(10001));
}

#[test]
fn test_resume_disabled_starts_over() {
    let mut game = GameController::new(
        GameConfig::default().with_resume_session(false),
        provider_around_gap(),
        Screen::default(),
        store_at(3),
    );
    game.start().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(FIRST));
    assert_eq!(game.ledger().len().unwrap(), 1);
}

#[test]
fn test_resume_after_final_id_is_exhausted() {
    let mut game = new_game(store_at(LAST));
    game.start().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(LAST));
    assert!(matches!(
        game.smash(),
        Err(GameError::SequenceExhausted { .. })
    ));
}

// =============================================================================
// Decisions
// =============================================================================

#[test]
fn test_session_round_trip() {
    let mut game = new_game(MemoryStore::new());
    game.start().unwrap();
    game.smash().unwrap();
    game.pass().unwrap();
    game.smash().unwrap();

    assert_eq!(game.current_id(), PokemonId::new(4));
    let ledger = game.ledger();
    assert_eq!(ledger.accepted_ids().unwrap(), vec![PokemonId::new(1), PokemonId::new(3)]);
    assert_eq!(ledger.rejected_ids().unwrap(), vec![PokemonId::new(2)]);
    assert_eq!(
        ledger.counter(Appraisal::Smashed, &TypeName::from("grass")).unwrap(),
        1
    );
    assert_eq!(ledger.counter(Appraisal::Smashed, &TypeName::from("fire")).unwrap(), 1);
    assert_eq!(
        game.feedback(),
        &vec![FeedbackCue::Captured, FeedbackCue::Rejected, FeedbackCue::Captured]
    );
    assert_eq!(game.renderer().last().summary.text(), "You smashed 2 and passed 1 Pokémon");
}

#[test]
fn test_smash_and_undo_across_gap() {
    let mut game = new_game(store_at(904));
    game.start().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(905));

    game.smash().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(10001));
    assert_eq!(game.ledger().last_id().unwrap(), Some(PokemonId::new(905)));

    let undone = game.undo().unwrap();
    assert_eq!(undone.id, PokemonId::new(905));
    assert_eq!(game.current_id(), PokemonId::new(905));
    assert_eq!(game.ledger().last_id().unwrap(), Some(PokemonId::new(904)));
}

#[test]
fn test_final_id_blocks_forward() {
    let mut game = new_game(store_at(LAST - 1));
    game.start().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(LAST));

    let before = game.ledger().len().unwrap();
    let err = game.pass().unwrap_err();
    assert!(err.is_boundary());
    assert_eq!(game.ledger().len().unwrap(), before);
    assert!(game.feedback().is_empty());
}

#[test]
fn test_undo_at_first_is_boundary() {
    let mut game = GameController::new(
        GameConfig::default().with_resume_session(false),
        provider_around_gap(),
        Screen::default(),
        store_at(3),
    );
    game.start().unwrap();
    assert!(matches!(
        game.undo(),
        Err(GameError::SequenceExhausted { .. })
    ));
    assert_eq!(game.ledger().len().unwrap(), 1);
}

/// Re-judging an old Pokémon and undoing it takes back only that judgement.
#[test]
fn test_undo_rejudged_pokemon_without_resume() {
    let mut store = MemoryStore::new();
    store.insert_raw("smashedIDs", "[1,2]");
    store.insert_raw("appraisals", r#"["smashed","smashed"]"#);
    store.insert_raw("listOfTypes", r#"["grass,poison","water"]"#);
    store.insert_raw("lastPokemonId", "2");

    let mut game = GameController::new(
        GameConfig::default().with_resume_session(false),
        provider_around_gap(),
        Screen::default(),
        store,
    );
    game.start().unwrap();
    assert_eq!(game.smash().unwrap().id, PokemonId::new(1));
    assert_eq!(game.ledger().accepted_ids().unwrap(), vec![PokemonId::new(1), PokemonId::new(2)]);

    let undone = game.undo().unwrap();
    assert_eq!(undone.id, PokemonId::new(1));
    assert_eq!(game.current_id(), PokemonId::new(1));
    assert_eq!(game.renderer().last().name, "MON-1");
    assert_eq!(game.ledger().accepted_ids().unwrap(), vec![PokemonId::new(1), PokemonId::new(2)]);
    assert_eq!(game.ledger().last_id().unwrap(), Some(PokemonId::new(2)));
    assert_eq!(game.ledger().len().unwrap(), 2);
}

#[test]
fn test_actions_before_start() {
    let mut game = new_game(store_at(3));
    assert!(matches!(game.pass(), Err(GameError::NotStarted)));
    assert!(matches!(game.undo(), Err(GameError::NotStarted)));
    assert_eq!(game.ledger().len().unwrap(), 1);
    assert!(game.feedback().is_empty());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_missing_record_renders_failure() {
    let mut game = GameController::new(
        GameConfig::default(),
        provider_with([1]),
        Screen::default(),
        MemoryStore::new(),
    );
    game.start().unwrap();

    let err = game.smash().unwrap_err();
    assert!(!err.is_boundary());
    assert_eq!(game.renderer().failures, vec![PokemonId::new(2)]);
    assert_eq!(game.current_id(), PokemonId::new(1));
    assert!(game.ledger().is_empty().unwrap());
    assert!(!game.ledger().store().contains(&StoreKey::LastPokemonId));
}

#[test]
fn test_flaky_provider_recovers() {
    let calls = Cell::new(0u32);
    let provider = |id: PokemonId| -> Result<Record, ProviderError> {
        calls.set(calls.get() + 1);
        if calls.get() == 2 {
            Err(ProviderError::Unavailable {
                id,
                reason: "connection reset".to_string(),
            })
        } else {
            Ok(record_for(id.raw()))
        }
    };
    let mut game = GameController::new(GameConfig::default(), provider, Screen::default(), MemoryStore::new());
    game.start().unwrap();

    assert!(game.smash().is_err());
    assert_eq!(game.current_id(), PokemonId::new(1));

    game.smash().unwrap();
    assert_eq!(game.current_id(), PokemonId::new(2));
    assert_eq!(game.ledger().accepted_ids().unwrap(), vec![PokemonId::new(1)]);
}

// =============================================================================
// Restart and Results
// =============================================================================

#[test]
fn test_restart_confirmed() {
    let mut game = new_game(MemoryStore::new());
    game.start().unwrap();
    game.smash().unwrap();
    game.pass().unwrap();

    let mut prompts = Vec::new();
    let mut accept = |message: &str| {
        prompts.push(message.to_string());
        true
    };
    assert!(game.restart(&mut accept).unwrap());

    assert_eq!(prompts, vec![RESTART_WARNING.to_string()]);
    assert_eq!(game.current_id(), PokemonId::new(FIRST));
    assert_eq!(game.ledger().last_id().unwrap(), None);
    assert!(game.ledger().counters().unwrap().is_empty());
    assert!(game.ledger().store().snapshot().is_empty());
}

#[test]
fn test_restart_declined_keeps_progress() {
    let mut game = new_game(MemoryStore::new());
    game.start().unwrap();
    game.smash().unwrap();

    let mut decline = |_: &str| false;
    assert!(!game.restart(&mut decline).unwrap());
    assert_eq!(game.current_id(), PokemonId::new(2));
    assert_eq!(game.ledger().last_id().unwrap(), Some(PokemonId::new(1)));
}

#[test]
fn test_results_panel() {
    let mut game = new_game(MemoryStore::new());
    game.start().unwrap();
    game.pass().unwrap();

    let summary = game.show_results().unwrap();
    assert_eq!(summary.passed, vec![PokemonId::new(1)]);
    assert!(game.results_visible());
    assert!(game.renderer().last().results_visible);

    game.smash().unwrap();
    assert!(game.renderer().last().results_visible);
    assert_eq!(game.renderer().last().summary.total(), 2);

    game.hide_results().unwrap();
    assert!(!game.renderer().last().results_visible);
}

#[test]
fn test_frame_styling_follows_primary_type() {
    let mut game = new_game(MemoryStore::new());
    game.start().unwrap();

    let frame = game.renderer().last();
    assert_eq!(frame.types_text.as_deref(), Some("grass, poison"));
    assert_eq!(frame.css_class, Some("grass-class"));
}
