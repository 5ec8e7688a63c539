//! The game loop's single-step driver.
//!
//! `GameController` owns every piece of a session: the sequencer, the
//! ledger, the provider and the presentation collaborators. Each public
//! operation is one user action and takes `&mut self`, so actions never
//! overlap.
//!
//! Every action that moves to another Pokémon fetches the target record
//! first. Only once the fetch has succeeded does it touch the ledger and
//! the sequencer, so a provider failure leaves the session exactly as it
//! was.
//!
//! ## Example
//!
//! ```
//! use smash_or_pass::core::PokemonId;
//! use smash_or_pass::error::GameError;
//! use smash_or_pass::game::{Frame, GameConfig, GameController, UIRenderer};
//! use smash_or_pass::pokemon::{Record, StaticProvider};
//! use smash_or_pass::store::MemoryStore;
//!
//! #[derive(Default)]
//! struct Screen(Vec<Frame>);
//!
//! impl UIRenderer for Screen {
//!     fn render(&mut self, frame: &Frame) {
//!         self.0.push(frame.clone());
//!     }
//!     fn render_failure(&mut self, _id: PokemonId, _error: &GameError) {}
//! }
//!
//! let mut provider = StaticProvider::new();
//! provider.insert(PokemonId::new(1), Record::new("bulbasaur", ["grass", "poison"]));
//! provider.insert(PokemonId::new(2), Record::new("ivysaur", ["grass", "poison"]));
//!
//! let mut game = GameController::new(GameConfig::default(), provider, Screen::default(), MemoryStore::new());
//! game.start().unwrap();
//! game.smash().unwrap();
//!
//! assert_eq!(game.current_id(), PokemonId::new(2));
//! assert_eq!(game.renderer().0.last().unwrap().name, "IVYSAUR");
//! ```

use super::config::GameConfig;
use super::frontend::{Confirmation, FeedbackCue, FeedbackSink, Frame, Silent, UIRenderer};
use crate::core::{Appraisal, DecisionRecord, PokemonId};
use crate::error::{Direction, GameError, Result};
use crate::ledger::{ResultsSummary, SessionLedger};
use crate::pokemon::{PokemonProvider, Record};
use crate::sequence::{successor, IdSequencer, FIRST, LAST};
use crate::store::Store;

/// Prompt shown before a restart wipes the session.
pub const RESTART_WARNING: &str =
    "If you restart the game, you'll lose all your progress. Do you really want to restart the game?";

/// Drives one smash-or-pass session.
pub struct GameController<P, R, S, F = Silent> {
    config: GameConfig,
    sequencer: IdSequencer,
    ledger: SessionLedger<S>,
    provider: P,
    renderer: R,
    feedback: F,
    current: Option<Record>,
    results_visible: bool,
}

impl<P, R, S> GameController<P, R, S, Silent>
where
    P: PokemonProvider,
    R: UIRenderer,
    S: Store,
{
    /// Create a controller with silent feedback.
    ///
    /// Nothing is fetched or rendered until `start()`.
    pub fn new(config: GameConfig, provider: P, renderer: R, store: S) -> Self {
        Self {
            config,
            sequencer: IdSequencer::default(),
            ledger: SessionLedger::new(store),
            provider,
            renderer,
            feedback: Silent,
            current: None,
            results_visible: false,
        }
    }
}

impl<P, R, S, F> GameController<P, R, S, F>
where
    P: PokemonProvider,
    R: UIRenderer,
    S: Store,
    F: FeedbackSink,
{
    /// Replace the feedback sink.
    pub fn with_feedback<G: FeedbackSink>(self, feedback: G) -> GameController<P, R, S, G> {
        GameController {
            config: self.config,
            sequencer: self.sequencer,
            ledger: self.ledger,
            provider: self.provider,
            renderer: self.renderer,
            feedback,
            current: self.current,
            results_visible: self.results_visible,
        }
    }

    // === Accessors ===

    /// Settings the session was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// ID of the Pokémon on screen.
    pub fn current_id(&self) -> PokemonId {
        self.sequencer.current()
    }

    /// Record of the Pokémon on screen, once one has been loaded.
    pub fn current_record(&self) -> Option<&Record> {
        self.current.as_ref()
    }

    /// Position in the ID sequence.
    pub fn sequencer(&self) -> &IdSequencer {
        &self.sequencer
    }

    /// Recorded decisions.
    pub fn ledger(&self) -> &SessionLedger<S> {
        &self.ledger
    }

    /// Borrow the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutably borrow the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Borrow the feedback sink.
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Whether the results panel is shown.
    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Current results.
    pub fn summary(&self) -> Result<ResultsSummary> {
        self.ledger.results_summary()
    }

    // === Actions ===

    /// Begin or resume the session and draw the first card.
    ///
    /// With a stored pointer (and `resume_session` on) play continues at the
    /// ID after the last decision. A session whose last decision was the
    /// final ID reopens on that ID, where forward actions are exhausted.
    pub fn start(&mut self) -> Result<()> {
        let last = if self.config.resume_session {
            self.ledger.last_id()?
        } else {
            None
        };
        let resume = match last {
            Some(last) => successor(last).unwrap_or(PokemonId::new(LAST)),
            None => PokemonId::new(FIRST),
        };

        let record = self.fetch(resume)?;
        self.sequencer = IdSequencer::new(Some(resume));
        self.current = Some(record);
        self.render()?;

        match last {
            Some(last) => tracing::info!(last_id = last.raw(), resume = resume.raw(), "resumed session"),
            None => tracing::info!(start = resume.raw(), "started session"),
        }
        Ok(())
    }

    /// Accept the Pokémon on screen and move to the next one.
    pub fn smash(&mut self) -> Result<DecisionRecord> {
        self.decide(Appraisal::Smashed)
    }

    /// Reject the Pokémon on screen and move to the next one.
    pub fn pass(&mut self) -> Result<DecisionRecord> {
        self.decide(Appraisal::Passed)
    }

    /// Take back the last decision and return to the Pokémon it judged.
    ///
    /// In a normal walk that Pokémon is the previous one in the sequence.
    pub fn undo(&mut self) -> Result<DecisionRecord> {
        self.ensure_started()?;
        if self.ledger.is_empty()? {
            return Err(GameError::EmptyHistory);
        }
        let previous = self
            .sequencer
            .peek_previous()
            .ok_or(GameError::SequenceExhausted {
                direction: Direction::Backward,
            })?;
        let target = self.ledger.last_id()?.unwrap_or(previous);

        let record = self.fetch(target)?;
        let undone = self.ledger.undo_last_decision()?;
        if undone.id != target {
            tracing::warn!(undone = undone.id.raw(), shown = target.raw(), "undone decision does not match last id");
        }
        self.sequencer = IdSequencer::new(Some(target));
        self.current = Some(record);
        self.render()?;
        self.feedback.cue(FeedbackCue::Undo);
        Ok(undone)
    }

    /// Wipe the session and go back to the first Pokémon.
    ///
    /// Returns `Ok(false)` when the player declines; nothing changes then.
    pub fn restart(&mut self, confirmation: &mut impl Confirmation) -> Result<bool> {
        if self.config.confirm_restart && !confirmation.confirm(RESTART_WARNING) {
            tracing::info!("restart declined");
            return Ok(false);
        }

        let first = PokemonId::new(FIRST);
        let record = self.fetch(first)?;
        self.ledger.reset()?;
        self.sequencer.restart();
        self.current = Some(record);
        self.results_visible = false;
        self.render()?;

        tracing::info!("restarted session");
        Ok(true)
    }

    /// Show the results panel.
    pub fn show_results(&mut self) -> Result<ResultsSummary> {
        self.results_visible = true;
        self.render()?;
        self.summary()
    }

    /// Hide the results panel.
    pub fn hide_results(&mut self) -> Result<()> {
        self.results_visible = false;
        self.render()
    }

    // === Internals ===

    fn decide(&mut self, appraisal: Appraisal) -> Result<DecisionRecord> {
        self.ensure_started()?;
        let next = self
            .sequencer
            .peek_next()
            .ok_or(GameError::SequenceExhausted {
                direction: Direction::Forward,
            })?;

        let judged_types = self
            .current
            .as_ref()
            .map(Record::type_list)
            .ok_or(GameError::NotStarted)?;
        let decision = DecisionRecord::with_types(self.sequencer.current(), appraisal, judged_types);

        let record = self.fetch(next)?;
        self.ledger.record_decision(&decision)?;
        self.sequencer.next();
        self.current = Some(record);
        self.render()?;
        self.feedback.cue(match appraisal {
            Appraisal::Smashed => FeedbackCue::Captured,
            Appraisal::Passed => FeedbackCue::Rejected,
        });
        Ok(decision)
    }

    fn ensure_started(&self) -> Result<()> {
        if self.current.is_none() {
            return Err(GameError::NotStarted);
        }
        Ok(())
    }

    fn fetch(&mut self, id: PokemonId) -> Result<Record> {
        self.provider.fetch(id).map_err(|e| {
            let err = GameError::from(e);
            tracing::error!(id = id.raw(), "failed to load pokemon: {err}");
            self.renderer.render_failure(id, &err);
            err
        })
    }

    /// Redraw the current card. No-op before the first successful load.
    fn render(&mut self) -> Result<()> {
        let Some(record) = &self.current else {
            return Ok(());
        };
        let frame = Frame::new(
            self.sequencer.current(),
            record,
            self.ledger.results_summary()?,
            self.results_visible,
        );
        self.renderer.render(&frame);
        Ok(())
    }
}

impl<P, R, S, F> std::fmt::Debug for GameController<P, R, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("current", &self.sequencer.current())
            .field("results_visible", &self.results_visible)
            .finish_non_exhaustive()
    }
}
