//! Collaborator traits for the presentation layer.
//!
//! The controller never touches a page, a speaker or a dialog. It hands a
//! `Frame` to a `UIRenderer`, a `FeedbackCue` to a `FeedbackSink`, and asks
//! a `Confirmation` before destructive actions.

use serde::Serialize;

use crate::core::PokemonId;
use crate::error::GameError;
use crate::ledger::ResultsSummary;
use crate::pokemon::{card_color, css_class, Record};

/// Everything needed to draw one card.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub id: PokemonId,

    /// Upper-cased name.
    pub name: String,

    /// `"grass, poison"`. `None` for a typeless record.
    pub types_text: Option<String>,

    pub image: Option<String>,

    /// Move blurb. `None` for a moveless record.
    pub moves_text: Option<String>,

    /// CSS class for the primary type, e.g. `grass-class`.
    pub css_class: Option<&'static str>,

    /// Card background color for the primary type.
    pub color: Option<&'static str>,

    pub summary: ResultsSummary,

    /// Whether the results panel is shown.
    pub results_visible: bool,
}

impl Frame {
    /// Build a frame for `record`, shown as `id`.
    pub fn new(id: PokemonId, record: &Record, summary: ResultsSummary, results_visible: bool) -> Self {
        let primary = record.primary_type();
        Self {
            id,
            name: record.display_name(),
            types_text: record.types_text(),
            image: record.image().map(str::to_string),
            moves_text: record.moves_text(),
            css_class: primary.as_ref().and_then(css_class),
            color: primary.as_ref().and_then(card_color),
            summary,
            results_visible,
        }
    }
}

/// Draws frames.
pub trait UIRenderer {
    /// Show the card described by `frame`.
    fn render(&mut self, frame: &Frame);

    /// Show that `id` could not be loaded.
    fn render_failure(&mut self, id: PokemonId, error: &GameError);
}

/// Audible feedback after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FeedbackCue {
    Captured,
    Rejected,
    Undo,
}

impl FeedbackCue {
    /// Sound asset played for this cue.
    #[must_use]
    pub fn asset(self) -> &'static str {
        match self {
            FeedbackCue::Captured => "assets/sounds/pokeball_sound.mp3",
            FeedbackCue::Rejected => "assets/sounds/reject_sound.mp3",
            FeedbackCue::Undo => "assets/sounds/undo_sound.mp3",
        }
    }
}

/// Receives feedback cues.
pub trait FeedbackSink {
    fn cue(&mut self, cue: FeedbackCue);
}

/// Sink that drops every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl FeedbackSink for Silent {
    fn cue(&mut self, _cue: FeedbackCue) {}
}

/// Collects cues in order.
impl FeedbackSink for Vec<FeedbackCue> {
    fn cue(&mut self, cue: FeedbackCue) {
        self.push(cue);
    }
}

/// Yes/no prompt shown before destructive actions.
pub trait Confirmation {
    /// Ask `message`; `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
