//! Session orchestration.
//!
//! - `controller`: `GameController`, one method per user action
//! - `frontend`: the renderer, feedback and confirmation seams
//! - `config`: `GameConfig` loading and store selection

pub mod config;
pub mod controller;
pub mod frontend;

pub use config::{GameConfig, FIXTURES_ENV, STORE_ENV};
pub use controller::{GameController, RESTART_WARNING};
pub use frontend::{Confirmation, FeedbackCue, FeedbackSink, Frame, Silent, UIRenderer};
