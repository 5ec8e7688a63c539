//! Decision history and results.
//!
//! - `session`: `SessionLedger`, the persisted decision log with undo
//! - `summary`: the results view derived from it

pub mod session;
pub mod summary;

pub use session::SessionLedger;
pub use summary::{ResultsSummary, TypeTally};
