//! Core logic for Dugout, a defensive-innings tracker for youth-league
//! coaches: roster and position lists, per-game assignment grids, innings
//! summaries, and the JSON/CSV interchange formats.
//!
//! Everything here is platform-agnostic. Browser concerns (rendering,
//! `localStorage`, file downloads) live in the `dugout-web` crate and
//! reach persistence through the [`StateStore`] seam.

pub mod export;
pub mod filter;
pub mod game;
pub mod names;
pub mod state;
pub mod store;
pub mod summary;

pub use export::{ExportDoc, ExportError, ImportError, ImportedDoc, pivot_csv};
pub use filter::DateFilter;
pub use game::{Game, GameError, GameId};
pub use names::{NameError, NameList};
pub use state::{DEFAULT_INNINGS, TrackerState};
pub use store::{StateStore, load_or_default, load_saved};
pub use summary::{NameCount, PivotRow, UsageSummary};
