//! Workflows composing the scanner and the registry, as the CLI runs them.

pub mod import;
pub mod streamers;

pub use import::{import_path, ImportEntry, ImportResult, ImportSummary};
pub use streamers::{get_streamer, update_streamer};
