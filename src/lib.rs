// Pedantic lint configuration for the crate.
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are limited to static regex compilation
// - cast_possible_truncation: Palette indices are always < 10
// - module_name_repetitions: Types like `StreamerRegistry` read better in full
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod registry;
pub mod scan;
