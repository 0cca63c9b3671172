//! # CLI Layer
//!
//! One UI client of the catalog, not the catalog itself. This is the only place
//! that reads stdin, writes stdout/stderr, or decides exit codes.
//!
//! - `setup`: clap definitions and conversion into loose input records
//! - `commands`: context setup, dispatch and per-command handlers
//! - `render`: turning shops and orders into terminal text

pub mod commands;
pub mod render;
pub mod setup;
