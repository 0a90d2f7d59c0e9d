//! Keeps CSS and application theme files in sync with the KDE color scheme.
//!
//! A pass reads one kdeglobals snapshot, resolves the general (`*-breeze`)
//! and Discord mappings, and writes them to every output target.

pub mod backends;
pub mod cli;
pub mod color;
pub mod error;
pub mod gate;
pub mod kde;
pub mod pipeline;
pub mod theme;
