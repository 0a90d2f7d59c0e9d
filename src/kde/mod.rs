//! The KDE configuration store: kdeglobals parsing, color sets and change
//! notification.

pub mod colorset;
pub mod config;
pub mod effects;
pub mod watch;

pub use colorset::{
    BackgroundRole, ColorRole, ColorSet, DecorationRole, ForegroundRole, Palette, PaletteState,
};
pub use config::{ConfigChange, ConfigStore, KdeConfig};
pub use watch::KdeGlobalsFile;
