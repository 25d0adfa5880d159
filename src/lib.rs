//! dirchooser - pick a directory in the terminal
//!
//! The [`chooser`] module holds the UI-free navigation and selection logic;
//! everything else is the terminal front end around it.

pub mod app;
pub mod chooser;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use chooser::{DirectoryChooser, SelectionResult};
pub use config::Config;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
