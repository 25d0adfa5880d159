//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Backspace, Esc
    #[default]
    Standard,
    /// hjkl navigation
    Vim,
    /// Ctrl+N/P navigation
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

impl FromStr for KeymapPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(KeymapPreset::Standard),
            "vim" => Ok(KeymapPreset::Vim),
            "emacs" => Ok(KeymapPreset::Emacs),
            other => Err(format!("Unknown keymap preset: {}", other)),
        }
    }
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // List
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        // Navigation
        KeyBinding::new("enter", Action::Open),
        KeyBinding::new("right", Action::Open),
        KeyBinding::new("backspace", Action::NavigateUp),
        KeyBinding::new("left", Action::NavigateUp),
        KeyBinding::new("r", Action::Refresh),
        KeyBinding::new("f5", Action::Refresh),
        // Result
        KeyBinding::new("s", Action::Select),
        KeyBinding::new("ctrl+s", Action::Select),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Actions
        KeyBinding::new("c", Action::Create),
        // Yes/No prompts
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}

fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        // List - vim style + arrows
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+u", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+d", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("g", Action::GoToTop), // gg in real vim, but single g works
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("shift+g", Action::GoToEnd),
        KeyBinding::new("end", Action::GoToEnd),
        // Navigation - netrw style
        KeyBinding::new("l", Action::Open),
        KeyBinding::new("enter", Action::Open),
        KeyBinding::new("h", Action::NavigateUp),
        KeyBinding::new("-", Action::NavigateUp),
        KeyBinding::new("backspace", Action::NavigateUp),
        KeyBinding::new("ctrl+l", Action::Refresh),
        KeyBinding::new("r", Action::Refresh),
        // Result
        KeyBinding::new("s", Action::Select),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Actions
        KeyBinding::new("o", Action::Create),
        // Yes/No prompts
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}

fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        // List - emacs style + arrows
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        // Navigation - dired style
        KeyBinding::new("enter", Action::Open),
        KeyBinding::new("ctrl+f", Action::Open),
        KeyBinding::new("^", Action::NavigateUp),
        KeyBinding::new("ctrl+b", Action::NavigateUp),
        KeyBinding::new("backspace", Action::NavigateUp),
        KeyBinding::new("g", Action::Refresh),
        // Result
        KeyBinding::new("ctrl+s", Action::Select),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Actions
        KeyBinding::new("+", Action::Create), // dired create-directory
        // Yes/No prompts
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}
