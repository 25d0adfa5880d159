//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions on the chooser screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ List movement ============
    /// Move the highlight up
    MoveUp,
    /// Move the highlight down
    MoveDown,
    /// Jump up by a page
    PageUp,
    /// Jump down by a page
    PageDown,
    /// Go to the first entry
    GoToTop,
    /// Go to the last entry
    GoToEnd,

    // ============ Directory navigation ============
    /// Open the highlighted subdirectory
    Open,
    /// Go to the parent directory
    NavigateUp,
    /// Re-list the current directory
    Refresh,

    // ============ Result ============
    /// Return the current directory as the selection
    Select,
    /// Close without a selection
    Cancel,
    /// Quit (same as cancel)
    Quit,

    // ============ Folder creation ============
    /// Create the requested folder in the current directory
    Create,

    // ============ Yes/No prompts ============
    /// Confirm yes
    Yes,
    /// Confirm no
    No,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Open => "Open folder",
            Action::NavigateUp => "Parent folder",
            Action::Refresh => "Refresh",
            Action::Select => "Choose this folder",
            Action::Cancel => "Cancel",
            Action::Quit => "Quit",
            Action::Create => "New folder",
            Action::Yes => "Yes",
            Action::No => "No",
        }
    }
}
