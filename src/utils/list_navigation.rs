//! Cursor movement over the subdirectory list.
//!
//! The list is replaced wholesale on every navigation, so besides the usual
//! up/down/page moves the cursor needs to be re-fitted to a list of a
//! different length.

use ratatui::widgets::ListState;

/// Extension trait for `ListState` with the moves the chooser list needs.
pub trait ListStateExt {
    /// Move selection up, stopping at the first item.
    fn move_up_by(&mut self, count: usize, total_items: usize);

    /// Move selection down, stopping at the last item.
    fn move_down_by(&mut self, count: usize, total_items: usize);

    fn select_first_item(&mut self, total_items: usize);

    fn select_last_item(&mut self, total_items: usize);

    /// Keep the selection inside a list that now has `total_items` entries.
    /// An empty list clears the selection; an unset selection becomes 0.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn move_up_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.saturating_sub(count)));
    }

    fn move_down_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        let new_index = (current + count).min(total_items - 1);
        self.select(Some(new_index));
    }

    fn select_first_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(0));
        }
    }

    fn select_last_item(&mut self, total_items: usize) {
        if total_items > 0 {
            self.select(Some(total_items - 1));
        }
    }

    fn clamp_to(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
        } else {
            let current = self.selected().unwrap_or(0);
            self.select(Some(current.min(total_items - 1)));
        }
    }
}

/// Default page size for page up/down navigation.
pub const DEFAULT_PAGE_SIZE: usize = 10;
