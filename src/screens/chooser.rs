//! Directory chooser screen.
//!
//! Thin adapter between key events and [`DirectoryChooser`]: the controller
//! owns every navigation and selection rule, this screen only keeps the list
//! cursor, the "create folder?" prompt and the status toasts.

use crate::chooser::DirectoryChooser;
use crate::components::{Footer, Header};
use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{format_path_for_display, ListStateExt, DEFAULT_PAGE_SIZE};
use crate::widgets::{Dialog, ToastManager};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Directory chooser screen controller.
pub struct ChooserScreen {
    chooser: DirectoryChooser,
    list_state: ListState,
    /// Directory the list cursor belongs to
    listed_dir: Option<PathBuf>,
    show_create_prompt: bool,
    toasts: ToastManager,
}

impl ChooserScreen {
    pub fn new(chooser: DirectoryChooser, toast_duration: Duration) -> Self {
        let mut screen = Self {
            chooser,
            list_state: ListState::default(),
            listed_dir: None,
            show_create_prompt: false,
            toasts: ToastManager::new(toast_duration),
        };
        screen.sync_list(None);
        screen
    }

    pub fn chooser(&self) -> &DirectoryChooser {
        &self.chooser
    }

    /// Index of the highlighted subdirectory
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn is_create_prompt_open(&self) -> bool {
        self.show_create_prompt
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// Re-fit the cursor after the controller replaced the list. A new
    /// directory starts at `focus` (or the top); the same directory keeps
    /// the cursor where it was.
    fn sync_list(&mut self, focus: Option<&str>) {
        let total = self.chooser.subdirectories().len();
        let current = self.chooser.current_dir().map(PathBuf::from);

        if current == self.listed_dir {
            self.list_state.clamp_to(total);
            return;
        }

        let index = focus
            .and_then(|name| self.chooser.names().position(|n| n == name))
            .unwrap_or(0);
        self.list_state = ListState::default();
        if total > 0 {
            self.list_state.select(Some(index));
        }
        self.listed_dir = current;
    }

    fn open_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        if self.chooser.select_entry(index) {
            self.sync_list(None);
        } else if let Some(entry) = self.chooser.subdirectories().get(index) {
            self.toasts.error(format!("Could not open '{}'", entry.name));
        }
    }

    fn navigate_up(&mut self) {
        let child = self
            .chooser
            .current_dir()
            .and_then(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned());
        if self.chooser.navigate_up() {
            self.sync_list(child.as_deref());
        }
    }

    fn refresh(&mut self) {
        if self.chooser.refresh() {
            self.sync_list(None);
        } else if self.chooser.current_dir().is_some() {
            self.toasts.error("Could not read this folder");
        }
    }

    fn confirm(&mut self) -> ScreenAction {
        match self.chooser.confirm_selection() {
            Some(result) => ScreenAction::Finish(result),
            None => {
                self.toasts
                    .error("This folder can't be chosen: it must be readable and writable");
                ScreenAction::None
            }
        }
    }

    fn create_folder(&mut self) {
        self.show_create_prompt = false;
        let Some(request) = self.chooser.new_folder() else {
            return;
        };
        let name = request.name().to_string();
        let outcome = request.create();
        self.toasts.outcome(&outcome, &name);
    }

    fn handle_prompt_action(&mut self, action: Action) {
        match action {
            Action::Yes | Action::Open => self.create_folder(),
            Action::No | Action::Cancel | Action::Quit => self.show_create_prompt = false,
            _ => {}
        }
    }

    fn handle_action(&mut self, action: Action) -> ScreenAction {
        let total = self.chooser.subdirectories().len();
        match action {
            Action::MoveUp => self.list_state.move_up_by(1, total),
            Action::MoveDown => self.list_state.move_down_by(1, total),
            Action::PageUp => self.list_state.move_up_by(DEFAULT_PAGE_SIZE, total),
            Action::PageDown => self.list_state.move_down_by(DEFAULT_PAGE_SIZE, total),
            Action::GoToTop => self.list_state.select_first_item(total),
            Action::GoToEnd => self.list_state.select_last_item(total),
            Action::Open => self.open_selected(),
            Action::NavigateUp => self.navigate_up(),
            Action::Refresh => self.refresh(),
            Action::Select => return self.confirm(),
            Action::Cancel | Action::Quit => {
                return ScreenAction::Finish(self.chooser.cancel());
            }
            Action::Create => {
                if self.chooser.can_offer_new_folder() {
                    self.show_create_prompt = true;
                } else if let Some(name) = self.chooser.new_dir_name() {
                    self.toasts.info(format!("'{}' can't be created here", name));
                } else {
                    debug!("No folder name to create");
                }
            }
            Action::Yes | Action::No => {}
        }
        ScreenAction::None
    }

    fn footer_text(&self, keymap: &Keymap) -> String {
        let hint = |action: Action| {
            format!(
                "{}: {}",
                keymap.get_key_display_for_action(action),
                keymap.get_description_for_action(action)
            )
        };

        let mut hints = vec![
            format!("{}: Navigate", keymap.navigation_display()),
            hint(Action::Open),
            hint(Action::NavigateUp),
            hint(Action::Select),
        ];
        if self.chooser.can_offer_new_folder() {
            hints.push(hint(Action::Create));
        }
        hints.push(hint(Action::Cancel));
        hints.join(" | ")
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .title(" Folders ")
            .title_style(t.title_style())
            .borders(Borders::ALL)
            .border_type(t.border_type(true))
            .border_style(t.border_focused_style())
            .padding(Padding::horizontal(1));

        if self.chooser.subdirectories().is_empty() {
            let message = if self.chooser.current_dir().is_some() {
                "No subfolders"
            } else {
                "Nothing to show"
            };
            let empty = Paragraph::new(Line::from(Span::styled(message, t.muted_style())))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .chooser
            .names()
            .map(|name| ListItem::new(format!("{}/", name)).style(t.text_style()))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_create_prompt(&self, frame: &mut Frame, area: Rect, config: &Config) {
        let Some(request) = self.chooser.new_folder() else {
            return;
        };
        let content = format!(
            "Create folder '{}' in\n{}?",
            request.name(),
            format_path_for_display(request.parent())
        );
        let footer = format!(
            "{}: Yes | {}: No",
            config.keymap.get_key_display_for_action(Action::Yes),
            config.keymap.get_key_display_for_action(Action::No)
        );
        let dialog = Dialog::new("New folder", &content).footer(&footer);
        frame.render_widget(dialog, area);
    }
}

impl Screen for ChooserScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        let path = self.chooser.current_dir().map(format_path_for_display);
        let status = self.chooser.current_dir().map(|_| {
            if self.chooser.can_confirm() {
                Span::styled("writable", t.success_style())
            } else {
                Span::styled("read-only", t.warning_style())
            }
        });
        Header::render(frame, chunks[0], "Choose a folder", path.as_deref(), status)?;

        self.render_list(frame, chunks[1]);

        let keymap = &ctx.config.keymap;
        let select_label = keymap.get_description_for_action(Action::Select);
        let disabled: Vec<&str> = if self.chooser.can_confirm() {
            Vec::new()
        } else {
            vec![select_label.as_str()]
        };
        Footer::render(frame, chunks[2], &self.footer_text(keymap), &disabled)?;

        if self.show_create_prompt {
            self.render_create_prompt(frame, area, ctx.config);
        }

        self.toasts.render(frame, area);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::FocusGained => {
                self.chooser.activate();
                // Changes made while unfocused were not watched
                if self.chooser.refresh() {
                    self.sync_list(None);
                }
            }
            Event::FocusLost => self.chooser.deactivate(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = ctx.config.keymap.get_action(key.code, key.modifiers) else {
                    return Ok(ScreenAction::None);
                };
                if self.show_create_prompt {
                    self.handle_prompt_action(action);
                } else {
                    return Ok(self.handle_action(action));
                }
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn tick(&mut self) -> bool {
        let refreshed = self.chooser.process_watch_events();
        if refreshed {
            self.sync_list(None);
        }
        let had_toast = self.toasts.current().is_some();
        let has_toast = self.toasts.tick();
        refreshed || had_toast != has_toast
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.chooser.activate();
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        // Leaving without a result counts as cancelling
        if !self.chooser.is_finished() {
            self.chooser.cancel();
        }
        Ok(())
    }
}
