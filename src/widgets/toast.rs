//! Toast notification widget.
//!
//! A short status line in the bottom-right corner that closes itself after a
//! configurable duration. Used for folder creation outcomes.

use crate::chooser::CreateFolderOutcome;
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

/// Toast notification variant for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Info => "\u{2139}",    // ℹ
            ToastVariant::Error => "\u{2718}",   // ✘
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        let t = theme();
        match self {
            ToastVariant::Success => t.success,
            ToastVariant::Info => t.primary,
            ToastVariant::Error => t.error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant, duration: Duration) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Toast reporting a folder creation attempt for `name`
    pub fn for_outcome(outcome: &CreateFolderOutcome, name: &str, duration: Duration) -> Self {
        let variant = if outcome.is_success() {
            ToastVariant::Success
        } else {
            ToastVariant::Error
        };
        Self::new(outcome.message(name), variant, duration)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Renders a toast in the bottom-right corner of the given area
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn calculate_area(&self, area: Rect) -> Rect {
        let toast_width = 44u16.min(area.width.saturating_sub(4));
        let toast_height = 3u16.min(area.height);

        let x = area.x + area.width.saturating_sub(toast_width + 2);
        let y = area.y + area.height.saturating_sub(toast_height + 3); // Above footer

        Rect::new(x, y, toast_width, toast_height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.calculate_area(area);
        let t = theme();

        Clear.render(toast_area, buf);

        let message = format!(" {} {} ", self.toast.variant.icon(), self.toast.message);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.toast.variant.color()))
            .style(t.background_style());

        Paragraph::new(message)
            .block(block)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .render(toast_area, buf);
    }
}

/// Holds at most one toast; a new one replaces the old
#[derive(Debug)]
pub struct ToastManager {
    current: Option<Toast>,
    duration: Duration,
}

impl ToastManager {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastVariant::Info, self.duration));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastVariant::Error, self.duration));
    }

    /// Report a folder creation outcome
    pub fn outcome(&mut self, outcome: &CreateFolderOutcome, name: &str) {
        self.push(Toast::for_outcome(outcome, name, self.duration));
    }

    /// Remove an expired toast and return whether one is still active
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}
