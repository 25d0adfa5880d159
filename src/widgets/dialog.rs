//! Dialog widget for confirmations and warnings
//!
//! A self-contained widget: centers itself, dims the screen behind it and
//! renders title, content and an optional key-hint footer as three stacked
//! blocks with collapsed borders.

use crate::styles::theme;
use ratatui::layout::Spacing;
use ratatui::prelude::*;
use ratatui::symbols::merge::MergeStrategy;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Confirmation dialog
pub struct Dialog<'a> {
    pub title: &'a str,
    pub content: &'a str,
    /// Minimum width in columns
    pub min_width: u16,
    /// Maximum width in columns
    pub max_width: u16,
    /// Key hints shown below the content
    pub footer: Option<&'a str>,
}

impl<'a> Dialog<'a> {
    /// Width follows the longest line, clamped to 40-70 columns by default.
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            min_width: 40,
            max_width: 70,
            footer: None,
        }
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Centered area the dialog occupies inside `area`
    pub fn popup_area(&self, area: Rect) -> Rect {
        let longest = self
            .content
            .lines()
            .chain(std::iter::once(self.title))
            .chain(self.footer)
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0);

        // 2 borders + 2x2 padding + breathing room
        let width = (longest + 10)
            .clamp(self.min_width, self.max_width)
            .min(area.width);

        let inner_width = width.saturating_sub(6).max(1);
        let content_lines: u16 = self
            .content
            .lines()
            .map(|l| (l.chars().count() as u16).div_ceil(inner_width).max(1))
            .sum();

        // title block 3 + content block (lines + 2) + footer block 3, minus collapsed borders
        let mut height = 3 + content_lines.max(1) + 2 - 1;
        if self.footer.is_some() {
            height += 3 - 1;
        }
        let height = height.min(area.height);

        Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        )
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let popup_area = self.popup_area(area);

        Block::default().style(t.dim_style()).render(area, buf);
        Clear.render(popup_area, buf);

        let border_style = t.border_focused_style();

        let constraints = if self.footer.is_some() {
            vec![
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ]
        } else {
            vec![Constraint::Length(3), Constraint::Min(3)]
        };
        let layout = Layout::vertical(constraints)
            .spacing(Spacing::Overlap(1))
            .split(popup_area);

        let block = || {
            Block::default()
                .borders(Borders::ALL)
                .border_type(t.dialog_border_type)
                .border_style(border_style)
                .padding(Padding::horizontal(2))
                .merge_borders(MergeStrategy::Exact)
                .style(t.background_style())
        };

        let title_block = block();
        let title_inner = title_block.inner(layout[0]);
        title_block.render(layout[0], buf);
        Paragraph::new(self.title)
            .alignment(Alignment::Center)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .render(title_inner, buf);

        let content_block = block();
        let content_inner = content_block.inner(layout[1]);
        content_block.render(layout[1], buf);
        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .style(t.text_style())
            .render(content_inner, buf);

        if let Some(footer) = self.footer {
            let footer_block = block();
            let footer_inner = footer_block.inner(layout[2]);
            footer_block.render(layout[2], buf);
            Paragraph::new(footer)
                .alignment(Alignment::Center)
                .style(t.emphasis_style().add_modifier(Modifier::BOLD))
                .render(footer_inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let dialog = Dialog::new("Create folder", "Create 'Music' here?").footer("Y: Yes | N: No");
        let popup = dialog.popup_area(area);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.x, 30);
        assert!(popup.y > 0);
        assert!(popup.bottom() <= area.bottom());
    }

    #[test]
    fn test_popup_never_exceeds_area() {
        let area = Rect::new(0, 0, 20, 5);
        let text = "long text ".repeat(30);
        let dialog = Dialog::new("Title", &text);
        let popup = dialog.popup_area(area);
        assert!(popup.width <= 20);
        assert!(popup.height <= 5);
    }

    #[test]
    fn test_renders_content_into_buffer() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        Dialog::new("Create folder", "Create Music?").render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Create folder"));
        assert!(text.contains("Create Music?"));
    }
}
