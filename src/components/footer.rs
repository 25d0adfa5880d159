use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hint footer
pub struct Footer;

impl Footer {
    /// Render a footer from `keys: label` hints separated by " | ".
    /// Hints whose label is listed in `disabled` are drawn dimmed.
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str, disabled: &[&str]) -> Result<u16> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }

            if let Some((keys, label)) = part.split_once(": ") {
                let (key_style, label_style) = if disabled.contains(&label) {
                    (t.disabled_style(), t.disabled_style())
                } else {
                    (
                        t.emphasis_style().add_modifier(Modifier::BOLD),
                        t.text_style(),
                    )
                };
                spans.push(Span::styled(format!("{}: ", keys), key_style));
                spans.push(Span::styled(label.to_string(), label_style));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_focused_style())
            .border_type(BorderType::Rounded)
            .style(t.background_style());

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }
}
