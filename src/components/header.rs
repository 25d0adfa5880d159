use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Header showing the directory being browsed
pub struct Header;

impl Header {
    /// Render the header
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to render the header in (3 lines)
    /// * `title` - Block title (e.g., "Choose a folder")
    /// * `path` - Current directory, or `None` before the first listing
    /// * `status` - Short right-aligned status, e.g. "read-only"
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        path: Option<&str>,
        status: Option<Span<'_>>,
    ) -> Result<u16> {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .border_type(t.border_type(false))
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner = header_block.inner(area);
        frame.render_widget(header_block, area);

        let status_width = status.as_ref().map(|s| s.width() as u16).unwrap_or(0);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(status_width)])
            .split(inner);

        let path_line = match path {
            Some(path) => Line::from(Span::styled(path.to_string(), t.emphasis_style())),
            None => Line::from(Span::styled("No folder could be opened", t.muted_style())),
        };
        frame.render_widget(Paragraph::new(path_line), chunks[0]);

        if let Some(status) = status {
            frame.render_widget(
                Paragraph::new(Line::from(status)).alignment(Alignment::Right),
                chunks[1],
            );
        }

        Ok(area.height)
    }
}
