//! Placeholder for screens without content

use mealdeck_app::state::View;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Placeholder<'a> {
    view: &'a View,
}

impl<'a> Placeholder<'a> {
    pub fn new(view: &'a View) -> Self {
        Self { view }
    }
}

impl Widget for Placeholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(format!(" {} ", self.view.title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let message = match self.view {
            View::Other(tag) => format!("Nothing here: '{tag}' is not a known screen"),
            view => format!("{} is coming soon", view.title()),
        };

        let top = inner.height / 2;
        let centered = Rect {
            y: inner.y + top,
            height: inner.height.saturating_sub(top),
            ..inner
        };

        Paragraph::new(vec![
            Line::from(Span::styled(message, styles::text_secondary())),
            Line::from(Span::styled("Press 1 for the dashboard", styles::text_muted())),
        ])
        .alignment(Alignment::Center)
        .render(centered, buf);
    }
}
