//! Search input box widget

use mealdeck_app::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Search box with the current query and a cursor while focused
pub struct SearchInput<'a> {
    search: &'a SearchState,
}

impl<'a> SearchInput<'a> {
    pub fn new(search: &'a SearchState) -> Self {
        Self { search }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.search.input_focused;
        let block = styles::glass_block(focused).title(" Search recipes ");

        let mut spans = vec![Span::styled("/ ", styles::keybinding())];
        if self.search.query.is_empty() && !focused {
            spans.push(Span::styled(
                "press / and type a dish name",
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled(
                self.search.query.as_str(),
                styles::text_primary(),
            ));
        }
        if focused {
            spans.push(Span::styled("_", styles::keybinding()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
