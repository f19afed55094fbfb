//! Status bar widget
//!
//! Shows fetch progress or the last error on the left and key hints on the
//! right.

use mealdeck_app::state::{AppState, View};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::truncate_to_width;
use crate::theme::styles;

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Loading or error indicator for the current screen
    fn status(&self) -> Option<Span<'static>> {
        let state = self.state;
        let spinner = styles::spinner(state.tick_count);

        match state.view {
            View::Search if state.search.is_loading => Some(Span::styled(
                format!("{spinner} Searching…"),
                styles::status_yellow(),
            )),
            View::Search => state
                .search
                .error
                .as_ref()
                .map(|e| Span::styled(format!("✗ {e}"), styles::status_red())),
            _ if state.is_loading => Some(Span::styled(
                format!("{spinner} Fetching recipes…"),
                styles::status_yellow(),
            )),
            View::Dashboard => state
                .error
                .as_ref()
                .map(|e| Span::styled(format!("✗ {e}"), styles::status_red())),
            _ => None,
        }
    }

    fn key_hints(&self) -> &'static str {
        if self.state.modal.is_some() {
            "j/k day · 1-7 pick · Enter add · Esc cancel"
        } else if self.state.selected_recipe.is_some() {
            "j/k scroll · a add to plan · Esc back · q quit"
        } else if self.state.view == View::Search && self.state.search.input_focused {
            "Enter search · Esc done · Ctrl+U clear"
        } else {
            "1-5 views · j/k move · Enter open · a plan · r refresh · / search · q quit"
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let status = self
            .status()
            .unwrap_or_else(|| Span::styled("● Ready", styles::status_green()));
        let status_text = truncate_to_width(&status.content, width.saturating_sub(1));
        let status_width = status_text.width() + 1;

        let mut spans = vec![Span::raw(" "), Span::styled(status_text, status.style)];

        if self.state.settings.ui.show_key_hints {
            let room = width.saturating_sub(status_width + 3);
            let hints = truncate_to_width(self.key_hints(), room);
            let gap = width.saturating_sub(status_width + hints.width() + 1);
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(hints, styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
