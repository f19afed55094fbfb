//! Recipe list widget shared by the dashboard, search results, and tests

use mealdeck_core::Recipe;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::truncate_to_width;
use crate::theme::{palette, styles};

/// Scrolling list of recipes with a highlighted row
pub struct RecipeList<'a> {
    recipes: &'a [&'a Recipe],
    cursor: usize,
    focused: bool,
}

impl<'a> RecipeList<'a> {
    pub fn new(recipes: &'a [&'a Recipe], cursor: usize) -> Self {
        Self {
            recipes,
            cursor,
            focused: true,
        }
    }

    /// Dim the highlight when keystrokes go elsewhere
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row(&self, recipe: &Recipe, selected: bool, width: usize) -> Line<'static> {
        let meta = format!(
            "  {} min  ♥ {}  {}",
            recipe.ready_in_minutes,
            recipe.health_score,
            origin(recipe)
        );
        let marker = if selected { "▸ " } else { "  " };
        let title_width = width.saturating_sub(marker.width() + meta.width()).max(8);
        let title = truncate_to_width(&recipe.title, title_width);
        let padding = title_width.saturating_sub(title.width());

        let base = if selected && self.focused {
            styles::focused_selected()
        } else if selected {
            styles::accent()
        } else {
            styles::text_primary()
        };

        let meta_style = if selected && self.focused {
            base
        } else {
            Style::default().fg(palette::TEXT_SECONDARY)
        };

        Line::from(vec![
            Span::styled(marker, base),
            Span::styled(title, base),
            Span::styled(" ".repeat(padding), base),
            Span::styled(meta, meta_style),
        ])
    }
}

/// "Area · Category" with whichever parts are known
fn origin(recipe: &Recipe) -> String {
    [recipe.area.as_deref(), recipe.category.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ")
}

impl Widget for RecipeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        if height == 0 {
            return;
        }

        // Keep the cursor row on screen
        let offset = self.cursor.saturating_sub(height - 1);
        let lines: Vec<Line> = self
            .recipes
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, recipe)| self.row(recipe, i == self.cursor, area.width as usize))
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
