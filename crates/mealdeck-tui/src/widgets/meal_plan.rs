//! Weekly meal plan widget

use mealdeck_core::MealPlan;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::truncate_to_width;
use crate::theme::styles;

/// Seven day sections with their recipes in insertion order
///
/// `cursor` indexes the recipes flattened Monday..Sunday, matching
/// `AppState::visible_recipes` on the meal plan screen.
pub struct MealPlanView<'a> {
    plan: &'a MealPlan,
    cursor: usize,
}

impl<'a> MealPlanView<'a> {
    pub fn new(plan: &'a MealPlan, cursor: usize) -> Self {
        Self { plan, cursor }
    }

    fn lines(&self, width: usize) -> (Vec<Line<'static>>, Option<usize>) {
        let mut lines = Vec::new();
        let mut cursor_line = None;
        let mut index = 0;

        for (day, recipes) in self.plan.iter() {
            lines.push(Line::from(vec![
                Span::styled(day.name(), styles::accent_bold()),
                Span::styled(format!("  ({})", recipes.len()), styles::text_muted()),
            ]));

            if recipes.is_empty() {
                lines.push(Line::from(Span::styled("    nothing planned", styles::text_muted())));
            }

            for recipe in recipes {
                let selected = index == self.cursor;
                if selected {
                    cursor_line = Some(lines.len());
                }
                let style = if selected {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                let text = format!(
                    "  {} {}",
                    if selected { "▸" } else { "•" },
                    truncate_to_width(&recipe.title, width.saturating_sub(6))
                );
                lines.push(Line::from(Span::styled(text, style)));
                index += 1;
            }
        }

        (lines, cursor_line)
    }
}

impl Widget for MealPlanView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Meal Plan ");
        let inner = block.inner(area);
        block.render(area, buf);

        let (lines, cursor_line) = self.lines(inner.width as usize);
        let height = inner.height as usize;
        let scroll = cursor_line
            .map(|line| line.saturating_sub(height.saturating_sub(1)))
            .unwrap_or(0);

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(inner, buf);
    }
}
