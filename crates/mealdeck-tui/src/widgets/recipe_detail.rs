//! Recipe detail page

use mealdeck_core::Recipe;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Full recipe: attributes, ingredients, and numbered steps
pub struct RecipeDetail<'a> {
    recipe: &'a Recipe,
    scroll: u16,
}

impl<'a> RecipeDetail<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        Self { recipe, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let recipe = self.recipe;
        let section = Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled(recipe.title.as_str(), styles::title())),
            Line::from(vec![
                Span::styled(
                    format!("⏱ {} min", recipe.ready_in_minutes),
                    Style::default().fg(palette::READY_TIME),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("♥ {}", recipe.health_score),
                    Style::default().fg(palette::HEALTH_SCORE),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("Serves {}", recipe.servings),
                    styles::text_secondary(),
                ),
            ]),
        ];

        let origin: Vec<&str> = [recipe.area.as_deref(), recipe.category.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !origin.is_empty() {
            lines.push(Line::from(Span::styled(
                origin.join(" · "),
                styles::text_secondary(),
            )));
        }
        if let Some(image) = &recipe.image {
            lines.push(Line::from(Span::styled(image.as_str(), styles::text_muted())));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Ingredients", section)));
        if recipe.ingredients.is_empty() {
            lines.push(Line::from(Span::styled("  (none listed)", styles::text_muted())));
        }
        for ingredient in &recipe.ingredients {
            lines.push(Line::from(format!("  • {ingredient}")));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Instructions", section)));
        for (i, step) in recipe.instructions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:>2}. ", i + 1), styles::accent()),
                Span::raw(step.as_str()),
            ]));
        }

        lines
    }
}

impl Widget for RecipeDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Recipe ");
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{render_to_string, test_recipe};

    #[test]
    fn test_detail_shows_everything() {
        let recipe = test_recipe("1", "Onigiri");
        let content = render_to_string(60, 20, |f| f.render_widget(RecipeDetail::new(&recipe), f.area()));

        assert!(content.contains("Onigiri"));
        assert!(content.contains("35 min"));
        assert!(content.contains("♥ 82"));
        assert!(content.contains("Serves 2"));
        assert!(content.contains("• 2 cups Rice"));
        assert!(content.contains(" 1. Rinse the rice."));
        assert!(content.contains(" 2. Cook and serve."));
    }

    #[test]
    fn test_detail_scroll_hides_title() {
        let recipe = test_recipe("1", "Onigiri");
        let content = render_to_string(60, 8, |f| {
            f.render_widget(RecipeDetail::new(&recipe).scroll(3), f.area())
        });
        assert!(!content.contains("Onigiri"));
    }
}
