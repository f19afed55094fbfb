//! Test helpers for widget and render tests

use mealdeck_core::{Recipe, RecipeId};

/// A fully populated recipe with fixed synthetic attributes
pub fn test_recipe(id: &str, title: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        title: title.to_string(),
        image: Some(format!("https://img.test/{id}.jpg")),
        category: Some("Seafood".to_string()),
        area: Some("Japanese".to_string()),
        ingredients: vec!["2 cups Rice".to_string(), "1 tbsp Soy Sauce".to_string()],
        instructions: vec!["Rinse the rice.".to_string(), "Cook and serve.".to_string()],
        ready_in_minutes: 35,
        health_score: 82,
        servings: 2,
    }
}

/// Render a widget-drawing closure into a plain string, one line per row
pub fn render_to_string(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut ratatui::Frame),
) -> String {
    use ratatui::{backend::TestBackend, Terminal};

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
