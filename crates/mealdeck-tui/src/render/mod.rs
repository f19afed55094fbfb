//! Main render/view function (View in TEA pattern)


use mealdeck_app::state::{AppState, View};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads `state` and never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    if let Some(recipe) = &state.selected_recipe {
        frame.render_widget(
            widgets::RecipeDetail::new(recipe).scroll(state.detail_scroll),
            areas.body,
        );
    } else {
        match &state.view {
            View::Dashboard => render_dashboard(frame, areas.body, state),
            View::Search => render_search(frame, areas.body, state),
            View::MealPlan => frame.render_widget(
                widgets::MealPlanView::new(&state.meal_plan, state.cursor),
                areas.body,
            ),
            view => frame.render_widget(widgets::Placeholder::new(view), areas.body),
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(modal) = &state.modal {
        frame.render_widget(widgets::AddToPlanDialog::new(modal), area);
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = styles::glass_block(true).title(" Today's picks ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.recipes.is_empty() {
        let message = if state.is_loading {
            format!("{} Fetching recipes…", styles::spinner(state.tick_count))
        } else if let Some(error) = &state.error {
            error.clone()
        } else {
            "No recipes yet. Press r to refresh.".to_string()
        };
        render_message(frame, inner, message);
        return;
    }

    let recipes: Vec<_> = state.recipes.iter().collect();
    frame.render_widget(widgets::RecipeList::new(&recipes, state.cursor), inner);
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let [input_area, results_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    frame.render_widget(widgets::SearchInput::new(&state.search), input_area);

    let search = &state.search;
    let title = match &search.last_keyword {
        Some(keyword) if search.searched => format!(" Results for '{keyword}' "),
        _ => " Results ".to_string(),
    };
    let block = styles::glass_block(!search.input_focused).title(title);
    let inner = block.inner(results_area);
    frame.render_widget(block, results_area);

    if search.results.is_empty() {
        let message = if search.is_loading {
            format!("{} Searching…", styles::spinner(state.tick_count))
        } else if let Some(error) = &search.error {
            error.clone()
        } else if search.is_empty_result() {
            match &search.last_keyword {
                Some(keyword) => format!("No recipes found for \"{keyword}\"."),
                None => "No recipes found.".to_string(),
            }
        } else {
            "Search TheMealDB by dish name.".to_string()
        };
        render_message(frame, inner, message);
        return;
    }

    let recipes: Vec<_> = search.results.iter().collect();
    frame.render_widget(
        widgets::RecipeList::new(&recipes, state.cursor).focused(!search.input_focused),
        inner,
    );
}

/// Centered single-line message
fn render_message(frame: &mut Frame, area: Rect, message: String) {
    let top = area.height / 2;
    let line_area = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top).min(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message, styles::text_secondary())))
            .alignment(Alignment::Center),
        line_area,
    );
}
