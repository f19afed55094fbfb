//! Main header widget with the view tabs

use mealdeck_app::state::{AppState, View};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use crate::theme::styles;

/// Header showing the app name, the navigable views, and the plan size
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        View::navigable()
            .iter()
            .enumerate()
            .map(|(i, view)| {
                Line::from(vec![
                    Span::styled(format!("{}", i + 1), styles::keybinding()),
                    Span::raw(format!(" {}", view.title())),
                ])
            })
            .collect()
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(" mealdeck ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let plan = format!("Plan: {} meals ", self.state.meal_plan.total_meals());
        let [tabs_area, plan_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(plan.len() as u16)])
                .areas(inner);

        Tabs::new(Self::tab_titles())
            .select(self.state.view.nav_index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(tabs_area, buf);

        Paragraph::new(Span::styled(plan, styles::text_muted())).render(plan_area, buf);
    }
}
