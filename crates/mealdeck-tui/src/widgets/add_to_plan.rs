//! Add-to-plan modal with a weekday picker

use mealdeck_app::state::AddToPlanModal;
use mealdeck_core::Weekday;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::{modal_overlay::centered_rect, truncate_to_width};
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 40;
// Border, recipe title, blank, seven days, blank, hint, border
const DIALOG_HEIGHT: u16 = 13;

/// Day picker for the staged recipe
pub struct AddToPlanDialog<'a> {
    modal: &'a AddToPlanModal,
}

impl<'a> AddToPlanDialog<'a> {
    pub fn new(modal: &'a AddToPlanModal) -> Self {
        Self { modal }
    }
}

impl Widget for AddToPlanDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        Clear.render(popup, buf);

        let block = styles::modal_block(" Add to meal plan ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&self.modal.recipe.title, inner.width as usize),
                styles::title(),
            )),
            Line::default(),
        ];

        let selected = self.modal.selected_day();
        for (i, day) in Weekday::ALL.iter().enumerate() {
            let is_selected = *day == selected;
            let style = if is_selected {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), styles::keybinding()),
                Span::styled(
                    format!("{} {:<10}", if is_selected { "▸" } else { " " }, day.name()),
                    style,
                ),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter add · Esc cancel",
            styles::text_muted(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
