//! Section content rendering.
//!
//! Each [`Panel`] becomes a rounded box with a bold title and styled items.
//! The same lines feed the interactive menu and the plain-text display mode.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use ratatui::Frame;

use crate::model::portfolio::{self, Item, Panel};
use crate::model::Section;
use crate::view::theme::Theme;

const PADDING_X: u16 = 2;

/// Lines for one panel, laid out for `width` columns of inner space.
pub fn panel_lines(panel: &Panel, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(panel.items.len() + 2);
    lines.push(Line::styled(panel.title, theme.heading()));
    lines.push(Line::default());

    for item in panel.items {
        let line = match *item {
            Item::Label(text) => Line::styled(text, theme.label()),
            Item::Text(text) => Line::styled(text, theme.text()),
            Item::Muted(text) => Line::styled(text, theme.muted()),
            Item::Field { label, value } => {
                let label = Span::styled(label, theme.label());
                let value = Span::styled(value, theme.value());
                let gap = (width as usize)
                    .saturating_sub(label.width() + value.width())
                    .max(1);
                Line::from(vec![label, Span::raw(" ".repeat(gap)), value])
            }
            Item::Gap => Line::default(),
        };
        lines.push(line);
    }
    lines
}

/// Rows a panel occupies including its border and padding.
pub fn panel_height(panel: &Panel) -> u16 {
    panel.items.len() as u16 + 2 + 4
}

pub fn render_section(frame: &mut Frame, area: Rect, theme: &Theme, section: Section) {
    let panels = portfolio::panels(section);
    let mut constraints: Vec<Constraint> = panels
        .iter()
        .map(|p| Constraint::Length(panel_height(p)))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::vertical(constraints).split(area);
    for (panel, row) in panels.iter().zip(rows.iter()) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.border(false))
            .padding(Padding::new(PADDING_X, PADDING_X, 1, 1));
        let inner_width = block.inner(*row).width;
        frame.render_widget(
            Paragraph::new(panel_lines(panel, theme, inner_width)).block(block),
            *row,
        );
    }
}
