//! Menu screen: header, section tabs, visitor line, content, footer.

use std::time::Duration;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use ratatui::Frame;

use crate::app::menu::MenuNavigator;
use crate::app::session::VisitorSummary;
use crate::model::portfolio::{OWNER, ROLE, TAGLINE};
use crate::model::Section;
use crate::view::animation::{PULSE, WAVE};
use crate::view::sections::render_section;
use crate::view::theme::Theme;

pub const FOOTER_HINT: &str = "Navigate: ↑↓ arrows, [hotkeys], Enter | Search: / | Exit: Esc";

/// Everything the menu screen draws from.
pub struct MenuView<'a> {
    pub theme: &'a Theme,
    pub nav: &'a MenuNavigator,
    pub summary: &'a VisitorSummary,
    pub display_name: &'a str,
    /// Time since the menu opened, for the header animation.
    pub elapsed: Duration,
}

pub fn render_menu(frame: &mut Frame, area: Rect, view: &MenuView<'_>) {
    let theme = view.theme;
    frame.render_widget(Block::new().style(Style::default().bg(theme.bg)), area);

    let [header, tabs, visitor, content, footer] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    render_header(frame, header, theme, view.elapsed);
    frame.render_widget(Paragraph::new(tab_line(theme, view.nav)), tabs);
    frame.render_widget(Paragraph::new(visitor_line(view)), visitor);
    render_section(frame, content, theme, view.nav.current());
    render_footer(frame, footer, theme, view.nav);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, elapsed: Duration) {
    let pulse = PULSE.frame_at(elapsed);
    let lines = vec![
        Line::styled(
            format!("{pulse} {OWNER} - {ROLE} {pulse}"),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Line::styled(TAGLINE, theme.muted()),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(theme.secondary)),
        ),
        area,
    );
}

/// One tab per section. The committed section is bold; the arrow cursor is
/// highlighted.
pub fn tab_line(theme: &Theme, nav: &MenuNavigator) -> Line<'static> {
    let mut spans = Vec::with_capacity(Section::ALL.len() * 2);
    for section in Section::ALL {
        let mut style = if section == nav.current() {
            theme.heading()
        } else {
            theme.muted()
        };
        if section.index() == nav.selected() {
            style = style.bg(theme.bg_highlight).fg(theme.primary);
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", section.hotkey(), section.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn visitor_line(view: &MenuView<'_>) -> Line<'static> {
    let theme = view.theme;
    let wave = WAVE.frame_at(view.elapsed);
    let mut spans = vec![
        Span::styled(format!("{wave} Hello, "), theme.label()),
        Span::styled(
            view.display_name.to_string(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled("!  •  Visitors: ", theme.label()),
        Span::styled(view.summary.count_label(), theme.value()),
    ];
    if let Some(record) = view.summary.visitor.as_ref().filter(|r| r.visit_count > 1) {
        spans.push(Span::styled("  •  Visit #", theme.label()));
        spans.push(Span::styled(record.visit_count.to_string(), theme.value()));
    }
    Line::from(spans)
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, nav: &MenuNavigator) {
    let block = Block::bordered()
        .border_style(theme.border(false))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(Line::styled(FOOTER_HINT, theme.muted())), inner);
    if nav.is_search_mode() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("Search: {}_", nav.buffer()),
                Style::default().fg(theme.accent),
            ))
            .alignment(Alignment::Right),
            inner,
        );
    }
}
