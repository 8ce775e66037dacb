//! Session screens: boot, banner, name input, welcome, and the error screen.

use std::time::{Duration, Instant};

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::session::{SessionController, SessionState};
use crate::view::animation::{self, PULSE, SPINNER, WAVE};
use crate::view::banner::{self, BANNER, BANNER_SUBTITLE, BANNER_TAGLINE};
use crate::view::theme::Theme;

const PROGRESS_CELLS: usize = 40;
const NAME_BOX_WIDTH: u16 = 40;

/// Split `area` into centred rows of the given heights.
pub(crate) fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
    Layout::vertical(heights.iter().map(|h| Constraint::Length(*h)))
        .flex(Flex::Center)
        .split(area)
        .to_vec()
}

/// Horizontally centre a `width`-wide slice of `row`.
pub(crate) fn center_h(row: Rect, width: u16) -> Rect {
    let width = width.min(row.width);
    Rect::new(row.x + (row.width - width) / 2, row.y, width, row.height)
}

pub fn render_session(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    session: &SessionController,
    now: Instant,
) {
    frame.render_widget(Block::new().style(Style::default().bg(theme.bg)), area);

    let elapsed = session.elapsed_in_state(now);
    match session.state() {
        SessionState::Booting => render_boot(frame, area, theme, session, elapsed),
        SessionState::Banner => render_banner(frame, area, theme, elapsed),
        SessionState::NameInput => render_name_input(frame, area, theme, session, elapsed),
        SessionState::Welcome | SessionState::Menu => {
            render_welcome(frame, area, theme, session, elapsed)
        }
    }
}

fn render_boot(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    session: &SessionController,
    elapsed: Duration,
) {
    let messages = session.visible_messages();
    let current = messages.len().saturating_sub(1);

    let mut lines = vec![
        Line::styled(
            format!("{} SYSTEM BOOT {}", PULSE.frame_at(elapsed), PULSE.frame_at(elapsed)),
            theme.heading(),
        ),
        Line::default(),
    ];

    for (index, message) in messages.iter().enumerate() {
        let (marker, style) = if index == current {
            (SPINNER.frame_at(elapsed), Style::default().fg(theme.accent))
        } else {
            ("●", theme.muted())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("[{marker}] "), Style::default().fg(theme.primary)),
            Span::styled(*message, style),
        ]));
    }

    let percent = session.progress_percent();
    if percent < 100 {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("System Loading: {percent}%"),
            Style::default().fg(theme.accent),
        ));
        lines.push(progress_bar(theme, percent));
    }

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let rows = stack(area, &[lines.len() as u16]);
    frame.render_widget(Paragraph::new(lines), center_h(rows[0], width.max(PROGRESS_CELLS as u16)));
}

fn progress_bar(theme: &Theme, percent: u16) -> Line<'static> {
    let filled = (percent as usize * 2 / 5).min(PROGRESS_CELLS);
    let shaded = ((100 - percent.min(100)) as usize / 10).min(PROGRESS_CELLS - filled);
    let empty = PROGRESS_CELLS - filled - shaded;

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(theme.primary)),
        Span::styled("▓".repeat(shaded), Style::default().fg(theme.secondary)),
        Span::styled("░".repeat(empty), Style::default().fg(theme.secondary)),
    ])
}

fn banner_widget(theme: &Theme, border: BorderType) -> Paragraph<'static> {
    let art = Style::default().fg(theme.accent);
    let mut lines: Vec<Line> = BANNER.iter().map(|l| Line::styled(*l, art)).collect();
    lines.push(Line::default());
    lines.push(Line::styled(BANNER_TAGLINE, art));

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::bordered()
            .border_type(border)
            .border_style(theme.border(true)),
    )
}

fn banner_height() -> u16 {
    BANNER.len() as u16 + 4
}

fn banner_width() -> u16 {
    banner::width() + 4
}

fn render_banner(frame: &mut Frame, area: Rect, theme: &Theme, elapsed: Duration) {
    let rows = stack(area, &[banner_height(), 1, 1, 1, 1]);
    frame.render_widget(
        banner_widget(theme, BorderType::Double),
        center_h(rows[0], banner_width()),
    );

    let wave = WAVE.frame_at(elapsed);
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("{wave} Welcome to Mohil's Development Environment {wave}"),
            Style::default().fg(theme.accent),
        ))
        .alignment(Alignment::Center),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(BANNER_SUBTITLE, theme.muted())).alignment(Alignment::Center),
        rows[4],
    );
}

fn render_name_input(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    session: &SessionController,
    elapsed: Duration,
) {
    let rows = stack(area, &[banner_height(), 1, 3, 1, 1, 1, 3, 1, 1, 1]);
    frame.render_widget(
        banner_widget(theme, BorderType::Rounded),
        center_h(rows[0], banner_width()),
    );

    let protocol = Paragraph::new(Line::styled(
        "◇ USER AUTHENTICATION PROTOCOL ◇",
        Style::default().fg(theme.primary),
    ))
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(theme.border(false)));
    frame.render_widget(protocol, center_h(rows[2], 38));

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Enter your username for personalized experience:",
            Style::default().fg(theme.accent),
        ))
        .alignment(Alignment::Center),
        rows[4],
    );

    let mut input = vec![
        Span::styled("$ ", theme.muted()),
        Span::styled(session.name_buffer().to_string(), Style::default().fg(theme.fg)),
    ];
    if animation::cursor_visible(elapsed) {
        input.push(Span::styled("█", Style::default().fg(theme.accent)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(input)).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.border(true)),
        ),
        center_h(rows[6], NAME_BOX_WIDTH),
    );

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Press ENTER to continue • Leave empty for guest access",
            theme.muted(),
        ))
        .alignment(Alignment::Center),
        rows[8],
    );
    frame.render_widget(
        Paragraph::new(Line::styled("Press Esc or Ctrl+C to exit", theme.muted()))
            .alignment(Alignment::Center),
        rows[9],
    );
}

fn render_welcome(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    session: &SessionController,
    elapsed: Duration,
) {
    let rows = stack(area, &[banner_height(), 1, 7, 1, 1, 1, 1]);
    frame.render_widget(
        banner_widget(theme, BorderType::Double),
        center_h(rows[0], banner_width()),
    );

    let greeting = vec![
        Line::styled(
            "◆ SESSION INITIALIZED SUCCESSFULLY ◆",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            format!("Welcome, {}!", session.display_name()),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled("Development environment ready for exploration", theme.muted()),
    ];
    frame.render_widget(
        Paragraph::new(greeting).alignment(Alignment::Center).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent)),
        ),
        center_h(rows[2], 52),
    );

    let wave = WAVE.frame_at(elapsed);
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("{wave} Loading main interface {wave}"),
            theme.label(),
        ))
        .alignment(Alignment::Center),
        rows[4],
    );

    let hint = if session.is_completion_pending() {
        "Recording your visit..."
    } else if session.welcome_exit().on_key() {
        "Press any key to continue..."
    } else {
        "Starting shortly..."
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hint, theme.muted())).alignment(Alignment::Center),
        rows[6],
    );
}

/// Full-screen error. The app stays here until the visitor quits.
pub fn render_error(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    frame.render_widget(Block::new().style(Style::default().bg(theme.bg)), area);

    let lines = vec![
        Line::styled(
            "✖ SESSION ERROR",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(message.to_string(), theme.text()),
        Line::default(),
        Line::styled("Press Esc or Ctrl+C to exit", theme.muted()),
    ];

    let rows = stack(area, &[9]);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(theme.error)),
            ),
        center_h(rows[0], 64),
    );
}
