//! Plain-text rendering for output that is not a terminal.

use ratatui::text::Line;

use crate::model::portfolio::{self, OWNER, ROLE, TAGLINE};
use crate::model::Section;
use crate::view::sections::panel_lines;
use crate::view::theme::Theme;

pub const PLAIN_WIDTH: u16 = 72;

pub fn line_to_string(line: &Line<'_>) -> String {
    line.spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect::<String>()
        .trim_end()
        .to_string()
}

pub fn header() -> Vec<String> {
    vec![
        format!("{OWNER} - {ROLE}"),
        TAGLINE.to_string(),
        "=".repeat(PLAIN_WIDTH as usize),
    ]
}

/// One section as text: a title bar followed by each panel.
pub fn section(section: Section) -> Vec<String> {
    let theme = Theme::default();
    let mut out = vec![format!("[{}] {}", section.hotkey(), section.title().to_uppercase())];

    for panel in portfolio::panels(section) {
        out.push("-".repeat(PLAIN_WIDTH as usize));
        out.extend(
            panel_lines(panel, &theme, PLAIN_WIDTH)
                .iter()
                .map(line_to_string),
        );
    }
    out.push(String::new());
    out
}
