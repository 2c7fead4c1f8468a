//! Shared helpers for pane rendering

use crate::markup;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Convert card markup into a styled line on top of `base`
pub(crate) fn markup_line(text: &str, base: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = markup::parse(text)
        .into_iter()
        .map(|segment| {
            let mut style = base;
            if segment.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if segment.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }
            Span::styled(segment.text, style)
        })
        .collect();
    Line::from(spans)
}

/// A rectangle of the given percentage size centered inside `area`
pub(crate) fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
