//! Card pane rendering
//!
//! Draws the current card top to bottom: question, the Back / Show Answer /
//! Next buttons, the answer once revealed, the position indicator, and the
//! Add card button. Disabled buttons are dimmed.

use super::utils::markup_line;
use crate::ui::theme::DEFAULT_THEME;
use crate::viewer::{CardView, Controls};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub const BACK_LABEL: &str = "Back";
pub const REVEAL_LABEL: &str = "Show Answer";
pub const NEXT_LABEL: &str = "Next";
pub const ADD_LABEL: &str = "Add card";

fn button(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::DIM)
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// Render the flash card pane
pub fn render_card_pane(frame: &mut Frame, area: Rect, view: &CardView, controls: Controls) {
    let block = Block::default()
        .title(" Flash Cards ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 1, 0));

    let gap = Span::raw("  ");
    let mut lines = vec![
        markup_line(&view.question, Style::default().fg(DEFAULT_THEME.fg)),
        Line::default(),
        Line::from(vec![
            button(BACK_LABEL, controls.back),
            gap.clone(),
            button(REVEAL_LABEL, controls.reveal),
            gap,
            button(NEXT_LABEL, controls.next),
        ]),
        Line::default(),
    ];

    match &view.answer {
        Some(answer) => lines.push(markup_line(
            answer,
            Style::default()
                .fg(DEFAULT_THEME.answer)
                .add_modifier(Modifier::ITALIC),
        )),
        None => lines.push(Line::default()),
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        view.status.clone(),
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    lines.push(Line::default());
    lines.push(Line::from(button(ADD_LABEL, controls.add)));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
