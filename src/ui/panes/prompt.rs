//! "Add card" popup rendering

use super::utils::centered_rect;
use crate::ui::prompt::{AddCardPrompt, PromptStage};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the dialog centered over `area`
pub fn render_prompt_popup(frame: &mut Frame, area: Rect, prompt: &AddCardPrompt) {
    let popup = centered_rect(60, 8, area);

    let step = match prompt.stage() {
        PromptStage::Question => " Add card (1/2) ",
        PromptStage::Answer { .. } => " Add card (2/2) ",
    };

    let block = Block::default()
        .title(step)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![Line::styled(
        prompt.label(),
        Style::default().fg(DEFAULT_THEME.fg),
    )];
    if let PromptStage::Answer { question } = prompt.stage() {
        lines.push(Line::styled(
            format!("Q: {}", question.trim()),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            prompt.input().to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled("▏", Style::default().fg(DEFAULT_THEME.secondary)),
    ]));
    lines.push(Line::default());
    lines.push(Line::styled(
        "↵ ok  esc cancel",
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}
