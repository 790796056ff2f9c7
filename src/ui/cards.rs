use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::ui::theme::Theme;

/// One presentational metric card: title, headline value, optional subtext.
/// No state of its own; callers derive everything from the snapshot.
pub struct Card {
    pub title: &'static str,
    pub value: String,
    pub subtext: Option<String>,
    pub accent: ratatui::style::Color,
}

pub fn render(frame: &mut Frame, area: Rect, card: &Card, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", card.title),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        card.value.clone(),
        Style::default()
            .fg(card.accent)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtext) = &card.subtext {
        lines.push(Line::from(Span::styled(
            subtext.clone(),
            Style::default().fg(theme.text_secondary),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
