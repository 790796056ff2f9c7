use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::metrics::snapshot::Snapshot;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &Snapshot, connected: bool, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " System Information ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (dot_color, dot_label) = if connected {
        (theme.status_ok, "Connected")
    } else {
        (theme.status_err, "Disconnected")
    };

    let branding = Line::from(vec![
        Span::styled(
            " pulsedash ",
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("\u{25cf} ", Style::default().fg(dot_color)),
        Span::styled(dot_label, Style::default().fg(theme.text_secondary)),
    ]);

    let os = match (snapshot.system.os.as_str(), snapshot.system.os_version.as_str()) {
        ("", _) => "N/A".to_string(),
        (os, "") => os.to_string(),
        (os, version) => format!("{os} {version}"),
    };
    let cores = if snapshot.cpu.cores == 0 {
        "N/A".to_string()
    } else {
        snapshot.cpu.cores.to_string()
    };

    let lines = vec![
        branding,
        info_line("OS", os, theme),
        info_line("Processor", or_na(&snapshot.system.processor), theme),
        info_line("Cores", cores, theme),
        info_line("Boot Time", or_na(&snapshot.system.boot_time), theme),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn or_na(s: &str) -> String {
    if s.is_empty() { "N/A".to_string() } else { s.to_string() }
}

fn info_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<10}"),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(theme.text_primary)),
    ])
}
