use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Gauge};

use crate::format::{format_bytes, truncate_unicode};
use crate::metrics::snapshot::DiskMetrics;
use crate::ui::theme::Theme;

/// Entries at or above this fill level get the high-utilization color.
const HIGH_UTILIZATION_PERCENT: f64 = 90.0;

/// Most terminals fit about four gauges side by side before labels degrade.
const MAX_VISIBLE_DISKS: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, disks: &[DiskMetrics], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Disk Usage ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if disks.is_empty() {
        let placeholder = ratatui::widgets::Paragraph::new(Span::styled(
            " No disk data ",
            Style::default().fg(theme.text_secondary),
        ));
        frame.render_widget(placeholder, inner);
        return;
    }

    let visible = &disks[..disks.len().min(MAX_VISIBLE_DISKS)];
    let constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Ratio(1, visible.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (disk, chunk) in visible.iter().zip(chunks.iter()) {
        render_gauge(frame, *chunk, disk, theme);
    }
}

/// Fill color for a disk gauge; the boundary itself counts as high.
pub fn gauge_fill(percent: f64, theme: &Theme) -> Color {
    if percent >= HIGH_UTILIZATION_PERCENT {
        theme.gauge_high
    } else {
        theme.gauge_ok
    }
}

fn render_gauge(frame: &mut Frame, area: Rect, disk: &DiskMetrics, theme: &Theme) {
    let fill = gauge_fill(disk.percent, theme);

    let title = truncate_unicode(&disk.mountpoint, area.width.saturating_sub(4) as usize);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(theme.text_secondary),
                )),
        )
        .gauge_style(Style::default().fg(fill).bg(theme.gauge_unfilled))
        // Gauge::ratio panics outside 0..=1; producers occasionally report
        // slightly-over-100 percentages
        .ratio((disk.percent / 100.0).clamp(0.0, 1.0))
        .label(format!(
            "{} used / {} free",
            format_bytes(Some(disk.used)),
            format_bytes(Some(disk.free))
        ));

    frame.render_widget(gauge, area);
}
