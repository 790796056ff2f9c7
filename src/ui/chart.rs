use std::collections::VecDeque;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

use crate::metrics::snapshot::HistoryPoint;
use crate::ui::theme::Theme;

/// One line of the usage chart, in draw order.
pub struct Series {
    pub name: &'static str,
    pub color: Color,
    pub data: Vec<(f64, f64)>,
}

/// Map the history window onto chart series. The gpu series is present only
/// while the current snapshot reports an available GPU, even if older points
/// carry non-zero gpu values from a previously available state.
pub fn build_series(
    history: &VecDeque<HistoryPoint>,
    gpu_available: bool,
    theme: &Theme,
) -> Vec<Series> {
    let collect = |f: fn(&HistoryPoint) -> f64| -> Vec<(f64, f64)> {
        history
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, f(p)))
            .collect()
    };

    let mut series = vec![
        Series {
            name: "cpu",
            color: theme.accent_cpu,
            data: collect(|p| p.cpu),
        },
        Series {
            name: "predicted_cpu",
            color: theme.accent_predicted,
            data: collect(|p| p.predicted_cpu),
        },
        Series {
            name: "memory",
            color: theme.accent_memory,
            data: collect(|p| p.memory),
        },
    ];
    if gpu_available {
        series.push(Series {
            name: "gpu",
            color: theme.accent_gpu,
            data: collect(|p| p.gpu),
        });
    }
    series
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    history: &VecDeque<HistoryPoint>,
    gpu_available: bool,
    theme: &Theme,
) {
    let series = build_series(history, gpu_available, theme);
    let datasets: Vec<Dataset> = series
        .iter()
        .map(|s| {
            Dataset::default()
                .name(s.name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(s.color))
                .data(&s.data)
        })
        .collect();

    let x_labels = match (history.front(), history.back()) {
        (Some(first), Some(last)) if history.len() > 1 => vec![
            Span::styled(first.time.clone(), Style::default().fg(theme.text_secondary)),
            Span::styled(last.time.clone(), Style::default().fg(theme.text_secondary)),
        ],
        _ => Vec::new(),
    };

    let x_max = (history.len().saturating_sub(1)).max(1) as f64;
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    " Usage Over Time ",
                    Style::default()
                        .fg(theme.text_secondary)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(x_labels)
                .style(Style::default().fg(theme.border)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(vec![
                    Span::styled("0", Style::default().fg(theme.text_secondary)),
                    Span::styled("50", Style::default().fg(theme.text_secondary)),
                    Span::styled("100", Style::default().fg(theme.text_secondary)),
                ])
                .style(Style::default().fg(theme.border)),
        );

    frame.render_widget(chart, area);
}
