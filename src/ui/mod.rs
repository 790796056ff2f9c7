pub mod cards;
pub mod chart;
pub mod disks;
pub mod header;
pub mod help;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::App;
use crate::format::format_bytes;
use crate::metrics::snapshot::Snapshot;
use crate::ui::cards::Card;
use crate::ui::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let snapshot = app.store.snapshot();

    header::render(frame, chunks[0], snapshot, app.connected, &app.theme);
    render_card_row(frame, chunks[1], &metric_cards(snapshot, &app.theme), &app.theme);
    chart::render(
        frame,
        chunks[2],
        app.store.history(),
        snapshot.gpu.available,
        &app.theme,
    );
    disks::render(frame, chunks[3], &snapshot.disk, &app.theme);
    render_card_row(frame, chunks[4], &network_cards(snapshot, &app.theme), &app.theme);
    statusbar::render(frame, chunks[5], app.status_message.as_ref(), &app.theme);

    // Help overlay — rendered last to appear on top
    if app.show_help() {
        help::render(frame, frame.area(), &app.keybinds.help_entries(), &app.theme);
    }
}

fn render_card_row(frame: &mut Frame, area: Rect, row: &[Card], theme: &Theme) {
    let constraints: Vec<Constraint> = row
        .iter()
        .map(|_| Constraint::Ratio(1, row.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (card, chunk) in row.iter().zip(chunks.iter()) {
        cards::render(frame, *chunk, card, theme);
    }
}

/// The four headline cards; value/subtext formatting mirrors what the
/// producer reports, with the store guaranteeing populated fields.
pub fn metric_cards(snapshot: &Snapshot, theme: &Theme) -> Vec<Card> {
    let gpu_value = if snapshot.gpu.available {
        format!("{:.1}%", snapshot.gpu.usage)
    } else {
        "N/A".to_string()
    };
    let gpu_subtext = if snapshot.gpu.kind == "N/A" {
        "Type: Not detected".to_string()
    } else {
        format!("Type: {}", snapshot.gpu.kind)
    };

    vec![
        Card {
            title: "CPU Usage",
            value: format!("{:.1}%", snapshot.cpu.usage),
            subtext: Some(format!("Prediction: {:.1}%", snapshot.predictions.cpu)),
            accent: theme.accent_cpu,
        },
        Card {
            title: "Memory Usage",
            value: format!("{:.1}%", snapshot.memory.percent),
            subtext: Some(format!(
                "Available: {}",
                format_bytes(Some(snapshot.memory.available))
            )),
            accent: theme.accent_memory,
        },
        Card {
            title: "GPU Usage",
            value: gpu_value,
            subtext: Some(gpu_subtext),
            accent: theme.accent_gpu,
        },
        Card {
            title: "Swap Usage",
            value: format!("{:.1}%", snapshot.memory.swap_percent),
            subtext: None,
            accent: theme.accent_swap,
        },
    ]
}

pub fn network_cards(snapshot: &Snapshot, theme: &Theme) -> Vec<Card> {
    vec![
        Card {
            title: "Data Sent",
            value: format_bytes(Some(snapshot.network.bytes_sent)),
            subtext: None,
            accent: theme.accent_network,
        },
        Card {
            title: "Data Received",
            value: format_bytes(Some(snapshot.network.bytes_recv)),
            subtext: None,
            accent: theme.accent_network,
        },
    ]
}
