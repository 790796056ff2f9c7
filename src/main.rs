use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use pulsedash::app::App;
use pulsedash::config::{self, load_config, load_config_from_path};
use pulsedash::event::{Event, EventHandler};
use pulsedash::transport::Transport;
use pulsedash::ui;

#[derive(Parser)]
#[command(
    name = "pulsedash",
    about = "Terminal dashboard for host telemetry streamed over WebSocket"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// WebSocket URL of the telemetry producer
    #[arg(long)]
    url: Option<String>,

    /// Theme: dark, light
    #[arg(long)]
    theme: Option<String>,

    /// Append diagnostics to this file (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    let config = load_config_for_cli(&cli);

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.tick_ms);
    let reconnect = Duration::from_millis(config.connection.reconnect_ms);
    let mut app = App::new(&config);
    let mut events = EventHandler::new(tick_rate);
    let transport = Transport::spawn(config.connection.url.clone(), events.sender(), reconnect);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let action = app.map_key(key);
                        app.dispatch(action);
                    }
                }
                Event::Metrics(raw) => app.on_metrics(&raw),
                Event::Connected => app.on_connection_change(true),
                Event::Disconnected => app.on_connection_change(false),
                Event::Tick => app.on_tick(),
                Event::Resize => {}
            }
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    // Unsubscribe before the store goes away
    transport.shutdown();

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(url) = &cli.url {
        config.connection.url = url.clone();
    }
    if let Some(theme) = &cli.theme {
        config.general.theme = theme.clone();
    }

    config
}

fn init_logging(path: &PathBuf) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
