use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::metrics::store::MetricsStore;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub help: KeyCode,
    pub cycle_theme: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
            cycle_theme: parse_key(&kb.cycle_theme).unwrap_or(KeyCode::Char('t')),
        }
    }

    /// Returns (key_label, description) pairs for the help overlay.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.help), "Toggle help"),
            (key_label(self.cycle_theme), "Cycle theme"),
            ("Ctrl+C".to_string(), "Quit (always)"),
        ]
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        _ => "?".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Ok,
    Error,
}

/// Transient statusbar message; the level drives its color.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub created: Instant,
}

impl StatusMessage {
    pub fn new(text: &str, level: StatusLevel) -> Self {
        StatusMessage {
            text: text.to_string(),
            level,
            created: Instant::now(),
        }
    }
}

pub struct App {
    pub running: bool,
    pub store: MetricsStore,
    pub connected: bool,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub status_message: Option<StatusMessage>,
    pub keybinds: ResolvedKeybinds,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            running: true,
            store: MetricsStore::new(),
            connected: false,
            input_mode: InputMode::Normal,
            theme: Theme::from_config_str(&config.general.theme),
            status_message: None,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        }
    }

    /// Boundary for inbound payloads: decode failures are logged and
    /// surfaced as a transient status message, the store stays on the last
    /// good state.
    pub fn on_metrics(&mut self, raw: &str) {
        if let Err(err) = self.store.apply_payload(raw) {
            tracing::warn!(%err, "discarding malformed metrics payload");
            self.status_message = Some(StatusMessage::new(
                "Malformed update discarded",
                StatusLevel::Error,
            ));
        }
    }

    pub fn on_connection_change(&mut self, connected: bool) {
        self.connected = connected;
        self.status_message = Some(if connected {
            StatusMessage::new("Connected to telemetry feed", StatusLevel::Ok)
        } else {
            StatusMessage::new("Feed disconnected, retrying", StatusLevel::Error)
        });
    }

    pub fn on_tick(&mut self) {
        // Clear expired status messages (older than 3 seconds)
        if let Some(msg) = &self.status_message
            && msg.created.elapsed().as_secs() >= 3
        {
            self.status_message = None;
        }
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match self.input_mode {
            InputMode::Help => match key.code {
                KeyCode::Esc => Action::ToggleHelp,
                code if code == self.keybinds.help => Action::ToggleHelp,
                code if code == self.keybinds.quit => Action::Quit,
                _ => Action::None,
            },
            InputMode::Normal => match key.code {
                code if code == self.keybinds.quit => Action::Quit,
                code if code == self.keybinds.help => Action::ToggleHelp,
                code if code == self.keybinds.cycle_theme => Action::CycleTheme,
                _ => Action::None,
            },
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => {
                self.input_mode = match self.input_mode {
                    InputMode::Help => InputMode::Normal,
                    InputMode::Normal => InputMode::Help,
                };
            }
            Action::CycleTheme => self.theme = self.theme.next(),
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn default_keybinds_map_to_actions() {
        let app = make_app();

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleHelp);

        let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::CycleTheme);

        // Ctrl+C always quits
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(key), Action::Quit);
    }

    #[test]
    fn help_mode_blocks_theme_key() {
        let mut app = make_app();
        app.dispatch(Action::ToggleHelp);
        assert!(app.show_help());

        let key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);

        // Esc dismisses
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleHelp);
    }

    #[test]
    fn dispatch_cycle_theme_alternates() {
        let mut app = make_app();
        assert_eq!(app.theme.name, "dark");
        app.dispatch(Action::CycleTheme);
        assert_eq!(app.theme.name, "light");
        app.dispatch(Action::CycleTheme);
        assert_eq!(app.theme.name, "dark");
    }

    #[test]
    fn malformed_payload_keeps_last_good_state() {
        let mut app = make_app();
        app.on_metrics(r#"{"cpu": {"usage": 55.0}}"#);
        assert_eq!(app.store.snapshot().cpu.usage, 55.0);

        app.on_metrics("garbage");
        assert_eq!(app.store.snapshot().cpu.usage, 55.0);
        assert_eq!(app.store.history().len(), 1);
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.level, StatusLevel::Error);
    }

    #[test]
    fn connection_change_sets_flag_and_message_level() {
        let mut app = make_app();
        app.on_connection_change(true);
        assert!(app.connected);
        assert_eq!(app.status_message.as_ref().unwrap().level, StatusLevel::Ok);

        app.on_connection_change(false);
        assert!(!app.connected);
        assert_eq!(app.status_message.as_ref().unwrap().level, StatusLevel::Error);
    }
}
