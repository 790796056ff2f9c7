use ratatui::style::Color;

/// Palette for the dashboard. Card accents keep the colors the metrics are
/// known by elsewhere in the stack (amber CPU, blue memory, green GPU,
/// purple swap/network).
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub surface_bg: Color,
    pub statusbar_bg: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
    pub status_ok: Color,
    pub status_err: Color,
    pub accent_cpu: Color,
    pub accent_predicted: Color,
    pub accent_memory: Color,
    pub accent_gpu: Color,
    pub accent_swap: Color,
    pub accent_network: Color,
    pub gauge_ok: Color,
    pub gauge_high: Color,
    pub gauge_unfilled: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            name: "dark",
            border: Color::DarkGray,
            text_primary: Color::Rgb(220, 220, 225),
            text_secondary: Color::Rgb(140, 140, 150),
            surface_bg: Color::Rgb(30, 30, 36),
            statusbar_bg: Color::Rgb(24, 24, 30),
            pill_key_fg: Color::Rgb(24, 24, 30),
            pill_key_bg: Color::Rgb(137, 180, 250),
            pill_desc_fg: Color::Rgb(180, 180, 190),
            status_ok: Color::Rgb(72, 187, 120),
            status_err: Color::Rgb(245, 101, 101),
            accent_cpu: Color::Rgb(255, 165, 0),
            accent_predicted: Color::Rgb(255, 69, 0),
            accent_memory: Color::Rgb(66, 153, 225),
            accent_gpu: Color::Rgb(72, 187, 120),
            accent_swap: Color::Rgb(159, 122, 234),
            accent_network: Color::Rgb(128, 90, 213),
            gauge_ok: Color::Rgb(72, 187, 120),
            gauge_high: Color::Rgb(245, 101, 101),
            gauge_unfilled: Color::Rgb(49, 50, 68),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            border: Color::Gray,
            text_primary: Color::Rgb(40, 40, 46),
            text_secondary: Color::Rgb(110, 110, 120),
            surface_bg: Color::Rgb(235, 235, 240),
            statusbar_bg: Color::Rgb(222, 222, 230),
            pill_key_fg: Color::Rgb(240, 240, 245),
            pill_key_bg: Color::Rgb(30, 102, 245),
            pill_desc_fg: Color::Rgb(76, 76, 86),
            status_ok: Color::Rgb(22, 140, 77),
            status_err: Color::Rgb(190, 50, 50),
            accent_cpu: Color::Rgb(204, 119, 0),
            accent_predicted: Color::Rgb(200, 55, 0),
            accent_memory: Color::Rgb(30, 102, 245),
            accent_gpu: Color::Rgb(22, 140, 77),
            accent_swap: Color::Rgb(114, 80, 190),
            accent_network: Color::Rgb(95, 60, 170),
            gauge_ok: Color::Rgb(22, 140, 77),
            gauge_high: Color::Rgb(190, 50, 50),
            gauge_unfilled: Color::Rgb(200, 200, 210),
        }
    }

    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Theme::light(),
            _ => Theme::dark(),
        }
    }

    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Theme::light(),
            _ => Theme::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_alternates() {
        let dark = Theme::dark();
        assert_eq!(dark.next().name, "light");
        assert_eq!(dark.next().next().name, "dark");
    }

    #[test]
    fn unknown_config_string_falls_back_to_dark() {
        assert_eq!(Theme::from_config_str("solarized").name, "dark");
        assert_eq!(Theme::from_config_str("LIGHT").name, "light");
    }
}
