//! Theme data model: built-in palettes and resolution from config.
//!
//! Two built-in palettes (dark and light) plus custom hex overrides from the
//! config file.

use ratatui::style::Color;

use crate::config::{ThemeColorsConfig, ThemeConfig};

/// All runtime colors used in the UI.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub dir_fg: Color,
    pub file_fg: Color,
    /// Tree connector lines.
    pub graphics_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub border_fg: Color,
    pub accent_fg: Color,
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark palette: green directories, silver files.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        dir_fg: Color::Green,
        file_fg: Color::Gray,
        graphics_fg: Color::Gray,
        selected_bg: Color::Rgb(69, 71, 90), // #45475a
        selected_fg: Color::Rgb(205, 214, 244), // #cdd6f4
        status_bg: Color::Rgb(30, 30, 46),   // #1e1e2e
        status_fg: Color::Rgb(205, 214, 244),
        border_fg: Color::Rgb(88, 91, 112), // #585b70
        accent_fg: Color::Rgb(203, 166, 247), // #cba6f7
    }
}

pub fn light_theme() -> ThemeColors {
    ThemeColors {
        dir_fg: Color::Rgb(64, 160, 43),   // #40a02b
        file_fg: Color::Rgb(76, 79, 105),  // #4c4f69
        graphics_fg: Color::Rgb(156, 160, 176), // #9ca0b0
        selected_bg: Color::Rgb(204, 208, 218), // #ccd0da
        selected_fg: Color::Rgb(76, 79, 105),
        status_bg: Color::Rgb(239, 241, 245), // #eff1f5
        status_fg: Color::Rgb(76, 79, 105),
        border_fg: Color::Rgb(172, 176, 190), // #acb0be
        accent_fg: Color::Rgb(136, 57, 239), // #8839ef
    }
}

/// Parse a `#rrggbb` (or `rrggbb`) string.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn override_color(slot: &mut Color, value: Option<&String>) {
    if let Some(color) = value.and_then(|v| parse_hex_color(v)) {
        *slot = color;
    }
}

/// Build the runtime palette from the theme section of the config.
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    match config.scheme.as_deref().unwrap_or("dark") {
        "light" => light_theme(),
        "custom" => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        _ => dark_theme(),
    }
}

fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    override_color(&mut theme.dir_fg, custom.dir_fg.as_ref());
    override_color(&mut theme.file_fg, custom.file_fg.as_ref());
    override_color(&mut theme.graphics_fg, custom.graphics_fg.as_ref());
    override_color(&mut theme.selected_bg, custom.selected_bg.as_ref());
    override_color(&mut theme.selected_fg, custom.selected_fg.as_ref());
    override_color(&mut theme.status_bg, custom.status_bg.as_ref());
    override_color(&mut theme.status_fg, custom.status_fg.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#1a1b26"), Some(Color::Rgb(26, 27, 38)));
        assert_eq!(parse_hex_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_resolve_default_is_dark() {
        let theme = resolve_theme(&ThemeConfig::default());
        assert_eq!(theme.dir_fg, Color::Green);
        assert_eq!(theme.file_fg, Color::Gray);
    }

    #[test]
    fn test_resolve_light_theme() {
        let config = ThemeConfig {
            scheme: Some("light".to_string()),
            custom: None,
        };
        assert_eq!(resolve_theme(&config).dir_fg, Color::Rgb(64, 160, 43));
    }

    #[test]
    fn test_resolve_custom_overrides() {
        let config = ThemeConfig {
            scheme: Some("custom".to_string()),
            custom: Some(ThemeColorsConfig {
                dir_fg: Some("#1a1b26".to_string()),
                file_fg: Some("#zzzzzz".to_string()),
                ..Default::default()
            }),
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.dir_fg, Color::Rgb(26, 27, 38));
        // invalid hex keeps the dark default
        assert_eq!(theme.file_fg, Color::Gray);
    }

    #[test]
    fn test_unknown_scheme_falls_back_to_dark() {
        let config = ThemeConfig {
            scheme: Some("neon".to_string()),
            custom: None,
        };
        assert_eq!(resolve_theme(&config).dir_fg, Color::Green);
    }
}
