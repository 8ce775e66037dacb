use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::Config;

/// Serializable color representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorDef {
    /// RGB color as [r, g, b]
    Rgb(u8, u8, u8),
    /// Named color or `#rrggbb` hex
    Named(String),
}

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        match def {
            ColorDef::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDef::Named(name) => {
                if let Some(color) = parse_hex(&name) {
                    return color;
                }
                match name.as_str() {
                    "Black" => Color::Black,
                    "Red" => Color::Red,
                    "Green" => Color::Green,
                    "Yellow" => Color::Yellow,
                    "Blue" => Color::Blue,
                    "Magenta" => Color::Magenta,
                    "Cyan" => Color::Cyan,
                    "Gray" => Color::Gray,
                    "DarkGray" => Color::DarkGray,
                    "LightRed" => Color::LightRed,
                    "LightGreen" => Color::LightGreen,
                    "LightYellow" => Color::LightYellow,
                    "LightBlue" => Color::LightBlue,
                    "LightMagenta" => Color::LightMagenta,
                    "LightCyan" => Color::LightCyan,
                    "White" => Color::White,
                    // Default/Reset uses the terminal's default color
                    "Default" | "Reset" => Color::Reset,
                    _ => Color::White,
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Serializable theme definition (matches JSON structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    bg: ColorDef,
    #[serde(default = "default_bg_highlight")]
    bg_highlight: ColorDef,
    fg: ColorDef,
    fg_deep: ColorDef,
    fg_muted: ColorDef,
    primary: ColorDef,
    secondary: ColorDef,
    accent: ColorDef,
    #[serde(default = "default_success")]
    success: ColorDef,
    #[serde(default = "default_warning")]
    warning: ColorDef,
    #[serde(default = "default_error")]
    error: ColorDef,
    border: ColorDef,
    #[serde(default = "default_border_focus")]
    border_focus: ColorDef,
}

fn default_bg_highlight() -> ColorDef {
    ColorDef::Named("DarkGray".to_string())
}

fn default_success() -> ColorDef {
    ColorDef::Named("Green".to_string())
}

fn default_warning() -> ColorDef {
    ColorDef::Named("Yellow".to_string())
}

fn default_error() -> ColorDef {
    ColorDef::Named("Red".to_string())
}

fn default_border_focus() -> ColorDef {
    ColorDef::Named("LightBlue".to_string())
}

/// Semantic colour roles used by every screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    pub bg: Color,
    pub bg_highlight: Color,

    /// Body text
    pub fg: Color,
    /// Slightly dimmer body text
    pub fg_deep: Color,
    /// Hints, dates, secondary detail
    pub fg_muted: Color,

    /// Headings and the active selection
    pub primary: Color,
    /// Labels
    pub secondary: Color,
    /// Values such as links and counts
    pub accent: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub border: Color,
    pub border_focus: Color,
}

impl From<ThemeFile> for Theme {
    fn from(file: ThemeFile) -> Self {
        Self {
            name: file.name,
            bg: file.bg.into(),
            bg_highlight: file.bg_highlight.into(),
            fg: file.fg.into(),
            fg_deep: file.fg_deep.into(),
            fg_muted: file.fg_muted.into(),
            primary: file.primary.into(),
            secondary: file.secondary.into(),
            accent: file.accent.into(),
            success: file.success.into(),
            warning: file.warning.into(),
            error: file.error.into(),
            border: file.border.into(),
            border_focus: file.border_focus.into(),
        }
    }
}

impl Theme {
    const BUILTIN: [&'static str; 2] = ["tokyo-night", "steel"];

    /// Load theme from a JSON file
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file: {}", e))?;
        let theme_file: ThemeFile = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse theme file: {}", e))?;
        Ok(theme_file.into())
    }

    /// Tokyo Night palette
    pub fn tokyo_night() -> Self {
        Self {
            name: "tokyo-night".to_string(),
            bg: Color::Rgb(0x1a, 0x1b, 0x26),
            bg_highlight: Color::Rgb(0x29, 0x2e, 0x42),
            fg: Color::Rgb(0xc0, 0xca, 0xf5),
            fg_deep: Color::Rgb(0xa9, 0xb1, 0xd6),
            fg_muted: Color::Rgb(0x56, 0x5f, 0x89),
            primary: Color::Rgb(0x7a, 0xa2, 0xf7),
            secondary: Color::Rgb(0xbb, 0x9a, 0xf7),
            accent: Color::Rgb(0x7d, 0xcf, 0xff),
            success: Color::Rgb(0x9e, 0xce, 0x6a),
            warning: Color::Rgb(0xe0, 0xaf, 0x68),
            error: Color::Rgb(0xf7, 0x76, 0x8e),
            border: Color::Rgb(0x41, 0x48, 0x68),
            border_focus: Color::Rgb(0x7a, 0xa2, 0xf7),
        }
    }

    /// Steel-blue palette
    pub fn steel() -> Self {
        Self {
            name: "steel".to_string(),
            bg: Color::Reset,
            bg_highlight: Color::Rgb(0x2f, 0x4f, 0x4f),
            fg: Color::Rgb(0xff, 0xfa, 0xfa),
            fg_deep: Color::Rgb(0xb0, 0xc4, 0xde),
            fg_muted: Color::Rgb(0x70, 0x80, 0x90),
            primary: Color::Rgb(0x46, 0x82, 0xb4),
            secondary: Color::Rgb(0xb0, 0xc4, 0xde),
            accent: Color::Rgb(0xb0, 0xe0, 0xe6),
            success: Color::Rgb(0x8f, 0xbc, 0x8f),
            warning: Color::Rgb(0xf0, 0xe6, 0x8c),
            error: Color::Rgb(0xcd, 0x5c, 0x5c),
            border: Color::Rgb(0x70, 0x80, 0x90),
            border_focus: Color::Rgb(0x46, 0x82, 0xb4),
        }
    }

    /// Get a theme by name, defaults to tokyo-night if not found.
    /// User theme files in the config dir take precedence over builtins.
    pub fn from_name(name: &str) -> Self {
        Self::from_name_in(name, Config::themes_dir().as_deref())
    }

    pub fn from_name_in(name: &str, user_dir: Option<&Path>) -> Self {
        let normalized_name = name.to_lowercase().replace('_', "-");

        if let Some(dir) = user_dir {
            let path = dir.join(format!("{}.json", normalized_name));
            if path.is_file() {
                match Self::from_file(&path) {
                    Ok(theme) => return theme,
                    Err(e) => tracing::warn!("Ignoring theme {:?}: {}", path, e),
                }
            }
        }

        match normalized_name.as_str() {
            "tokyo-night" => Self::tokyo_night(),
            "steel" => Self::steel(),
            other => {
                tracing::warn!("Unknown theme '{}', using tokyo-night", other);
                Self::tokyo_night()
            }
        }
    }

    /// Builtin names plus any `*.json` in the user themes directory.
    pub fn available_themes() -> Vec<String> {
        Self::available_themes_in(Config::themes_dir().as_deref())
    }

    pub fn available_themes_in(user_dir: Option<&Path>) -> Vec<String> {
        let mut themes: Vec<String> = Self::BUILTIN.iter().map(|s| s.to_string()).collect();

        if let Some(Ok(entries)) = user_dir.map(std::fs::read_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem() {
                        let name = stem.to_string_lossy().to_string();
                        if !themes.iter().any(|t| t == &name) {
                            themes.push(name);
                        }
                    }
                }
            }
        }

        themes
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg_deep)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focus
        } else {
            self.border
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}
