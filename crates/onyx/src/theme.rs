//! Skins.
//!
//! The widget layer never hardcodes styles; every widget draws through the
//! role map of the active [`Skin`]. Built-in skins cover the stock look of
//! the toolkit; a YAML file can override individual role colors.

use std::fmt;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Built-in skin families.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinName {
    #[default]
    Carbon,
    Cobalt,
    Electro,
    Titanium,
    Silicon,
}

impl SkinName {
    pub fn label(self) -> &'static str {
        match self {
            SkinName::Carbon => "carbon",
            SkinName::Cobalt => "cobalt",
            SkinName::Electro => "electro",
            SkinName::Titanium => "titanium",
            SkinName::Silicon => "silicon",
        }
    }
}

impl fmt::Display for SkinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role-to-style map consumed by every widget.
#[derive(Debug, Clone)]
pub struct Skin {
    pub name: SkinName,
    /// Plain list item.
    pub item: Style,
    /// The selected item.
    pub selected: Style,
    /// The item under the focus ring.
    pub focus: Style,
    /// Active controls and markers.
    pub accent: Style,
    /// Disabled controls.
    pub disabled: Style,
    pub border: Style,
    /// Below-midpoint temperature zone.
    pub cold: Style,
    /// At-or-above-midpoint temperature zone.
    pub heat: Style,
    /// Silicon renders dropdown items with radio markers.
    pub radio_markers: bool,
}

impl Skin {
    pub fn builtin(name: SkinName) -> Self {
        let (accent, selected_fg) = match name {
            SkinName::Carbon => (Color::Yellow, Color::Yellow),
            SkinName::Cobalt => (Color::Blue, Color::LightBlue),
            SkinName::Electro => (Color::Cyan, Color::LightCyan),
            SkinName::Titanium => (Color::Gray, Color::White),
            SkinName::Silicon => (Color::Magenta, Color::LightMagenta),
        };
        Self {
            name,
            item: Style::default(),
            selected: Style::default()
                .fg(selected_fg)
                .add_modifier(Modifier::BOLD),
            focus: Style::default()
                .add_modifier(Modifier::REVERSED),
            accent: Style::default().fg(accent),
            disabled: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::DarkGray),
            cold: Style::default().fg(Color::Blue),
            heat: Style::default().fg(Color::Red),
            radio_markers: name == SkinName::Silicon,
        }
    }

    /// Overlay file-supplied role colors onto the built-in skin.
    pub fn apply(&mut self, overrides: &SkinOverrides) {
        if let Some(color) = overrides.accent {
            self.accent = self.accent.fg(color);
        }
        if let Some(color) = overrides.selected {
            self.selected = self.selected.fg(color);
        }
        if let Some(color) = overrides.border {
            self.border = self.border.fg(color);
        }
        if let Some(color) = overrides.cold {
            self.cold = self.cold.fg(color);
        }
        if let Some(color) = overrides.heat {
            self.heat = self.heat.fg(color);
        }
    }

    /// Built-in skin plus optional overrides from `{data_dir}/skin.yaml`.
    /// A missing file is the normal case; a malformed one is an error.
    pub fn load(name: SkinName, data_dir: &Path) -> Result<Self, ThemeError> {
        let mut skin = Self::builtin(name);
        let path = data_dir.join("skin.yaml");
        if path.exists() {
            skin.apply(&load_overrides(&path)?);
        }
        Ok(skin)
    }
}

/// Optional per-role color overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SkinOverrides {
    pub accent: Option<Color>,
    pub selected: Option<Color>,
    pub border: Option<Color>,
    pub cold: Option<Color>,
    pub heat: Option<Color>,
}

pub fn load_overrides(path: &Path) -> Result<SkinOverrides, ThemeError> {
    let content = fs::read_to_string(path)?;
    serde_saphyr::from_str(&content).map_err(|e| ThemeError::Parse(e.to_string()))
}

/// Errors from skin file loading
#[derive(Debug)]
pub enum ThemeError {
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Io(e) => write!(f, "skin file unreadable: {e}"),
            ThemeError::Parse(msg) => write!(f, "skin file malformed: {msg}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::Io(e) => Some(e),
            ThemeError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for ThemeError {
    fn from(e: std::io::Error) -> Self {
        ThemeError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_resolves() {
        for name in [
            SkinName::Carbon,
            SkinName::Cobalt,
            SkinName::Electro,
            SkinName::Titanium,
            SkinName::Silicon,
        ] {
            let skin = Skin::builtin(name);
            assert_eq!(skin.name, name);
        }
    }

    #[test]
    fn only_silicon_uses_radio_markers() {
        assert!(Skin::builtin(SkinName::Silicon).radio_markers);
        assert!(!Skin::builtin(SkinName::Carbon).radio_markers);
    }

    #[test]
    fn overrides_replace_role_colors() {
        let mut skin = Skin::builtin(SkinName::Carbon);
        skin.apply(&SkinOverrides {
            accent: Some(Color::Green),
            ..Default::default()
        });
        assert_eq!(skin.accent.fg, Some(Color::Green));
        // Untouched roles keep the builtin value.
        assert_eq!(skin.cold.fg, Some(Color::Blue));
    }

    #[test]
    fn load_falls_back_without_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let skin = Skin::load(SkinName::Cobalt, dir.path()).expect("load");
        assert_eq!(skin.name, SkinName::Cobalt);
    }

    #[test]
    fn load_reads_yaml_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("skin.yaml"), "accent: green\n").expect("write");
        let skin = Skin::load(SkinName::Carbon, dir.path()).expect("load");
        assert_eq!(skin.accent.fg, Some(Color::Green));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("skin.yaml"), "accent: [not a color\n").expect("write");
        assert!(Skin::load(SkinName::Carbon, dir.path()).is_err());
    }
}
