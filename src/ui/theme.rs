//! Colour modes and theme palettes.
//!
//! The page runs in one of two [`ColorMode`]s. Each mode has a [`Theme`], a
//! small palette of text colours, shipped as built-in TOML files. A custom
//! theme file may replace both palettes at once.
//!
//! # TOML Format
//!
//! Built-in themes hold one palette:
//!
//! ```toml
//! name = "light"
//!
//! [colors]
//! text_primary = "#212529"
//! text_secondary = "#495057"
//! text_muted = "#6c757d"
//! ```
//!
//! A custom theme file holds one palette per mode, under `[light]` and
//! `[dark]`, each in the format above.

use crate::domain::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Light or dark page appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Value of the `data-bs-theme` attribute and of the stored preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Markup of the toggle control: it names the mode a click switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => r#"<i class="bi bi-moon-stars"></i> Dark Mode"#,
            Self::Dark => r#"<i class="bi bi-sun"></i> Light Mode"#,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ViewerError::Theme(format!("unknown colour mode: {other}"))),
        }
    }
}

/// Palette for one colour mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
}

/// Text colours as hex strings (e.g. `"#212529"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,
}

impl Theme {
    /// Loads a built-in theme by name: `light` or `dark`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Inline style declaring the palette as CSS custom properties.
    #[must_use]
    pub fn css_variables(&self) -> String {
        format!(
            "--viewer-text-primary: {}; --viewer-text-secondary: {}; --viewer-text-muted: {};",
            self.colors.text_primary, self.colors.text_secondary, self.colors.text_muted
        )
    }

    fn builtin(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| ViewerError::Theme(format!("built-in theme {name} failed to parse")))
    }
}

/// The palettes of both colour modes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Themes {
    pub light: Theme,
    pub dark: Theme,
}

impl Themes {
    /// The built-in light and dark palettes.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Theme`] if a bundled theme file does not parse.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            light: Theme::builtin("light")?,
            dark: Theme::builtin("dark")?,
        })
    }

    /// Loads both palettes from a custom TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| ViewerError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents).map_err(|e| ViewerError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Palette of `mode`.
    #[must_use]
    pub const fn for_mode(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_palettes_parse() {
        let themes = Themes::builtin().unwrap();
        assert_eq!(themes.for_mode(ColorMode::Light).colors.text_primary, "#212529");
        assert_eq!(themes.for_mode(ColorMode::Dark).colors.text_muted, "#adb5bd");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn mode_round_trips_through_text() {
        assert_eq!("dark".parse::<ColorMode>().unwrap(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.to_string(), "dark");
        assert!("sepia".parse::<ColorMode>().is_err());
    }

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert!(ColorMode::Light.toggle_label().ends_with("Dark Mode"));
        assert!(ColorMode::Dark.toggle_label().ends_with("Light Mode"));
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
    }

    #[test]
    fn custom_file_replaces_both_palettes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
[light]
name = "paper"
[light.colors]
text_primary = "#000000"
text_secondary = "#111111"
text_muted = "#222222"

[dark]
name = "ink"
[dark.colors]
text_primary = "#ffffff"
text_secondary = "#eeeeee"
text_muted = "#dddddd"
"##
        )
        .unwrap();

        let themes = Themes::from_file(file.path()).unwrap();
        assert_eq!(themes.light.name, "paper");
        assert_eq!(themes.dark.colors.text_secondary, "#eeeeee");
        assert!(themes.dark.css_variables().starts_with("--viewer-text-primary: #ffffff;"));
    }

    #[test]
    fn unreadable_theme_file_is_a_theme_error() {
        let err = Themes::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, ViewerError::Theme(_)));
    }
}
