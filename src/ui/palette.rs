//! Brand color palette and ANSI escape sequence generation.
//!
//! The palette is process-wide configuration with no lifecycle: it is loaded
//! once, never mutated, and passed to the renderer by reference.
//!
//! # Built-in Palettes
//!
//! - `ancora`: Rede Âncora brand colors (default)
//! - `ancora-night`: Dark-background variant
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-palette"
//!
//! [colors]
//! primary = "#002741"
//! secondary = "#C41F2E"
//! accent = "#FFC300"
//! success = "#4CAF50"
//! background_light = "#F7F8FA"
//! white = "#FFFFFF"
//! gray_light = "#f0f0f0"
//! gray_medium = "#777"
//! gray_dark = "#333"
//! ```

use crate::domain::{AncoraError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Named set of brand colors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    pub name: String,
    pub colors: PaletteColors,
}

/// Brand colors as hex strings (`#RRGGBB` or `#RGB`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaletteColors {
    /// Dark blue: titles, icons, card accents.
    pub primary: String,
    /// Brand red: errors and call to action.
    pub secondary: String,
    /// Yellow: rating stars.
    pub accent: String,
    /// Green: found-vehicle badge.
    pub success: String,
    /// Section background.
    pub background_light: String,
    pub white: String,
    pub gray_light: String,
    /// Secondary text (subtitles, dates, empty states).
    pub gray_medium: String,
    /// Body text.
    pub gray_dark: String,
}

impl Palette {
    /// Loads a built-in palette by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ancora::ui::Palette;
    ///
    /// let palette = Palette::from_name("ancora").unwrap();
    /// assert_eq!(palette.colors.primary, "#002741");
    /// assert!(Palette::from_name("nope").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "ancora" => include_str!("../../palettes/ancora.toml"),
            "ancora-night" => include_str!("../../palettes/ancora-night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AncoraError::Palette`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            AncoraError::Palette(format!("failed to read {}: {e}", path.as_ref().display()))
        })?;

        toml::from_str(&contents).map_err(|e| AncoraError::Palette(format!("failed to parse palette TOML: {e}")))
    }

    /// Parses a hex color into an RGB tuple.
    ///
    /// Accepts six-digit and three-digit forms, with or without `#`. Anything else
    /// yields white.
    #[must_use]
    pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        const WHITE: (u8, u8, u8) = (255, 255, 255);
        let hex = hex.trim().trim_start_matches('#');

        if !hex.is_ascii() {
            return WHITE;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        let parsed = match hex.len() {
            6 => channel(&hex[0..2]).zip(channel(&hex[2..4])).zip(channel(&hex[4..6])),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                short(0).zip(short(1)).zip(short(2))
            }
            _ => None,
        };

        parsed.map_or(WHITE, |((r, g), b)| (r, g, b))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Palette {
    /// Returns the brand palette (`ancora`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in palette fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("ancora").expect("Built-in ancora palette should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_palettes_parse() {
        assert_eq!(Palette::default().name, "ancora");
        assert_eq!(Palette::from_name("ancora-night").unwrap().name, "ancora-night");
    }

    #[test]
    fn default_palette_matches_brand_colors() {
        let colors = Palette::default().colors;
        assert_eq!(colors.primary, "#002741");
        assert_eq!(colors.secondary, "#C41F2E");
        assert_eq!(colors.accent, "#FFC300");
        assert_eq!(colors.gray_medium, "#777");
    }

    #[test]
    fn hex_parsing_handles_long_and_short_forms() {
        assert_eq!(Palette::hex_to_rgb("#002741"), (0x00, 0x27, 0x41));
        assert_eq!(Palette::hex_to_rgb("C41F2E"), (0xC4, 0x1F, 0x2E));
        assert_eq!(Palette::hex_to_rgb("#777"), (0x77, 0x77, 0x77));
        assert_eq!(Palette::hex_to_rgb("#zzz"), (255, 255, 255));
        assert_eq!(Palette::hex_to_rgb("#12345"), (255, 255, 255));
    }

    #[test]
    fn fg_emits_truecolor_escape() {
        assert_eq!(Palette::fg("#FFC300"), "\u{1b}[38;2;255;195;0m");
    }

    #[test]
    fn loads_palette_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut palette = Palette::default();
        palette.name = "custom".to_string();
        palette.colors.accent = "#000000".to_string();
        write!(file, "{}", toml::to_string(&palette).unwrap()).unwrap();

        assert_eq!(Palette::from_file(file.path()).unwrap(), palette);
    }

    #[test]
    fn missing_file_is_a_palette_error() {
        let err = Palette::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, AncoraError::Palette(_)));
    }
}
