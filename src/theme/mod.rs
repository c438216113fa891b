pub mod color;

use serde::{Deserialize, Serialize};

pub use color::{ColorPalette, FormColors, ThemeColors};

/// Colour theme applied to the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Create a Gruvbox dark theme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "Gruvbox Dark".to_string(),
            description: "Retro groove dark theme with warm, earthy colors".to_string(),
            colors: ThemeColors::gruvbox_dark(),
        }
    }

    /// Create a Gruvbox light theme
    pub fn gruvbox_light() -> Self {
        Self {
            name: "Gruvbox Light".to_string(),
            description: "Retro groove light theme with warm, earthy colors".to_string(),
            colors: ThemeColors::gruvbox_light(),
        }
    }

    /// Create a high contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            name: "High Contrast".to_string(),
            description: "High contrast theme for better accessibility".to_string(),
            colors: ThemeColors::high_contrast(),
        }
    }

    pub fn available() -> Vec<Theme> {
        vec![Self::gruvbox_dark(), Self::gruvbox_light(), Self::high_contrast()]
    }

    /// Look a theme up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Theme> {
        Self::available()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gruvbox_dark() {
        assert_eq!(Theme::default().name, "Gruvbox Dark");
    }

    #[test]
    fn test_lookup_ignores_case() {
        let theme = Theme::by_name("high contrast").unwrap();
        assert_eq!(theme.name, "High Contrast");
        assert!(Theme::by_name("Solarized").is_none());
    }

    #[test]
    fn test_errors_use_palette_error_color() {
        for theme in Theme::available() {
            assert_eq!(theme.colors.form.error_text, theme.colors.palette.error);
        }
    }
}
