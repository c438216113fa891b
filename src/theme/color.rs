use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Base colours shared by every widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub background: Color,
    pub text_primary: Color,
    pub text_muted: Color,

    pub border: Color,
    pub border_focused: Color,

    pub success: Color,
    pub error: Color,

    pub accent: Color,
}

/// Colours specific to the contact form widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormColors {
    pub label: Color,
    pub input: Color,
    pub error_text: Color,
    pub button: Color,
    pub button_focused: Color,
    pub display_label: Color,
    pub display_value: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub palette: ColorPalette,
    pub form: FormColors,
}

impl ThemeColors {
    pub fn gruvbox_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(40, 40, 40),      // #282828 - dark0
            text_primary: Color::Rgb(235, 219, 178), // #ebdbb2 - light1
            text_muted: Color::Rgb(189, 174, 147),   // #bdae93 - light3
            border: Color::Rgb(102, 92, 84),         // #665c54 - dark4
            border_focused: Color::Rgb(131, 165, 152), // #83a598 - bright_blue
            success: Color::Rgb(152, 151, 26),       // #98971a - green
            error: Color::Rgb(251, 73, 52),          // #fb4934 - bright_red
            accent: Color::Rgb(250, 189, 47),        // #fabd2f - bright_yellow
        };

        Self::from_palette(palette)
    }

    pub fn gruvbox_light() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(251, 241, 199),   // #fbf1c7 - light0
            text_primary: Color::Rgb(60, 56, 54),    // #3c3836 - dark1
            text_muted: Color::Rgb(102, 92, 84),     // #665c54 - dark4
            border: Color::Rgb(189, 174, 147),       // #bdae93 - light3
            border_focused: Color::Rgb(7, 102, 120), // #076678 - faded_blue
            success: Color::Rgb(121, 116, 14),       // #79740e - faded_green
            error: Color::Rgb(157, 0, 6),            // #9d0006 - faded_red
            accent: Color::Rgb(181, 118, 20),        // #b57614 - faded_yellow
        };

        Self::from_palette(palette)
    }

    pub fn high_contrast() -> Self {
        let palette = ColorPalette {
            background: Color::Black,
            text_primary: Color::White,
            text_muted: Color::Rgb(160, 160, 160),
            border: Color::Rgb(128, 128, 128),
            border_focused: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            accent: Color::Yellow,
        };

        Self::from_palette(palette)
    }

    fn from_palette(palette: ColorPalette) -> Self {
        let form = FormColors {
            label: palette.text_muted,
            input: palette.text_primary,
            error_text: palette.error,
            button: palette.border,
            button_focused: palette.accent,
            display_label: palette.text_muted,
            display_value: palette.success,
        };

        Self { palette, form }
    }
}
