use serde::{Deserialize, Serialize};

/// An RGB color rendered as `#rrggbb` for CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The application's fixed color palette.
///
/// One static dark palette, applied at startup; there is no runtime theme
/// switching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub window: Color,
    pub base: Color,
    pub text: Color,
    pub button: Color,
    pub button_text: Color,
    pub highlight: Color,
    pub link: Color,
}

impl Theme {
    /// The Fusion-style dark palette the shell ships with.
    pub fn dark() -> Self {
        Self {
            window: Color(53, 53, 53),
            base: Color(25, 25, 25),
            text: Color(255, 255, 255),
            button: Color(69, 69, 69),
            button_text: Color(255, 255, 255),
            highlight: Color(42, 130, 218),
            link: Color(42, 130, 218),
        }
    }

    /// CSS custom properties for the injected toolbar, name/value pairs.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        vec![
            ("--dusk-window".to_string(), self.window.hex()),
            ("--dusk-base".to_string(), self.base.hex()),
            ("--dusk-text".to_string(), self.text.hex()),
            ("--dusk-button".to_string(), self.button.hex()),
            ("--dusk-button-text".to_string(), self.button_text.hex()),
            ("--dusk-highlight".to_string(), self.highlight.hex()),
            ("--dusk-link".to_string(), self.link.hex()),
        ]
    }

    /// Background color for the WebView itself, RGBA.
    pub fn background_rgba(&self) -> (u8, u8, u8, u8) {
        (self.window.0, self.window.1, self.window.2, 255)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
