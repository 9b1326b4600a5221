// src/view/theme.rs
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label for the toggle button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀ Light Mode",
            Theme::Light => "🌙 Dark Mode",
        }
    }
}

/// Declarative color table consumed by every themed view. Values only —
/// nothing here depends on the data being rendered.
#[derive(Debug, Clone, Copy)]
pub struct ThemeTokens {
    pub window_bg: Color32,
    pub panel_bg: Color32,
    pub card_bg: Color32,
    pub card_border: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub accent_primary: Color32,
    pub accent_secondary: Color32,
    pub grid: Color32,
    pub error: Color32,
}

const DARK: ThemeTokens = ThemeTokens {
    window_bg: Color32::from_rgb(0x05, 0x05, 0x10),
    panel_bg: Color32::from_rgb(0x14, 0x14, 0x23),
    card_bg: Color32::from_rgb(0x0c, 0x0c, 0x1c),
    card_border: Color32::from_rgb(0x33, 0x33, 0x33),
    text: Color32::from_rgb(0xff, 0xff, 0xff),
    text_secondary: Color32::from_rgb(0x88, 0x92, 0xb0),
    accent_primary: Color32::from_rgb(0x00, 0xf3, 0xff),
    accent_secondary: Color32::from_rgb(0xbc, 0x13, 0xfe),
    grid: Color32::from_rgba_premultiplied(0x20, 0x20, 0x20, 0x30),
    error: Color32::from_rgb(0xff, 0x4d, 0x4d),
};

const LIGHT: ThemeTokens = ThemeTokens {
    window_bg: Color32::from_rgb(0xf0, 0xf2, 0xf5),
    panel_bg: Color32::from_rgb(0xff, 0xff, 0xff),
    card_bg: Color32::from_rgb(0xfa, 0xfb, 0xfc),
    card_border: Color32::from_rgb(0xcc, 0xcc, 0xcc),
    text: Color32::from_rgb(0x1a, 0x1a, 0x1a),
    text_secondary: Color32::from_rgb(0x2c, 0x3e, 0x50),
    accent_primary: Color32::from_rgb(0x09, 0x84, 0xe3),
    accent_secondary: Color32::from_rgb(0x8e, 0x44, 0xad),
    grid: Color32::from_rgba_premultiplied(0x30, 0x30, 0x30, 0x40),
    error: Color32::from_rgb(0xd6, 0x33, 0x84),
};

pub fn tokens(theme: Theme) -> &'static ThemeTokens {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
