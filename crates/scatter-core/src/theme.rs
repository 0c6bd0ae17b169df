// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark color sets shared by the SVG writer and raster backends.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, alpha ignored.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    pub circle_fill: Rgba,
    pub circle_stroke: Rgba,
    pub circle_stroke_hover: Rgba,
    pub state_text: Rgba,
    pub label_active: Rgba,
    pub label_inactive: Rgba,
    pub tooltip_fill: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(0xff, 0xff, 0xff),
            axis_line: Rgba::rgb(0x00, 0x00, 0x00),
            tick_label: Rgba::rgb(0x00, 0x00, 0x00),
            circle_fill: Rgba::rgb(0x89, 0xbd, 0xd3),
            circle_stroke: Rgba::rgb(0xe3, 0xe3, 0xe3),
            circle_stroke_hover: Rgba::rgb(0x32, 0x32, 0x32),
            state_text: Rgba::rgb(0xff, 0xff, 0xff),
            label_active: Rgba::rgb(0x00, 0x00, 0x00),
            label_inactive: Rgba::rgb(0xa0, 0xa0, 0xa0),
            tooltip_fill: Rgba::argb(230, 0x00, 0x00, 0x00),
            tooltip_text: Rgba::rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            tick_label: Rgba::rgb(150, 150, 160),
            circle_fill: Rgba::rgb(64, 160, 255),
            circle_stroke: Rgba::rgb(40, 40, 45),
            circle_stroke_hover: Rgba::rgb(255, 230, 70),
            state_text: Rgba::rgb(235, 235, 245),
            label_active: Rgba::rgb(235, 235, 245),
            label_inactive: Rgba::rgb(110, 110, 120),
            tooltip_fill: Rgba::argb(230, 250, 250, 252),
            tooltip_text: Rgba::rgb(20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
