//! Map rendering configuration.

use serde::{Deserialize, Serialize};

use super::svg::{Color, Point};

/// Visual settings for the network map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Canvas size in pixels.
    pub width: f64,
    pub height: f64,

    /// Gap between the outermost stops and the canvas edge.
    pub padding: f64,

    /// Stroke width of route lines.
    pub line_width: f64,

    pub stop_radius: f64,

    pub bus_label_font_size: u32,

    /// Bus label offset from its terminal.
    pub bus_label_offset: Point,

    pub stop_label_font_size: u32,

    /// Stop label offset from its stop.
    pub stop_label_offset: Point,

    /// Halo drawn under every label.
    pub underlayer_color: Color,
    pub underlayer_width: f64,

    /// Route colors, assigned to buses in name order and reused cyclically.
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// Palette color for the `index`-th bus; no fill when the palette is empty.
    pub fn palette_color(&self, index: usize) -> Color {
        if self.color_palette.is_empty() {
            return Color::None;
        }
        self.color_palette[index % self.color_palette.len()].clone()
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Point::new(7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: Point::new(7.0, -3.0),
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::named("green"),
                Color::Rgb(255, 160, 0),
                Color::named("red"),
            ],
        }
    }
}
