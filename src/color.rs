use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::summary::OTHER_LABEL;

/// Map markers: translucent red.
pub const MARKER_COLOR: Color32 = Color32::from_rgba_premultiplied(160, 0, 0, 160);

/// Bars of the tallest-volcanoes chart.
pub const BAR_COLOR: Color32 = Color32::from_rgb(178, 34, 34);

/// The "Other" slice of the type distribution.
pub const OTHER_COLOR: Color32 = Color32::GRAY;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (volcano types) to distinct colours. The "Other"
/// bucket always gets [`OTHER_COLOR`].
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let labels: Vec<&str> = labels.into_iter().filter(|l| *l != OTHER_LABEL).collect();
        let palette = generate_palette(labels.len());
        let mapping = labels
            .into_iter()
            .zip(palette)
            .map(|(l, c)| (l.to_string(), c))
            .collect();
        ColorMap { mapping }
    }

    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(OTHER_COLOR)
    }
}
