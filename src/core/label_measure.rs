//! Tick label measurement hooks.
//!
//! Text shaping lives in the host toolkit, so auto-ranging and label
//! visibility take measured extents as input. Hosts plug in a real text
//! backend through [`TickLabelMeasurer`] or use [`HeuristicLabelMeasurer`].

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a rendered tick label, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelExtent {
    pub width: f64,
    pub height: f64,
}

impl LabelExtent {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

pub trait TickLabelMeasurer: Send + Sync {
    /// Returns the bounding box of `text` rotated by `rotation_deg` degrees.
    fn measure(&self, text: &str, rotation_deg: f64) -> LabelExtent;
}

/// Fixed-advance estimate: every glyph is `glyph_width` wide and
/// `line_height` tall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicLabelMeasurer {
    pub glyph_width: f64,
    pub line_height: f64,
}

impl HeuristicLabelMeasurer {
    #[must_use]
    pub fn new(glyph_width: f64, line_height: f64) -> Self {
        Self {
            glyph_width,
            line_height,
        }
    }

    /// Approximates glyph metrics as `0.6em` wide and `1.2em` tall.
    #[must_use]
    pub fn for_font_size(font_size: f64) -> Self {
        Self::new(font_size * 0.6, font_size * 1.2)
    }
}

impl Default for HeuristicLabelMeasurer {
    fn default() -> Self {
        Self::for_font_size(12.0)
    }
}

impl TickLabelMeasurer for HeuristicLabelMeasurer {
    fn measure(&self, text: &str, rotation_deg: f64) -> LabelExtent {
        let width = self.glyph_width * text.chars().count() as f64;
        let height = self.line_height;
        rotated_extent(LabelExtent::new(width, height), rotation_deg)
    }
}

/// Bounding box of `extent` after rotating it by `rotation_deg` degrees.
#[must_use]
pub fn rotated_extent(extent: LabelExtent, rotation_deg: f64) -> LabelExtent {
    if rotation_deg == 0.0 || !rotation_deg.is_finite() {
        return extent;
    }
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    LabelExtent::new(
        extent.width * cos + extent.height * sin,
        extent.width * sin + extent.height * cos,
    )
}
