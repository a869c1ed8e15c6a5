use serde::{Deserialize, Serialize};

use crate::core::AxisOrientation;
use crate::error::{AxisError, AxisResult};

/// Public axis bootstrap configuration.
///
/// This type is serializable so host applications can persist/load axis
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub orientation: AxisOrientation,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default = "default_auto_ranging")]
    pub auto_ranging: bool,
    #[serde(default)]
    pub animated: bool,
    #[serde(default = "default_minor_tick_count")]
    pub minor_tick_count: u32,
    #[serde(default = "default_tick_label_gap")]
    pub tick_label_gap: f64,
    #[serde(default)]
    pub tick_label_rotation: f64,
    #[serde(default = "default_tick_label_font_size")]
    pub tick_label_font_size: f64,
}

impl AxisConfig {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_auto_ranging(mut self, auto_ranging: bool) -> Self {
        self.auto_ranging = auto_ranging;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn with_minor_tick_count(mut self, count: u32) -> Self {
        self.minor_tick_count = count;
        self
    }

    #[must_use]
    pub fn with_tick_label_gap(mut self, gap: f64) -> Self {
        self.tick_label_gap = gap;
        self
    }

    #[must_use]
    pub fn with_tick_label_rotation(mut self, rotation_deg: f64) -> Self {
        self.tick_label_rotation = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_tick_label_font_size(mut self, font_size: f64) -> Self {
        self.tick_label_font_size = font_size;
        self
    }

    /// Average label size along the axis assumed before labels are measured.
    #[must_use]
    pub fn average_label_size(self) -> f64 {
        self.tick_label_font_size * 2.0
    }

    pub fn validate(self) -> AxisResult<Self> {
        if !self.tick_label_gap.is_finite() || self.tick_label_gap < 0.0 {
            return Err(AxisError::InvalidData(
                "tick label gap must be finite and >= 0".to_owned(),
            ));
        }
        if !self.tick_label_rotation.is_finite() {
            return Err(AxisError::InvalidData(
                "tick label rotation must be finite".to_owned(),
            ));
        }
        if !self.tick_label_font_size.is_finite() || self.tick_label_font_size <= 0.0 {
            return Err(AxisError::InvalidData(
                "tick label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize axis config: {e}")))
    }

    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse axis config: {e}")))?;
        config.validate()
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            inverted: false,
            auto_ranging: default_auto_ranging(),
            animated: false,
            minor_tick_count: default_minor_tick_count(),
            tick_label_gap: default_tick_label_gap(),
            tick_label_rotation: 0.0,
            tick_label_font_size: default_tick_label_font_size(),
        }
    }
}

fn default_auto_ranging() -> bool {
    true
}

fn default_minor_tick_count() -> u32 {
    5
}

fn default_tick_label_gap() -> f64 {
    3.0
}

fn default_tick_label_font_size() -> f64 {
    12.0
}
