//! Caller-controlled render options

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// Shadow, rotation and zoom settings for one render pass
///
/// Deserializes from the `[render]` table of a config file; missing keys take
/// their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub shadow_enabled: bool,
    /// Clockwise rotation around the device centre; any value, wrapped to `[0, 360)`
    pub rotation_degrees: f32,
    /// Scale in percent; must be finite and above zero
    pub zoom_percent: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            shadow_enabled: true,
            rotation_degrees: 0.0,
            zoom_percent: 100.0,
        }
    }
}

impl RenderOptions {
    pub fn with_shadow(mut self, enabled: bool) -> Self {
        self.shadow_enabled = enabled;
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn with_zoom(mut self, percent: f32) -> Self {
        self.zoom_percent = percent;
        self
    }

    /// Zoom as a multiplier (`zoom_percent / 100`)
    pub fn zoom_factor(&self) -> Result<f32> {
        if self.zoom_percent.is_finite() && self.zoom_percent > 0.0 {
            Ok(self.zoom_percent / 100.0)
        } else {
            Err(RenderError::InvalidZoom(self.zoom_percent))
        }
    }

    /// Rotation wrapped into `[0, 360)`, so equivalent angles render identically
    pub fn normalized_rotation(&self) -> f32 {
        if self.rotation_degrees.is_finite() {
            self.rotation_degrees.rem_euclid(360.0)
        } else {
            tracing::warn!(rotation = self.rotation_degrees, "non-finite rotation, using 0");
            0.0
        }
    }
}
