//! Tunable engine constants.
//!
//! Every field has a default, so a JSON override only needs to name the
//! values it changes:
//!
//! ```rust
//! use menuflow::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{"animation": {"exit_gravity": 0.004}}"#).unwrap();
//! assert_eq!(config.animation.exit_gravity, 0.004);
//! assert_eq!(config.layout.glyph_size, 26.0);
//! ```

use crate::document::DocumentError;
use serde::{Deserialize, Serialize};

/// Idle motion and exit animation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Peak idle rotation per axis, in radians
    pub idle_amplitude: f32,
    /// Time scale of the idle oscillation, in milliseconds
    pub idle_period_ms: f64,
    /// Exit acceleration, in scene units per millisecond squared
    pub exit_gravity: f32,
    /// Glyph height (local to its option) at which a glyph counts as off screen
    pub exit_threshold: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            idle_amplitude: 0.1,
            idle_period_ms: 1000.0,
            exit_gravity: 0.002,
            exit_threshold: -(256.0 + 10.0 + 100.0),
        }
    }
}

/// Placement of options and glyphs in scene units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Half of the vertical space shared by all options
    pub panel_half_height: f32,
    /// Space kept free above the first option
    pub padding: f32,
    /// Glyph height
    pub glyph_size: f32,
    /// Glyph extrusion depth
    pub glyph_depth: f32,
    /// Gap between consecutive glyphs
    pub glyph_spacing: f32,
    /// Scene units from the view centre to its edge, used to map pointer
    /// coordinates into the scene
    pub view_half_extent: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_half_height: 180.0,
            padding: 40.0,
            glyph_size: 26.0,
            glyph_depth: 10.0,
            glyph_spacing: 5.0,
            // camera at z = 700 with a 30 degree vertical field of view
            view_half_extent: 187.56,
        }
    }
}

/// All engine settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub animation: AnimationConfig,
    pub layout: LayoutConfig,
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = EngineConfig::from_json(r#"{"layout": {"padding": 12.0}}"#).unwrap();

        assert_eq!(config.layout.padding, 12.0);
        assert_eq!(config.layout.panel_half_height, 180.0);
        assert_eq!(config.animation, AnimationConfig::default());
    }

    #[test]
    fn default_exit_threshold_is_below_panel() {
        let config = EngineConfig::default();
        assert_eq!(config.animation.exit_threshold, -366.0);
        assert!(config.animation.exit_threshold < -config.layout.panel_half_height);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(EngineConfig::from_json("{ not json").is_err());
    }
}
