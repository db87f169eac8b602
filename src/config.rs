use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Look and feel of the editor canvas.
///
/// Every field has a default, so a JSON override only needs the fields
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Size used until the host reports the real viewport
    pub initial_viewport: Vec2,
    pub background: Color32,

    pub grid_minor_spacing: u32,
    /// Must be a multiple of `grid_minor_spacing`
    pub grid_major_spacing: u32,
    pub grid_minor_color: Color32,
    pub grid_minor_opacity: f32,
    pub grid_major_color: Color32,
    pub grid_major_opacity: f32,
    pub grid_line_width: f32,

    pub wire_color: Color32,
    pub wire_width: f32,
    pub ghost_color: Color32,
    pub ghost_dash: f32,
    pub ghost_gap: f32,

    pub gate_fill: Color32,
    pub gate_stroke: Color32,
    pub gate_stroke_width: f32,
    pub label_color: Color32,
    pub label_font_size: f32,

    pub port_radius: f32,
    pub port_color: Color32,
    pub port_pending_color: Color32,
    pub port_target_color: Color32,

    /// Show the small status window in the corner
    pub show_status: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_viewport: Vec2::new(900.0, 600.0),
            background: Color32::from_rgb(0xf7, 0xf7, 0xf7),

            grid_minor_spacing: 25,
            grid_major_spacing: 100,
            grid_minor_color: Color32::from_rgb(0xbd, 0xbd, 0xbd),
            grid_minor_opacity: 0.22,
            grid_major_color: Color32::BLACK,
            grid_major_opacity: 0.18,
            grid_line_width: 1.0,

            wire_color: Color32::BLACK,
            wire_width: 3.0,
            ghost_color: Color32::RED,
            ghost_dash: 10.0,
            ghost_gap: 5.0,

            gate_fill: Color32::WHITE,
            gate_stroke: Color32::BLACK,
            gate_stroke_width: 1.0,
            label_color: Color32::BLACK,
            label_font_size: 18.0,

            port_radius: 6.0,
            port_color: Color32::BLACK,
            port_pending_color: Color32::RED,
            port_target_color: Color32::GREEN,

            show_status: false,
        }
    }
}

impl EditorConfig {
    /// Parses a (possibly partial) JSON config and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_minor_spacing == 0 {
            return Err(ConfigError::Invalid(
                "grid_minor_spacing must be positive".into(),
            ));
        }
        if self.grid_major_spacing == 0 || self.grid_major_spacing % self.grid_minor_spacing != 0 {
            return Err(ConfigError::Invalid(format!(
                "grid_major_spacing ({}) must be a positive multiple of grid_minor_spacing ({})",
                self.grid_major_spacing, self.grid_minor_spacing
            )));
        }

        // A zero or negative gap never advances the dash pattern
        let positive = [
            ("port_radius", self.port_radius),
            ("wire_width", self.wire_width),
            ("ghost_dash", self.ghost_dash),
            ("ghost_gap", self.ghost_gap),
            ("grid_line_width", self.grid_line_width),
            ("gate_stroke_width", self.gate_stroke_width),
            ("label_font_size", self.label_font_size),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let opacities = [
            ("grid_minor_opacity", self.grid_minor_opacity),
            ("grid_major_opacity", self.grid_major_opacity),
        ];
        for (name, value) in opacities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "port_radius": 8.0, "show_status": true }"#;
        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.port_radius, 8.0);
        assert!(config.show_status);
        assert_eq!(config.grid_minor_spacing, 25);
        assert_eq!(config.wire_color, Color32::BLACK);
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let json = r#"{ "grid_minor_spacing": 30, "grid_major_spacing": 100 }"#;
        let result = EditorConfig::from_json(json);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = EditorConfig::from_json(r#"{ "grid_minor_spacing": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = EditorConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let result = EditorConfig::from_json(r#"{ "port_radius": -1.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_gap_rejected() {
        for json in [
            r#"{ "ghost_gap": -10.0 }"#,
            r#"{ "ghost_gap": 0.0 }"#,
            r#"{ "ghost_dash": 10.0, "ghost_gap": -20.0 }"#,
        ] {
            let result = EditorConfig::from_json(json);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "{}", json);
        }
    }

    #[test]
    fn test_stroke_widths_and_opacities_checked() {
        for json in [
            r#"{ "grid_line_width": 0.0 }"#,
            r#"{ "gate_stroke_width": -1.0 }"#,
            r#"{ "grid_minor_opacity": 1.5 }"#,
            r#"{ "grid_major_opacity": -0.1 }"#,
        ] {
            let result = EditorConfig::from_json(json);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "{}", json);
        }

        let json = r#"{ "grid_minor_opacity": 0.0, "grid_major_opacity": 1.0 }"#;
        assert!(EditorConfig::from_json(json).is_ok());
    }
}
