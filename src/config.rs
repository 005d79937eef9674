use glam::Vec3;
use serde::Deserialize;

use crate::error::{Result, ViewerError};

/// Runtime knobs of the viewer. Every field has a default, so a JSON config only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Timer ticks per second.
    pub framerate: f32,
    pub initial_eye: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Height gained per tick is `translation_speed / frame_time_ms`.
    pub translation_speed: f32,
    /// Angle turned per tick is `rotation_speed / frame_time_ms` radians.
    pub rotation_speed: f32,
    /// Optional `[min, max]` range for the eye height.
    pub height_limits: Option<[f32; 2]>,
    pub clear_color: [f32; 4],
    pub point_size: f32,
    pub canvas_id: String,
    pub show_nodes_id: String,
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            framerate: 30.0,
            initial_eye: Vec3::new(2.5, 2.5, 0.5),
            fov: std::f32::consts::PI * 0.3,
            aspect: 1.0,
            near: 0.2,
            far: 5.0,
            translation_speed: 1.5,
            rotation_speed: 1.0,
            height_limits: None,
            clear_color: [1.0, 1.0, 1.0, 1.0],
            point_size: 5.0,
            canvas_id: "webgl".to_owned(),
            show_nodes_id: "show_nodes_checkbox".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.framerate.is_finite() && self.framerate > 0.0) {
            return Err(ViewerError::Config(format!(
                "framerate must be positive, got {}",
                self.framerate
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ViewerError::Config(format!(
                "depth range [{}, {}] is empty",
                self.near, self.far
            )));
        }
        if !(self.aspect > 0.0 && self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(ViewerError::Config("fov/aspect out of range".to_owned()));
        }
        if let Some([lo, hi]) = self.height_limits {
            if lo > hi {
                return Err(ViewerError::Config(format!(
                    "height limits [{lo}, {hi}] are inverted"
                )));
            }
        }
        Ok(())
    }

    /// Interval between ticks in milliseconds.
    pub fn frame_time_ms(&self) -> f32 {
        1000.0 / self.framerate
    }

    pub fn height_step(&self) -> f32 {
        self.translation_speed / self.frame_time_ms()
    }

    pub fn rotation_step(&self) -> f32 {
        self.rotation_speed / self.frame_time_ms()
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_thirty_hz_viewer() {
        let cfg = ViewerConfig::default();
        assert!((cfg.frame_time_ms() - 1000.0 / 30.0).abs() < 1e-4);
        assert!((cfg.height_step() - 0.045).abs() < 1e-6);
        assert!((cfg.rotation_step() - 0.03).abs() < 1e-6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ViewerConfig::from_json(r#"{ "framerate": 60, "canvas_id": "view" }"#).unwrap();
        assert_eq!(cfg.framerate, 60.0);
        assert_eq!(cfg.canvas_id, "view");
        assert_eq!(cfg.initial_eye, Vec3::new(2.5, 2.5, 0.5));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ViewerConfig::from_json(r#"{ "framerate": 0 }"#),
            Err(ViewerError::Config(_))
        ));
        assert!(ViewerConfig::from_json(r#"{ "near": 2.0, "far": 1.0 }"#).is_err());
        assert!(ViewerConfig::from_json(r#"{ "height_limits": [1.0, -1.0] }"#).is_err());
        assert!(matches!(
            ViewerConfig::from_json(r#"{ "bogus": 1 }"#),
            Err(ViewerError::ConfigJson(_))
        ));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let cfg = ViewerConfig {
            log_level: "loud".to_owned(),
            ..Default::default()
        };
        assert_eq!(cfg.log_level(), log::Level::Info);
        let cfg = ViewerConfig {
            log_level: "debug".to_owned(),
            ..Default::default()
        };
        assert_eq!(cfg.log_level(), log::Level::Debug);
    }
}
