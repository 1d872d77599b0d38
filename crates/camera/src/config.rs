use std::path::{Path, PathBuf};

use orrery_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::CameraMode;

/// Errors from loading or validating a camera configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed camera config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid camera config: {0}")]
    Invalid(String),
}

/// Static camera parameters. Missing YAML fields fall back to the defaults.
///
/// Speeds are distances per `update()` call, so motion scales with frame
/// rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub start_position: Vec3,
    pub start_mode: CameraMode,
    pub orbit_radius: f32,
    /// Lower bound for the orbit radius after zooming.
    pub min_orbit_radius: f32,
    pub normal_speed: f32,
    pub sprint_speed: f32,
    /// Roll added per update while a roll key is held, in radians.
    pub roll_speed: f32,
    /// Fraction of the current roll removed every first-person update.
    pub roll_decay: f32,
    /// Orbit radius change per unit of wheel delta.
    pub zoom_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 130.0,
            start_position: Vec3::new(0.0, 0.0, 10.0),
            start_mode: CameraMode::FirstPerson,
            orbit_radius: 2.0,
            min_orbit_radius: 0.1,
            normal_speed: 0.01,
            sprint_speed: 0.05,
            roll_speed: 0.01,
            roll_decay: 0.005,
            zoom_sensitivity: 0.01,
        }
    }
}

impl CameraConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!(path = %path.display(), mode = ?config.start_mode, "loaded camera config");
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Vertical field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return invalid(format!("fov_degrees must be in (0, 180), got {}", self.fov_degrees));
        }
        if !(self.aspect > 0.0) {
            return invalid(format!("aspect must be positive, got {}", self.aspect));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return invalid(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            ));
        }
        if !(self.min_orbit_radius > 0.0) {
            return invalid(format!(
                "min_orbit_radius must be positive, got {}",
                self.min_orbit_radius
            ));
        }
        if self.orbit_radius < self.min_orbit_radius {
            return invalid(format!(
                "orbit_radius {} is below min_orbit_radius {}",
                self.orbit_radius, self.min_orbit_radius
            ));
        }
        if self.normal_speed < 0.0 || self.sprint_speed < 0.0 || self.roll_speed < 0.0 {
            return invalid("speeds must not be negative".to_owned());
        }
        if !(0.0..=1.0).contains(&self.roll_decay) {
            return invalid(format!("roll_decay must be in [0, 1], got {}", self.roll_decay));
        }
        Ok(())
    }
}
