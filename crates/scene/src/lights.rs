use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

use orrery_math::Vec3;
use serde::{Deserialize, Serialize};

/// Omnidirectional light at a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position,
            color,
            intensity: 1.0,
        }
    }

    /// Light circling the Y axis at `radius`, `height` above the origin, at
    /// angle `t`.
    pub fn orbiting(radius: f32, height: f32, t: f32, color: Vec3) -> Self {
        let (sin_t, cos_t) = t.sin_cos();
        Self::new(Vec3::new(radius * cos_t, height, radius * sin_t), color)
    }
}

/// Light arriving from a fixed direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
            color,
            intensity: 1.0,
        }
    }
}

/// Cone light. The shader lights fully inside `inner_angle` and fades out
/// toward `outer_angle` (both half-angles in radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub inner_angle: f32,
    pub outer_angle: f32,
}

impl SpotLight {
    pub fn new(position: Vec3, direction: Vec3, color: Vec3) -> Self {
        Self {
            position,
            direction: direction.normalize(),
            color,
            intensity: 1.0,
            inner_angle: FRAC_PI_4,
            outer_angle: FRAC_PI_3,
        }
    }
}
