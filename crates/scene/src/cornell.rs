use orrery_math::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::{PointLight, SceneObject};

/// Adjustable parameters of the Cornell-box demo (UI slider values).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornellParams {
    pub sphere_radii: Vec3,
    pub sphere_y: f32,
    /// Bounding radius handed to the shader for ray-sphere tests.
    pub sphere_radius: f32,
    pub ambient: Vec3,
    pub light_color: Vec3,
    pub light_intensity: f32,
}

impl Default for CornellParams {
    fn default() -> Self {
        Self {
            sphere_radii: Vec3::new(0.5, 0.5, 0.5),
            sphere_y: -0.5,
            sphere_radius: 0.5,
            ambient: Vec3::ZERO,
            light_color: Vec3::new(1.0, 1.0, 1.0),
            light_intensity: 1.0,
        }
    }
}

/// Analytic sphere as seen by the lighting shader.
///
/// `inv_model` is `None` when the sphere's model matrix is singular, e.g.
/// when a radius slider sits at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphereData {
    pub center: Vec3,
    pub radius: f32,
    pub inv_model: Option<Mat4>,
}

/// Analytic box: world-space center, transformed half-diagonal and inverse
/// model matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxData {
    pub center: Vec3,
    pub size: Vec3,
    pub inv_model: Option<Mat4>,
}

/// Everything the Cornell-box scene needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CornellFrame {
    pub objects: Vec<SceneObject>,
    pub sphere: SphereData,
    pub cube: BoxData,
    pub light: PointLight,
}

/// The Cornell-box shadow/lighting demo: an ellipsoid and a box tumbling
/// inside a room, lit by a point light circling the ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornellBox {
    pub params: CornellParams,
}

impl CornellBox {
    pub fn new(params: CornellParams) -> Self {
        Self { params }
    }

    /// One frame of the scene at time `t` with the given parameters.
    pub fn at(t: f32, params: &CornellParams) -> CornellFrame {
        Self::new(*params).frame(t)
    }

    pub fn sphere_model(&self, t: f32) -> Mat4 {
        let r = self.params.sphere_radii;
        Mat4::from_scale(r.x, r.y, r.z)
            .rotate_x(t)
            .rotate_y(t)
            .translate(0.4, self.params.sphere_y, 0.1)
    }

    pub fn box_model(&self, t: f32) -> Mat4 {
        Mat4::from_scale(0.5, 1.2, 0.5)
            .rotate_y(t)
            .translate(-0.4, -0.4, -0.4)
    }

    pub fn room_model(&self) -> Mat4 {
        Mat4::from_uniform_scale(2.0)
    }

    pub fn frame(&self, t: f32) -> CornellFrame {
        let sphere_model = self.sphere_model(t);
        let box_model = self.box_model(t);

        let sphere = SphereData {
            center: Vec3::new(0.4, self.params.sphere_y, 0.1),
            radius: self.params.sphere_radius,
            inv_model: sphere_model.inverse().ok(),
        };
        let cube = BoxData {
            center: (box_model * Vec4::new(0.0, 0.0, 0.0, 1.0)).to_vec3(),
            size: (box_model * Vec4::new(1.0, 1.0, 1.0, 0.0)).to_vec3(),
            inv_model: box_model.inverse().ok(),
        };
        if sphere.inv_model.is_none() {
            tracing::warn!(radii = ?self.params.sphere_radii, "sphere model matrix is singular");
        }

        let mut light = PointLight::orbiting(0.9, 0.9, t, self.params.light_color);
        light.intensity = self.params.light_intensity;

        CornellFrame {
            objects: vec![
                SceneObject::new("sphere", sphere_model),
                SceneObject::new("box", box_model),
                SceneObject::new("room", self.room_model()),
            ],
            sphere,
            cube,
            light,
        }
    }
}
