use orrery_camera::Camera;
use orrery_math::{Mat3, Mat4, MatrixError, Vec3};
use serde::Serialize;

/// Per-frame camera uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
}

impl FrameUniforms {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            camera_position: camera.position(),
        }
    }
}

/// Per-object uniforms: the model matrix and the matching normal matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectUniforms {
    pub model: Mat4,
    pub normal: Mat3,
}

impl ObjectUniforms {
    pub fn from_model(model: Mat4) -> Result<Self, MatrixError> {
        Ok(Self {
            model,
            normal: Mat3::model_to_normal(&model)?,
        })
    }
}

/// A named object placed in the world by its model matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub model: Mat4,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, model: Mat4) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }
}

/// An object ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawItem {
    pub name: String,
    pub uniforms: ObjectUniforms,
}

/// Build draw items for `objects`, skipping any whose model matrix is
/// singular (e.g. a zero scale from a UI slider).
pub fn draw_list(objects: &[SceneObject]) -> Vec<DrawItem> {
    objects
        .iter()
        .filter_map(|obj| match ObjectUniforms::from_model(obj.model) {
            Ok(uniforms) => Some(DrawItem {
                name: obj.name.clone(),
                uniforms,
            }),
            Err(e) => {
                tracing::warn!(object = %obj.name, error = %e, "skipping draw");
                None
            }
        })
        .collect()
}
