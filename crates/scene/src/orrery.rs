use orrery_math::{Mat4, Vec3};

use crate::SceneObject;

/// Sun, earth and moon placement for the planets demo.
///
/// The earth spins once per `day_seconds` and circles the sun once per
/// `day_seconds * 365.25`, both scaled by `time_dilation`. The moon shares
/// the earth's frame and sits `moon_distance` further out along its local Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orrery {
    pub time_dilation: f32,
    pub day_seconds: f32,
    pub earth_orbit: f32,
    pub moon_distance: f32,
}

impl Default for Orrery {
    fn default() -> Self {
        Self {
            time_dilation: 1.0,
            day_seconds: 1.0,
            earth_orbit: 5.0,
            moon_distance: 4.0,
        }
    }
}

impl Orrery {
    fn spin(&self, seconds: f32) -> f32 {
        self.time_dilation * seconds / self.day_seconds
    }

    fn revolution(&self, seconds: f32) -> f32 {
        self.spin(seconds) / 365.25
    }

    pub fn earth(&self, seconds: f32) -> Mat4 {
        self.body(0.5, seconds)
    }

    pub fn moon(&self, seconds: f32) -> Mat4 {
        self.body(0.2, seconds).self_translate(0.0, 0.0, self.moon_distance)
    }

    fn body(&self, scale: f32, seconds: f32) -> Mat4 {
        Mat4::from_uniform_scale(scale)
            .rotate_y(self.spin(seconds))
            .translate(0.0, 0.0, self.earth_orbit)
            .rotate_y(self.revolution(seconds))
    }

    /// Every object of the scene at `seconds`. The skybox follows the camera.
    pub fn bodies(&self, seconds: f32, camera_position: Vec3) -> Vec<SceneObject> {
        let skybox = Mat4::from_uniform_scale(100.0).translate(
            camera_position.x,
            camera_position.y,
            camera_position.z,
        );
        vec![
            SceneObject::new(
                "ground",
                Mat4::from_scale(20.0, 1.0, 20.0).translate(0.0, -2.0, 0.0),
            ),
            SceneObject::new("sun", Mat4::IDENTITY),
            SceneObject::new("earth", self.earth(seconds)),
            SceneObject::new("moon", self.moon(seconds)),
            SceneObject::new("skybox", skybox),
        ]
    }
}
