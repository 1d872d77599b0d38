use std::collections::VecDeque;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use orrery_input::{Action, CameraKey, KeySet};
use orrery_math::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::{CameraConfig, ConfigError};

/// Which control scheme the camera is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Free look from the eye position, with roll.
    FirstPerson,
    /// Always looks at a center point from `orbit_radius` away.
    Orbit,
}

/// Mode-specific state. Roll lives on the camera itself so it survives a
/// trip through orbit mode.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Rig {
    FirstPerson,
    Orbit { center: Vec3 },
}

/// Dual-mode camera.
///
/// Orientation comes from the accumulated pointer: `yaw` spans a full turn
/// per two units of horizontal pointer travel and `pitch` is measured from
/// +Y, so a centered pointer looks horizontally along -Z. The vertical
/// pointer axis must stay inside `(-1, 1)`; the camera does not clamp pitch
/// itself.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    position: Vec3,
    yaw: f32,
    pitch: f32,
    roll: f32,
    orbit_radius: f32,
    speed: f32,
    rig: Rig,
    config: CameraConfig,
    pending: VecDeque<Action>,
    view: Mat4,
    projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_valid_config(CameraConfig::default())
    }
}

impl Camera {
    /// Build a camera, rejecting configs that fail
    /// [`CameraConfig::validate`] (e.g. a non-positive `min_orbit_radius`).
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CameraConfig) -> Self {
        let rig = match config.start_mode {
            CameraMode::FirstPerson => Rig::FirstPerson,
            CameraMode::Orbit => Rig::Orbit { center: Vec3::ZERO },
        };
        let mut camera = Self {
            fov: config.fov(),
            aspect: config.aspect,
            near: config.near,
            far: config.far,
            position: config.start_position,
            yaw: PI,
            pitch: FRAC_PI_2,
            roll: 0.0,
            orbit_radius: config.orbit_radius,
            speed: 0.0,
            rig,
            config,
            pending: VecDeque::new(),
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.refresh_matrices();
        camera
    }

    pub fn mode(&self) -> CameraMode {
        match self.rig {
            Rig::FirstPerson => CameraMode::FirstPerson,
            Rig::Orbit { .. } => CameraMode::Orbit,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current roll. Orbit mode ignores it but keeps it for the return to
    /// first-person.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Orbit center, if in orbit mode.
    pub fn center(&self) -> Option<Vec3> {
        match self.rig {
            Rig::Orbit { center } => Some(center),
            Rig::FirstPerson => None,
        }
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    /// Distance moved per update during the last update.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Unit view direction from the current yaw and pitch.
    pub fn forward(&self) -> Vec3 {
        spherical(self.yaw, self.pitch)
    }

    /// Queue an action for the next `update()`.
    pub fn push_action(&mut self, action: Action) {
        self.pending.push_back(action);
    }

    pub fn pending_actions(&self) -> usize {
        self.pending.len()
    }

    /// Switch modes, keeping the view direction.
    ///
    /// Entering orbit mode places the center `orbit_radius` ahead of the eye.
    /// Returning to first-person keeps the eye where it is and picks up the
    /// roll it had before. Matrices are refreshed by the next `update()`.
    pub fn toggle_mode(&mut self) {
        self.rig = match self.rig {
            Rig::FirstPerson => Rig::Orbit {
                center: self.position + self.forward() * self.orbit_radius,
            },
            Rig::Orbit { .. } => Rig::FirstPerson,
        };
        tracing::debug!(mode = ?self.mode(), "camera mode toggled");
    }

    /// Advance one frame.
    ///
    /// `pointer` is the accumulated normalized pointer position and `keys`
    /// the logical keys held this frame.
    pub fn update(&mut self, pointer: Vec2, keys: &KeySet) {
        while let Some(action) = self.pending.pop_front() {
            self.apply(action);
        }

        self.speed = if keys.contains(CameraKey::Sprint) {
            self.config.sprint_speed
        } else {
            self.config.normal_speed
        };
        self.yaw = (1.0 - pointer.x) * PI % TAU;
        self.pitch = (1.0 + pointer.y) * FRAC_PI_2;

        match &mut self.rig {
            Rig::FirstPerson => {
                self.roll -= self.roll * self.config.roll_decay;
                if keys.contains(CameraKey::RollLeft) {
                    self.roll -= self.config.roll_speed;
                } else if keys.contains(CameraKey::RollRight) {
                    self.roll += self.config.roll_speed;
                }
                self.position += first_person_step(keys, self.yaw, self.pitch) * self.speed;
            }
            Rig::Orbit { center } => {
                *center += planar_step(keys, self.yaw) * self.speed;
                // the eye sits on the far side of the center from the view
                // direction
                let offset = spherical(self.yaw + PI, PI - self.pitch) * self.orbit_radius;
                self.position = *center + offset;
            }
        }

        self.refresh_matrices();
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Zoom(delta) => {
                let wanted = self.orbit_radius - delta * self.config.zoom_sensitivity;
                self.orbit_radius = wanted.max(self.config.min_orbit_radius);
                if wanted < self.config.min_orbit_radius {
                    tracing::debug!(wanted, radius = self.orbit_radius, "orbit radius clamped");
                }
            }
            Action::ToggleMode => self.toggle_mode(),
            Action::Resize { width, height } => {
                if width > 0 && height > 0 {
                    self.aspect = width as f32 / height as f32;
                } else {
                    tracing::debug!(width, height, "ignoring degenerate resize");
                }
            }
            Action::SetFov(fov) => self.fov = fov,
        }
    }

    fn refresh_matrices(&mut self) {
        self.view = match self.rig {
            Rig::FirstPerson => {
                Mat4::look_at_rpy(self.position, self.roll, self.pitch, self.yaw)
            }
            Rig::Orbit { center } => Mat4::look_at(self.position, center, Vec3::Y),
        };
        self.projection = Mat4::perspective(self.fov, self.aspect, self.near, self.far);
    }
}

/// Unit direction for a yaw around +Y (zero facing +Z) and a pitch measured
/// down from +Y.
fn spherical(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_y, cos_y) = yaw.sin_cos();
    let (sin_p, cos_p) = pitch.sin_cos();
    Vec3::new(sin_y * sin_p, cos_p, cos_y * sin_p)
}

/// Unit-speed first-person displacement: forward/backward along the view
/// direction, strafing in the horizontal plane, up/down along world Y.
///
/// Backward is the exact reverse of forward, vertical part included, not a
/// horizontal-only retreat. Forward then backward at the same pointer lands
/// back on the starting point even when pitched.
fn first_person_step(keys: &KeySet, yaw: f32, pitch: f32) -> Vec3 {
    let forward = spherical(yaw, pitch);
    let left = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
    sum_held(keys, forward, left)
}

/// Unit-speed orbit-center displacement; forward/backward stay horizontal.
fn planar_step(keys: &KeySet, yaw: f32) -> Vec3 {
    let forward = Vec3::new(yaw.sin(), 0.0, yaw.cos());
    let left = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
    sum_held(keys, forward, left)
}

fn sum_held(keys: &KeySet, forward: Vec3, left: Vec3) -> Vec3 {
    let mut step = Vec3::ZERO;
    for (key, dir) in [
        (CameraKey::Forward, forward),
        (CameraKey::Backward, -forward),
        (CameraKey::Left, left),
        (CameraKey::Right, -left),
        (CameraKey::Up, Vec3::Y),
        (CameraKey::Down, -Vec3::Y),
    ] {
        if keys.contains(key) {
            step += dir;
        }
    }
    step
}
