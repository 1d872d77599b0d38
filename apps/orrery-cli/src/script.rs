use std::path::Path;

use anyhow::Context;
use orrery_camera::{Camera, CameraMode};
use orrery_input::{InputState, KeyBindings, RawInput};
use orrery_math::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A recorded camera session: raw input events grouped into frames.
///
/// ```yaml
/// viewport: { width: 800, height: 600 }
/// frames:
///   - events:
///       - event: key_down
///         key: w
///     repeat: 60
///   - events:
///       - event: mode_toggled
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub viewport: Viewport,
    /// Replaces the default key bindings when present.
    #[serde(default)]
    pub bindings: Option<KeyBindings>,
    pub frames: Vec<ScriptFrame>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Events delivered before the first of `repeat` camera updates. Keys stay
/// held across the repeats.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFrame {
    #[serde(default)]
    pub events: Vec<RawInput>,
    #[serde(default = "one")]
    pub repeat: u32,
}

fn one() -> u32 {
    1
}

impl Script {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("parsing script {}", path.display()))
    }

    /// Drive `camera` through every frame, reporting the state after each
    /// script frame.
    pub fn run(&self, camera: &mut Camera) -> Vec<FrameReport> {
        let bindings = self.bindings.clone().unwrap_or_default();
        let mut input = InputState::new(bindings, self.viewport.width, self.viewport.height);
        let mut reports = Vec::with_capacity(self.frames.len());
        let mut updates = 0u64;

        for (index, frame) in self.frames.iter().enumerate() {
            for event in &frame.events {
                if let Some(action) = input.handle(event.clone()) {
                    camera.push_action(action);
                }
            }
            for _ in 0..frame.repeat {
                camera.update(input.pointer(), input.keys());
                updates += 1;
            }
            tracing::debug!(frame = index, updates, "script frame done");
            reports.push(FrameReport::capture(index, updates, input.pointer(), camera));
        }

        reports
    }
}

/// Camera state after one script frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: usize,
    /// Total `update()` calls so far.
    pub updates: u64,
    pub pointer: Vec2,
    pub mode: CameraMode,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub center: Option<Vec3>,
    pub orbit_radius: f32,
    pub view: Mat4,
    pub projection: Mat4,
}

impl FrameReport {
    fn capture(frame: usize, updates: u64, pointer: Vec2, camera: &Camera) -> Self {
        Self {
            frame,
            updates,
            pointer,
            mode: camera.mode(),
            position: camera.position(),
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            roll: camera.roll(),
            center: camera.center(),
            orbit_radius: camera.orbit_radius(),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
        }
    }

    pub fn summary(&self) -> String {
        let p = self.position;
        format!(
            "frame {:>3} ({} updates): {:?} pos=({:.3}, {:.3}, {:.3}) yaw={:.3} pitch={:.3} roll={:.4} radius={:.3}",
            self.frame,
            self.updates,
            self.mode,
            p.x,
            p.y,
            p.z,
            self.yaw,
            self.pitch,
            self.roll,
            self.orbit_radius
        )
    }
}
