use orrery_math::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Action, KeyBindings, KeySet, PointerAccumulator};

/// Raw events from the windowing/UI layer.
///
/// Internally tagged so recorded sessions read naturally:
/// ```yaml
/// - event: key_down
///   key: w
/// - event: pointer_moved
///   dx: 12.0
///   dy: -3.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RawInput {
    KeyDown { key: String },
    KeyUp { key: String },
    /// Relative pointer motion in pixels (pointer-lock movement deltas).
    PointerMoved { dx: f32, dy: f32 },
    Wheel { delta_y: f32 },
    /// Window lost focus or pointer lock was released.
    Blur,
    Resize { width: u32, height: u32 },
    /// The UI's camera-mode control changed.
    ModeToggled,
    /// Vertical field of view set from the UI, in degrees.
    FovChanged { degrees: f32 },
}

/// Folds raw events into held keys, the pointer accumulator and camera
/// actions. Owned by the frame loop; the camera reads `keys()` and
/// `pointer()` once per update.
#[derive(Debug, Clone)]
pub struct InputState {
    bindings: KeyBindings,
    keys: KeySet,
    pointer: PointerAccumulator,
    viewport: Vec2,
}

impl InputState {
    pub fn new(bindings: KeyBindings, width: u32, height: u32) -> Self {
        Self {
            bindings,
            keys: KeySet::new(),
            pointer: PointerAccumulator::new(),
            viewport: Vec2::new(width as f32, height as f32),
        }
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.position()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Apply one raw event. Returns the camera action it produces, if any.
    pub fn handle(&mut self, event: RawInput) -> Option<Action> {
        match event {
            RawInput::KeyDown { key } => {
                match self.bindings.resolve(&key) {
                    Some(k) => {
                        self.keys.press(k);
                    }
                    None => tracing::trace!(key = %key, "ignoring unbound key"),
                }
                None
            }
            RawInput::KeyUp { key } => {
                if let Some(k) = self.bindings.resolve(&key) {
                    self.keys.release(k);
                }
                None
            }
            RawInput::PointerMoved { dx, dy } => {
                self.pointer.accumulate(Vec2::new(dx, dy), self.viewport);
                None
            }
            RawInput::Wheel { delta_y } => Some(Action::Zoom(delta_y)),
            RawInput::Blur => {
                self.keys.clear();
                None
            }
            RawInput::Resize { width, height } => {
                self.viewport = Vec2::new(width as f32, height as f32);
                Some(Action::Resize { width, height })
            }
            RawInput::ModeToggled => Some(Action::ToggleMode),
            RawInput::FovChanged { degrees } => Some(Action::SetFov(degrees.to_radians())),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(KeyBindings::default(), 1280, 720)
    }
}
