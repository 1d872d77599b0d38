use serde::{Deserialize, Serialize};

/// A discrete camera action produced by the input layer.
///
/// Actions are queued on the camera and drained at the start of its next
/// update, so event callbacks never mutate camera state between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Scroll-wheel delta; positive values move the orbit camera away.
    Zoom(f32),
    /// Switch between first-person and orbit mode.
    ToggleMode,
    /// The viewport changed size; the camera derives its aspect ratio.
    Resize { width: u32, height: u32 },
    /// Set the vertical field of view, in radians.
    SetFov(f32),
}
