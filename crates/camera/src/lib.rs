//! Camera: position and orientation state driven once per frame by held keys
//! and the accumulated pointer, producing view and projection matrices.
//!
//! # Invariants
//! - `view_matrix()` and `projection_matrix()` are recomputed by every
//!   `update()` and are never stale once it returns.
//! - Queued [`orrery_input::Action`]s are applied at the start of the next
//!   `update()`, before any key or pointer input.
//! - In orbit mode the eye stays exactly `orbit_radius` away from the center.
//! - Motion is per update call, not per second.

mod camera;
mod config;

pub use camera::{Camera, CameraMode};
pub use config::{CameraConfig, ConfigError};

pub fn crate_info() -> &'static str {
    "orrery-camera v0.1.0"
}
