//! Scene layer: turns per-object model matrices into draw uniforms and places
//! the demo scenes' objects.
//!
//! # Invariants
//! - Scene code only reads camera state; it never mutates it.
//! - An object whose model matrix has no normal matrix is left out of the
//!   draw list instead of being drawn with a made-up fallback.

mod cornell;
mod lights;
mod orrery;
mod renderer;
mod uniforms;

pub use cornell::{BoxData, CornellBox, CornellFrame, CornellParams, SphereData};
pub use lights::{DirectionalLight, PointLight, SpotLight};
pub use orrery::Orrery;
pub use renderer::{DebugTextRenderer, Renderer};
pub use uniforms::{DrawItem, FrameUniforms, ObjectUniforms, SceneObject, draw_list};

pub fn crate_info() -> &'static str {
    "orrery-scene v0.1.0"
}
