//! Input boundary: raw window/UI events folded into held logical keys, an
//! accumulated pointer position and discrete camera actions.
//!
//! # Invariants
//! - The camera never sees raw events, only [`KeySet`], the pointer position
//!   and queued [`Action`]s.
//! - The accumulated vertical pointer axis stays within
//!   `[-POINTER_Y_LIMIT, POINTER_Y_LIMIT]`, keeping camera pitch off the poles.

pub mod action;
mod keys;
mod pointer;
mod state;

pub use action::Action;
pub use keys::{CameraKey, KeyBindings, KeySet};
pub use pointer::{POINTER_Y_LIMIT, PointerAccumulator};
pub use state::{InputState, RawInput};

pub fn crate_info() -> &'static str {
    "orrery-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
