use crate::{DrawItem, FrameUniforms};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes the camera uniforms and the draw list for one frame.
/// It never feeds back into camera or scene state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &FrameUniforms, items: &[DrawItem]) -> Self::Output;
}

/// Produces a human-readable dump of a frame's uniforms. Used by the CLI and
/// tests in place of a GPU backend.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Print full matrices instead of just translations.
    pub verbose: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

fn write_matrix(out: &mut String, label: &str, cols: &[f32], n: usize) {
    out.push_str(&format!("  {label}:\n"));
    for row in 0..n {
        let values: Vec<String> = (0..n)
            .map(|col| format!("{:>9.4}", cols[col * n + row]))
            .collect();
        out.push_str(&format!("    [{}]\n", values.join(" ")));
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameUniforms, items: &[DrawItem]) -> String {
        let mut out = String::new();
        let p = frame.camera_position;
        out.push_str(&format!("=== Frame ({} objects) ===\n", items.len()));
        out.push_str(&format!(
            "Camera: pos=({:.3}, {:.3}, {:.3})\n",
            p.x, p.y, p.z
        ));
        if self.verbose {
            write_matrix(&mut out, "view", &frame.view.to_cols_array(), 4);
            write_matrix(&mut out, "projection", &frame.projection.to_cols_array(), 4);
        }

        for item in items {
            let t = item.uniforms.model.translation();
            out.push_str(&format!(
                "  [{}] pos=({:.2}, {:.2}, {:.2})\n",
                item.name, t.x, t.y, t.z
            ));
            if self.verbose {
                write_matrix(&mut out, "model", &item.uniforms.model.to_cols_array(), 4);
                write_matrix(&mut out, "normal", &item.uniforms.normal.to_cols_array(), 3);
            }
        }

        out
    }
}
