use glam::Vec3;
use hauntyard_scene::{Light, Scene};

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the scene and a view configuration, then produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable dump of the frame: node/light counts, camera,
/// and every light's position. Used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (nodes={}, lights={}) ===\n",
            scene.node_count(),
            scene.light_count()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        ));

        for (id, light) in scene.lights() {
            match light {
                Light::Point(p) => out.push_str(&format!(
                    "  point [{:.8}] pos=({:.4}, {:.4}, {:.4}) range={:.1}\n",
                    &id.0.to_string()[..8],
                    p.position.x,
                    p.position.y,
                    p.position.z,
                    p.range
                )),
                Light::Directional(d) => out.push_str(&format!(
                    "  directional [{:.8}] from=({:.1}, {:.1}, {:.1})\n",
                    &id.0.to_string()[..8],
                    d.position.x,
                    d.position.y,
                    d.position.z
                )),
            }
        }

        out
    }
}
