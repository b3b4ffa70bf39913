//! Renderer contract.
//!
//! The engine never draws; it hands a `FrameData` to whatever implements
//! `Renderer` once per tick. The web bridge implements it by flattening the
//! frame into buffers the JS renderer reads.

use super::camera::PerspectiveCamera;
use crate::components::mesh::Color;
use crate::core::scene::Scene;
use crate::systems::lighting::LightState;

/// Everything a backend needs to draw one frame.
pub struct FrameData<'a> {
    pub scene: &'a Scene,
    pub camera: &'a PerspectiveCamera,
    pub lighting: &'a LightState,
    pub background: Color,
}

/// Renderer trait for drawing backends.
///
/// ```ignore
/// struct CanvasRenderer { /* ... */ }
///
/// impl Renderer for CanvasRenderer {
///     fn backend(&self) -> &'static str { "webgl2" }
///     fn render(&mut self, frame: &FrameData) { /* encode draw calls */ }
///     fn resize(&mut self, width: u32, height: u32) { /* resize targets */ }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g. "buffer", "webgl2").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn render(&mut self, frame: &FrameData);

    fn resize(&mut self, width: u32, height: u32);
}

/// Renderer that draws nothing. Useful headless and in tests.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    fn backend(&self) -> &'static str {
        "null"
    }

    fn render(&mut self, _frame: &FrameData) {
        self.frames += 1;
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}
