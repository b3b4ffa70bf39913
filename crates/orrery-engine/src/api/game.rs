use glam::Vec3;
use serde::Serialize;
use crate::api::error::SetupError;
use crate::api::types::{FrameTime, NodeId};
use crate::components::mesh::Color;
use crate::core::scene::Scene;
use crate::core::time::DEFAULT_MAX_FRAME_DT;
use crate::input::event::InputEvent;
use crate::renderer::camera::{PerspectiveCamera, Viewport};
use crate::renderer::controls::{CameraController, OrbitControls};
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Largest frame delta the clock accepts, in seconds (default: 0.1).
    pub max_frame_dt: f32,
    /// Initial viewport size in CSS pixels.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Vertical field of view in degrees (default: 60).
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Camera home pose; `reset` returns here.
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub background: Color,
    /// Expected number of scene nodes (default: 64).
    pub max_instances: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 100_000.0,
            camera_position: Vec3::new(0.0, 0.0, 10.0),
            camera_target: Vec3::ZERO,
            background: Color::BLACK,
            max_instances: 64,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Messages for the host UI, drained as JSON after each call into the game.
    type Message: Serialize;

    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Accept optional data (JSON) supplied by the host before `init`.
    fn load_data(&mut self, _json: &str) -> Result<(), SetupError> {
        Ok(())
    }

    /// Build the scene and initial state.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), SetupError>;

    /// React to one input event. Runs to completion before the next tick.
    fn handle_input(&mut self, ctx: &mut EngineContext, event: InputEvent);

    /// Advance simulation state by one frame.
    fn update(&mut self, ctx: &mut EngineContext, time: FrameTime);

    /// Take pending host messages.
    fn drain_messages(&mut self) -> Vec<Self::Message> {
        Vec::new()
    }
}

/// Mutable access to engine state, passed to the `Game` callbacks.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: Box<dyn CameraController>,
    pub lighting: LightState,
    pub viewport: Viewport,
    pub background: Color,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        let mut camera = PerspectiveCamera::new(
            config.fov_y_degrees,
            viewport.aspect(),
            config.near,
            config.far,
        );
        camera.position = config.camera_position;
        camera.target = config.camera_target;

        Self {
            scene: Scene::with_capacity(config.max_instances),
            camera,
            controls: Box::new(OrbitControls::new(config.camera_position, config.camera_target)),
            lighting: LightState::new(),
            viewport,
            background: config.background,
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Replace the camera controller.
    pub fn set_controls(&mut self, controls: Box<dyn CameraController>) {
        self.controls = controls;
    }

    /// Update the viewport and keep the camera aspect in sync.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect(self.viewport.aspect());
    }

    /// Engine-level handling that precedes the game's own: resize and
    /// camera manipulation.
    pub fn apply_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::Drag { dx, dy } => self.controls.rotate(dx, dy, self.viewport.height),
            InputEvent::Wheel { delta } => self.controls.zoom(delta),
            _ => {}
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_follows_config() {
        let config = GameConfig {
            camera_position: Vec3::new(0.0, 50.0, 200.0),
            viewport_width: 800.0,
            viewport_height: 400.0,
            ..GameConfig::default()
        };
        let ctx = EngineContext::new(&config);
        assert_eq!(ctx.camera.position, Vec3::new(0.0, 50.0, 200.0));
        assert_eq!(ctx.camera.aspect, 2.0);
        assert!((ctx.camera.fov_y - 60f32.to_radians()).abs() < 1e-6);
        assert_eq!(ctx.controls.target(), Vec3::ZERO);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::default();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert!(b > a);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut ctx = EngineContext::default();
        ctx.apply_input(&InputEvent::Resize { width: 1000.0, height: 500.0 });
        assert_eq!(ctx.viewport.width, 1000.0);
        assert_eq!(ctx.camera.aspect, 2.0);
    }
}
