pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::error::SetupError;
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{NodeId, FrameTime};
pub use components::mesh::{Color, Geometry, Material, MeshComponent, BlendMode};
pub use components::node::Node;
pub use core::ray::Ray;
pub use core::scene::Scene;
pub use core::scheduler::FrameScheduler;
pub use core::time::{FrameClock, DEFAULT_MAX_FRAME_DT};
pub use input::event::InputEvent;
pub use renderer::camera::{PerspectiveCamera, CameraUniform, Viewport};
pub use renderer::controls::{CameraController, OrbitControls, OrbitSettings};
pub use renderer::instance::{MeshInstance, RenderBuffer};
pub use renderer::traits::{Renderer, FrameData, NullRenderer};
pub use systems::lighting::{PointLight, LightState, LIGHT_FLOATS};
pub use systems::render::build_render_buffer;

// Glam re-export so games share the engine's math types
pub use glam;
