pub mod camera;
pub mod controls;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{CameraUniform, PerspectiveCamera, Viewport};
pub use controls::{CameraController, OrbitControls, OrbitSettings};
pub use instance::{MeshInstance, RenderBuffer};
pub use traits::{FrameData, NullRenderer, Renderer};
