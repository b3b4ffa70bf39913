use orrery_engine::{
    build_render_buffer, CameraUniform, FrameData, MeshInstance, PointLight, RenderBuffer,
    Renderer,
};

/// `Renderer` that flattens each frame into plain buffers.
/// The JS renderer reads them straight out of wasm memory after `game_tick`.
pub struct BufferRenderer {
    instances: RenderBuffer,
    camera: CameraUniform,
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    background: u32,
    size: (u32, u32),
    frames: u64,
}

impl BufferRenderer {
    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: RenderBuffer::with_capacity(max_instances),
            camera: CameraUniform {
                view_projection: [[0.0; 4]; 4],
                position: [0.0; 4],
            },
            lights: Vec::new(),
            ambient: [1.0, 1.0, 1.0],
            background: 0,
            size: (0, 0),
            frames: 0,
        }
    }

    pub fn instances(&self) -> &RenderBuffer {
        &self.instances
    }

    pub fn camera(&self) -> &CameraUniform {
        &self.camera
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub const fn instance_floats() -> u32 {
        MeshInstance::FLOATS as u32
    }
}

impl Renderer for BufferRenderer {
    fn backend(&self) -> &'static str {
        "buffer"
    }

    fn render(&mut self, frame: &FrameData) {
        build_render_buffer(frame.scene, &mut self.instances);
        self.camera = frame.camera.uniform();
        self.lights.clear();
        self.lights.extend(frame.lighting.iter().copied());
        self.ambient = frame.lighting.ambient();
        self.background = frame.background.hex();
        self.frames += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }
}
