use orrery_engine::{
    EngineContext, FrameScheduler, Game, GameConfig, InputEvent, Renderer, SetupError,
};
use crate::buffer::BufferRenderer;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    scheduler: FrameScheduler,
    renderer: BufferRenderer,
    config: GameConfig,
    pending: Vec<G::Message>,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            scheduler: FrameScheduler::new(config.max_frame_dt),
            renderer: BufferRenderer::with_capacity(config.max_instances),
            config,
            game,
            pending: Vec::new(),
            initialized: false,
        }
    }

    /// Initialize the game, optionally feeding it host data first.
    /// Call once after construction; a second call fails.
    pub fn init(&mut self, data_json: Option<&str>) -> Result<(), SetupError> {
        if self.initialized {
            return Err(SetupError::AlreadyInitialized);
        }
        if let Some(json) = data_json {
            self.game.load_data(json)?;
        }
        self.game.init(&mut self.ctx)?;
        self.renderer.resize(
            self.config.viewport_width as u32,
            self.config.viewport_height as u32,
        );
        self.initialized = true;
        self.collect_messages();
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Hand one input event to the engine and then the game. Runs to completion.
    pub fn dispatch(&mut self, event: InputEvent) {
        if !self.initialized {
            log::debug!("input before init ignored: {event:?}");
            return;
        }
        self.ctx.apply_input(&event);
        if let InputEvent::Resize { width, height } = event {
            self.renderer.resize(width as u32, height as u32);
        }
        self.game.handle_input(&mut self.ctx, event);
        self.collect_messages();
    }

    /// Run one frame: clamp dt, update game, update camera, fill the buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }
        self.scheduler
            .tick(dt, &mut self.game, &mut self.ctx, &mut self.renderer);
        self.collect_messages();
    }

    fn collect_messages(&mut self) {
        self.pending.extend(self.game.drain_messages());
    }

    /// Take every pending UI message.
    pub fn take_messages(&mut self) -> Vec<G::Message> {
        std::mem::take(&mut self.pending)
    }

    /// Pending UI messages as a JSON array. Clears the queue.
    pub fn take_messages_json(&mut self) -> String {
        let messages = self.take_messages();
        match serde_json::to_string(&messages) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize {} UI messages: {e}", messages.len());
                "[]".to_string()
            }
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    pub fn renderer(&self) -> &BufferRenderer {
        &self.renderer
    }

    pub fn elapsed(&self) -> f64 {
        self.scheduler.elapsed()
    }

    // ---- Pointer accessors for zero-copy reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.renderer.instances().instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.renderer.instances().instance_count()
    }

    pub fn translucent_start(&self) -> u32 {
        self.renderer.instances().translucent_start
    }

    pub fn instance_floats(&self) -> u32 {
        BufferRenderer::instance_floats()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.renderer.camera_ptr()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.renderer.lights_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.renderer.lights().len() as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.renderer.ambient()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.renderer.ambient()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.renderer.ambient()[2]
    }

    pub fn background(&self) -> u32 {
        self.renderer.background()
    }

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }
}
