use crate::api::game::{EngineContext, Game};
use crate::api::types::FrameTime;
use crate::core::time::FrameClock;
use crate::renderer::traits::{FrameData, Renderer};

/// Drives one frame per host refresh: clamp delta, advance the game,
/// update the camera controller, then request a render.
///
/// Never blocks and holds no timers; the host calls `tick` from its
/// animation callback for as long as it wants frames.
pub struct FrameScheduler {
    clock: FrameClock,
}

impl FrameScheduler {
    pub fn new(max_frame_dt: f32) -> Self {
        Self {
            clock: FrameClock::new(max_frame_dt),
        }
    }

    pub fn tick<G: Game + ?Sized>(
        &mut self,
        frame_dt: f32,
        game: &mut G,
        ctx: &mut EngineContext,
        renderer: &mut dyn Renderer,
    ) -> FrameTime {
        let time = self.clock.advance(frame_dt);

        game.update(ctx, time);
        ctx.controls.update(&mut ctx.camera, time.dt);

        renderer.render(&FrameData {
            scene: &ctx.scene,
            camera: &ctx.camera,
            lighting: &ctx.lighting,
            background: ctx.background,
        });

        time
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(crate::core::time::DEFAULT_MAX_FRAME_DT)
    }
}
