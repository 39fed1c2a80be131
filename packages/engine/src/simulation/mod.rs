//! Animator - fixed pool of floating particles advanced once per frame
//!
//! `AnimatorCore` is plain Rust and owns everything it mutates: the injected
//! pool, the injected random source, and preallocated render buffers.
//! `facade::Animator` wraps it for JS.
//!
//! - init/      construction
//! - step/      per-frame tick and recycling
//! - commands/  loader results (attach / failure) and manual placement
//! - render/    transform extraction for the renderer
//! - perf/      optional per-tick metrics

use log::info;

use crate::core::random::{RandomSource, Xorshift32};
use crate::domain::config::{AnimatorConfig, MotionConfig};
use crate::domain::particle::Particle;
use crate::domain::pool::ParticlePool;
use crate::error::Result;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{Animator, TransformLayout};
pub use perf_stats::PerfStats;
pub use render_extract::TRANSFORM_STRIDE;
pub use step::TickSummary;

use perf_stats::TickStart;

pub(crate) struct RenderBuffers {
    /// `TRANSFORM_STRIDE` floats per pool slot, sized once at construction
    transforms: Vec<f32>,
    /// Particles written by the last extraction
    packed: usize,
}

/// The particle animator
pub struct AnimatorCore<R = Xorshift32, H = u32> {
    pool: ParticlePool<H>,
    motion: MotionConfig,
    rng: R,

    frame: u64,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl<H> AnimatorCore<Xorshift32, H> {
    /// Build the pool and animator described by `config`
    pub fn from_config(config: &AnimatorConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = Xorshift32::new(config.seed);
        let pool = ParticlePool::initialize(
            config.pool_size as usize,
            config.spawn,
            config.scale,
            &mut rng,
        );
        info!(
            "animator ready: {} particles, exit at y > {}, respawn at y = {}",
            config.pool_size, config.motion.upper_exit, config.motion.lower_respawn
        );
        Ok(Self::new(pool, config.motion, rng))
    }
}

impl<R: RandomSource, H> AnimatorCore<R, H> {
    /// Wrap an already initialized pool. The pool keeps its size for the
    /// lifetime of the animator.
    pub fn new(pool: ParticlePool<H>, motion: MotionConfig, rng: R) -> Self {
        init::create_animator_core(pool, motion, rng)
    }

    pub fn pool(&self) -> &ParticlePool<H> { &self.pool }

    pub fn pool_size(&self) -> usize { self.pool.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn motion(&self) -> &MotionConfig { &self.motion }

    pub fn set_motion(&mut self, motion: MotionConfig) -> Result<()> {
        settings::set_motion(self, motion)
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Loader delivered a visual handle
    pub fn attach(&mut self, handle: H) -> Result<usize> {
        commands::attach(self, handle)
    }

    /// Loader failed for one particle asset
    pub fn report_failure(&mut self, reason: &str) -> Result<usize> {
        commands::report_failure(self, reason)
    }

    /// Move a particle by hand; rotation and scale are kept
    pub fn place_particle(&mut self, slot: usize, x: f32, y: f32, z: f32) -> Result<()> {
        commands::place_particle(self, slot, x, y, z)
    }

    pub fn particle(&self, slot: usize) -> Option<&Particle> {
        self.pool.particle(slot)
    }

    /// Advance every attached particle by `delta_step`
    pub fn tick(&mut self, delta_step: f32) -> TickSummary {
        step::tick(self, delta_step)
    }

    /// Tick with the configured default step
    pub fn step(&mut self) -> TickSummary {
        let delta_step = self.motion.step;
        step::tick(self, delta_step)
    }

    /// Pack attached transforms into the render buffer, returns the count
    pub fn extract_transforms(&mut self) -> usize {
        render_extract::extract_transforms(self)
    }

    pub fn transforms(&self) -> &[f32] {
        render_extract::packed_transforms(self)
    }

    /// Get pointer to transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.render.transforms.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.render.packed * TRANSFORM_STRIDE
    }

    pub fn transforms_capacity(&self) -> usize {
        self.render.transforms.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
