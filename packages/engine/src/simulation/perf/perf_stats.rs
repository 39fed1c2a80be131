use wasm_bindgen::prelude::*;

use crate::domain::pool::ParticlePool;

use super::step::TickSummary;

/// Wall-clock reading taken when a timed tick begins
#[derive(Clone, Copy)]
pub(crate) struct TickStart(
    #[cfg(target_arch = "wasm32")] f64,
    #[cfg(not(target_arch = "wasm32"))] std::time::Instant,
);

impl TickStart {
    pub(crate) fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            TickStart(js_sys::Date::now())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            TickStart(std::time::Instant::now())
        }
    }

    fn elapsed_ms(self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.0
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.0.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Snapshot of the last tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) particles_ticked: u32,
    pub(super) particles_recycled: u32,
    pub(super) attached: u32,
    pub(super) failed: u32,
    pub(super) pending: u32,
    pub(super) pool_size: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    /// Snapshot a finished tick
    pub(crate) fn record_tick<H>(
        &mut self,
        started: TickStart,
        summary: TickSummary,
        pool: &ParticlePool<H>,
        frame: u64,
    ) {
        self.particles_ticked = summary.ticked;
        self.particles_recycled = summary.recycled;
        self.attached = pool.attached_count() as u32;
        self.failed = pool.failed_count() as u32;
        self.pending = pool.pending_count() as u32;
        self.pool_size = pool.len() as u32;
        self.frame = frame;
        self.tick_ms = started.elapsed_ms();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_ticked(&self) -> u32 { self.particles_ticked }
    #[wasm_bindgen(getter)]
    pub fn particles_recycled(&self) -> u32 { self.particles_recycled }
    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> u32 { self.attached }
    #[wasm_bindgen(getter)]
    pub fn failed(&self) -> u32 { self.failed }
    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> u32 { self.pending }
    #[wasm_bindgen(getter)]
    pub fn pool_size(&self) -> u32 { self.pool_size }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
