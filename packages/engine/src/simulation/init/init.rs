use crate::domain::config::MotionConfig;
use crate::domain::pool::ParticlePool;

use super::perf_stats::PerfStats;
use super::render_extract::TRANSFORM_STRIDE;
use super::{AnimatorCore, RenderBuffers};

pub(super) fn create_animator_core<R, H>(
    pool: ParticlePool<H>,
    motion: MotionConfig,
    rng: R,
) -> AnimatorCore<R, H> {
    let capacity = pool.len() * TRANSFORM_STRIDE;
    AnimatorCore {
        pool,
        motion,
        rng,
        frame: 0,
        // Allocated once here; ticks and extraction only write in place.
        render: RenderBuffers {
            transforms: vec![0.0; capacity],
            packed: 0,
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
