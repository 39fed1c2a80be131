use log::debug;

use crate::core::math::Range;
use crate::core::random::RandomSource;
use crate::domain::particle::Particle;

use super::{AnimatorCore, TickStart};

/// What one tick did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub ticked: u32,
    pub recycled: u32,
}

pub(super) fn tick<R: RandomSource, H>(core: &mut AnimatorCore<R, H>, delta_step: f32) -> TickSummary {
    // A NaN step would poison y for good (NaN never exceeds the exit bound)
    if !delta_step.is_finite() {
        debug!("ignoring tick with non-finite step {delta_step}");
        return TickSummary::default();
    }

    let tick_start = core.perf_enabled.then(TickStart::now);

    let upper_exit = core.motion.upper_exit;
    let lower_respawn = core.motion.lower_respawn;
    let bounds = *core.pool.spawn_bounds();

    let mut summary = TickSummary::default();
    let rng = &mut core.rng;

    // Pending and failed slots are skipped; an empty pool is a no-op.
    for particle in core.pool.active_mut() {
        particle.position.y += delta_step;
        particle.rotation.y += delta_step;
        summary.ticked += 1;

        // Recycle in the same tick so y never stays above the exit bound
        if particle.position.y > upper_exit {
            recycle(particle, &mut *rng, lower_respawn, bounds.x, bounds.z);
            summary.recycled += 1;
        }
    }

    core.frame += 1;

    if let Some(started) = tick_start {
        core.perf_stats.record_tick(started, summary, &core.pool, core.frame);
    }

    summary
}

/// Back to the fixed respawn height with fresh lateral coordinates.
/// Scale and rotation are left alone.
#[inline]
fn recycle(particle: &mut Particle, rng: &mut impl RandomSource, lower_respawn: f32, x: Range, z: Range) {
    particle.position.y = lower_respawn;
    particle.position.x = rng.uniform(x.min, x.max);
    particle.position.z = rng.uniform(z.min, z.max);
}
