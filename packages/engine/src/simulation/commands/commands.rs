use crate::core::random::RandomSource;
use crate::error::{AnimatorError, Result};

use super::AnimatorCore;

pub(super) fn attach<R: RandomSource, H>(core: &mut AnimatorCore<R, H>, handle: H) -> Result<usize> {
    core.pool.attach(handle)
}

pub(super) fn report_failure<R: RandomSource, H>(
    core: &mut AnimatorCore<R, H>,
    reason: &str,
) -> Result<usize> {
    core.pool.report_failure(reason)
}

pub(super) fn place_particle<R: RandomSource, H>(
    core: &mut AnimatorCore<R, H>,
    slot: usize,
    x: f32,
    y: f32,
    z: f32,
) -> Result<()> {
    for (name, value) in [("x", x), ("y", y), ("z", z)] {
        if !value.is_finite() {
            return Err(AnimatorError::InvalidValue { name, value });
        }
    }
    let particle = core.pool.particle_mut(slot)?;
    particle.position.x = x;
    particle.position.y = y;
    particle.position.z = z;
    Ok(())
}
