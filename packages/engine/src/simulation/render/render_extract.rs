use crate::core::random::RandomSource;

use super::AnimatorCore;

/// Floats per packed particle: `[slot, x, y, z, rotation_y, scale]`
pub const TRANSFORM_STRIDE: usize = 6;

pub(super) fn extract_transforms<R: RandomSource, H>(core: &mut AnimatorCore<R, H>) -> usize {
    let buffer = &mut core.render.transforms;
    let mut packed = 0usize;

    for (slot, particle) in core.pool.active() {
        let base = packed * TRANSFORM_STRIDE;
        let out = &mut buffer[base..base + TRANSFORM_STRIDE];
        out[0] = slot as f32;
        out[1] = particle.position.x;
        out[2] = particle.position.y;
        out[3] = particle.position.z;
        out[4] = particle.rotation.y;
        out[5] = particle.scale();
        packed += 1;
    }

    core.render.packed = packed;
    packed
}

pub(super) fn packed_transforms<R: RandomSource, H>(core: &AnimatorCore<R, H>) -> &[f32] {
    &core.render.transforms[..core.render.packed * TRANSFORM_STRIDE]
}
