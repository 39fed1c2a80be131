//! Randomness sources for spawn and recycle draws.
//!
//! The pool and animator never reach for a global generator; callers inject
//! anything implementing [`RandomSource`]. Tests use scripted sources so
//! recycle positions can be asserted exactly.

use rand::Rng;

/// Default xorshift seed
pub const DEFAULT_SEED: u32 = 12345;

/// Uniform draw capability
pub trait RandomSource {
    /// Uniform value in `[min, max]`. Returns `min` when the interval is empty.
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        (**self).uniform(min, max)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        (**self).uniform(min, max)
    }
}

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Map `t` in `[0, 1)` onto `[min, max]`. Falls back to a lerp when the
/// width overflows so huge ranges stay finite.
#[inline]
fn scale_unit(min: f32, max: f32, t: f32) -> f32 {
    let width = max - min;
    let v = if width.is_finite() {
        min + t * width
    } else {
        min * (1.0 - t) + max * t
    };
    v.clamp(min, max)
}

/// Seeded xorshift32 source, cheap enough to run inside a frame callback
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        let state = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { state }
    }

    /// Next value in `[0, 1)`, built from the top 24 bits
    #[inline]
    pub fn next_unit(&mut self) -> f32 {
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        // Also catches NaN bounds
        if !(max > min) {
            return min;
        }
        scale_unit(min, max, self.next_unit())
    }
}

/// Adapter for any `rand` generator
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if !(max > min) {
            return min;
        }
        // gen_range panics when the width overflows
        if (max - min).is_finite() {
            self.0.gen_range(min..=max)
        } else {
            scale_unit(min, max, self.0.gen::<f32>())
        }
    }
}
