use crate::core::math::{Range, Vec3};
use crate::core::random::RandomSource;
use crate::domain::config::SpawnBounds;

/// A single floating decoration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Euler angles; only `y` is animated
    pub rotation: Vec3,
    scale: f32,
}

impl Particle {
    pub fn new(position: Vec3, scale: f32) -> Self {
        Self { position, rotation: Vec3::zero(), scale }
    }

    /// Draw a spawn transform from the configured bounds. Height always
    /// starts from the floor at 0; `bounds.y.min` does not apply at spawn.
    pub fn spawn(rng: &mut impl RandomSource, bounds: &SpawnBounds, scale: Range) -> Self {
        let position = Vec3::new(
            rng.uniform(bounds.x.min, bounds.x.max),
            rng.uniform(0.0, bounds.y.max),
            rng.uniform(bounds.z.min, bounds.z.max),
        );
        let scale = rng.uniform(scale.min, scale.max);
        Self::new(position, scale)
    }

    /// Uniform scale fixed at spawn
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn scale_vec(&self) -> Vec3 {
        Vec3::splat(self.scale)
    }
}

/// Load state of a pool slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotState<H> {
    /// Asset not delivered yet
    Pending,
    /// Visual handle delivered; the slot animates and renders
    Attached(H),
    /// Loader gave up; the slot never animates
    Failed,
}

#[derive(Clone, Debug)]
pub struct Slot<H> {
    pub(crate) particle: Particle,
    pub(crate) state: SlotState<H>,
}

impl<H> Slot<H> {
    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn state(&self) -> &SlotState<H> {
        &self.state
    }

    pub fn handle(&self) -> Option<&H> {
        match &self.state {
            SlotState::Attached(h) => Some(h),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SlotState::Attached(_))
    }
}
