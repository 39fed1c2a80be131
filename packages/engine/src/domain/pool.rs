//! Fixed-size particle pool.
//!
//! All N particles get their spawn transform at construction, so the logical
//! pool size never changes. Loader results settle slots in order: each
//! delivered handle attaches the next pending slot, each load failure marks
//! the next pending slot as failed. Only attached slots animate or render.

use log::{debug, warn};

use crate::core::math::Range;
use crate::core::random::RandomSource;
use crate::domain::config::SpawnBounds;
use crate::domain::particle::{Particle, Slot, SlotState};
use crate::error::{AnimatorError, Result};

pub struct ParticlePool<H = u32> {
    slots: Vec<Slot<H>>,
    spawn: SpawnBounds,
    // Index of the next pending slot
    next: usize,
    attached: usize,
    failed: usize,
}

impl<H> ParticlePool<H> {
    /// Build `pool_size` pending slots with freshly drawn spawn transforms
    pub fn initialize(
        pool_size: usize,
        spawn: SpawnBounds,
        scale: Range,
        rng: &mut impl RandomSource,
    ) -> Self {
        let slots = (0..pool_size)
            .map(|_| Slot {
                particle: Particle::spawn(&mut *rng, &spawn, scale),
                state: SlotState::Pending,
            })
            .collect();
        debug!("particle pool initialized with {pool_size} slots");
        Self { slots, spawn, next: 0, attached: 0, failed: 0 }
    }

    /// Logical pool size, independent of load outcomes
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn spawn_bounds(&self) -> &SpawnBounds {
        &self.spawn
    }

    pub fn attached_count(&self) -> usize {
        self.attached
    }

    pub fn failed_count(&self) -> usize {
        self.failed
    }

    pub fn pending_count(&self) -> usize {
        self.slots.len() - self.next
    }

    /// Attach a loaded visual handle to the next pending slot
    pub fn attach(&mut self, handle: H) -> Result<usize> {
        let slot = self.take_next()?;
        self.slots[slot].state = SlotState::Attached(handle);
        self.attached += 1;
        debug!("slot {slot} attached ({}/{})", self.attached, self.slots.len());
        Ok(slot)
    }

    /// Record a load failure; the next pending slot stays out of the animation
    pub fn report_failure(&mut self, reason: &str) -> Result<usize> {
        let slot = self.take_next()?;
        self.slots[slot].state = SlotState::Failed;
        self.failed += 1;
        warn!("slot {slot} failed to load: {reason}");
        Ok(slot)
    }

    fn take_next(&mut self) -> Result<usize> {
        if self.next >= self.slots.len() {
            return Err(AnimatorError::PoolExhausted { pool_size: self.slots.len() });
        }
        let slot = self.next;
        self.next += 1;
        Ok(slot)
    }

    pub fn slot(&self, slot: usize) -> Option<&Slot<H>> {
        self.slots.get(slot)
    }

    pub fn handle(&self, slot: usize) -> Option<&H> {
        self.slots.get(slot).and_then(Slot::handle)
    }

    pub fn particle(&self, slot: usize) -> Option<&Particle> {
        self.slots.get(slot).map(Slot::particle)
    }

    /// Mutable access for placing a particle by hand
    pub fn particle_mut(&mut self, slot: usize) -> Result<&mut Particle> {
        let pool_size = self.slots.len();
        self.slots
            .get_mut(slot)
            .map(|s| &mut s.particle)
            .ok_or(AnimatorError::SlotOutOfRange { slot, pool_size })
    }

    pub fn slots(&self) -> &[Slot<H>] {
        &self.slots
    }

    /// Attached slots with their index
    pub fn active(&self) -> impl Iterator<Item = (usize, &Particle)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, s)| (i, &s.particle))
    }

    pub(crate) fn active_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.slots
            .iter_mut()
            .filter(|s| s.is_active())
            .map(|s| &mut s.particle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::Xorshift32;

    fn pool(n: usize) -> ParticlePool<u32> {
        let mut rng = Xorshift32::new(1);
        ParticlePool::initialize(n, SpawnBounds::default(), Range::new(0.0, 0.01), &mut rng)
    }

    #[test]
    fn spawn_transforms_respect_bounds() {
        let pool = pool(200);
        let bounds = SpawnBounds::default();
        for slot in pool.slots() {
            let p = slot.particle();
            assert!(bounds.x.contains(p.position.x));
            assert!((0.0..=bounds.y.max).contains(&p.position.y));
            assert!(bounds.z.contains(p.position.z));
            assert!((0.0..=0.01).contains(&p.scale()));
            assert_eq!(p.rotation.y, 0.0);
        }
    }

    #[test]
    fn slots_settle_in_order() {
        let mut pool = pool(3);
        assert_eq!(pool.pending_count(), 3);
        assert_eq!(pool.attach(10).unwrap(), 0);
        assert_eq!(pool.report_failure("404").unwrap(), 1);
        assert_eq!(pool.attach(12).unwrap(), 2);

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.attached_count(), 2);
        assert_eq!(pool.failed_count(), 1);
        assert_eq!(pool.pending_count(), 0);
        assert_eq!(pool.handle(0), Some(&10));
        assert_eq!(pool.handle(1), None);
        assert_eq!(pool.slot(1).unwrap().state(), &SlotState::Failed);
        assert_eq!(pool.active().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn settling_past_the_end_is_an_error() {
        let mut pool = pool(1);
        pool.attach(1).unwrap();
        assert!(matches!(pool.attach(2), Err(AnimatorError::PoolExhausted { pool_size: 1 })));
        assert!(matches!(pool.report_failure("late"), Err(AnimatorError::PoolExhausted { .. })));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn particle_mut_checks_bounds() {
        let mut pool = pool(2);
        assert!(pool.particle_mut(1).is_ok());
        assert!(matches!(
            pool.particle_mut(2),
            Err(AnimatorError::SlotOutOfRange { slot: 2, pool_size: 2 })
        ));
    }

    #[test]
    fn empty_pool_is_fine() {
        let mut pool = pool(0);
        assert!(pool.is_empty());
        assert_eq!(pool.active().count(), 0);
        assert!(pool.attach(1).is_err());
    }
}
