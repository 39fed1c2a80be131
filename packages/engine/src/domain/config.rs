//! Animator configuration, loadable from a JSON bundle.
//!
//! Every field has a default matching the greeting scene: 80 particles
//! spawned in a 10x10x10 box above the floor, drifting up by 0.02 per frame
//! and wrapping from y = 5 back to y = -5.

use serde::{Deserialize, Serialize};

use crate::core::math::Range;
use crate::core::random::DEFAULT_SEED;
use crate::error::{AnimatorError, Result};

pub const DEFAULT_POOL_SIZE: u32 = 80;
pub const DEFAULT_STEP: f32 = 0.02;
pub const DEFAULT_UPPER_EXIT: f32 = 5.0;
pub const DEFAULT_LOWER_RESPAWN: f32 = -5.0;

/// Per-axis spawn ranges. Recycling reuses `x` and `z`.
///
/// Spawn height is drawn from `[0, y.max]`; only `y.max` is used.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnBounds {
    pub x: Range,
    pub y: Range,
    pub z: Range,
}

impl Default for SpawnBounds {
    fn default() -> Self {
        Self {
            x: Range::new(-5.0, 5.0),
            y: Range::new(0.0, 10.0),
            z: Range::new(-5.0, 5.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Default per-frame drift and spin increment
    pub step: f32,
    /// A particle above this height is recycled
    pub upper_exit: f32,
    /// Height a recycled particle restarts from
    pub lower_respawn: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            upper_exit: DEFAULT_UPPER_EXIT,
            lower_respawn: DEFAULT_LOWER_RESPAWN,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<()> {
        finite("motion.step", self.step)?;
        finite("motion.upper_exit", self.upper_exit)?;
        finite("motion.lower_respawn", self.lower_respawn)?;
        if self.lower_respawn >= self.upper_exit {
            return Err(AnimatorError::InvalidBounds {
                lower: self.lower_respawn,
                upper: self.upper_exit,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    pub pool_size: u32,
    pub seed: u32,
    pub spawn: SpawnBounds,
    pub scale: Range,
    pub motion: MotionConfig,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            seed: DEFAULT_SEED,
            spawn: SpawnBounds::default(),
            scale: Range::new(0.0, 0.01),
            motion: MotionConfig::default(),
        }
    }
}

impl AnimatorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnimatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        range("spawn.x", self.spawn.x)?;
        range("spawn.y", self.spawn.y)?;
        range("spawn.z", self.spawn.z)?;
        range("scale", self.scale)?;
        if self.spawn.y.max < 0.0 {
            return Err(AnimatorError::InvalidValue {
                name: "spawn.y.max",
                value: self.spawn.y.max,
            });
        }
        if self.scale.min < 0.0 {
            return Err(AnimatorError::InvalidValue {
                name: "scale.min",
                value: self.scale.min,
            });
        }
        self.motion.validate()
    }
}

fn range(name: &'static str, r: Range) -> Result<()> {
    if r.is_valid() {
        Ok(())
    } else {
        Err(AnimatorError::InvalidRange { name, min: r.min, max: r.max })
    }
}

fn finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnimatorError::InvalidValue { name, value })
    }
}
