//! Heartdrift Engine - floating particle animator for the greeting scene
//!
//! A fixed pool of decorative particles drifts upward and spins every frame;
//! any particle leaving the top of the view is recycled to the bottom with
//! new lateral coordinates. Model loading, audio and DOM stay in JS.
//!
//! Architecture:
//! - core/        - Math, random sources
//! - domain/      - Particles, the pool, configuration
//! - simulation/  - Animator core + wasm facade

pub mod core;
pub mod domain;
pub mod error;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // Route `log` records to the browser console; a second init is a no-op
    #[cfg(target_arch = "wasm32")]
    {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        console_log::init_with_level(level).ok();
    }

    log::info!("💖 Heartdrift WASM engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{Range, Vec3};
pub use crate::core::random::{RandomSource, RngSource, Xorshift32};
pub use domain::config::{AnimatorConfig, MotionConfig, SpawnBounds};
pub use domain::particle::{Particle, SlotState};
pub use domain::pool::ParticlePool;
pub use error::AnimatorError;
pub use simulation::{Animator, AnimatorCore, PerfStats, TickSummary, TRANSFORM_STRIDE};
