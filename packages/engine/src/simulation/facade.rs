use wasm_bindgen::prelude::*;

use crate::core::random::Xorshift32;
use crate::domain::config::AnimatorConfig;
use crate::error::AnimatorError;

use super::perf_stats::PerfStats;
use super::render_extract::TRANSFORM_STRIDE;
use super::AnimatorCore;

fn js_err(e: AnimatorError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Where JS finds the packed transforms inside wasm memory
#[wasm_bindgen]
pub struct TransformLayout {
    ptr: u32,
    len_elements: u32,
    len_bytes: u32,
    stride: u32,
}

#[wasm_bindgen]
impl TransformLayout {
    #[wasm_bindgen(getter)]
    pub fn ptr(&self) -> u32 { self.ptr }
    #[wasm_bindgen(getter)]
    pub fn len_elements(&self) -> u32 { self.len_elements }
    #[wasm_bindgen(getter)]
    pub fn len_bytes(&self) -> u32 { self.len_bytes }
    #[wasm_bindgen(getter)]
    pub fn stride(&self) -> u32 { self.stride }
}

/// JS handle to the animator. Loader callbacks report into `attach` /
/// `report_load_failure`; the frame loop calls `step` then reads transforms.
#[wasm_bindgen]
pub struct Animator {
    core: AnimatorCore<Xorshift32, u32>,
    config: AnimatorConfig,
}

#[wasm_bindgen]
impl Animator {
    /// Default scene setup with the given pool size and seed
    #[wasm_bindgen(constructor)]
    pub fn new(pool_size: u32, seed: u32) -> Result<Animator, JsValue> {
        let config = AnimatorConfig { pool_size, seed, ..AnimatorConfig::default() };
        Self::with_config(config).map_err(js_err)
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<Animator, JsValue> {
        let config = AnimatorConfig::from_json(json).map_err(js_err)?;
        Self::with_config(config).map_err(js_err)
    }

    #[wasm_bindgen(getter)]
    pub fn pool_size(&self) -> u32 { self.core.pool_size() as u32 }

    #[wasm_bindgen(getter)]
    pub fn attached_count(&self) -> u32 { self.core.pool().attached_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn failed_count(&self) -> u32 { self.core.pool().failed_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn pending_count(&self) -> u32 { self.core.pool().pending_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Active configuration as JSON
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.config.to_json().map_err(js_err)
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// A heart model finished loading; returns the slot it now drives
    pub fn attach(&mut self, handle: u32) -> Result<u32, JsValue> {
        self.core
            .attach(handle)
            .map(|slot| slot as u32)
            .map_err(js_err)
    }

    /// A heart model failed to load; that slot stays empty
    pub fn report_load_failure(&mut self, reason: &str) -> Result<u32, JsValue> {
        self.core
            .report_failure(reason)
            .map(|slot| slot as u32)
            .map_err(js_err)
    }

    /// Loader handle for a slot, if attached
    pub fn slot_handle(&self, slot: usize) -> Option<u32> {
        self.core.pool().handle(slot).copied()
    }

    /// Advance by an explicit step; returns the number of recycled particles
    pub fn tick(&mut self, delta_step: f32) -> u32 {
        self.core.tick(delta_step).recycled
    }

    /// Advance by the configured step; returns the number of recycled particles
    pub fn step(&mut self) -> u32 {
        self.core.step().recycled
    }

    /// Pack attached transforms for rendering; returns the particle count
    pub fn extract_transforms(&mut self) -> usize {
        self.core.extract_transforms()
    }

    /// Get pointer to the transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms_ptr()
    }

    /// Floats written by the last extraction
    pub fn transforms_len(&self) -> usize {
        self.core.transforms_len()
    }

    pub fn transform_stride(&self) -> usize {
        TRANSFORM_STRIDE
    }

    pub fn transform_layout(&self) -> TransformLayout {
        let len_elements = self.core.transforms_len();
        TransformLayout {
            ptr: self.core.transforms_ptr() as u32,
            len_elements: len_elements as u32,
            len_bytes: (len_elements * std::mem::size_of::<f32>()) as u32,
            stride: TRANSFORM_STRIDE as u32,
        }
    }
}

impl Animator {
    pub fn with_config(config: AnimatorConfig) -> Result<Self, AnimatorError> {
        let core = AnimatorCore::from_config(&config)?;
        Ok(Self { core, config })
    }

    pub fn core(&self) -> &AnimatorCore<Xorshift32, u32> {
        &self.core
    }
}
