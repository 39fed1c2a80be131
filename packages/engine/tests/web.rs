//! Browser-side checks for the JS facade. Run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use heartdrift_engine::{init, Animator, TRANSFORM_STRIDE};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn loader_callbacks_settle_slots() {
    init();
    let mut animator = Animator::new(3, 42).expect("default config");
    assert_eq!(animator.pool_size(), 3);

    assert_eq!(animator.attach(501).unwrap(), 0);
    assert_eq!(animator.report_load_failure("404 heart_in_love.glb").unwrap(), 1);
    assert_eq!(animator.attach(503).unwrap(), 2);
    assert!(animator.attach(504).is_err());

    assert_eq!(animator.attached_count(), 2);
    assert_eq!(animator.failed_count(), 1);
    assert_eq!(animator.pending_count(), 0);
    assert_eq!(animator.slot_handle(2), Some(503));
    assert_eq!(animator.slot_handle(1), None);
}

#[wasm_bindgen_test]
fn frame_loop_keeps_particles_below_exit() {
    let mut animator = Animator::new(80, 7).unwrap();
    for handle in 0..80 {
        animator.attach(handle).unwrap();
    }

    for _ in 0..1200 {
        animator.step();
        let count = animator.extract_transforms();
        assert_eq!(count, 80);
        let packed = &animator.core().transforms()[..count * TRANSFORM_STRIDE];
        for chunk in packed.chunks_exact(TRANSFORM_STRIDE) {
            assert!(chunk[2] <= 5.0);
        }
    }
    assert_eq!(animator.frame(), 1200);

    let layout = animator.transform_layout();
    assert_eq!(layout.stride() as usize, TRANSFORM_STRIDE);
    assert_eq!(layout.len_elements() as usize, 80 * TRANSFORM_STRIDE);
    assert_eq!(layout.len_bytes() as usize, 80 * TRANSFORM_STRIDE * 4);
    assert_eq!(layout.ptr(), animator.transforms_ptr() as u32);
}

#[wasm_bindgen_test]
fn config_json_round_trip_and_errors() {
    let animator = Animator::from_config_json(r#"{"pool_size": 5, "motion": {"step": 0.04}}"#)
        .expect("valid json");
    assert_eq!(animator.pool_size(), 5);
    assert!(animator.config_json().unwrap().contains("\"step\":0.04"));

    assert!(Animator::from_config_json("not json").is_err());
    assert!(Animator::from_config_json(r#"{"motion": {"upper_exit": -9.0}}"#).is_err());
}

#[wasm_bindgen_test]
fn perf_metrics_report_last_tick() {
    let mut animator = Animator::new(2, 1).unwrap();
    animator.attach(1).unwrap();
    animator.enable_perf_metrics(true);
    animator.step();

    let stats = animator.get_perf_stats();
    assert_eq!(stats.particles_ticked(), 1);
    assert_eq!(stats.pending(), 1);
    assert_eq!(stats.pool_size(), 2);
}

#[wasm_bindgen_test]
fn nan_step_from_js_is_ignored() {
    let mut animator = Animator::new(1, 3).unwrap();
    animator.attach(9).unwrap();
    assert_eq!(animator.tick(f32::NAN), 0);
    assert_eq!(animator.frame(), 0);

    animator.tick(0.02);
    animator.extract_transforms();
    let y = animator.core().transforms()[2];
    assert!(y.is_finite());
}
