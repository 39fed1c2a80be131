use heartdrift_engine::{AnimatorConfig, AnimatorCore, Xorshift32};

#[test]
fn perf_smoke_step() {
    let config = AnimatorConfig { pool_size: 4096, ..AnimatorConfig::default() };
    let mut core = AnimatorCore::<Xorshift32, u32>::from_config(&config).unwrap();
    core.enable_perf_metrics(true);
    for handle in 0..4096 {
        core.attach(handle).unwrap();
    }
    for _ in 0..10 {
        core.step();
    }
    let stats = core.get_perf_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert_eq!(stats.particles_ticked(), 4096);
    assert_eq!(stats.frame(), 10);
}
