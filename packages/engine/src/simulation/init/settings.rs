use crate::domain::config::MotionConfig;
use crate::error::Result;

use super::perf_stats::PerfStats;
use super::AnimatorCore;

pub(super) fn enable_perf_metrics<R, H>(core: &mut AnimatorCore<R, H>, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<R, H>(core: &AnimatorCore<R, H>) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_motion<R, H>(core: &mut AnimatorCore<R, H>, motion: MotionConfig) -> Result<()> {
    motion.validate()?;
    core.motion = motion;
    Ok(())
}
