use super::perf_stats::StepStats;
use super::SessionCore;

pub(super) fn enable_perf_metrics(core: &mut SessionCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
        core.step_timer = None;
    }
}

pub(super) fn get_step_stats(core: &SessionCore) -> StepStats {
    core.perf_stats.clone()
}

pub(super) fn set_ambient_temperature(core: &mut SessionCore, temperature: u8) {
    core.ambient_temperature = temperature;
}

pub(super) fn get_ambient_temperature(core: &SessionCore) -> u8 {
    core.ambient_temperature
}
