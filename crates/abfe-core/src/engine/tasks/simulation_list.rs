use crate::core::models::phase::AlchemicalPhase;
use crate::core::templates::window_path_list;
use crate::engine::context::SetupContext;
use crate::engine::error::SetupError;
use std::fmt::Write;
use std::fs;
use tracing::info;

/// Writes `simulations.list` (one window directory per line, in run order)
/// and returns the space-separated window path list for the submission
/// scripts.
pub fn run(context: &SetupContext) -> Result<String, SetupError> {
    let layout = context.layout;
    let schedule = &context.config.schedule;

    let mut content = String::new();
    for phase in AlchemicalPhase::RUN_ORDER {
        for window in 0..schedule.windows(phase) {
            writeln!(content, "{}", phase.window_dir(window))
                .expect("writing to String cannot fail");
        }
    }

    let target = layout.simulations_list();
    fs::write(&target, content).map_err(|e| SetupError::io(&target, e))?;
    info!(
        "Wrote simulation list with {} window(s) to {:?}",
        schedule.total_windows(),
        target
    );

    Ok(window_path_list(schedule))
}
