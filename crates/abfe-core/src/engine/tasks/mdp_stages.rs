use crate::core::mdp::{self, MdpParams, SimStage};
use crate::core::models::phase::AlchemicalPhase;
use crate::engine::context::SetupContext;
use crate::engine::error::SetupError;
use std::fs;
use tracing::{debug, info};

/// Creates the per-window directory tree and renders one `grompp.mdp` per
/// (phase, window, stage) combination.
pub fn run(context: &SetupContext) -> Result<(), SetupError> {
    let layout = context.layout;
    let config = context.config;
    let mut files = 0usize;

    for phase in AlchemicalPhase::SETUP_ORDER {
        for window in 0..config.schedule.windows(phase) {
            for stage in SimStage::ALL {
                let dir = layout
                    .abfe_dir()
                    .join(phase.window_dir(window))
                    .join(stage.dir_name());
                fs::create_dir_all(&dir).map_err(|e| SetupError::io(&dir, e))?;

                let mdp = mdp::render(&MdpParams {
                    phase,
                    window,
                    stage,
                    schedule: &config.schedule,
                    couple_moltype: &config.ligand_resname,
                    groups: &config.groups,
                });
                let path = dir.join("grompp.mdp");
                fs::write(&path, mdp).map_err(|e| SetupError::io(&path, e))?;
                files += 1;
            }
        }
        debug!(
            phase = phase.tag(),
            windows = config.schedule.windows(phase),
            "Created lambda window directories."
        );
    }

    info!("Wrote {} MDP file(s) under {:?}", files, layout.abfe_dir());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tasks::test_support::replicate_fixture;

    #[test]
    fn creates_four_stages_for_every_window() {
        let fixture = replicate_fixture();
        run(&fixture.context()).unwrap();

        let abfe = fixture.layout().abfe_dir();
        for (phase, last) in [("rest", 11), ("coul", 10), ("vdw", 20)] {
            for stage in ["min", "nvt", "npt", "prod"] {
                let first = abfe.join(format!("{}.00", phase)).join(stage);
                let end = abfe.join(format!("{}.{:02}", phase, last)).join(stage);
                assert!(first.join("grompp.mdp").is_file(), "missing {:?}", first);
                assert!(end.join("grompp.mdp").is_file(), "missing {:?}", end);
            }
        }
        // No window beyond the schedule.
        assert!(!abfe.join("coul.11").exists());
        assert!(!abfe.join("rest.12").exists());
    }

    #[test]
    fn rendered_mdp_carries_the_window_state() {
        let fixture = replicate_fixture();
        run(&fixture.context()).unwrap();

        let mdp = std::fs::read_to_string(
            fixture
                .layout()
                .abfe_dir()
                .join("vdw.07")
                .join("prod")
                .join("grompp.mdp"),
        )
        .unwrap();
        assert!(mdp.contains("init-lambda-state"));
        assert!(mdp.lines().any(|l| l.starts_with("init-lambda-state") && l.ends_with("= 7")));
        assert!(mdp.contains("couple-moltype"));
    }
}
