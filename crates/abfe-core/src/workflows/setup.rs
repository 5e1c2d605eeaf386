use crate::core::models::layout::AbfeLayout;
use crate::core::models::replicate::ReplicateTag;
use crate::engine::config::SetupConfig;
use crate::engine::context::SetupContext;
use crate::engine::error::SetupError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use std::fs::{self, File};
use tracing::{info, instrument, warn};

/// Summary of one batch-preparation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub replicates_created: usize,
    pub replicates_skipped: usize,
    pub ligands_skipped: usize,
}

/// Prepares ABFE folders for every (ligand, replicate) pair.
///
/// Ligands without a directory under the base path are skipped with a
/// warning; existing ABFE folders are never touched. Any error inside a
/// replicate's setup aborts the whole run (no rollback of partially created
/// folders).
#[instrument(skip_all, name = "setup_workflow")]
pub fn run(config: &SetupConfig, reporter: &ProgressReporter) -> Result<SetupReport, SetupError> {
    let mut report = SetupReport::default();

    reporter.report(Progress::BatchStart {
        total_replicates: (config.ligands.len() * config.num_replicates) as u64,
    });

    for ligand in &config.ligands {
        let ligand_dir = config.base_path.join(ligand);
        if !ligand_dir.is_dir() {
            warn!("Ligand directory not found: {:?}", ligand_dir);
            reporter.report(Progress::LigandSkipped {
                name: ligand.clone(),
            });
            report.ligands_skipped += 1;
            continue;
        }

        info!("Setting up ABFE folders for ligand: {}", ligand);
        reporter.report(Progress::LigandStart {
            name: ligand.clone(),
        });

        for replicate in 1..=config.num_replicates {
            let tag = ReplicateTag::new(&config.protocol_tag, replicate);
            let layout =
                AbfeLayout::new(&config.base_path, ligand, &config.vanilla_folder, &tag);

            if layout.abfe_dir().exists() {
                warn!("{:?} already exists. Skipping...", layout.abfe_dir());
                reporter.report(Progress::ReplicateSkipped);
                report.replicates_skipped += 1;
                continue;
            }

            let context = SetupContext::new(config, &layout, reporter);
            if let Err(e) = setup_replicate(&context) {
                tracing::error!(
                    "Error setting up ABFE folder for {} replicate {}: {}",
                    ligand,
                    tag.suffix(),
                    e
                );
                return Err(e);
            }

            info!(
                "ABFE folder setup completed for {} replicate {}",
                ligand,
                tag.suffix()
            );
            reporter.report(Progress::ReplicateFinish);
            report.replicates_created += 1;
        }
    }

    reporter.report(Progress::BatchFinish);
    info!(
        created = report.replicates_created,
        skipped = report.replicates_skipped,
        ligands_skipped = report.ligands_skipped,
        "Batch preparation finished."
    );
    Ok(report)
}

/// Runs the task sequence for one fresh ABFE folder.
fn setup_replicate(context: &SetupContext) -> Result<(), SetupError> {
    let abfe_dir = context.layout.abfe_dir();
    fs::create_dir_all(abfe_dir).map_err(|e| SetupError::io(abfe_dir, e))?;

    tasks::restraints::run(context)?;
    tasks::stage_inputs::run(context)?;
    tasks::fep_system::run(context)?;
    tasks::index::run(context)?;
    tasks::mdp_stages::run(context)?;
    let simulation_list = tasks::simulation_list::run(context)?;
    tasks::submission::run(context, &simulation_list)?;

    // Empty marker consumed by the HREX runner.
    let marker = context.layout.plumed_marker();
    File::create(&marker).map_err(|e| SetupError::io(&marker, e))?;

    Ok(())
}
