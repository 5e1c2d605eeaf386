use crate::cli::SetupArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use abfeprep::engine::progress::ProgressReporter;
use abfeprep::workflows;
use tracing::{info, warn};

pub fn run(args: SetupArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = config::build_config(&args)?;
    let core_config = &app_config.core_config;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Preparing ABFE folders for {} ligand(s), {} replicate(s) each...",
        core_config.ligands.len(),
        core_config.num_replicates
    );
    info!("Invoking the core setup workflow...");

    let report = workflows::setup::run(core_config, &reporter)?;

    if report.ligands_skipped > 0 {
        warn!(
            "{} ligand folder(s) were not found under {:?}.",
            report.ligands_skipped, core_config.base_path
        );
    }

    if report.replicates_created == 0 {
        println!("Warning: no new ABFE folders were created.");
    }
    println!(
        "✓ {} replicate folder(s) created, {} already existed, {} ligand(s) not found.",
        report.replicates_created, report.replicates_skipped, report.ligands_skipped
    );

    Ok(())
}
