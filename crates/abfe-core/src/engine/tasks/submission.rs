use crate::core::templates::{ScriptContext, SubmissionTemplate};
use crate::engine::context::SetupContext;
use crate::engine::error::SetupError;
use std::fs;
use tracing::info;

/// Renders the primary and continuation submission scripts from their
/// templates into the ABFE folder.
pub fn run(context: &SetupContext, simulation_list: &str) -> Result<(), SetupError> {
    let layout = context.layout;
    let config = context.config;

    let values = ScriptContext {
        job_name: context.ligand(),
        archer_nodes: config.archer_nodes,
        simulation_list,
    };

    let jobs = [
        (&config.template_script, layout.submission_script()),
        (&config.contd_script, layout.contd_submission_script()),
    ];
    for (template_path, target) in jobs {
        let template = SubmissionTemplate::load(template_path)?;
        let rendered = template.render(&values)?;
        fs::write(&target, rendered).map_err(|e| SetupError::io(&target, e))?;
        info!("Rendered submission script {:?}", target);
    }

    Ok(())
}
