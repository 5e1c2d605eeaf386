use crate::engine::context::SetupContext;
use crate::engine::error::SetupError;
use std::fs;
use tracing::{debug, info};

/// Copies the equilibrated inputs from the vanilla folder into the ABFE
/// folder: `complex.gro`, `topol.top` and every `.itp` beside them.
pub fn run(context: &SetupContext) -> Result<(), SetupError> {
    let layout = context.layout;

    for required in [layout.vanilla_complex_gro(), layout.vanilla_topology()] {
        if !required.is_file() {
            return Err(SetupError::MissingInput { path: required });
        }
    }

    let mut copied = 0usize;
    let mut copy = |source: std::path::PathBuf,
                    target: std::path::PathBuf|
     -> Result<(), SetupError> {
        fs::copy(&source, &target).map_err(|e| SetupError::io(&source, e))?;
        debug!("Copied {:?} -> {:?}", source, target);
        copied += 1;
        Ok(())
    };

    copy(layout.vanilla_complex_gro(), layout.complex_gro())?;
    copy(layout.vanilla_topology(), layout.topology())?;

    let vanilla = layout.vanilla_dir();
    let entries = fs::read_dir(vanilla).map_err(|e| SetupError::io(vanilla, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SetupError::io(vanilla, e))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "itp") {
            let name = entry.file_name();
            copy(path, layout.abfe_dir().join(name))?;
        }
    }

    info!(
        "Staged {} input file(s) from {:?}",
        copied,
        layout.vanilla_dir()
    );
    Ok(())
}
