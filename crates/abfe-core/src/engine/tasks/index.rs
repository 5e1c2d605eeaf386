use crate::core::index::build_index;
use crate::core::io::gro::GroStructure;
use crate::engine::context::SetupContext;
use crate::engine::error::SetupError;
use tracing::info;

/// Parses the coulomb starting structure and writes `index.ndx` with the
/// standard groups plus the two temperature-coupling groups.
pub fn run(context: &SetupContext) -> Result<(), SetupError> {
    let layout = context.layout;
    let config = context.config;

    let structure = GroStructure::read_from_path(layout.coul_gro())?;
    let index = build_index(&structure, &config.ligand_resname, &config.groups)?;

    let target = layout.index_ndx();
    index
        .write_to_path(&target)
        .map_err(|e| SetupError::io(&target, e))?;

    info!(
        "Wrote index file with {} group(s) to {:?}",
        index.groups.len(),
        target
    );
    Ok(())
}
