use crate::engine::context::SetupContext;
use crate::engine::error::SetupError;
use std::fs;
use tracing::info;

/// Assembles the alchemical system: the charge-annihilation starting
/// structure (`complex_coul.gro`) and the decoupling topology (retitled
/// `[ system ]` entry plus the restraint include hook).
pub fn run(context: &SetupContext) -> Result<(), SetupError> {
    let layout = context.layout;

    let source = layout.complex_gro();
    fs::copy(&source, layout.coul_gro()).map_err(|e| SetupError::io(&source, e))?;

    let path = layout.topology();
    let content = fs::read_to_string(&path).map_err(|e| SetupError::io(&path, e))?;
    let rewritten =
        rewrite_topology(&content, context.ligand()).ok_or_else(|| SetupError::Topology {
            path: path.clone(),
            reason: "no [ system ] section found".to_string(),
        })?;
    fs::write(&path, rewritten).map_err(|e| SetupError::io(&path, e))?;

    info!(
        "Assembled alchemical system for '{}' in {:?}",
        context.ligand(),
        layout.abfe_dir()
    );
    Ok(())
}

/// Retitles the `[ system ]` entry and appends the restraint include at the
/// end of the file, where GROMACS expects intermolecular interactions.
/// Returns `None` if the topology has no `[ system ]` section.
fn rewrite_topology(content: &str, ligand: &str) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut in_system = false;
    let mut retitled = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(section) = section_name(trimmed) {
            in_system = section.eq_ignore_ascii_case("system");
            lines.push(line.to_string());
            continue;
        }

        if in_system && !retitled && !trimmed.is_empty() && !trimmed.starts_with(';') {
            lines.push(format!("ABFE complex: {}", ligand));
            retitled = true;
            continue;
        }

        lines.push(line.to_string());
    }

    if !retitled {
        return None;
    }

    let mut out = lines.join("\n");
    out.push_str("\n\n; Boresch restraints, switched on over the restraint lambdas\n");
    out.push_str("#include \"boresch_restraints.itp\"\n");
    Some(out)
}

fn section_name(trimmed: &str) -> Option<&str> {
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.trim())
}
