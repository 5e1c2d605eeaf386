use crate::core::io::gro::GroStructure;
use crate::core::io::ndx::{IndexFile, IndexGroup};
use thiserror::Error;

/// Names of the two temperature-coupling groups written to the index file
/// and referenced by the generated MDP files.
///
/// The defaults match a membrane protein-ligand system: the solute group
/// bundles protein, ligand and lipids, the solvent group water and ions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcGroups {
    pub solute: String,
    pub solvent: String,
}

impl Default for TcGroups {
    fn default() -> Self {
        Self {
            solute: "Protein_unk_PA_PC_OL".to_string(),
            solvent: "Water_and_ions".to_string(),
        }
    }
}

static PROTEIN_RESIDUES: phf::Set<&'static str> = phf::phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    // Protonation variants and caps common in equilibrated systems.
    "HID", "HIE", "HIP", "HSD", "HSE", "HSP", "CYX", "CYM", "ASH", "GLH",
    "LYN", "ACE", "NME", "NMA", "NHE",
};

static LIPID_RESIDUES: phf::Set<&'static str> = phf::phf_set! {
    "PA", "PC", "OL", "POPC", "POPE", "POPS", "CHL1",
};

static WATER_RESIDUES: phf::Set<&'static str> = phf::phf_set! {
    "SOL", "HOH", "WAT", "TIP3", "TIP4", "SPC",
};

static ION_RESIDUES: phf::Set<&'static str> = phf::phf_set! {
    "NA", "CL", "K", "MG", "CA", "ZN", "NA+", "CL-", "K+", "SOD", "CLA", "POT",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueClass {
    Protein,
    Ligand,
    Lipid,
    Water,
    Ion,
}

/// Classifies a residue name. The ligand name is matched verbatim (GROMACS
/// topologies are case-sensitive); everything else is matched case-folded.
pub fn classify(residue_name: &str, ligand_resname: &str) -> Option<ResidueClass> {
    if residue_name == ligand_resname {
        return Some(ResidueClass::Ligand);
    }
    let upper = residue_name.to_ascii_uppercase();
    if PROTEIN_RESIDUES.contains(upper.as_str()) {
        Some(ResidueClass::Protein)
    } else if LIPID_RESIDUES.contains(upper.as_str()) {
        Some(ResidueClass::Lipid)
    } else if WATER_RESIDUES.contains(upper.as_str()) {
        Some(ResidueClass::Water)
    } else if ION_RESIDUES.contains(upper.as_str()) {
        Some(ResidueClass::Ion)
    } else {
        None
    }
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error(
        "Cannot classify residue '{residue_name}' (residue {residue_number}) into a coupling group"
    )]
    UnclassifiedResidue {
        residue_name: String,
        residue_number: usize,
    },
    #[error("Coupling group '{group}' would be empty")]
    EmptyGroup { group: String },
}

/// Builds the index groups for a parsed structure.
///
/// Every atom must land in exactly one of the two coupling groups; an
/// unclassifiable residue aborts the setup rather than silently leaving
/// atoms uncoupled at grompp time.
pub fn build_index(
    structure: &GroStructure,
    ligand_resname: &str,
    groups: &TcGroups,
) -> Result<IndexFile, IndexError> {
    let mut system = Vec::with_capacity(structure.atoms.len());
    let mut protein = Vec::new();
    let mut ligand = Vec::new();
    let mut lipids = Vec::new();
    let mut water = Vec::new();
    let mut ions = Vec::new();

    for atom in &structure.atoms {
        system.push(atom.serial);
        match classify(&atom.residue_name, ligand_resname) {
            Some(ResidueClass::Protein) => protein.push(atom.serial),
            Some(ResidueClass::Ligand) => ligand.push(atom.serial),
            Some(ResidueClass::Lipid) => lipids.push(atom.serial),
            Some(ResidueClass::Water) => water.push(atom.serial),
            Some(ResidueClass::Ion) => ions.push(atom.serial),
            None => {
                return Err(IndexError::UnclassifiedResidue {
                    residue_name: atom.residue_name.clone(),
                    residue_number: atom.residue_number,
                });
            }
        }
    }

    let mut solute = Vec::with_capacity(protein.len() + ligand.len() + lipids.len());
    solute.extend_from_slice(&protein);
    solute.extend_from_slice(&ligand);
    solute.extend_from_slice(&lipids);
    solute.sort_unstable();

    let mut solvent = Vec::with_capacity(water.len() + ions.len());
    solvent.extend_from_slice(&water);
    solvent.extend_from_slice(&ions);
    solvent.sort_unstable();

    if solute.is_empty() {
        return Err(IndexError::EmptyGroup {
            group: groups.solute.clone(),
        });
    }
    if solvent.is_empty() {
        return Err(IndexError::EmptyGroup {
            group: groups.solvent.clone(),
        });
    }

    let mut index = IndexFile::default();
    index.groups.push(IndexGroup::new("System", system));
    index.groups.push(IndexGroup::new("Protein", protein));
    index.groups.push(IndexGroup::new(ligand_resname, ligand));
    index.groups.push(IndexGroup::new("Lipids", lipids));
    index.groups.push(IndexGroup::new("Water", water));
    index.groups.push(IndexGroup::new("Ions", ions));
    index
        .groups
        .push(IndexGroup::new(groups.solute.clone(), solute));
    index
        .groups
        .push(IndexGroup::new(groups.solvent.clone(), solvent));

    Ok(index)
}
