use super::replicate::ReplicateTag;
use std::path::{Path, PathBuf};

/// Path arithmetic for one (ligand, replicate) pair.
///
/// All artifact locations are derived from here so that no code ever has to
/// change the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbfeLayout {
    ligand: String,
    ligand_dir: PathBuf,
    vanilla_dir: PathBuf,
    abfe_dir: PathBuf,
}

impl AbfeLayout {
    pub fn new(base_path: &Path, ligand: &str, vanilla_folder: &str, tag: &ReplicateTag) -> Self {
        let ligand_dir = base_path.join(ligand);
        let vanilla_dir = ligand_dir.join(vanilla_folder);
        let abfe_dir = ligand_dir.join(tag.folder_name());
        Self {
            ligand: ligand.to_string(),
            ligand_dir,
            vanilla_dir,
            abfe_dir,
        }
    }

    pub fn ligand(&self) -> &str {
        &self.ligand
    }

    pub fn ligand_dir(&self) -> &Path {
        &self.ligand_dir
    }

    /// The equilibrated plain-MD folder the setup stages its inputs from.
    pub fn vanilla_dir(&self) -> &Path {
        &self.vanilla_dir
    }

    pub fn abfe_dir(&self) -> &Path {
        &self.abfe_dir
    }

    // --- Inputs read from the vanilla folder ---

    pub fn vanilla_boresch(&self) -> PathBuf {
        self.vanilla_dir.join("boresch.toml")
    }

    pub fn vanilla_complex_gro(&self) -> PathBuf {
        self.vanilla_dir.join("complex.gro")
    }

    pub fn vanilla_topology(&self) -> PathBuf {
        self.vanilla_dir.join("topol.top")
    }

    // --- Artifacts written into the ABFE folder ---

    pub fn restraints_itp(&self) -> PathBuf {
        self.abfe_dir.join("boresch_restraints.itp")
    }

    pub fn complex_gro(&self) -> PathBuf {
        self.abfe_dir.join("complex.gro")
    }

    /// Starting structure for the charge-annihilation leg.
    pub fn coul_gro(&self) -> PathBuf {
        self.abfe_dir.join("complex_coul.gro")
    }

    pub fn topology(&self) -> PathBuf {
        self.abfe_dir.join("topol.top")
    }

    pub fn index_ndx(&self) -> PathBuf {
        self.abfe_dir.join("index.ndx")
    }

    pub fn simulations_list(&self) -> PathBuf {
        self.abfe_dir.join("simulations.list")
    }

    pub fn submission_script(&self) -> PathBuf {
        self.abfe_dir.join("job_complex_archer.sh")
    }

    pub fn contd_submission_script(&self) -> PathBuf {
        self.abfe_dir.join("job_complex_archer_contd.sh")
    }

    /// Empty marker consumed by the HREX runner.
    pub fn plumed_marker(&self) -> PathBuf {
        self.abfe_dir.join("plumed.dat")
    }
}
