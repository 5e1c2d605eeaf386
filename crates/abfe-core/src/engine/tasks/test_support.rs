//! Shared filesystem fixtures for the task tests: a temporary base directory
//! with one ligand, a populated vanilla folder and submission templates.

use crate::core::models::layout::AbfeLayout;
use crate::core::models::replicate::ReplicateTag;
use crate::engine::config::{SetupConfig, SetupConfigBuilder};
use crate::engine::context::SetupContext;
use crate::engine::progress::ProgressReporter;
use std::fs;
use tempfile::TempDir;

pub const BORESCH_TOML: &str = r#"
receptor-atoms = [1203, 1187, 1169]
ligand-atoms = [4305, 4311, 4318]

[equilibrium]
distance = 0.52
angle-a = 84.5
angle-b = 112.3
dihedral-a = -120.1
dihedral-b = 55.0
dihedral-c = 178.8

[force-constants]
distance = 4184.0
angle = 41.84
dihedral = 41.84
"#;

pub const COMPLEX_GRO: &str = "\
Membrane complex
 8
    1ALA      N    1   0.000   0.000   0.000
    1ALA     CA    2   0.100   0.000   0.000
    2unk     C1    3   0.200   0.000   0.000
    3PC      P8    4   0.300   0.000   0.000
    4OL      C2    5   0.350   0.000   0.000
    5SOL     OW    6   0.400   0.000   0.000
    5SOL    HW1    7   0.410   0.000   0.000
    6NA      NA    8   0.500   0.000   0.000
   2.00000   2.00000   2.00000
";

pub const TOPOL_TOP: &str = "\
; Topology for the equilibrated complex
#include \"ligand.itp\"

[ system ]
Complex in water

[ molecules ]
Protein  1
unk      1
";

pub const TEMPLATE: &str = "\
#!/bin/bash
#SBATCH --job-name={{job_name}}
#SBATCH --nodes={{archer_nodes}}
SIMULATIONS=\"{{simulation_list}}\"
";

pub struct ReplicateFixture {
    /// Keeps the backing directory alive for the fixture's lifetime.
    pub _tempdir: TempDir,
    pub config: SetupConfig,
    pub layout: AbfeLayout,
    pub reporter: ProgressReporter<'static>,
}

impl ReplicateFixture {
    pub fn context(&self) -> SetupContext<'_> {
        SetupContext::new(&self.config, &self.layout, &self.reporter)
    }

    pub fn layout(&self) -> &AbfeLayout {
        &self.layout
    }
}

/// A base directory with one ligand (`lig_01`), a populated vanilla folder,
/// both submission templates and an already-created (empty) ABFE folder.
pub fn replicate_fixture() -> ReplicateFixture {
    let tempdir = TempDir::new().expect("create temp dir");
    let base = tempdir.path().join("base");
    let vanilla = base.join("lig_01").join("vanilla");
    fs::create_dir_all(&vanilla).expect("create vanilla dir");

    fs::write(vanilla.join("boresch.toml"), BORESCH_TOML).expect("write boresch.toml");
    fs::write(vanilla.join("complex.gro"), COMPLEX_GRO).expect("write complex.gro");
    fs::write(vanilla.join("topol.top"), TOPOL_TOP).expect("write topol.top");
    fs::write(vanilla.join("ligand.itp"), "[ moleculetype ]\n; unk\n").expect("write ligand.itp");
    fs::write(vanilla.join("posre.itp"), "[ position_restraints ]\n").expect("write posre.itp");

    let templates = tempdir.path().join("templates");
    fs::create_dir_all(&templates).expect("create template dir");
    let template_script = templates.join("job.sh.hbs");
    let contd_script = templates.join("job_contd.sh.hbs");
    fs::write(&template_script, TEMPLATE).expect("write template");
    fs::write(&contd_script, TEMPLATE).expect("write contd template");

    let config = SetupConfigBuilder::new()
        .base_path(base.clone())
        .ligands(vec!["lig_01".to_string()])
        .num_replicates(1)
        .template_script(template_script)
        .contd_script(contd_script)
        .archer_nodes(22)
        .build()
        .expect("valid fixture config");

    let tag = ReplicateTag::new(&config.protocol_tag, 1);
    let layout = AbfeLayout::new(&config.base_path, "lig_01", &config.vanilla_folder, &tag);
    fs::create_dir_all(layout.abfe_dir()).expect("create abfe dir");

    ReplicateFixture {
        _tempdir: tempdir,
        config,
        layout,
        reporter: ProgressReporter::new(),
    }
}
