use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::SetupArgs;
use crate::error::{CliError, Result};
use abfeprep::core::index::TcGroups;
use abfeprep::core::models::phase::LambdaSchedule;
use abfeprep::engine::config::SetupConfigBuilder;

/// Merges CLI arguments over the optional config file over the built-in
/// defaults into the core setup configuration.
pub fn build_config(args: &SetupArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let num_replicates = args
        .num_replicates
        .or(file_config.num_replicates)
        .unwrap_or(defaults.num_replicates);
    let archer_nodes = args
        .archer_nodes
        .or(file_config.archer_nodes)
        .unwrap_or(defaults.archer_nodes);
    let vanilla_folder = args
        .vanilla_folder
        .clone()
        .or(file_config.vanilla_folder)
        .unwrap_or(defaults.vanilla_folder);
    let protocol_tag = file_config.protocol_tag.unwrap_or(defaults.protocol_tag);
    let ligand_resname = file_config
        .ligand_resname
        .unwrap_or(defaults.ligand_resname);

    let file_groups = file_config.groups.unwrap_or_default();
    let groups = TcGroups {
        solute: file_groups.solute.unwrap_or(defaults.solute_group),
        solvent: file_groups.solvent.unwrap_or(defaults.solvent_group),
    };

    let default_schedule = LambdaSchedule::default();
    let file_windows = file_config.windows.unwrap_or_default();
    let schedule = LambdaSchedule {
        rest: file_windows.rest.unwrap_or(default_schedule.rest),
        coul: file_windows.coul.unwrap_or(default_schedule.coul),
        vdw: file_windows.vdw.unwrap_or(default_schedule.vdw),
    };

    let core_config = SetupConfigBuilder::new()
        .base_path(args.base_path.clone())
        .ligands(args.ligands.clone())
        .num_replicates(num_replicates)
        .template_script(args.template_script.clone())
        .contd_script(args.contd_script.clone())
        .archer_nodes(archer_nodes)
        .vanilla_folder(vanilla_folder)
        .protocol_tag(protocol_tag)
        .ligand_resname(ligand_resname)
        .groups(groups)
        .schedule(schedule)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig { core_config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_setup_args() -> SetupArgs {
        SetupArgs {
            base_path: PathBuf::from("/data/fep"),
            ligands: vec!["lig_01".to_string(), "lig_02".to_string()],
            template_script: PathBuf::from("job.sh.hbs"),
            contd_script: PathBuf::from("job_contd.sh.hbs"),
            num_replicates: None,
            archer_nodes: None,
            vanilla_folder: None,
            config: None,
        }
    }

    #[test]
    fn defaults_fill_everything_the_cli_leaves_unset() {
        let app = build_config(&base_setup_args()).expect("build ok");
        let cfg = app.core_config;

        assert_eq!(cfg.base_path, PathBuf::from("/data/fep"));
        assert_eq!(cfg.ligands.len(), 2);
        assert_eq!(cfg.num_replicates, 3);
        assert_eq!(cfg.archer_nodes, 22);
        assert_eq!(cfg.vanilla_folder, "vanilla");
        assert_eq!(cfg.protocol_tag, "van1_hrex");
        assert_eq!(cfg.ligand_resname, "unk");
        assert_eq!(cfg.groups.solute, "Protein_unk_PA_PC_OL");
        assert_eq!(cfg.groups.solvent, "Water_and_ions");
        assert_eq!(cfg.schedule, LambdaSchedule::default());
    }

    #[test]
    fn build_config_reads_file_and_merges() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        let toml = r#"
            num-replicates = 5
            archer-nodes = 8
            vanilla-folder = "equil"
            protocol-tag = "charmm_hrex"
            ligand-resname = "LIG"

            [groups]
            solute = "Protein_LIG"
            solvent = "Water_and_ions"

            [windows]
            rest = 10
            coul = 10
            vdw = 16
            "#;
        fs::write(&cfg_path, toml).unwrap();

        let mut args = base_setup_args();
        args.config = Some(cfg_path);

        let app = build_config(&args).expect("build ok");
        let cfg = app.core_config;

        assert_eq!(cfg.num_replicates, 5);
        assert_eq!(cfg.archer_nodes, 8);
        assert_eq!(cfg.vanilla_folder, "equil");
        assert_eq!(cfg.protocol_tag, "charmm_hrex");
        assert_eq!(cfg.ligand_resname, "LIG");
        assert_eq!(cfg.groups.solute, "Protein_LIG");
        assert_eq!(
            cfg.schedule,
            LambdaSchedule {
                rest: 10,
                coul: 10,
                vdw: 16
            }
        );
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "num-replicates = 5\narcher-nodes = 8\n").unwrap();

        let mut args = base_setup_args();
        args.config = Some(cfg_path);
        args.num_replicates = Some(10);
        args.vanilla_folder = Some("prep".to_string());

        let app = build_config(&args).expect("build ok");
        let cfg = app.core_config;

        assert_eq!(cfg.num_replicates, 10);
        assert_eq!(cfg.archer_nodes, 8);
        assert_eq!(cfg.vanilla_folder, "prep");
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "unknown-key = 1\n").unwrap();

        let mut args = base_setup_args();
        args.config = Some(cfg_path);

        let err = build_config(&args).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn invalid_merged_values_surface_as_config_errors() {
        let mut args = base_setup_args();
        args.num_replicates = Some(0);

        let err = build_config(&args).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
