use crate::core::index::TcGroups;
use crate::core::models::phase::{AlchemicalPhase, LambdaSchedule};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid parameter {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// Fully resolved configuration for one batch-preparation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupConfig {
    /// Base directory containing the ligand folders.
    pub base_path: PathBuf,
    /// Ligand folder names to prepare.
    pub ligands: Vec<String>,
    /// Replicates to set up per ligand, indexed 1..=N.
    pub num_replicates: usize,
    /// Template for the primary submission script.
    pub template_script: PathBuf,
    /// Template for the continuation submission script.
    pub contd_script: PathBuf,
    /// Node count substituted into the submission scripts.
    pub archer_nodes: u32,
    /// Name of the equilibrated plain-MD folder inside each ligand directory.
    pub vanilla_folder: String,
    /// Protocol tag used in replicate suffixes, e.g. `van1_hrex`.
    pub protocol_tag: String,
    /// Residue/moleculetype name of the decoupled ligand.
    pub ligand_resname: String,
    pub groups: TcGroups,
    pub schedule: LambdaSchedule,
}

#[derive(Default)]
pub struct SetupConfigBuilder {
    base_path: Option<PathBuf>,
    ligands: Option<Vec<String>>,
    num_replicates: Option<usize>,
    template_script: Option<PathBuf>,
    contd_script: Option<PathBuf>,
    archer_nodes: Option<u32>,
    vanilla_folder: Option<String>,
    protocol_tag: Option<String>,
    ligand_resname: Option<String>,
    groups: Option<TcGroups>,
    schedule: Option<LambdaSchedule>,
}

impl SetupConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_path(mut self, path: PathBuf) -> Self {
        self.base_path = Some(path);
        self
    }
    pub fn ligands(mut self, ligands: Vec<String>) -> Self {
        self.ligands = Some(ligands);
        self
    }
    pub fn num_replicates(mut self, n: usize) -> Self {
        self.num_replicates = Some(n);
        self
    }
    pub fn template_script(mut self, path: PathBuf) -> Self {
        self.template_script = Some(path);
        self
    }
    pub fn contd_script(mut self, path: PathBuf) -> Self {
        self.contd_script = Some(path);
        self
    }
    pub fn archer_nodes(mut self, nodes: u32) -> Self {
        self.archer_nodes = Some(nodes);
        self
    }
    pub fn vanilla_folder(mut self, name: impl Into<String>) -> Self {
        self.vanilla_folder = Some(name.into());
        self
    }
    pub fn protocol_tag(mut self, tag: impl Into<String>) -> Self {
        self.protocol_tag = Some(tag.into());
        self
    }
    pub fn ligand_resname(mut self, resname: impl Into<String>) -> Self {
        self.ligand_resname = Some(resname.into());
        self
    }
    pub fn groups(mut self, groups: TcGroups) -> Self {
        self.groups = Some(groups);
        self
    }
    pub fn schedule(mut self, schedule: LambdaSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn build(self) -> Result<SetupConfig, ConfigError> {
        let ligands = self
            .ligands
            .ok_or(ConfigError::MissingParameter("ligands"))?;
        if ligands.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "ligands",
                reason: "at least one ligand is required".to_string(),
            });
        }

        let num_replicates = self
            .num_replicates
            .ok_or(ConfigError::MissingParameter("num_replicates"))?;
        if num_replicates == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "num_replicates",
                reason: "must be at least 1".to_string(),
            });
        }

        let schedule = self.schedule.unwrap_or_default();
        for phase in AlchemicalPhase::RUN_ORDER {
            if schedule.windows(phase) < 2 {
                return Err(ConfigError::InvalidParameter {
                    parameter: "schedule",
                    reason: format!(
                        "phase '{}' needs at least 2 lambda windows",
                        phase.tag()
                    ),
                });
            }
        }

        Ok(SetupConfig {
            base_path: self
                .base_path
                .ok_or(ConfigError::MissingParameter("base_path"))?,
            ligands,
            num_replicates,
            template_script: self
                .template_script
                .ok_or(ConfigError::MissingParameter("template_script"))?,
            contd_script: self
                .contd_script
                .ok_or(ConfigError::MissingParameter("contd_script"))?,
            archer_nodes: self
                .archer_nodes
                .ok_or(ConfigError::MissingParameter("archer_nodes"))?,
            vanilla_folder: self.vanilla_folder.unwrap_or_else(|| "vanilla".to_string()),
            protocol_tag: self.protocol_tag.unwrap_or_else(|| "van1_hrex".to_string()),
            ligand_resname: self.ligand_resname.unwrap_or_else(|| "unk".to_string()),
            groups: self.groups.unwrap_or_default(),
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> SetupConfigBuilder {
        SetupConfigBuilder::new()
            .base_path(PathBuf::from("/data/fep"))
            .ligands(vec!["lig_01".to_string()])
            .num_replicates(3)
            .template_script(PathBuf::from("job.sh.hbs"))
            .contd_script(PathBuf::from("job_contd.sh.hbs"))
            .archer_nodes(22)
    }

    #[test]
    fn optional_parameters_fall_back_to_protocol_defaults() {
        let config = minimal_builder().build().unwrap();
        assert_eq!(config.vanilla_folder, "vanilla");
        assert_eq!(config.protocol_tag, "van1_hrex");
        assert_eq!(config.ligand_resname, "unk");
        assert_eq!(config.groups, TcGroups::default());
        assert_eq!(config.schedule, LambdaSchedule::default());
    }

    #[test]
    fn missing_required_parameter_is_reported_by_name() {
        let err = SetupConfigBuilder::new()
            .ligands(vec!["lig_01".to_string()])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("num_replicates"));
    }

    #[test]
    fn empty_ligand_list_is_invalid() {
        let err = minimal_builder().ligands(vec![]).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "ligands",
                ..
            }
        ));
    }

    #[test]
    fn zero_replicates_is_invalid() {
        let err = minimal_builder().num_replicates(0).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "num_replicates",
                ..
            }
        ));
    }

    #[test]
    fn single_window_schedule_is_invalid() {
        let err = minimal_builder()
            .schedule(LambdaSchedule {
                rest: 1,
                coul: 11,
                vdw: 21,
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                parameter: "schedule",
                ..
            }
        ));
    }
}
