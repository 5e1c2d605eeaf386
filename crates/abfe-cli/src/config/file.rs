use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Partial run configuration read from a TOML file. Every key is optional;
/// unset values fall back to CLI arguments and then to the built-in
/// defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "num-replicates")]
    pub num_replicates: Option<usize>,
    #[serde(rename = "archer-nodes")]
    pub archer_nodes: Option<u32>,
    #[serde(rename = "vanilla-folder")]
    pub vanilla_folder: Option<String>,
    #[serde(rename = "protocol-tag")]
    pub protocol_tag: Option<String>,
    #[serde(rename = "ligand-resname")]
    pub ligand_resname: Option<String>,
    pub groups: Option<FileGroupsConfig>,
    pub windows: Option<FileWindowsConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGroupsConfig {
    pub solute: Option<String>,
    pub solvent: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileWindowsConfig {
    pub rest: Option<usize>,
    pub coul: Option<usize>,
    pub vdw: Option<usize>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration file from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
