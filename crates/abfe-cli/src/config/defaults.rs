pub struct DefaultsConfig {
    pub num_replicates: usize,
    pub archer_nodes: u32,
    pub vanilla_folder: String,
    pub protocol_tag: String,
    pub ligand_resname: String,
    pub solute_group: String,
    pub solvent_group: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            num_replicates: 3,
            archer_nodes: 22,
            vanilla_folder: "vanilla".to_string(),
            protocol_tag: "van1_hrex".to_string(),
            ligand_resname: "unk".to_string(),
            solute_group: "Protein_unk_PA_PC_OL".to_string(),
            solvent_group: "Water_and_ions".to_string(),
        }
    }
}
