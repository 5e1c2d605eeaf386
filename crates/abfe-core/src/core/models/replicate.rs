/// Identifies one replicate of the ABFE protocol for a ligand.
///
/// The suffix combines the protocol tag with a one-based replicate index
/// (`van1_hrex_r3`); the on-disk folder prepends `abfe_` to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicateTag {
    protocol: String,
    index: usize,
}

impl ReplicateTag {
    pub fn new(protocol_tag: &str, index: usize) -> Self {
        Self {
            protocol: protocol_tag.to_string(),
            index,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The replicate suffix, e.g. `van1_hrex_r1`.
    pub fn suffix(&self) -> String {
        format!("{}_r{}", self.protocol, self.index)
    }

    /// The ABFE folder name, e.g. `abfe_van1_hrex_r1`.
    pub fn folder_name(&self) -> String {
        format!("abfe_{}", self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_and_folder_follow_naming_scheme() {
        let tag = ReplicateTag::new("van1_hrex", 2);
        assert_eq!(tag.suffix(), "van1_hrex_r2");
        assert_eq!(tag.folder_name(), "abfe_van1_hrex_r2");
        assert_eq!(tag.index(), 2);
    }

    #[test]
    fn custom_protocol_tags_are_respected() {
        let tag = ReplicateTag::new("charmm_hrex", 11);
        assert_eq!(tag.folder_name(), "abfe_charmm_hrex_r11");
    }
}
