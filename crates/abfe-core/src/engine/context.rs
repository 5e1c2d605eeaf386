use crate::core::models::layout::AbfeLayout;
use crate::engine::config::SetupConfig;
use crate::engine::progress::ProgressReporter;

/// Borrowed state shared by the setup tasks of one (ligand, replicate) pair.
pub struct SetupContext<'a> {
    pub config: &'a SetupConfig,
    pub layout: &'a AbfeLayout,
    pub reporter: &'a ProgressReporter<'a>,
}

impl<'a> SetupContext<'a> {
    pub fn new(
        config: &'a SetupConfig,
        layout: &'a AbfeLayout,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            config,
            layout,
            reporter,
        }
    }

    pub fn ligand(&self) -> &str {
        self.layout.ligand()
    }
}
