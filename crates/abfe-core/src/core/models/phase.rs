/// The three legs of the alchemical decoupling cycle for a bound complex.
///
/// The complex leg of an ABFE calculation switches the Boresch restraints on
/// first, then annihilates the ligand charges, then decouples the van der
/// Waals interactions. Setup (folder creation) and execution (submission
/// list) iterate the phases in different orders; see [`SETUP_ORDER`] and
/// [`RUN_ORDER`].
///
/// [`SETUP_ORDER`]: AlchemicalPhase::SETUP_ORDER
/// [`RUN_ORDER`]: AlchemicalPhase::RUN_ORDER
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlchemicalPhase {
    /// Restraint switching (`rest`).
    Restraint,
    /// Charge annihilation (`coul`).
    Coulomb,
    /// Van der Waals decoupling (`vdw`).
    VanDerWaals,
}

impl AlchemicalPhase {
    /// Order in which phase directories are created.
    pub const SETUP_ORDER: [AlchemicalPhase; 3] = [
        AlchemicalPhase::Coulomb,
        AlchemicalPhase::Restraint,
        AlchemicalPhase::VanDerWaals,
    ];

    /// Order in which the windows are simulated: restraints must be fully
    /// switched on before charges are removed, and charges must be gone
    /// before the vdW decoupling starts.
    pub const RUN_ORDER: [AlchemicalPhase; 3] = [
        AlchemicalPhase::Restraint,
        AlchemicalPhase::Coulomb,
        AlchemicalPhase::VanDerWaals,
    ];

    /// The short tag used for window directory names and MDP comments.
    pub fn tag(self) -> &'static str {
        match self {
            AlchemicalPhase::Restraint => "rest",
            AlchemicalPhase::Coulomb => "coul",
            AlchemicalPhase::VanDerWaals => "vdw",
        }
    }

    /// Directory name for a zero-based lambda window, e.g. `rest.00`.
    pub fn window_dir(self, window: usize) -> String {
        format!("{}.{:02}", self.tag(), window)
    }
}

/// Number of lambda windows per phase.
///
/// Defaults match the production protocol: 12 restraint, 11 coulomb and 21
/// vdW windows (44 simulations per replicate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LambdaSchedule {
    pub rest: usize,
    pub coul: usize,
    pub vdw: usize,
}

impl Default for LambdaSchedule {
    fn default() -> Self {
        Self {
            rest: 12,
            coul: 11,
            vdw: 21,
        }
    }
}

impl LambdaSchedule {
    pub fn windows(&self, phase: AlchemicalPhase) -> usize {
        match phase {
            AlchemicalPhase::Restraint => self.rest,
            AlchemicalPhase::Coulomb => self.coul,
            AlchemicalPhase::VanDerWaals => self.vdw,
        }
    }

    pub fn total_windows(&self) -> usize {
        self.rest + self.coul + self.vdw
    }

    /// Evenly spaced lambda values from 0 to 1 (inclusive) for a phase.
    ///
    /// Requires at least two windows per phase; the config builder rejects
    /// schedules that violate this.
    pub fn lambdas(&self, phase: AlchemicalPhase) -> Vec<f64> {
        let n = self.windows(phase);
        (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
    }
}
