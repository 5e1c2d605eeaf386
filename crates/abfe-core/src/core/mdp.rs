use crate::core::index::TcGroups;
use crate::core::models::phase::{AlchemicalPhase, LambdaSchedule};
use std::fmt::Write;

/// Reference temperature for a membrane system, in K.
const REF_T: &str = "310";
/// Steps per stage. Production runs 5 ns at dt = 2 fs.
const MIN_NSTEPS: u64 = 5_000;
const NVT_NSTEPS: u64 = 50_000;
const NPT_NSTEPS: u64 = 50_000;
const PROD_NSTEPS: u64 = 2_500_000;

/// The simulation stages every lambda window is taken through.
///
/// The submission scripts iterate these as `$STEP` when walking the window
/// directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimStage {
    Minimization,
    Nvt,
    Npt,
    Production,
}

impl SimStage {
    pub const ALL: [SimStage; 4] = [
        SimStage::Minimization,
        SimStage::Nvt,
        SimStage::Npt,
        SimStage::Production,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            SimStage::Minimization => "min",
            SimStage::Nvt => "nvt",
            SimStage::Npt => "npt",
            SimStage::Production => "prod",
        }
    }

    fn is_dynamics(self) -> bool {
        !matches!(self, SimStage::Minimization)
    }
}

/// Everything needed to render one `grompp.mdp`.
#[derive(Debug, Clone)]
pub struct MdpParams<'a> {
    pub phase: AlchemicalPhase,
    pub window: usize,
    pub stage: SimStage,
    pub schedule: &'a LambdaSchedule,
    /// Moleculetype decoupled by the alchemical transformation.
    pub couple_moltype: &'a str,
    pub groups: &'a TcGroups,
}

fn push(out: &mut String, key: &str, value: impl std::fmt::Display) {
    writeln!(out, "{:<24}= {}", key, value).expect("writing to String cannot fail");
}

fn lambda_line(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.4}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lambda vectors for an MDP of the given phase. Phases that run earlier in
/// [`AlchemicalPhase::RUN_ORDER`] are pinned at 1.0, later ones at 0.0, and
/// the phase itself ramps over its windows.
fn lambda_vectors(phase: AlchemicalPhase, schedule: &LambdaSchedule) -> (String, String, String) {
    let n = schedule.windows(phase);
    let ramp = lambda_line(&schedule.lambdas(phase));
    let pinned = |value: f64| lambda_line(&vec![value; n]);

    match phase {
        AlchemicalPhase::Restraint => (ramp, pinned(0.0), pinned(0.0)),
        AlchemicalPhase::Coulomb => (pinned(1.0), ramp, pinned(0.0)),
        AlchemicalPhase::VanDerWaals => (pinned(1.0), pinned(1.0), ramp),
    }
}

/// Renders the MDP file for one (phase, window, stage) combination.
pub fn render(params: &MdpParams) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "; {} / {} stage",
        params.phase.window_dir(params.window),
        params.stage.dir_name()
    )
    .expect("writing to String cannot fail");

    if matches!(params.stage, SimStage::Nvt | SimStage::Npt) {
        push(&mut out, "define", "-DPOSRES");
    }

    match params.stage {
        SimStage::Minimization => {
            push(&mut out, "integrator", "steep");
            push(&mut out, "emtol", "1000.0");
            push(&mut out, "emstep", "0.01");
            push(&mut out, "nsteps", MIN_NSTEPS);
        }
        SimStage::Nvt => {
            push(&mut out, "integrator", "md");
            push(&mut out, "dt", "0.002");
            push(&mut out, "nsteps", NVT_NSTEPS);
        }
        SimStage::Npt => {
            push(&mut out, "integrator", "md");
            push(&mut out, "dt", "0.002");
            push(&mut out, "nsteps", NPT_NSTEPS);
        }
        SimStage::Production => {
            push(&mut out, "integrator", "md");
            push(&mut out, "dt", "0.002");
            push(&mut out, "nsteps", PROD_NSTEPS);
        }
    }

    // Output control. Full-precision trajectories stay off; production keeps
    // compressed frames at a reduced rate.
    push(&mut out, "nstxout", 0);
    push(&mut out, "nstvout", 0);
    push(&mut out, "nstfout", 0);
    push(&mut out, "nstlog", 5000);
    push(&mut out, "nstenergy", 5000);
    let compressed_interval = match params.stage {
        SimStage::Production => 50_000,
        _ => 0,
    };
    push(&mut out, "nstxout-compressed", compressed_interval);

    push(&mut out, "cutoff-scheme", "Verlet");
    push(&mut out, "nstlist", 20);
    push(&mut out, "rlist", "1.2");
    push(&mut out, "coulombtype", "PME");
    push(&mut out, "rcoulomb", "1.2");
    push(&mut out, "vdw-modifier", "Force-switch");
    push(&mut out, "rvdw-switch", "1.0");
    push(&mut out, "rvdw", "1.2");
    push(&mut out, "DispCorr", "no");

    push(&mut out, "constraints", "h-bonds");
    push(&mut out, "constraint-algorithm", "lincs");

    if params.stage.is_dynamics() {
        push(&mut out, "tcoupl", "v-rescale");
        push(
            &mut out,
            "tc-grps",
            format!("{} {}", params.groups.solute, params.groups.solvent),
        );
        push(&mut out, "tau-t", "1.0 1.0");
        push(&mut out, "ref-t", format!("{} {}", REF_T, REF_T));
    }

    match params.stage {
        SimStage::Npt => {
            push(&mut out, "pcoupl", "C-rescale");
            push(&mut out, "pcoupltype", "semiisotropic");
            push(&mut out, "tau-p", "5.0");
            push(&mut out, "ref-p", "1.0 1.0");
            push(&mut out, "compressibility", "4.5e-05 4.5e-05");
            push(&mut out, "refcoord-scaling", "com");
        }
        SimStage::Production => {
            push(&mut out, "pcoupl", "Parrinello-Rahman");
            push(&mut out, "pcoupltype", "semiisotropic");
            push(&mut out, "tau-p", "5.0");
            push(&mut out, "ref-p", "1.0 1.0");
            push(&mut out, "compressibility", "4.5e-05 4.5e-05");
        }
        _ => {}
    }

    if params.stage == SimStage::Nvt {
        push(&mut out, "gen-vel", "yes");
        push(&mut out, "gen-temp", REF_T);
        push(&mut out, "gen-seed", -1);
    } else if params.stage.is_dynamics() {
        push(&mut out, "gen-vel", "no");
        push(&mut out, "continuation", "yes");
    }

    let (rest, coul, vdw) = lambda_vectors(params.phase, params.schedule);
    push(&mut out, "free-energy", "yes");
    push(&mut out, "init-lambda-state", params.window);
    push(&mut out, "calc-lambda-neighbors", -1);
    push(&mut out, "couple-moltype", params.couple_moltype);
    push(&mut out, "couple-lambda0", "vdw-q");
    push(&mut out, "couple-lambda1", "none");
    push(&mut out, "couple-intramol", "no");
    push(&mut out, "nstdhdl", 100);
    push(&mut out, "restraint-lambdas", rest);
    push(&mut out, "coul-lambdas", coul);
    push(&mut out, "vdw-lambdas", vdw);
    push(&mut out, "sc-alpha", "0.5");
    push(&mut out, "sc-power", 1);
    push(&mut out, "sc-sigma", "0.3");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params<'a>(
        phase: AlchemicalPhase,
        window: usize,
        stage: SimStage,
        schedule: &'a LambdaSchedule,
        groups: &'a TcGroups,
    ) -> MdpParams<'a> {
        MdpParams {
            phase,
            window,
            stage,
            schedule,
            couple_moltype: "unk",
            groups,
        }
    }

    fn value_of<'a>(mdp: &'a str, key: &str) -> &'a str {
        mdp.lines()
            .find(|l| l.split('=').next().map(str::trim) == Some(key))
            .and_then(|l| l.split('=').nth(1))
            .map(str::trim)
            .unwrap_or_else(|| panic!("key '{}' not found", key))
    }

    #[test]
    fn window_index_becomes_init_lambda_state() {
        let schedule = LambdaSchedule::default();
        let groups = TcGroups::default();
        let mdp = render(&params(
            AlchemicalPhase::Coulomb,
            7,
            SimStage::Production,
            &schedule,
            &groups,
        ));
        assert_eq!(value_of(&mdp, "init-lambda-state"), "7");
        assert_eq!(value_of(&mdp, "couple-moltype"), "unk");
    }

    #[test]
    fn lambda_vectors_have_one_value_per_window() {
        let schedule = LambdaSchedule::default();
        let groups = TcGroups::default();
        let mdp = render(&params(
            AlchemicalPhase::VanDerWaals,
            0,
            SimStage::Production,
            &schedule,
            &groups,
        ));
        for key in ["restraint-lambdas", "coul-lambdas", "vdw-lambdas"] {
            assert_eq!(value_of(&mdp, key).split_whitespace().count(), 21);
        }
    }

    #[test]
    fn completed_phases_are_pinned_at_one() {
        let schedule = LambdaSchedule::default();
        let groups = TcGroups::default();

        let coul = render(&params(
            AlchemicalPhase::Coulomb,
            0,
            SimStage::Production,
            &schedule,
            &groups,
        ));
        assert!(
            value_of(&coul, "restraint-lambdas")
                .split_whitespace()
                .all(|v| v == "1.0000")
        );
        assert!(
            value_of(&coul, "vdw-lambdas")
                .split_whitespace()
                .all(|v| v == "0.0000")
        );

        let rest = render(&params(
            AlchemicalPhase::Restraint,
            0,
            SimStage::Production,
            &schedule,
            &groups,
        ));
        let ramp: Vec<&str> = value_of(&rest, "restraint-lambdas")
            .split_whitespace()
            .collect();
        assert_eq!(ramp.first(), Some(&"0.0000"));
        assert_eq!(ramp.last(), Some(&"1.0000"));
    }

    #[test]
    fn coupling_groups_appear_in_dynamics_stages_only() {
        let schedule = LambdaSchedule::default();
        let groups = TcGroups::default();

        let nvt = render(&params(
            AlchemicalPhase::Restraint,
            0,
            SimStage::Nvt,
            &schedule,
            &groups,
        ));
        assert_eq!(
            value_of(&nvt, "tc-grps"),
            "Protein_unk_PA_PC_OL Water_and_ions"
        );

        let min = render(&params(
            AlchemicalPhase::Restraint,
            0,
            SimStage::Minimization,
            &schedule,
            &groups,
        ));
        assert!(!min.contains("tc-grps"));
        assert_eq!(value_of(&min, "integrator"), "steep");
    }

    #[test]
    fn production_keeps_compressed_output_only() {
        let schedule = LambdaSchedule::default();
        let groups = TcGroups::default();
        let prod = render(&params(
            AlchemicalPhase::Restraint,
            3,
            SimStage::Production,
            &schedule,
            &groups,
        ));
        assert_eq!(value_of(&prod, "nstxout"), "0");
        assert_eq!(value_of(&prod, "nstxout-compressed"), "50000");
        assert_eq!(value_of(&prod, "pcoupl"), "Parrinello-Rahman");
        assert!(!prod.contains("-DPOSRES"));
    }

    #[test]
    fn equilibration_restrains_positions_and_generates_velocities_once() {
        let schedule = LambdaSchedule::default();
        let groups = TcGroups::default();

        let nvt = render(&params(
            AlchemicalPhase::Coulomb,
            1,
            SimStage::Nvt,
            &schedule,
            &groups,
        ));
        assert_eq!(value_of(&nvt, "define"), "-DPOSRES");
        assert_eq!(value_of(&nvt, "gen-vel"), "yes");

        let npt = render(&params(
            AlchemicalPhase::Coulomb,
            1,
            SimStage::Npt,
            &schedule,
            &groups,
        ));
        assert_eq!(value_of(&npt, "gen-vel"), "no");
        assert_eq!(value_of(&npt, "pcoupl"), "C-rescale");
    }
}
