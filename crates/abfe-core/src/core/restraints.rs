use serde::Deserialize;
use std::fmt::Write;
use std::path::Path;
use thiserror::Error;

/// A Boresch-style orthogonal restraint set: one distance, two angles and
/// three dihedrals between three receptor anchors and three ligand anchors.
///
/// The values are produced upstream by the vanilla-simulation pipeline and
/// read here from `boresch.toml`; no trajectory analysis happens in this
/// crate. Atom indices are one-based (GROMACS numbering), the distance is in
/// nm and angles are in degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoreschRestraint {
    /// Receptor anchors ordered r3, r2, r1 (r1 bonds to the ligand).
    #[serde(rename = "receptor-atoms")]
    pub receptor_atoms: [usize; 3],
    /// Ligand anchors ordered l1, l2, l3 (l1 bonds to the receptor).
    #[serde(rename = "ligand-atoms")]
    pub ligand_atoms: [usize; 3],
    pub equilibrium: EquilibriumValues,
    #[serde(rename = "force-constants")]
    pub force_constants: ForceConstants,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquilibriumValues {
    /// r1-l1 distance in nm.
    pub distance: f64,
    /// r2-r1-l1 angle in degrees.
    #[serde(rename = "angle-a")]
    pub angle_a: f64,
    /// r1-l1-l2 angle in degrees.
    #[serde(rename = "angle-b")]
    pub angle_b: f64,
    /// r3-r2-r1-l1 dihedral in degrees.
    #[serde(rename = "dihedral-a")]
    pub dihedral_a: f64,
    /// r2-r1-l1-l2 dihedral in degrees.
    #[serde(rename = "dihedral-b")]
    pub dihedral_b: f64,
    /// r1-l1-l2-l3 dihedral in degrees.
    #[serde(rename = "dihedral-c")]
    pub dihedral_c: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForceConstants {
    /// kJ mol^-1 nm^-2.
    pub distance: f64,
    /// kJ mol^-1 rad^-2.
    pub angle: f64,
    /// kJ mol^-1 rad^-2.
    pub dihedral: f64,
}

#[derive(Debug, Error)]
pub enum RestraintError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid restraint definition: {0}")]
    Invalid(String),
}

impl BoreschRestraint {
    pub fn load(path: &Path) -> Result<Self, RestraintError> {
        let content = std::fs::read_to_string(path).map_err(|e| RestraintError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let restraint: BoreschRestraint =
            toml::from_str(&content).map_err(|e| RestraintError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        restraint.validate()?;
        Ok(restraint)
    }

    pub fn validate(&self) -> Result<(), RestraintError> {
        let mut all = Vec::with_capacity(6);
        all.extend_from_slice(&self.receptor_atoms);
        all.extend_from_slice(&self.ligand_atoms);
        if all.iter().any(|&i| i == 0) {
            return Err(RestraintError::Invalid(
                "atom indices are one-based; found index 0".to_string(),
            ));
        }
        all.sort_unstable();
        all.dedup();
        if all.len() != 6 {
            return Err(RestraintError::Invalid(
                "the six anchor atoms must be distinct".to_string(),
            ));
        }
        if self.equilibrium.distance <= 0.0 {
            return Err(RestraintError::Invalid(format!(
                "equilibrium distance must be positive (got {})",
                self.equilibrium.distance
            )));
        }
        let k = &self.force_constants;
        if k.distance < 0.0 || k.angle < 0.0 || k.dihedral < 0.0 {
            return Err(RestraintError::Invalid(
                "force constants must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Renders the `[ intermolecular_interactions ]` topology block.
    ///
    /// State A force constants are zero so that the restraint is switched on
    /// by the restraint lambdas; state B carries the configured values.
    pub fn render_itp(&self) -> String {
        let [r3, r2, r1] = self.receptor_atoms;
        let [l1, l2, l3] = self.ligand_atoms;
        let eq = &self.equilibrium;
        let k = &self.force_constants;

        let mut out = String::new();
        let w = |out: &mut String, line: &str| {
            writeln!(out, "{}", line).expect("writing to String cannot fail");
        };

        w(&mut out, "[ intermolecular_interactions ]");
        w(&mut out, "[ bonds ]");
        w(&mut out, "; ai    aj    type  bA      kA    bB      kB");
        writeln!(
            out,
            "{:>6}{:>6}     6  {:.3}   0.0   {:.3}   {:.1}",
            r1, l1, eq.distance, eq.distance, k.distance
        )
        .expect("writing to String cannot fail");
        w(&mut out, "");
        w(&mut out, "[ angles ]");
        w(
            &mut out,
            "; ai    aj    ak    type  thA      kA    thB      kB",
        );
        for (a, b, c, theta) in [(r2, r1, l1, eq.angle_a), (r1, l1, l2, eq.angle_b)] {
            writeln!(
                out,
                "{:>6}{:>6}{:>6}     1  {:.2}   0.0   {:.2}   {:.1}",
                a, b, c, theta, theta, k.angle
            )
            .expect("writing to String cannot fail");
        }
        w(&mut out, "");
        w(&mut out, "[ dihedrals ]");
        w(
            &mut out,
            "; ai    aj    ak    al    type  phiA     kA    phiB     kB",
        );
        for (a, b, c, d, phi) in [
            (r3, r2, r1, l1, eq.dihedral_a),
            (r2, r1, l1, l2, eq.dihedral_b),
            (r1, l1, l2, l3, eq.dihedral_c),
        ] {
            writeln!(
                out,
                "{:>6}{:>6}{:>6}{:>6}     2  {:.2}   0.0   {:.2}   {:.1}",
                a, b, c, d, phi, phi, k.dihedral
            )
            .expect("writing to String cannot fail");
        }

        out
    }
}
