use crate::core::restraints::BoreschRestraint;
use crate::engine::context::SetupContext;
use crate::engine::error::SetupError;
use tracing::info;

/// Reads the declarative Boresch definition from the vanilla folder and
/// writes the restraint topology into the ABFE folder.
pub fn run(context: &SetupContext) -> Result<(), SetupError> {
    let source = context.layout.vanilla_boresch();
    if !source.is_file() {
        return Err(SetupError::MissingInput { path: source });
    }

    let restraint = BoreschRestraint::load(&source)?;
    let target = context.layout.restraints_itp();
    std::fs::write(&target, restraint.render_itp()).map_err(|e| SetupError::io(&target, e))?;

    info!("Wrote Boresch restraint topology to {:?}", target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tasks::test_support::replicate_fixture;

    #[test]
    fn renders_restraint_topology_into_the_abfe_folder() {
        let fixture = replicate_fixture();
        run(&fixture.context()).unwrap();

        let itp = std::fs::read_to_string(fixture.layout().restraints_itp()).unwrap();
        assert!(itp.contains("[ intermolecular_interactions ]"));
        assert!(itp.contains("4305"));
    }

    #[test]
    fn missing_definition_file_is_a_missing_input() {
        let fixture = replicate_fixture();
        std::fs::remove_file(fixture.layout().vanilla_boresch()).unwrap();

        let err = run(&fixture.context()).unwrap_err();
        assert!(matches!(err, SetupError::MissingInput { .. }));
    }
}
