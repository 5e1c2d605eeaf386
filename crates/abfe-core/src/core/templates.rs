use crate::core::models::phase::{AlchemicalPhase, LambdaSchedule};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Values substituted into a submission-script template.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptContext<'a> {
    pub job_name: &'a str,
    pub archer_nodes: u32,
    pub simulation_list: &'a str,
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// A submission-script template loaded from disk.
///
/// Rendering runs in strict mode so that a placeholder with no matching
/// value fails the setup instead of producing a broken script.
#[derive(Debug, Clone)]
pub struct SubmissionTemplate {
    source: String,
}

impl SubmissionTemplate {
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|e| TemplateError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(Self { source })
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn render(&self, context: &ScriptContext) -> Result<String, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        Ok(registry.render_template(&self.source, context)?)
    }
}

/// Builds the space-separated window path list consumed by the submission
/// scripts: `rest.00/$STEP/ ... vdw.20/$STEP/`.
///
/// Phases appear in run order and `$STEP` is left verbatim for the shell to
/// expand. With the default schedule this is 44 tokens.
pub fn window_path_list(schedule: &LambdaSchedule) -> String {
    let mut tokens = Vec::with_capacity(schedule.total_windows());
    for phase in AlchemicalPhase::RUN_ORDER {
        for window in 0..schedule.windows(phase) {
            tokens.push(format!("{}/$STEP/", phase.window_dir(window)));
        }
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_yields_forty_four_tokens_in_run_order() {
        let list = window_path_list(&LambdaSchedule::default());
        let tokens: Vec<&str> = list.split_whitespace().collect();

        assert_eq!(tokens.len(), 44);
        assert_eq!(tokens[0], "rest.00/$STEP/");
        assert_eq!(tokens[11], "rest.11/$STEP/");
        assert_eq!(tokens[12], "coul.00/$STEP/");
        assert_eq!(tokens[22], "coul.10/$STEP/");
        assert_eq!(tokens[23], "vdw.00/$STEP/");
        assert_eq!(tokens[43], "vdw.20/$STEP/");
    }

    #[test]
    fn every_token_keeps_the_step_placeholder() {
        let list = window_path_list(&LambdaSchedule::default());
        assert!(list.split_whitespace().all(|t| t.ends_with("/$STEP/")));
    }

    #[test]
    fn placeholders_are_substituted() {
        let template = SubmissionTemplate::from_source(
            "#SBATCH --job-name={{job_name}}\n\
             #SBATCH --nodes={{archer_nodes}}\n\
             SIMULATIONS=\"{{simulation_list}}\"\n",
        );
        let rendered = template
            .render(&ScriptContext {
                job_name: "lig_01",
                archer_nodes: 22,
                simulation_list: "rest.00/$STEP/ coul.00/$STEP/",
            })
            .unwrap();

        assert!(rendered.contains("--job-name=lig_01"));
        assert!(rendered.contains("--nodes=22"));
        assert!(rendered.contains("SIMULATIONS=\"rest.00/$STEP/ coul.00/$STEP/\""));
    }

    #[test]
    fn unknown_placeholder_fails_in_strict_mode() {
        let template = SubmissionTemplate::from_source("{{job_name}} {{not_a_value}}");
        let err = template
            .render(&ScriptContext {
                job_name: "lig_01",
                archer_nodes: 22,
                simulation_list: "",
            })
            .unwrap_err();
        assert!(matches!(err, TemplateError::Render(_)));
    }

    #[test]
    fn load_reports_missing_template_path() {
        let err = SubmissionTemplate::load(Path::new("/nonexistent/template.sh")).unwrap_err();
        assert!(matches!(err, TemplateError::Io { .. }));
    }
}
