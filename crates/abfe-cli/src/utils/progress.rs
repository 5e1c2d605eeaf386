use abfeprep::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::bar_style())
            .with_message("Initializing...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::BatchStart { total_replicates } => {
                    pb_guard.reset();
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_length(total_replicates);
                    pb_guard.set_position(0);
                }
                Progress::LigandStart { name } => {
                    pb_guard.set_message(name);
                }
                Progress::LigandSkipped { name } => {
                    pb_guard.println(format!(
                        "  ⚠ {}: ligand directory not found, skipping",
                        name
                    ));
                }
                Progress::ReplicateFinish | Progress::ReplicateSkipped => {
                    pb_guard.inc(1);
                }
                Progress::Message(msg) => {
                    pb_guard.println(format!("  {}", msg));
                }
                Progress::BatchFinish => {
                    // Skipped ligands never advance the bar; close the gap.
                    if pb_guard.position() < pb_guard.length().unwrap_or(0) {
                        pb_guard.set_position(pb_guard.length().unwrap_or(0));
                    }
                    pb_guard.finish_with_message("✓ Done");
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create bar style template")
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    write!(w, "{:.1}s", state.eta().as_secs_f64()).unwrap()
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_replicates_and_finishes_the_batch() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::BatchStart {
            total_replicates: 4,
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(4));
            assert_eq!(pb.position(), 0);
        }

        callback(Progress::LigandStart {
            name: "lig_01".to_string(),
        });
        callback(Progress::ReplicateFinish);
        callback(Progress::ReplicateSkipped);
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 2);
            assert_eq!(pb.message(), "lig_01");
        }

        // Two replicates of a skipped ligand never report; the batch end
        // still completes the bar.
        callback(Progress::LigandSkipped {
            name: "lig_02".to_string(),
        });
        callback(Progress::BatchFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.position(), 4);
            assert_eq!(pb.message(), "✓ Done");
        }
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        std::thread::spawn(move || {
            callback(Progress::BatchStart {
                total_replicates: 1,
            });
            callback(Progress::ReplicateFinish);
            callback(Progress::BatchFinish);
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✓ Done");
    }
}
