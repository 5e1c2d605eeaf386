/// Coarse progress events emitted while a batch is prepared.
///
/// One unit of work is one (ligand, replicate) pair; skipped pairs still
/// advance the count so a consumer can drive a bounded progress bar.
#[derive(Debug, Clone)]
pub enum Progress {
    BatchStart { total_replicates: u64 },
    LigandStart { name: String },
    LigandSkipped { name: String },
    ReplicateFinish,
    ReplicateSkipped,
    Message(String),
    BatchFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
