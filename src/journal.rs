use crate::prelude::*;

/// Logging seam of the calculation pipeline.
///
/// Production code forwards to the global `tracing` subscriber, tests substitute
/// a capturing sink and assert on the recorded events.
pub trait Journal {
    fn info(&self, message: String);

    fn error(&self, message: String);
}

pub struct TracingJournal;

impl Journal for TracingJournal {
    fn info(&self, message: String) {
        info!("{message}");
    }

    fn error(&self, message: String) {
        error!("{message}");
    }
}
