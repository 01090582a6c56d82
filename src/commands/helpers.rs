//! Command helper utilities

use std::fmt;

use crate::error::Result;
use crate::operations::BatchReport;
use crate::progress::InteractiveProgressReporter;
use crate::ui;

/// Progress bar for a batch of `total` modules
pub fn batch_progress(total: usize) -> InteractiveProgressReporter {
    InteractiveProgressReporter::new(total as u64)
}

/// Print how many modules of a batch went through, then fail if any could not
/// be processed
pub fn finish_batch<S: fmt::Display>(
    report: BatchReport<S>,
    verb: &str,
) -> Result<BatchReport<S>> {
    for outcome in &report.outcomes {
        if let Ok(state) = &outcome.result {
            tracing::debug!(module = %outcome.module, %state, "module finished");
        }
    }
    let total = report.outcomes.len();
    let failed = report.failed();
    if failed == 0 {
        ui::valid(format!("{total} module(s) {verb}"));
    } else {
        ui::warn(format!("{} of {total} module(s) {verb}", total - failed));
    }
    report.into_result()
}
