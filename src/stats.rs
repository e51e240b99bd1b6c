//! `Stats` tallies verdicts over one batch of samples without any
//! persistence. The binary logs the summary once all samples are checked.

use tracing::info;

use crate::report::{Report, Verdict};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total: u64,
    pub unique: u64,
    pub duplicated: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &Report) {
        self.total += 1;
        match report.verdict {
            Verdict::Unique => self.unique += 1,
            Verdict::Duplicated => self.duplicated += 1,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Checked {} samples: {} unique, {} duplicated",
            self.total, self.unique, self.duplicated
        )
    }

    pub fn report(&self) {
        info!(
            total = self.total,
            unique = self.unique,
            duplicated = self.duplicated,
            "batch complete"
        );
    }
}
