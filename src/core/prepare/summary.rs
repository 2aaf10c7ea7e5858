//! Preparation run summary and reporting

use std::time::Duration;

/// A record that failed normalization during a run
#[derive(Debug, Clone)]
pub struct RecordFailure {
    /// Zero-based index of the record in the input file
    pub index: usize,
    /// Why the record was rejected
    pub message: String,
}

/// Summary of a preparation run
#[derive(Debug, Clone, Default)]
pub struct PrepareSummary {
    /// Total records read from the input file
    pub total_records: usize,

    /// Records successfully prepared
    pub prepared_records: usize,

    /// Records skipped because a field failed normalization
    pub skipped_records: usize,

    /// Individual field values processed across all prepared records
    pub fields_prepared: usize,

    /// Number of output batches
    pub batches: usize,

    /// Duration of the run
    pub duration: Duration,

    /// Details of every skipped record
    pub failures: Vec<RecordFailure>,
}

impl PrepareSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped record
    pub fn add_failure(&mut self, index: usize, message: impl Into<String>) {
        self.skipped_records += 1;
        self.failures.push(RecordFailure {
            index,
            message: message.into(),
        });
    }

    /// True if every record was prepared
    pub fn is_successful(&self) -> bool {
        self.skipped_records == 0
    }

    /// Prepared records as a percentage of total
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            return 100.0;
        }
        (self.prepared_records as f64 / self.total_records as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_records = self.total_records,
            prepared = self.prepared_records,
            skipped = self.skipped_records,
            fields_prepared = self.fields_prepared,
            batches = self.batches,
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Preparation completed"
        );

        if !self.failures.is_empty() {
            tracing::warn!(
                failure_count = self.failures.len(),
                "Preparation completed with skipped records"
            );
        }
    }
}
