//! Preparation run coordinator
//!
//! Drives a whole run: read records, process every present field through the
//! formatter pipeline, apply the invalid-record policy, chunk into batches,
//! and write the output document. The formatter core itself never logs or
//! skips; those decisions are made here, per the configured policy.

use super::reader::{read_records, InputFormat};
use super::record::{PreparedRecord, RawRecord};
use super::summary::PrepareSummary;
use crate::config::{InvalidPolicy, MatchprepConfig};
use crate::domain::{MatchprepError, PiiField, Result};
use crate::formatter::{process_field, Encoding};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// The JSON document written at the end of a run
///
/// `batches` respects the per-request record cap of the receiving service;
/// building and sending the actual requests is the uploader's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedOutput {
    /// When the document was generated
    pub generated_at: DateTime<Utc>,

    /// The digest encoding applied to every hashed identifier in the document
    pub encoding: Encoding,

    /// Total prepared records across all batches
    pub total_records: usize,

    /// Prepared records, chunked to the configured batch size
    pub batches: Vec<Vec<PreparedRecord>>,
}

/// Coordinates a preparation run
pub struct PrepareCoordinator {
    encoding: Encoding,
    policy: InvalidPolicy,
    batch_size: usize,
    dry_run: bool,
    output_path: PathBuf,
    pretty: bool,
}

impl PrepareCoordinator {
    /// Create a coordinator from validated configuration
    pub fn from_config(config: &MatchprepConfig) -> Result<Self> {
        Ok(Self {
            encoding: config.encoding()?,
            policy: config.invalid_policy()?,
            batch_size: config.processing.batch_size,
            dry_run: config.application.dry_run,
            output_path: PathBuf::from(&config.output.path),
            pretty: config.output.pretty,
        })
    }

    /// Execute a preparation run over one input file
    ///
    /// # Errors
    ///
    /// Fails on unreadable/undeserializable input, on the first invalid
    /// record when the policy is [`InvalidPolicy::Abort`], or on output
    /// write errors.
    pub fn run(&self, input: &Path, format: InputFormat) -> Result<PrepareSummary> {
        let started = Instant::now();

        tracing::info!(
            input = %input.display(),
            %format,
            encoding = %self.encoding,
            batch_size = self.batch_size,
            dry_run = self.dry_run,
            "Starting preparation run"
        );

        let records = read_records(input, format)?;

        let mut summary = PrepareSummary::new();
        summary.total_records = records.len();

        let mut prepared = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match self.prepare_record(record) {
                Ok((record, field_count)) => {
                    summary.prepared_records += 1;
                    summary.fields_prepared += field_count;
                    prepared.push(record);
                }
                Err(err) => match self.policy {
                    InvalidPolicy::Skip => {
                        tracing::warn!(record_index = index, error = %err, "Skipping invalid record");
                        summary.add_failure(index, err.to_string());
                    }
                    InvalidPolicy::Abort => {
                        tracing::error!(record_index = index, error = %err, "Aborting run on invalid record");
                        return Err(err);
                    }
                },
            }
        }

        let batches: Vec<Vec<PreparedRecord>> = prepared
            .chunks(self.batch_size)
            .map(|chunk| chunk.to_vec())
            .collect();
        summary.batches = batches.len();

        if self.dry_run {
            tracing::info!("Dry run, no output written");
        } else {
            let output = PreparedOutput {
                generated_at: Utc::now(),
                encoding: self.encoding,
                total_records: prepared.len(),
                batches,
            };
            self.write_output(&output)?;
        }

        summary.duration = started.elapsed();
        Ok(summary)
    }

    /// Process every present field of one record, fail-fast
    ///
    /// Returns the prepared record and the number of fields processed. A
    /// record with no recognized fields at all is invalid.
    fn prepare_record(&self, record: &RawRecord) -> Result<(PreparedRecord, usize)> {
        if record.is_empty() {
            return Err(MatchprepError::invalid_input(
                "record has no recognized fields",
            ));
        }

        let mut prepared = PreparedRecord::default();
        let mut field_count = 0;
        for field in PiiField::ALL {
            if let Some(raw) = record.get(field) {
                let value = process_field(field, Some(raw), self.encoding)
                    .map_err(|e| MatchprepError::invalid_input(format!("{}: {e}", field.label())))?;
                prepared.set(field, value);
                field_count += 1;
            }
        }

        Ok((prepared, field_count))
    }

    fn write_output(&self, output: &PreparedOutput) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(output)?
        } else {
            serde_json::to_string(output)?
        };
        fs::write(&self.output_path, json)?;

        tracing::info!(
            output = %self.output_path.display(),
            batches = output.batches.len(),
            records = output.total_records,
            "Wrote prepared batches"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator(policy: InvalidPolicy, batch_size: usize) -> PrepareCoordinator {
        PrepareCoordinator {
            encoding: Encoding::Hex,
            policy,
            batch_size,
            dry_run: true,
            output_path: PathBuf::from("unused.json"),
            pretty: false,
        }
    }

    #[test]
    fn test_prepare_record_hashes_identifiers_and_keeps_geo() {
        let record = RawRecord {
            email_address: Some("  ALEXZ@example.com ".to_string()),
            region_code: Some("us".to_string()),
            ..Default::default()
        };
        let (prepared, field_count) = coordinator(InvalidPolicy::Skip, 10)
            .prepare_record(&record)
            .unwrap();
        assert_eq!(field_count, 2);
        assert_eq!(
            prepared.hashed_email_address.as_deref(),
            Some("509e933019bb285a134a9334b8bb679dff79d0ce023d529af4bd744d47b4fd8a")
        );
        assert_eq!(prepared.region_code.as_deref(), Some("US"));
        assert!(prepared.hashed_phone_number.is_none());
    }

    #[test]
    fn test_prepare_record_fails_fast_on_invalid_field() {
        let record = RawRecord {
            email_address: Some("valid@example.com".to_string()),
            region_code: Some("usa".to_string()),
            ..Default::default()
        };
        let err = coordinator(InvalidPolicy::Skip, 10)
            .prepare_record(&record)
            .unwrap_err();
        assert!(matches!(err, MatchprepError::InvalidInput(_)));
        assert!(err.to_string().contains("region code"));
    }

    #[test]
    fn test_prepare_record_empty_is_invalid() {
        let err = coordinator(InvalidPolicy::Skip, 10)
            .prepare_record(&RawRecord::default())
            .unwrap_err();
        assert!(matches!(err, MatchprepError::InvalidInput(_)));
    }
}
