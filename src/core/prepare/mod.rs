//! Batch preparation pipeline
//!
//! The consumer-side glue around the formatter core: reads raw customer
//! records from CSV or JSON files, runs each present field through the
//! process operations, applies the configured skip-or-abort policy to
//! invalid records, chunks the prepared records into request-sized batches,
//! and writes the resulting JSON document. No request is ever sent anywhere;
//! assembling and transmitting protocol messages is out of scope.

pub mod coordinator;
pub mod reader;
pub mod record;
pub mod summary;

pub use coordinator::{PrepareCoordinator, PreparedOutput};
pub use reader::{read_records, InputFormat};
pub use record::{PreparedRecord, RawRecord};
pub use summary::{PrepareSummary, RecordFailure};
