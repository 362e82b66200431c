//! orthofeat-io
//!
//! The pipeline's collaborators: the FASTA-backed sequence store, the SQLite
//! homology hit table, and the tab-separated output sink.
pub mod fasta;
pub mod hits;
pub mod tsv;

pub use fasta::{FastaStore, SequenceSource, SequenceStoreError};
pub use hits::{HitRecord, HitSource, HitTableError, SqliteHitTable};
pub use tsv::FeatureRow;
