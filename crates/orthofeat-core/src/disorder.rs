use crate::sequence::ProteinSequence;
use thiserror::Error;

/// Error type for external disorder-prediction failures.
///
/// All variants are fatal: rerunning the predictor on identical input is
/// expected to reproduce the failure, and a bad score would silently corrupt
/// every downstream feature vector.
#[derive(Debug, Error)]
pub enum DisorderError {
    #[error("disorder predictor unavailable: {0}")]
    Unavailable(String),
    #[error("disorder predictor failed: {0}")]
    ProcessFailed(String),
    #[error("unparseable predictor output: {0}")]
    MalformedOutput(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Capability to score what fraction of a sequence is intrinsically
/// disordered.
///
/// The single method keeps the external tool behind a seam narrow enough to
/// swap in a stub for tests.
pub trait DisorderScorer {
    /// Fraction of residues predicted disordered, in `[0, 1]`.
    fn fraction_disordered(&self, seq: &ProteinSequence) -> Result<f64, DisorderError>;
}
