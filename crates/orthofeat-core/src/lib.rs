//! orthofeat-core
//!
//! Residue model and pure feature computation for the ortholog feature
//! pipeline: composition counts, percent composition, aliphatic index,
//! aromaticity, GRAVY hydrophobicity, and the disorder-scoring seam.
pub mod disorder;
pub mod features;
pub mod residue;
pub mod sequence;

pub use disorder::{DisorderError, DisorderScorer};
pub use features::{ArgLysRatio, FeatureError, FeatureExtractor, FeatureVector};
pub use residue::AminoAcid;
pub use sequence::ProteinSequence;
