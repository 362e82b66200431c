//! FASTA-backed sequence store.
use bio::io::fasta;
use orthofeat_core::ProteinSequence;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceStoreError {
    #[error("sequence '{0}' not found in store")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read-only id -> sequence lookup.
pub trait SequenceSource {
    fn get(&self, id: &str) -> Result<&ProteinSequence, SequenceStoreError>;
}

/// All sequences of a FASTA file, loaded once and keyed by record id.
pub struct FastaStore {
    sequences: HashMap<String, ProteinSequence>,
}

impl FastaStore {
    pub fn from_file(path: &Path) -> Result<Self, SequenceStoreError> {
        let reader = fasta::Reader::new(File::open(path)?);
        let mut sequences = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let residues = String::from_utf8_lossy(record.seq()).into_owned();
            sequences.insert(
                record.id().to_string(),
                ProteinSequence::new(record.id(), residues),
            );
        }
        Ok(Self { sequences })
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl SequenceSource for FastaStore {
    fn get(&self, id: &str) -> Result<&ProteinSequence, SequenceStoreError> {
        self.sequences
            .get(id)
            .ok_or_else(|| SequenceStoreError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthofeat_test_data::TestFile;

    #[test]
    fn loads_records_and_resolves_ids() {
        let (path, _temp) = TestFile::proteins_01().create_temp().unwrap();
        let store = FastaStore::from_file(Path::new(&path)).unwrap();
        assert_eq!(store.len(), 6);

        let seq = store.get("JG3_00042").unwrap();
        assert!(seq.residues().starts_with("MKAILVVLLY"));
        assert_eq!(seq.id(), "JG3_00042");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (path, _temp) = TestFile::proteins_01().create_temp().unwrap();
        let store = FastaStore::from_file(Path::new(&path)).unwrap();
        assert!(matches!(
            store.get("JG3_99999"),
            Err(SequenceStoreError::NotFound(id)) if id == "JG3_99999"
        ));
    }
}
