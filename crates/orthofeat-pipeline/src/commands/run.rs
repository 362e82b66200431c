use anyhow::{Context, Result};
use orthofeat_core::FeatureExtractor;
use orthofeat_io::fasta::{FastaStore, SequenceSource, SequenceStoreError};
use orthofeat_io::hits::SqliteHitTable;
use orthofeat_io::tsv::{self, FeatureRow};
use orthofeat_iupred::IuPred;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::ortholog::{self, OrthologGroup};

pub fn execute(
    db: PathBuf,
    fasta: PathBuf,
    iupred: PathBuf,
    output: Option<PathBuf>,
) -> Result<()> {
    let hits = SqliteHitTable::open(&db)
        .with_context(|| format!("opening hit table {}", db.display()))?;
    let store = FastaStore::from_file(&fasta)
        .with_context(|| format!("reading sequences from {}", fasta.display()))?;
    let extractor = FeatureExtractor::new(IuPred::new(iupred));

    let mut sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(&path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let groups = ortholog::select_groups(&hits)?;
    info!(groups = groups.len(), "selected ortholog groups");

    for group in &groups {
        match process_group(group, &store, &extractor, &mut sink) {
            Ok(rows) => debug!(query = %group.query_id, rows, "gene written"),
            Err(GeneError::MissingSequence(id)) => {
                warn!(query = %group.query_id, missing = %id, "sequence not in store, skipping gene");
            }
            Err(GeneError::Fatal(e)) => return Err(e),
        }
    }
    sink.flush()?;
    Ok(())
}

enum GeneError {
    MissingSequence(String),
    Fatal(anyhow::Error),
}

/// Emits the query's own row plus one row per hit.
///
/// Every sequence of the gene is resolved before the first row is written, so
/// a missing target can never leave a half-written gene behind.
fn process_group(
    group: &OrthologGroup,
    store: &FastaStore,
    extractor: &FeatureExtractor<IuPred>,
    sink: &mut Box<dyn Write>,
) -> std::result::Result<usize, GeneError> {
    let query = resolve(store, &group.query_id)?;
    let mut targets = Vec::with_capacity(group.hits.len());
    for hit in &group.hits {
        targets.push(resolve(store, &hit.target_id)?);
    }

    let features = extractor.extract(query).map_err(anyhow_fatal)?;
    let row = FeatureRow {
        source_id: group.query_id.clone(),
        target_id: group.query_id.clone(),
        features,
    };
    tsv::write_row(sink, &row).map_err(anyhow_fatal)?;

    let mut rows = 1;
    for (hit, seq) in group.hits.iter().zip(targets) {
        let features = extractor.extract(seq).map_err(anyhow_fatal)?;
        let row = FeatureRow {
            source_id: group.query_id.clone(),
            target_id: hit.target_id.clone(),
            features,
        };
        tsv::write_row(sink, &row).map_err(anyhow_fatal)?;
        rows += 1;
    }
    Ok(rows)
}

fn resolve<'a>(
    store: &'a FastaStore,
    id: &str,
) -> std::result::Result<&'a orthofeat_core::ProteinSequence, GeneError> {
    store.get(id).map_err(|e| match e {
        SequenceStoreError::NotFound(id) => GeneError::MissingSequence(id),
        other => GeneError::Fatal(other.into()),
    })
}

fn anyhow_fatal(e: impl Into<anyhow::Error>) -> GeneError {
    GeneError::Fatal(e.into())
}
