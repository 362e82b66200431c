//! Ortholog group selection.
//!
//! Reduces the raw hit table to, per query gene, the single best hit per
//! species, dropping uninformative annotations and genes with too few
//! species to compare.
use orthofeat_io::hits::{HitRecord, HitSource, HitTableError};

/// Substring marking an uninformative annotation. Matched case-sensitively.
const UNINFORMATIVE_MARKER: &str = "hypothetical";
/// Minimum number of distinct species for a gene to qualify.
const MIN_SPECIES: usize = 3;

/// Best hit per species for one query gene.
///
/// Invariant: every member's species is unique and `hits.len() >= 3`, in
/// first-encounter species order.
#[derive(Debug, Clone)]
pub struct OrthologGroup {
    pub query_id: String,
    pub hits: Vec<HitRecord>,
}

/// One group per qualifying query gene, in the source's query-id order.
///
/// A storage failure aborts selection; rereading the table would return the
/// same rows, so there is nothing to retry.
pub fn select_groups<S: HitSource>(source: &S) -> Result<Vec<OrthologGroup>, HitTableError> {
    let mut groups = Vec::new();
    for query_id in source.query_ids()? {
        if let Some(group) = best_hits_by_species(&query_id, source.hits_for(&query_id)?) {
            groups.push(group);
        }
    }
    Ok(groups)
}

fn best_hits_by_species(query_id: &str, hits: Vec<HitRecord>) -> Option<OrthologGroup> {
    // One slot per species, in first-encounter order. Strict `<` keeps the
    // earliest hit on an exact e-value tie.
    let mut best: Vec<HitRecord> = Vec::new();
    for hit in hits {
        if hit.target_definition.contains(UNINFORMATIVE_MARKER) {
            continue;
        }
        match best.iter_mut().find(|b| b.species == hit.species) {
            Some(slot) => {
                if hit.e_value < slot.e_value {
                    *slot = hit;
                }
            }
            None => best.push(hit),
        }
    }
    if best.len() >= MIN_SPECIES {
        Some(OrthologGroup {
            query_id: query_id.to_string(),
            hits: best,
        })
    } else {
        None
    }
}
