//! Tab-separated output sink.
//!
//! Column order is fixed: source id, target id, aliphatic index, the 20
//! percent values, the 20 counts, arg/lys ratio, acidic count, aromaticity,
//! GRAVY, disorder fraction. 48 fields, floats with 5 decimals, no header.
use itertools::Itertools;
use orthofeat_core::{ArgLysRatio, FeatureVector};
use std::io::{self, Write};

/// One output record: a feature vector attributed to a (source, target)
/// pair. For the query's own row, source and target are the same id.
#[derive(Debug, Clone)]
pub struct FeatureRow {
    pub source_id: String,
    pub target_id: String,
    pub features: FeatureVector,
}

pub fn write_row<W: Write>(out: &mut W, row: &FeatureRow) -> io::Result<()> {
    let f = &row.features;
    let mut fields: Vec<String> = Vec::with_capacity(48);
    fields.push(row.source_id.clone());
    fields.push(row.target_id.clone());
    fields.push(format!("{:.5}", f.aliphatic_index));
    fields.extend(f.percents.iter().map(|p| format!("{p:.5}")));
    fields.extend(f.counts.iter().map(|c| c.to_string()));
    fields.push(match f.arg_lys_ratio {
        ArgLysRatio::Defined(r) => format!("{r:.5}"),
        ArgLysRatio::Undefined => "N/A".to_string(),
    });
    fields.push(f.acidic_count.to_string());
    fields.push(format!("{:.5}", f.aromaticity));
    fields.push(format!("{:.5}", f.gravy));
    fields.push(format!("{:.5}", f.disorder_fraction));
    writeln!(out, "{}", fields.iter().join("\t"))
}
