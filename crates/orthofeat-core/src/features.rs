//! Per-protein feature vectors.
//!
//! Everything here is a pure function of the sequence except the disorder
//! fraction, which is delegated to the [`DisorderScorer`] held by the
//! extractor.
use crate::disorder::{DisorderError, DisorderScorer};
use crate::residue::{self, AminoAcid};
use crate::sequence::ProteinSequence;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("sequence '{0}' is empty")]
    EmptySequence(String),
    #[error("sequence '{0}' has no residues with hydropathy values")]
    NoScorableResidues(String),
    #[error("residue '{residue}' in '{id}' has no hydropathy value")]
    UnsupportedResidue { id: String, residue: char },
    #[error(transparent)]
    Disorder(#[from] DisorderError),
}

/// Arg/Lys ratio, undefined when the sequence contains no lysines.
///
/// Kept as a sum type so the undefined case can never leak into arithmetic as
/// a sentinel float; the sink decides how to render it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ArgLysRatio {
    Defined(f64),
    Undefined,
}

/// Fixed-width feature vector for one protein.
///
/// `counts` and `percents` are both indexed by
/// [`AminoAcid::ALPHABETICAL`]. Counts cover only the 20 standard residues,
/// so their sum can fall short of the sequence length; percents divide by the
/// full length, so they can sum below 1.0 when non-standard symbols are
/// present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub counts: [u32; 20],
    pub arg_lys_ratio: ArgLysRatio,
    pub acidic_count: u32,
    pub percents: [f64; 20],
    pub aliphatic_index: f64,
    pub aromaticity: f64,
    pub gravy: f64,
    pub disorder_fraction: f64,
}

/// Turns sequences into [`FeatureVector`]s.
pub struct FeatureExtractor<D> {
    scorer: D,
    strip_unknown_and_stop: bool,
}

impl<D: DisorderScorer> FeatureExtractor<D> {
    pub fn new(scorer: D) -> Self {
        Self {
            scorer,
            strip_unknown_and_stop: true,
        }
    }

    /// Controls whether `X` and `*` are removed before the GRAVY mean.
    ///
    /// The upstream pipeline stripped them on every run (its "only if
    /// present" guard was always true), so `true` is the compatible default.
    pub fn strip_unknown_and_stop(mut self, strip: bool) -> Self {
        self.strip_unknown_and_stop = strip;
        self
    }

    pub fn extract(&self, seq: &ProteinSequence) -> Result<FeatureVector, FeatureError> {
        if seq.is_empty() {
            return Err(FeatureError::EmptySequence(seq.id().to_string()));
        }
        let counts = composition_counts(seq.residues());
        let length = seq.len() as f64;

        let mut percents = [0.0f64; 20];
        for aa in AminoAcid::ALPHABETICAL {
            percents[aa.index()] = counts[aa.index()] as f64 / length;
        }

        let lys = counts[AminoAcid::Lys.index()];
        let arg_lys_ratio = if lys == 0 {
            ArgLysRatio::Undefined
        } else {
            ArgLysRatio::Defined(counts[AminoAcid::Arg.index()] as f64 / lys as f64)
        };

        let acidic_count = counts[AminoAcid::Asp.index()] + counts[AminoAcid::Glu.index()];

        let aliphatic_index = percents[AminoAcid::Ala.index()]
            + 2.9 * percents[AminoAcid::Val.index()]
            + 3.9 * (percents[AminoAcid::Ile.index()] + percents[AminoAcid::Leu.index()]);

        let aromaticity = (counts[AminoAcid::Phe.index()]
            + counts[AminoAcid::Trp.index()]
            + counts[AminoAcid::Tyr.index()]) as f64
            / length;

        let gravy = self.gravy(seq)?;
        let disorder_fraction = self.scorer.fraction_disordered(seq)?;

        Ok(FeatureVector {
            counts,
            arg_lys_ratio,
            acidic_count,
            percents,
            aliphatic_index,
            aromaticity,
            gravy,
            disorder_fraction,
        })
    }

    /// Mean Kyte-Doolittle hydropathy.
    fn gravy(&self, seq: &ProteinSequence) -> Result<f64, FeatureError> {
        let residues: String = if self.strip_unknown_and_stop {
            seq.residues()
                .chars()
                .filter(|&c| c != residue::UNKNOWN && c != residue::STOP)
                .collect()
        } else {
            seq.residues().to_string()
        };
        if residues.is_empty() {
            return Err(FeatureError::NoScorableResidues(seq.id().to_string()));
        }
        let mut total = 0.0;
        for c in residues.chars() {
            let aa = AminoAcid::from_char(c).ok_or_else(|| FeatureError::UnsupportedResidue {
                id: seq.id().to_string(),
                residue: c,
            })?;
            total += aa.hydropathy();
        }
        Ok(total / residues.len() as f64)
    }
}

/// Occurrences of each standard residue, indexed by
/// [`AminoAcid::ALPHABETICAL`]. Non-standard symbols are not counted.
pub fn composition_counts(residues: &str) -> [u32; 20] {
    let mut counts = [0u32; 20];
    for c in residues.chars() {
        if let Some(aa) = AminoAcid::from_char(c) {
            counts[aa.index()] += 1;
        }
    }
    counts
}

const FLEX_WINDOW: usize = 9;
const FLEX_EDGE_WEIGHTS: [f64; 4] = [0.25, 0.4375, 0.625, 0.8125];

/// Per-residue Vihinen flexibility profile over a sliding window of 9.
///
/// Returns one value per window, not one per protein; sequences of 9 residues
/// or fewer yield an empty profile. Not part of the TSV row.
pub fn flexibility(seq: &ProteinSequence) -> Result<Vec<f64>, FeatureError> {
    let residues = seq
        .residues()
        .chars()
        .map(|c| {
            AminoAcid::from_char(c).ok_or_else(|| FeatureError::UnsupportedResidue {
                id: seq.id().to_string(),
                residue: c,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut profile = Vec::new();
    let windows = residues
        .windows(FLEX_WINDOW)
        .take(residues.len().saturating_sub(FLEX_WINDOW));
    for window in windows {
        let mut score = 0.0;
        for (j, weight) in FLEX_EDGE_WEIGHTS.iter().enumerate() {
            score += (window[j].flexibility() + window[FLEX_WINDOW - j - 1].flexibility()) * weight;
        }
        score += window[FLEX_WINDOW / 2].flexibility();
        profile.push(score / 5.25);
    }
    Ok(profile)
}
