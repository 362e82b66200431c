//! # Residues
//!
//! The closed alphabet of the 20 standard amino acids plus the two
//! non-standard symbols the pipeline has to tolerate.
//!
//! The enum discriminants 0..19 follow the alphabetical one-letter order
//! `A C D E F G H I K L M N P Q R S T V W Y`. Count and percent vectors are
//! both indexed by this ordering, so downstream columns stay aligned.
use strum::{Display, EnumIter, EnumString};

/// Symbol for an unknown residue.
pub const UNKNOWN: char = 'X';
/// Symbol for a translated stop codon.
pub const STOP: char = '*';

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum AminoAcid {
    Ala = 0,  Cys = 1,  Asp = 2,  Glu = 3,  Phe = 4,
    Gly = 5,  His = 6,  Ile = 7,  Lys = 8,  Leu = 9,
    Met = 10, Asn = 11, Pro = 12, Gln = 13, Arg = 14,
    Ser = 15, Thr = 16, Val = 17, Trp = 18, Tyr = 19,
}

impl AminoAcid {
    pub const COUNT: usize = 20;

    /// All residues in the canonical (alphabetical one-letter) order.
    #[rustfmt::skip]
    pub const ALPHABETICAL: [AminoAcid; 20] = [
        AminoAcid::Ala, AminoAcid::Cys, AminoAcid::Asp, AminoAcid::Glu, AminoAcid::Phe,
        AminoAcid::Gly, AminoAcid::His, AminoAcid::Ile, AminoAcid::Lys, AminoAcid::Leu,
        AminoAcid::Met, AminoAcid::Asn, AminoAcid::Pro, AminoAcid::Gln, AminoAcid::Arg,
        AminoAcid::Ser, AminoAcid::Thr, AminoAcid::Val, AminoAcid::Trp, AminoAcid::Tyr,
    ];

    #[rustfmt::skip]
    pub fn from_char(c: char) -> Option<AminoAcid> {
        match c {
            'A' => Some(AminoAcid::Ala), 'C' => Some(AminoAcid::Cys),
            'D' => Some(AminoAcid::Asp), 'E' => Some(AminoAcid::Glu),
            'F' => Some(AminoAcid::Phe), 'G' => Some(AminoAcid::Gly),
            'H' => Some(AminoAcid::His), 'I' => Some(AminoAcid::Ile),
            'K' => Some(AminoAcid::Lys), 'L' => Some(AminoAcid::Leu),
            'M' => Some(AminoAcid::Met), 'N' => Some(AminoAcid::Asn),
            'P' => Some(AminoAcid::Pro), 'Q' => Some(AminoAcid::Gln),
            'R' => Some(AminoAcid::Arg), 'S' => Some(AminoAcid::Ser),
            'T' => Some(AminoAcid::Thr), 'V' => Some(AminoAcid::Val),
            'W' => Some(AminoAcid::Trp), 'Y' => Some(AminoAcid::Tyr),
            _   => None,
        }
    }

    #[rustfmt::skip]
    pub fn one_letter(self) -> char {
        match self {
            AminoAcid::Ala => 'A', AminoAcid::Cys => 'C', AminoAcid::Asp => 'D',
            AminoAcid::Glu => 'E', AminoAcid::Phe => 'F', AminoAcid::Gly => 'G',
            AminoAcid::His => 'H', AminoAcid::Ile => 'I', AminoAcid::Lys => 'K',
            AminoAcid::Leu => 'L', AminoAcid::Met => 'M', AminoAcid::Asn => 'N',
            AminoAcid::Pro => 'P', AminoAcid::Gln => 'Q', AminoAcid::Arg => 'R',
            AminoAcid::Ser => 'S', AminoAcid::Thr => 'T', AminoAcid::Val => 'V',
            AminoAcid::Trp => 'W', AminoAcid::Tyr => 'Y',
        }
    }

    /// Position in [`AminoAcid::ALPHABETICAL`]; indexes the count and percent
    /// arrays of a feature vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kyte-Doolittle hydropathy value.
    #[rustfmt::skip]
    pub fn hydropathy(self) -> f64 {
        match self {
            AminoAcid::Ala =>  1.8, AminoAcid::Cys =>  2.5, AminoAcid::Asp => -3.5,
            AminoAcid::Glu => -3.5, AminoAcid::Phe =>  2.8, AminoAcid::Gly => -0.4,
            AminoAcid::His => -3.2, AminoAcid::Ile =>  4.5, AminoAcid::Lys => -3.9,
            AminoAcid::Leu =>  3.8, AminoAcid::Met =>  1.9, AminoAcid::Asn => -3.5,
            AminoAcid::Pro => -1.6, AminoAcid::Gln => -3.5, AminoAcid::Arg => -4.5,
            AminoAcid::Ser => -0.8, AminoAcid::Thr => -0.7, AminoAcid::Val =>  4.2,
            AminoAcid::Trp => -0.9, AminoAcid::Tyr => -1.3,
        }
    }

    /// Vihinen normalized flexibility value.
    #[rustfmt::skip]
    pub fn flexibility(self) -> f64 {
        match self {
            AminoAcid::Ala => 0.984, AminoAcid::Cys => 0.906, AminoAcid::Asp => 1.068,
            AminoAcid::Glu => 1.094, AminoAcid::Phe => 0.915, AminoAcid::Gly => 1.031,
            AminoAcid::His => 0.950, AminoAcid::Ile => 0.927, AminoAcid::Lys => 1.102,
            AminoAcid::Leu => 0.935, AminoAcid::Met => 0.952, AminoAcid::Asn => 1.048,
            AminoAcid::Pro => 1.049, AminoAcid::Gln => 1.037, AminoAcid::Arg => 1.008,
            AminoAcid::Ser => 1.046, AminoAcid::Thr => 0.997, AminoAcid::Val => 0.931,
            AminoAcid::Trp => 0.904, AminoAcid::Tyr => 0.929,
        }
    }

    /// Phe, Trp or Tyr.
    pub fn is_aromatic(self) -> bool {
        matches!(self, AminoAcid::Phe | AminoAcid::Trp | AminoAcid::Tyr)
    }

    /// Asp or Glu.
    pub fn is_acidic(self) -> bool {
        matches!(self, AminoAcid::Asp | AminoAcid::Glu)
    }
}
