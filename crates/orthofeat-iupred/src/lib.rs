//! orthofeat-iupred
//!
//! Wrapper around the external IUPred long-disorder predictor. The sequence
//! is handed over as a one-record FASTA temp file, the tool is invoked as
//! `<binary> <fasta-path> long`, and its stdout is reduced to the fraction of
//! residues scored at or above the disorder threshold.
use orthofeat_core::disorder::{DisorderError, DisorderScorer};
use orthofeat_core::ProteinSequence;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

const DISORDER_THRESHOLD: f64 = 0.5;

/// IUPred invocation handle; the binary path is threaded in at construction
/// time rather than read from process-global state.
#[derive(Debug, Clone)]
pub struct IuPred {
    binary: PathBuf,
}

impl IuPred {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl DisorderScorer for IuPred {
    fn fraction_disordered(&self, seq: &ProteinSequence) -> Result<f64, DisorderError> {
        // A fresh uniquely-named file per invocation; drop unlinks it on
        // every return path, including process failure.
        let mut fasta = tempfile::Builder::new()
            .prefix("iupred-")
            .suffix(".fas")
            .tempfile()?;
        writeln!(fasta, ">{}", seq.id())?;
        writeln!(fasta, "{}", seq.residues())?;
        fasta.flush()?;

        let output = Command::new(&self.binary)
            .arg(fasta.path())
            .arg("long")
            .output()
            .map_err(|e| {
                DisorderError::Unavailable(format!("{}: {e}", self.binary.display()))
            })?;
        if !output.status.success() {
            return Err(DisorderError::ProcessFailed(format!(
                "{} ({}): {}",
                self.binary.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        parse_fraction(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Fraction of residues with a long-disorder propensity >= 0.5.
///
/// `#`-prefixed lines are headers; blank lines (IUPred terminates its output
/// with one) carry no scores; every other line is whitespace-delimited with
/// the per-residue score in the third column.
pub fn parse_fraction(stdout: &str) -> Result<f64, DisorderError> {
    let mut scored = 0usize;
    let mut disordered = 0usize;
    for line in stdout.lines() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let field = line
            .split_whitespace()
            .nth(2)
            .ok_or_else(|| DisorderError::MalformedOutput(format!("short line: {line:?}")))?;
        let score: f64 = field
            .parse()
            .map_err(|_| DisorderError::MalformedOutput(format!("bad score in: {line:?}")))?;
        scored += 1;
        if score >= DISORDER_THRESHOLD {
            disordered += 1;
        }
    }
    if scored == 0 {
        return Err(DisorderError::MalformedOutput(
            "no residue scores in predictor output".to_string(),
        ));
    }
    Ok(disordered as f64 / scored as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthofeat_test_data::TestFile;

    #[test]
    fn fully_ordered_output_scores_zero() {
        let out = "# header\n1 M 0.1\n2 A 0.2\n3 S 0.3\n";
        assert_eq!(parse_fraction(out).unwrap(), 0.0);
    }

    #[test]
    fn fully_disordered_output_scores_one() {
        let out = "1 M 0.9\n2 A 0.5\n3 S 0.7\n";
        assert_eq!(parse_fraction(out).unwrap(), 1.0);
    }

    #[test]
    fn headers_and_trailing_blank_are_skipped() {
        let (path, _temp) = TestFile::iupred_output_01().create_temp().unwrap();
        let captured = std::fs::read_to_string(path).unwrap();
        assert_eq!(parse_fraction(&captured).unwrap(), 0.5);
    }

    #[test]
    fn short_data_line_is_fatal() {
        assert!(matches!(
            parse_fraction("1 M\n"),
            Err(DisorderError::MalformedOutput(_))
        ));
    }

    #[test]
    fn unparseable_score_is_fatal() {
        assert!(matches!(
            parse_fraction("1 M x.y\n"),
            Err(DisorderError::MalformedOutput(_))
        ));
    }

    #[test]
    fn output_without_scores_is_fatal() {
        assert!(matches!(
            parse_fraction("# only a header\n\n"),
            Err(DisorderError::MalformedOutput(_))
        ));
    }

    #[test]
    fn missing_binary_reports_unavailable() {
        let scorer = IuPred::new("/nonexistent/iupred");
        let seq = ProteinSequence::new("q", "MASK");
        assert!(matches!(
            scorer.fraction_disordered(&seq),
            Err(DisorderError::Unavailable(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn stub_binary_round_trip() {
        let (stub, _temp) = TestFile::iupred_stub_01().create_temp_exec().unwrap();
        let scorer = IuPred::new(stub);
        let seq = ProteinSequence::new("q", "MASK");
        assert_eq!(scorer.fraction_disordered(&seq).unwrap(), 0.5);
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_reports_process_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iupred-broken.sh");
        std::fs::write(&path, "#!/bin/sh\necho boom >&2\nexit 3\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let scorer = IuPred::new(&path);
        let seq = ProteinSequence::new("q", "MASK");
        match scorer.fraction_disordered(&seq) {
            Err(DisorderError::ProcessFailed(msg)) => assert!(msg.contains("boom")),
            other => panic!("expected ProcessFailed, got {other:?}"),
        }
    }
}
