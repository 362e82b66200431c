//! orthofeat-test-data
//!
//! Test fixtures embedded in the crate: a small protein FASTA, a shell stub
//! that stands in for the IUPred binary, and a canned IUPred output capture.
//!
//! Fixtures are exposed as `TestFile` values that materialize a temporary
//! file on demand.
use std::fs;
use tempfile::{Builder, NamedTempFile};

/// An embedded fixture.
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // the handle keeps the tempfile alive for the test's duration
/// use orthofeat_test_data::TestFile;
/// let (fasta, _temp) = TestFile::proteins_01().create_temp().unwrap();
/// ```
#[derive(Debug)]
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Six-record FASTA: two query genes plus the homolog targets the
    /// pipeline tests expect to resolve.
    pub fn proteins_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/proteins.faa"),
            suffix: "faa",
        }
    }

    /// Shell stub mimicking `iupred <fasta> long`; prints four scored
    /// residues, two of them >= 0.5. Needs the executable bit, see
    /// [`TestFile::create_temp_exec`].
    pub fn iupred_stub_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/iupred_stub.sh"),
            suffix: "sh",
        }
    }

    /// Captured IUPred long-mode stdout (headers, four scores, trailing
    /// blank line).
    pub fn iupred_output_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/iupred_long.out"),
            suffix: "out",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(temp.path(), self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }

    /// Like [`TestFile::create_temp`], with the executable bit set so the
    /// fixture can be spawned as a process.
    #[cfg(unix)]
    pub fn create_temp_exec(&self) -> std::io::Result<(String, NamedTempFile)> {
        use std::os::unix::fs::PermissionsExt;

        let (path, temp) = self.create_temp()?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok((path, temp))
    }
}
