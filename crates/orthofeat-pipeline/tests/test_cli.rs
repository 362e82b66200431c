use assert_cmd::Command;
use orthofeat_test_data::TestFile;
use rusqlite::{params, Connection};
use std::path::Path;

fn seed_database(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE blast_results (
            query_id TEXT NOT NULL,
            target_id TEXT NOT NULL,
            evalue REAL NOT NULL,
            target_accession TEXT NOT NULL,
            target_definition TEXT NOT NULL,
            species TEXT NOT NULL
        );",
    )
    .unwrap();
    let rows: &[(&str, &str, f64, &str, &str, &str)] = &[
        // qualifying gene: four species after filtering
        ("JG3_00042", "PSY_001", 1e-50, "A1", "esterase", "Psychrobacter sp."),
        ("JG3_00042", "PSY_002", 1e-10, "A2", "esterase", "Psychrobacter sp."),
        ("JG3_00042", "COL_001", 1e-30, "A3", "hypothetical protein COL_001", "Colwellia sp."),
        ("JG3_00042", "COL_002", 1e-20, "A4", "putative esterase", "Colwellia sp."),
        ("JG3_00042", "SHE_001", 1e-25, "A5", "lipase", "Shewanella sp."),
        ("JG3_00042", "MOR_001", 1e-15, "A6", "esterase", "Moritella sp."),
        // only two species: skipped by selection
        ("JG3_00099", "PSY_010", 1e-05, "B1", "esterase", "Psychrobacter sp."),
        ("JG3_00099", "SHE_010", 1e-06, "B2", "lipase", "Shewanella sp."),
        // qualifies, but its targets are absent from the FASTA store
        ("JG3_00123", "ABS_001", 1e-08, "C1", "esterase", "Psychrobacter sp."),
        ("JG3_00123", "ABS_002", 1e-09, "C2", "esterase", "Colwellia sp."),
        ("JG3_00123", "ABS_003", 1e-07, "C3", "esterase", "Shewanella sp."),
    ];
    for (q, t, e, acc, def, sp) in rows {
        conn.execute(
            "INSERT INTO blast_results VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![q, t, e, acc, def, sp],
        )
        .unwrap();
    }
}

#[cfg(unix)]
#[test]
fn run_writes_one_row_per_source_target_pair() {
    let (fasta, _fa) = TestFile::proteins_01().create_temp().unwrap();
    let (stub, _st) = TestFile::iupred_stub_01().create_temp_exec().unwrap();
    let db = tempfile::NamedTempFile::new().unwrap();
    seed_database(db.path());
    let out = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("orthofeat-pipeline").unwrap();
    cmd.arg("run")
        .arg("--db")
        .arg(db.path())
        .arg("--fasta")
        .arg(&fasta)
        .arg("--iupred")
        .arg(&stub)
        .arg("--output")
        .arg(out.path());
    cmd.assert().success();

    let text = std::fs::read_to_string(out.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // JG3_00042 and its four surviving hits; JG3_00099 has too few species
    // and JG3_00123's targets are missing, so neither contributes rows
    assert_eq!(lines.len(), 5);

    let pairs: Vec<(&str, &str)> = lines
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 48);
            // every row carries the stub predictor's disorder fraction
            assert_eq!(*fields.last().unwrap(), "0.50000");
            (fields[0], fields[1])
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("JG3_00042", "JG3_00042"),
            ("JG3_00042", "PSY_001"),
            ("JG3_00042", "COL_002"),
            ("JG3_00042", "SHE_001"),
            ("JG3_00042", "MOR_001"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn missing_predictor_binary_fails_the_run() {
    let (fasta, _fa) = TestFile::proteins_01().create_temp().unwrap();
    let db = tempfile::NamedTempFile::new().unwrap();
    seed_database(db.path());

    let mut cmd = Command::cargo_bin("orthofeat-pipeline").unwrap();
    cmd.arg("run")
        .arg("--db")
        .arg(db.path())
        .arg("--fasta")
        .arg(&fasta)
        .arg("--iupred")
        .arg("/nonexistent/iupred");
    cmd.assert().failure();
}
