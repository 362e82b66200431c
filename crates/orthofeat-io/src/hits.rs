//! Queries for the blast_results table — the homology hit relation.
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HitTableError {
    #[error("hit table read failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// One row of the blast_results relation. Immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    pub query_id: String,
    pub target_id: String,
    pub e_value: f64,
    pub target_accession: String,
    pub target_definition: String,
    pub species: String,
}

/// Read-only access to the hit table.
///
/// `hits_for` returns rows in encounter order; selection ties are broken on
/// that order, so implementations must keep it stable.
pub trait HitSource {
    fn query_ids(&self) -> Result<Vec<String>, HitTableError>;
    fn hits_for(&self, query_id: &str) -> Result<Vec<HitRecord>, HitTableError>;
}

/// Hit table backed by a SQLite database with a `blast_results` relation.
pub struct SqliteHitTable {
    conn: Connection,
}

impl SqliteHitTable {
    pub fn open(path: &Path) -> Result<Self, HitTableError> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl HitSource for SqliteHitTable {
    fn query_ids(&self) -> Result<Vec<String>, HitTableError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT DISTINCT query_id FROM blast_results")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn hits_for(&self, query_id: &str) -> Result<Vec<HitRecord>, HitTableError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT query_id, target_id, evalue, target_accession, target_definition, species
             FROM blast_results WHERE query_id = ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![query_id], |row| {
            Ok(HitRecord {
                query_id: row.get(0)?,
                target_id: row.get(1)?,
                e_value: row.get(2)?,
                target_accession: row.get(3)?,
                target_definition: row.get(4)?,
                species: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
