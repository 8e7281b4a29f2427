// cvedict - a local dictionary of known software vulnerabilities.
// Copyright (C) 2026 The cvedict authors.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! The vulnerability store.
//!
//! One row per CVE in `Entries`, child rows in `Products`, `CveRefs`, and
//! `Cvss` keyed by the CVE identifier, and a one-row `Meta` table recording
//! when the historical load finished.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result};

use super::feed::Entry;

/// A SQLite-backed store of vulnerability records.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens (creating if needed) the database at `path`.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Ok(Store {
            conn: Connection::open(path)?,
        })
    }

    /// Opens a transient in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Store {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Creates the schema.  Safe to call on a database that already has it.
    pub fn create_tables(&self) -> Result<()> {
        self.conn.execute_batch(
            "BEGIN;
             CREATE TABLE IF NOT EXISTS Entries
               (CveID TEXT PRIMARY KEY,
                PublishedDate DATETIME,
                LastModifiedDate DATETIME,
                Summary TEXT);
             CREATE TABLE IF NOT EXISTS Products
               (Id INTEGER PRIMARY KEY AUTOINCREMENT,
                CveID TEXT,
                Value TEXT,
                FOREIGN KEY(CveID) REFERENCES Entries(CveID));
             CREATE TABLE IF NOT EXISTS CveRefs
               (Id INTEGER PRIMARY KEY AUTOINCREMENT,
                CveID TEXT,
                Type TEXT,
                Source TEXT,
                LinkValue TEXT,
                LinkHref TEXT,
                FOREIGN KEY(CveID) REFERENCES Entries(CveID));
             CREATE TABLE IF NOT EXISTS Cvss
               (Id INTEGER PRIMARY KEY AUTOINCREMENT,
                CveID TEXT,
                Score TEXT,
                AccessVector TEXT,
                AccessComplexity TEXT,
                Authentication TEXT,
                ConfidentialityImpact TEXT,
                IntegrityImpact TEXT,
                AvailabilityImpact TEXT,
                Source TEXT,
                GeneratedOnDate DATETIME,
                FOREIGN KEY(CveID) REFERENCES Entries(CveID));
             CREATE TABLE IF NOT EXISTS Meta
               (Id INTEGER PRIMARY KEY CHECK (Id = 1),
                LoadedAt DATETIME);
             COMMIT;",
        )
    }

    /// Writes one record and its child rows in a single transaction.
    pub fn insert_entry(&mut self, entry: &Entry) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO Entries (CveID, PublishedDate, LastModifiedDate, Summary)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.cve_id,
                entry.published,
                entry.last_modified,
                entry.summary
            ],
        )?;
        {
            let mut products = tx.prepare("INSERT INTO Products (CveID, Value) VALUES (?1, ?2)")?;
            for product in entry.products() {
                products.execute(params![entry.cve_id, product])?;
            }

            let mut references = tx.prepare(
                "INSERT INTO CveRefs (CveID, Type, Source, LinkValue, LinkHref)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for reference in &entry.references {
                references.execute(params![
                    entry.cve_id,
                    reference.reference_type,
                    reference.source,
                    reference.link.value,
                    reference.link.href
                ])?;
            }

            if let Some(cvss) = entry.cvss() {
                tx.execute(
                    "INSERT INTO Cvss (CveID, Score, AccessVector, AccessComplexity,
                                       Authentication, ConfidentialityImpact, IntegrityImpact,
                                       AvailabilityImpact, Source, GeneratedOnDate)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                    params![
                        entry.cve_id,
                        cvss.score,
                        cvss.access_vector,
                        cvss.access_complexity,
                        cvss.authentication,
                        cvss.confidentiality_impact,
                        cvss.integrity_impact,
                        cvss.availability_impact,
                        cvss.source,
                        cvss.generated_on
                    ],
                )?;
            }
        }
        tx.commit()
    }

    /// Writes a batch of records.
    pub fn insert_entries(&mut self, entries: &[Entry]) -> Result<()> {
        for entry in entries {
            self.insert_entry(entry)?;
        }
        Ok(())
    }

    /// Records that the store holds the feeds as of `when`.
    pub fn set_loaded_at(&self, when: DateTime<Utc>) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Meta (Id, LoadedAt) VALUES (1, ?1)
             ON CONFLICT(Id) DO UPDATE SET LoadedAt = excluded.LoadedAt",
            params![when],
        )?;
        Ok(())
    }

    /// When the historical load finished, or `None` if it never has.
    pub fn loaded_at(&self) -> Result<Option<DateTime<Utc>>> {
        self.conn
            .query_row("SELECT LoadedAt FROM Meta WHERE Id = 1", [], |row| {
                row.get(0)
            })
            .optional()
    }
}
