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

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use cvedict::nvd::{
    fetch::{FeedClient, FIRST_YEAR, LAST_YEAR},
    store::Store,
};
use log::{info, warn};

/// Downloads the yearly NVD feeds and loads them into a local database.
///
/// If the database file does not exist yet, performs a full historical load
/// across all yearly archives.
#[derive(Args, Clone, Debug)]
pub struct Fetch {
    /// Database file name.
    #[arg(long, default_value = "nvd.db")]
    database: PathBuf,

    /// Base URL of an NVD feed mirror.
    #[arg(long)]
    mirror: Option<String>,
}

impl Fetch {
    pub fn run(self) -> Result<()> {
        let full = !self.database.exists();
        let mut store = Store::open(&self.database)?;
        if !full {
            // TODO: incremental update from the "modified" feed.
            warn!(
                "{} already exists and incremental update is not implemented; \
                 delete the file to reload from scratch",
                self.database.display()
            );
            return Ok(());
        }

        store.create_tables()?;
        let client = match self.mirror {
            Some(base_url) => FeedClient::new(base_url),
            None => FeedClient::default(),
        };
        for year in FIRST_YEAR..=LAST_YEAR {
            let feed = client.fetch_year(year)?;
            info!("year {year}: {} entries", feed.entries.len());
            store.insert_entries(&feed.entries)?;
        }
        store.set_loaded_at(Utc::now())?;
        info!("historical load complete");
        Ok(())
    }
}
