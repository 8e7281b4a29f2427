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

//! Feed download.

use log::debug;

use super::{feed::Feed, Error};

/// First year with a published feed archive.
pub const FIRST_YEAR: i32 = 2002;

/// Last year of the historical load.
pub const LAST_YEAR: i32 = 2015;

const DEFAULT_BASE_URL: &str = "https://static.nvd.nist.gov/feeds/xml/cve";

/// Downloads yearly feed archives.
pub struct FeedClient {
    base_url: String,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl FeedClient {
    /// Creates a client over `base_url`, which may point at a mirror.  A
    /// trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        FeedClient { base_url }
    }

    /// The URL of the archive for `year`.
    pub fn feed_url(&self, year: i32) -> String {
        format!("{}/nvdcve-2.0-{year}.xml.gz", self.base_url)
    }

    /// Downloads and parses the archive for `year`.
    pub fn fetch_year(&self, year: i32) -> Result<Feed, Error> {
        let url = self.feed_url(year);
        debug!("downloading {url}");
        let response = ureq::get(&url).call().map_err(Box::new)?;
        Feed::from_gzip_xml(response.into_reader())
    }
}

#[cfg(test)]
mod test {
    use super::{FeedClient, FIRST_YEAR, LAST_YEAR};

    #[test]
    fn archive_urls() {
        let client = FeedClient::default();
        assert_eq!(
            client.feed_url(2014),
            "https://static.nvd.nist.gov/feeds/xml/cve/nvdcve-2.0-2014.xml.gz"
        );

        let mirror = FeedClient::new("http://mirror.example.org/nvd/");
        assert_eq!(
            mirror.feed_url(FIRST_YEAR),
            "http://mirror.example.org/nvd/nvdcve-2.0-2002.xml.gz"
        );
        assert!(FIRST_YEAR < LAST_YEAR);
    }
}
