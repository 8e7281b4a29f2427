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

//! The NVD data-acquisition pipeline.
//!
//! Three stages, all sequential and synchronous:
//!
//! 1. [fetch] downloads the gzipped, year-indexed CVE 2.0 XML archives.
//! 2. [feed] decompresses and deserializes them into [Entry](feed::Entry)
//!    records.
//! 3. [store] persists the records into a local SQLite database, one row per
//!    CVE plus child tables for products, references, and CVSS metrics.
//!
//! The pipeline's contract toward the rest of the system is only "the store
//! now holds records as of date D"; see [store::Store::loaded_at].

use quick_xml::DeError;
use thiserror::Error as ThisError;

pub mod feed;
pub mod fetch;
pub mod store;

/// An error in feed retrieval or decoding.
///
/// Database errors are not wrapped here; the [store] module reports plain
/// [rusqlite::Error]s.
#[derive(ThisError, Debug)]
pub enum Error {
    /// The feed could not be downloaded.
    #[error("feed download failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// The archive could not be read or decompressed.
    #[error("reading feed archive: {0}")]
    Io(#[from] std::io::Error),

    /// The decompressed archive is not a well-formed CVE 2.0 document.
    #[error("malformed feed: {0}")]
    Xml(#[from] DeError),
}

impl From<ureq::Error> for Error {
    fn from(error: ureq::Error) -> Self {
        Self::Http(Box::new(error))
    }
}

#[cfg(test)]
pub(crate) mod testdata {
    /// One entry of the 2014 feed, cut down to the fields this crate reads.
    pub(crate) const HEARTBLEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<nvd xmlns="http://scap.nist.gov/schema/feed/vulnerability/2.0" nvd_xml_version="2.0">
  <entry id="CVE-2014-0160">
    <vulnerable-software-list>
      <product>cpe:/a:openssl:openssl:1.0.1</product>
      <product>cpe:/a:openssl:openssl:1.0.1f</product>
    </vulnerable-software-list>
    <published-datetime>2014-04-07T18:55:03.893-04:00</published-datetime>
    <last-modified-datetime>2014-04-09T15:22:24.000-04:00</last-modified-datetime>
    <cvss>
      <base_metrics>
        <score>5.0</score>
        <access-vector>NETWORK</access-vector>
        <access-complexity>LOW</access-complexity>
        <authentication>NONE</authentication>
        <confidentiality-impact>PARTIAL</confidentiality-impact>
        <integrity-impact>NONE</integrity-impact>
        <availability-impact>NONE</availability-impact>
        <source>http://nvd.nist.gov</source>
        <generated-on-datetime>2014-04-09T15:30:00.000-04:00</generated-on-datetime>
      </base_metrics>
    </cvss>
    <references reference_type="VENDOR_ADVISORY">
      <source>CONFIRM</source>
      <reference href="https://www.openssl.org/news/secadv_20140407.txt">openssl advisory</reference>
    </references>
    <references reference_type="PATCH">
      <source>MLIST</source>
      <reference href="http://www.openwall.com/lists/oss-security/2014/04/07/7">oss-security</reference>
    </references>
    <summary>The TLS and DTLS implementations in OpenSSL do not properly handle Heartbeat Extension packets.</summary>
  </entry>
</nvd>
"#;
}
