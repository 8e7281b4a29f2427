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

//! The NVD CVE 2.0 feed format.
//!
//! Deserializable model of the yearly `nvdcve-2.0-<year>.xml` documents,
//! restricted to the elements this crate stores.  Unknown elements and
//! attributes are ignored.

use std::io::Read;

use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use quick_xml::de::from_str;
use serde::Deserialize;

use super::Error;

/// A whole yearly feed document.
#[derive(Deserialize, Debug)]
pub struct Feed {
    /// The feed's vulnerability records.
    #[serde(rename = "entry", default)]
    pub entries: Vec<Entry>,
}

impl Feed {
    /// Decompresses and deserializes one gzipped feed archive.
    pub fn from_gzip_xml<R>(archive: R) -> Result<Self, Error>
    where
        R: Read,
    {
        let mut xml = String::new();
        GzDecoder::new(archive).read_to_string(&mut xml)?;
        Ok(from_str(&xml)?)
    }
}

/// One CVE record.
#[derive(Deserialize, Debug)]
pub struct Entry {
    /// The CVE identifier, e.g. `CVE-2014-0160`.
    #[serde(rename = "@id")]
    pub cve_id: String,

    /// When the record was first published.
    #[serde(rename = "published-datetime")]
    pub published: DateTime<Utc>,

    /// When the record was last modified.
    #[serde(rename = "last-modified-datetime")]
    pub last_modified: DateTime<Utc>,

    /// CVSS metrics, absent for unscored records.
    #[serde(default)]
    cvss: Option<CvssMetrics>,

    /// Vulnerable platforms as CPE strings.
    #[serde(rename = "vulnerable-software-list", default)]
    vulnerable_software_list: SoftwareList,

    /// Free-text description.
    #[serde(default)]
    pub summary: String,

    /// Typed references to advisories, patches, and reports.
    #[serde(rename = "references", default)]
    pub references: Vec<Reference>,
}

impl Entry {
    /// The vulnerable platforms, as CPE identifiers.
    pub fn products(&self) -> &[String] {
        &self.vulnerable_software_list.product
    }

    /// The record's CVSS base metrics, if it has been scored.
    pub fn cvss(&self) -> Option<&Cvss> {
        self.cvss.as_ref().map(|metrics| &metrics.base_metrics)
    }
}

// The feed nests the metrics as `cvss>base_metrics`.
#[derive(Deserialize, Debug)]
struct CvssMetrics {
    base_metrics: Cvss,
}

#[derive(Deserialize, Debug, Default)]
struct SoftwareList {
    #[serde(default)]
    product: Vec<String>,
}

/// CVSS v2 base metrics for one record.
#[derive(Deserialize, Debug)]
pub struct Cvss {
    /// Base score, kept as the feed's decimal string.
    #[serde(default)]
    pub score: String,

    /// `LOCAL`, `ADJACENT_NETWORK`, or `NETWORK`.
    #[serde(rename = "access-vector", default)]
    pub access_vector: String,

    /// `LOW`, `MEDIUM`, or `HIGH`.
    #[serde(rename = "access-complexity", default)]
    pub access_complexity: String,

    /// `NONE`, `SINGLE_INSTANCE`, or `MULTIPLE_INSTANCES`.
    #[serde(default)]
    pub authentication: String,

    /// `NONE`, `PARTIAL`, or `COMPLETE`.
    #[serde(rename = "confidentiality-impact", default)]
    pub confidentiality_impact: String,

    /// `NONE`, `PARTIAL`, or `COMPLETE`.
    #[serde(rename = "integrity-impact", default)]
    pub integrity_impact: String,

    /// `NONE`, `PARTIAL`, or `COMPLETE`.
    #[serde(rename = "availability-impact", default)]
    pub availability_impact: String,

    /// Who produced the score.
    #[serde(default)]
    pub source: String,

    /// When the score was generated.
    #[serde(rename = "generated-on-datetime", default)]
    pub generated_on: Option<DateTime<Utc>>,
}

/// One reference attached to a record.
#[derive(Deserialize, Debug)]
pub struct Reference {
    /// Reference category, e.g. `VENDOR_ADVISORY` or `PATCH`.
    #[serde(rename = "@reference_type", default)]
    pub reference_type: String,

    /// The referencing source, e.g. `CONFIRM` or `MLIST`.
    #[serde(default)]
    pub source: String,

    /// The referenced document.
    #[serde(rename = "reference")]
    pub link: Link,
}

/// A reference's hyperlink.
#[derive(Deserialize, Debug, Default)]
pub struct Link {
    /// Human-readable link text.
    #[serde(rename = "$text", default)]
    pub value: String,

    /// Link target.
    #[serde(rename = "@href", default)]
    pub href: String,
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use chrono::{TimeZone, Utc};
    use flate2::{write::GzEncoder, Compression};
    use quick_xml::de::from_str;

    use crate::nvd::testdata::HEARTBLEED_XML;

    use super::Feed;

    #[test]
    fn deserialize_entry() {
        let feed: Feed = from_str(HEARTBLEED_XML).unwrap();
        assert_eq!(feed.entries.len(), 1);

        let entry = &feed.entries[0];
        assert_eq!(entry.cve_id, "CVE-2014-0160");
        assert_eq!(
            entry.published,
            Utc.with_ymd_and_hms(2014, 4, 7, 22, 55, 3).unwrap()
                + chrono::Duration::milliseconds(893)
        );
        assert_eq!(
            entry.last_modified,
            Utc.with_ymd_and_hms(2014, 4, 9, 19, 22, 24).unwrap()
        );
        assert_eq!(
            entry.products(),
            [
                "cpe:/a:openssl:openssl:1.0.1",
                "cpe:/a:openssl:openssl:1.0.1f"
            ]
        );
        assert!(entry.summary.starts_with("The TLS and DTLS implementations"));

        let cvss = entry.cvss().unwrap();
        assert_eq!(cvss.score, "5.0");
        assert_eq!(cvss.access_vector, "NETWORK");
        assert_eq!(cvss.confidentiality_impact, "PARTIAL");
        assert!(cvss.generated_on.is_some());

        assert_eq!(entry.references.len(), 2);
        assert_eq!(entry.references[0].reference_type, "VENDOR_ADVISORY");
        assert_eq!(entry.references[0].source, "CONFIRM");
        assert_eq!(
            entry.references[0].link.href,
            "https://www.openssl.org/news/secadv_20140407.txt"
        );
        assert_eq!(entry.references[0].link.value, "openssl advisory");
    }

    #[test]
    fn entry_without_cvss() {
        let xml = r#"<nvd>
  <entry id="CVE-1999-0001">
    <published-datetime>1999-12-30T00:00:00.000-05:00</published-datetime>
    <last-modified-datetime>2010-12-16T00:00:00.000-05:00</last-modified-datetime>
    <summary>ip_input.c in BSD-derived TCP/IP implementations allows remote attackers to cause a denial of service.</summary>
  </entry>
</nvd>"#;
        let feed: Feed = from_str(xml).unwrap();
        let entry = &feed.entries[0];
        assert!(entry.cvss().is_none());
        assert!(entry.products().is_empty());
        assert!(entry.references.is_empty());
    }

    #[test]
    fn decode_gzip_archive() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(HEARTBLEED_XML.as_bytes()).unwrap();
        let archive = encoder.finish().unwrap();

        let feed = Feed::from_gzip_xml(&archive[..]).unwrap();
        assert_eq!(feed.entries.len(), 1);
        assert_eq!(feed.entries[0].cve_id, "CVE-2014-0160");
    }
}
