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

//! A local dictionary of known software vulnerabilities.
//!
//! Two halves:
//!
//! - [mod lex] tokenizes the version-constraint language used to match
//!   installed packages against vulnerable version ranges, e.g.
//!   `openssl >= 1.0.1, openssl < 1.0.2  # heartbleed`.
//!
//! - [mod nvd] downloads the yearly NVD vulnerability feeds and loads them
//!   into a local SQLite database.

pub mod lex;
pub mod nvd;
