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

//! Lexical analysis for version-constraint expressions.
//!
//! A constraint expression is a comma-separated list of comparisons between a
//! field name and a version-like value, with `#` line comments:
//!
//! ```text
//! openssl >= 1.0.1, openssl < 1.0.2  # heartbleed range
//! ```
//!
//! The [scan] module turns a character stream into [Token]s, one per call.
//! The grammar is intentionally ASCII-only.

// Warn about missing docs, but not for items declared with `#[cfg(test)]`.
#![cfg_attr(not(test), warn(missing_docs))]

pub mod scan;
mod token;
pub use token::{Token, TokenKind};
