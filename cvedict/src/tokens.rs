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

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Args;
use cvedict::lex::{scan::Scanner, TokenKind};

/// Prints the token stream of a constraint-expression file.
///
/// Unrecognized input surfaces as Illegal tokens; it is never corrected or
/// skipped, and it does not stop the scan.
#[derive(Args, Clone, Debug)]
pub struct Tokens {
    /// Input file name.
    input: PathBuf,
}

impl Tokens {
    pub fn run(self) -> Result<()> {
        let file = File::open(&self.input)?;
        let mut scanner = Scanner::new(file);
        loop {
            let token = Scanner::scan(&mut scanner);
            if token.kind == TokenKind::Eof {
                break;
            }
            println!("{:?}\t{}", token.kind, token.lexeme);
        }
        Ok(())
    }
}
