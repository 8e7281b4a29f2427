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

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{fetch::Fetch, tokens::Tokens};

mod fetch;
mod tokens;

/// cvedict, a local dictionary of known software vulnerabilities.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Fetch(Fetch),
    Tokens(Tokens),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Fetch(fetch) => fetch.run(),
            Command::Tokens(tokens) => tokens.run(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    Cli::parse().command.run()
}
