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

use std::fmt::{Display, Formatter, Result as FmtResult};

/// The category of a [Token].
///
/// Whitespace never appears here: the scanner consumes it internally.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A character that has no place in the constraint grammar.
    ///
    /// This includes a lone `=` or `!` without a following `=`.
    Illegal,

    /// End of input.
    ///
    /// Emitted forever once the source is exhausted.
    Eof,

    /// Field name, a run of ASCII letters.
    Id,

    /// `<`.
    Lt,

    /// `<=`.
    Le,

    /// `>`.
    Gt,

    /// `>=`.
    Ge,

    /// `==`.
    Eq,

    /// `!=`.
    Ne,

    /// `,`.
    Comma,

    /// `#` line comment.  The lexeme is everything after the `#` up to, and
    /// not including, the end of the line.
    Comment,

    /// Version-like value, a run of ASCII digits and periods, e.g. `1.0.1`.
    ///
    /// The run is not validated as a version number: `..5.` is a lexically
    /// acceptable version literal.
    Version,
}

impl TokenKind {
    /// The fixed spelling of this kind of token, for the kinds that have one.
    ///
    /// [TokenKind::Eof] spells as the empty string.  Kinds whose lexeme
    /// depends on the input return `None`.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Eof => Some(""),
            Self::Lt => Some("<"),
            Self::Le => Some("<="),
            Self::Gt => Some(">"),
            Self::Ge => Some(">="),
            Self::Eq => Some("=="),
            Self::Ne => Some("!="),
            Self::Comma => Some(","),
            Self::Illegal | Self::Id | Self::Comment | Self::Version => None,
        }
    }
}

/// A token: a [TokenKind] paired with the exact substring it matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token's category.
    pub kind: TokenKind,

    /// The matched substring, verbatim.
    pub lexeme: String,
}

impl Token {
    /// Constructs a token from its kind and matched text.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Constructs a token whose kind has a fixed spelling, e.g.
    /// [TokenKind::Ge].
    pub fn fixed(kind: TokenKind) -> Self {
        Token::new(kind, kind.as_str().unwrap_or_default())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod test {
    use super::{Token, TokenKind};

    #[test]
    fn fixed_spellings() {
        assert_eq!(Token::fixed(TokenKind::Ge).lexeme, ">=");
        assert_eq!(Token::fixed(TokenKind::Ne).lexeme, "!=");
        assert_eq!(Token::fixed(TokenKind::Comma).lexeme, ",");
        assert_eq!(Token::fixed(TokenKind::Eof).lexeme, "");
        assert_eq!(TokenKind::Version.as_str(), None);
    }

    #[test]
    fn display_is_lexeme() {
        assert_eq!(Token::new(TokenKind::Id, "openssl").to_string(), "openssl");
        assert_eq!(Token::fixed(TokenKind::Le).to_string(), "<=");
    }
}
