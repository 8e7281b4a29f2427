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

//! The constraint-expression scanner.
//!
//! [Scanner] reads characters from any [Read] source and produces one
//! [Token] per [Scanner::scan] call.  Scanning never fails: input that does
//! not fit the grammar comes back as [TokenKind::Illegal] tokens, and both
//! end of input and an underlying I/O fault are reported as
//! [TokenKind::Eof].  Whether an `Illegal` token is fatal is the caller's
//! decision.
//!
//! `Scanner` is also an [Iterator]: it yields every token through the final
//! `Eof`, then `None`.  The stream is single-pass; recreate the scanner over
//! the same source to rescan.

use std::io::{BufReader, Read};

use super::token::{Token, TokenKind};

/// True for the blank characters the grammar skips: space, tab, newline.
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

/// True for ASCII letters, the only characters allowed in a field name.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True for ASCII digits and the period, so that `1.0.1` scans as a single
/// version literal instead of splitting at each dot.
pub fn is_version_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// A pull-based scanner over a character stream.
///
/// Each instance exclusively owns its cursor and its one-character pushback
/// slot; independent instances over independent sources are unrelated.  A
/// single instance is not internally synchronized.
pub struct Scanner<R>
where
    R: Read,
{
    source: BufReader<R>,

    // One-slot pushback: the next `read` returns `pending` before touching
    // the source again.
    pending: Option<char>,

    // The most recent result of `read`, so that `unread` can refill
    // `pending` without the caller handing the character back.
    last: Option<char>,

    done: bool,
}

impl<R> Scanner<R>
where
    R: Read,
{
    /// Creates a scanner over `source`.
    ///
    /// Input is consumed one byte at a time and treated as one character per
    /// code unit; multibyte sequences fall out as individual [Illegal]
    /// tokens.
    ///
    /// [Illegal]: TokenKind::Illegal
    pub fn new(source: R) -> Self {
        Scanner {
            source: BufReader::new(source),
            pending: None,
            last: None,
            done: false,
        }
    }

    /// Returns the next character, or `None` once the source is exhausted.
    /// An I/O fault is folded into the same `None`; this layer makes no
    /// distinction and attempts no retry.
    fn read(&mut self) -> Option<char> {
        let c = match self.pending.take() {
            Some(c) => Some(c),
            None => {
                let mut byte = [0u8; 1];
                match self.source.read(&mut byte) {
                    Ok(1) => Some(char::from(byte[0])),
                    Ok(_) | Err(_) => None,
                }
            }
        };
        self.last = c;
        c
    }

    /// Pushes the most recently read character back so the next [read] will
    /// return it again.  After `read` returned `None` this is a no-op.
    ///
    /// Calling `unread` twice without an intervening `read` is not
    /// supported; the second call empties the pushback slot.
    ///
    /// [read]: Self::read
    fn unread(&mut self) {
        self.pending = self.last.take();
    }

    /// Returns the next token.
    ///
    /// Once the source is exhausted this returns [TokenKind::Eof], and keeps
    /// returning it on every further call.
    pub fn scan(&mut self) -> Token {
        let mut c = self.read();
        while c.is_some_and(is_whitespace) {
            c = self.read();
        }
        let Some(c) = c else {
            return Token::fixed(TokenKind::Eof);
        };

        if is_letter(c) {
            self.unread();
            return self.word();
        }
        if is_version_char(c) {
            self.unread();
            return self.version();
        }

        match c {
            '>' => self.relation(TokenKind::Ge, TokenKind::Gt),
            '<' => self.relation(TokenKind::Le, TokenKind::Lt),
            '=' => self.equality(TokenKind::Eq, '='),
            '!' => self.equality(TokenKind::Ne, '!'),
            ',' => Token::fixed(TokenKind::Comma),
            '#' => self.comment(),
            other => Token::new(TokenKind::Illegal, other.to_string()),
        }
    }

    /// Consumes a maximal run of letters.  The terminating character is
    /// pushed back for the next call; a run cut short by end of input still
    /// yields its partial text.
    fn word(&mut self) -> Token {
        let mut lexeme = String::new();
        loop {
            match self.read() {
                Some(c) if is_letter(c) => lexeme.push(c),
                _ => break,
            }
        }
        self.unread();
        Token::new(TokenKind::Id, lexeme)
    }

    /// Consumes a maximal run of digits and periods.  No validation beyond
    /// the character class: `..5.` is accepted here and left for the caller
    /// to judge.
    fn version(&mut self) -> Token {
        let mut lexeme = String::new();
        loop {
            match self.read() {
                Some(c) if is_version_char(c) => lexeme.push(c),
                _ => break,
            }
        }
        self.unread();
        Token::new(TokenKind::Version, lexeme)
    }

    /// Disambiguates `>` from `>=` and `<` from `<=` by one character of
    /// look-ahead.  A non-matching follower is pushed back intact.
    fn relation(&mut self, with_equals: TokenKind, without: TokenKind) -> Token {
        match self.read() {
            Some('=') => Token::fixed(with_equals),
            _ => {
                self.unread();
                Token::fixed(without)
            }
        }
    }

    /// Scans the second character of `==` or `!=`.  A lone `=` or `!` is an
    /// [Illegal](TokenKind::Illegal) token carrying just that character; the
    /// follower is pushed back and reprocessed by the next call, never
    /// merged or dropped.
    fn equality(&mut self, kind: TokenKind, first: char) -> Token {
        match self.read() {
            Some('=') => Token::fixed(kind),
            _ => {
                self.unread();
                Token::new(TokenKind::Illegal, first.to_string())
            }
        }
    }

    /// Consumes a line comment.  Stops at the newline or end of input,
    /// whichever comes first; the newline is excluded from the lexeme and
    /// swallowed.
    fn comment(&mut self) -> Token {
        let mut lexeme = String::new();
        while let Some(c) = self.read() {
            if c == '\n' {
                break;
            }
            lexeme.push(c);
        }
        Token::new(TokenKind::Comment, lexeme)
    }
}

impl<R> Iterator for Scanner<R>
where
    R: Read,
{
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.scan();
        self.done = token.kind == TokenKind::Eof;
        Some(token)
    }
}
