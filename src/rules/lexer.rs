// Scanner for the rule language. Unlike `crate::codec::text`, which
// tokenizes a fixed, comma/paren-free format, the rule grammar overloads
// '<' and '>' as both context separators and single-symbol token names, so
// scanning is driven directly off the character stream rather than an
// intermediate `Token` enum.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::RuleParseError;

/// Whether single-character or whole-word identifiers are admitted:
/// a single printable symbol in `Default` mode, or a non-empty alphanumeric
/// word in `Long` mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenMode {
    Default,
    Long,
}

/// Single-symbol token names admissible in either mode.
const SPECIAL_SYMBOLS: &[char] = &['^', 'v', '<', '>', '-', '+', '[', ']', '|'];

pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Scanner {
            chars: line.chars().peekable(),
            line,
        }
    }

    fn err(&self) -> RuleParseError {
        RuleParseError::Malformed(self.line.to_string())
    }

    pub fn skip_ws(&mut self) {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// True if the upcoming characters (after whitespace) are the start of
    /// the arrow `->`. Does not consume.
    fn at_arrow(&mut self) -> bool {
        let mut clone = self.chars.clone();
        matches!((clone.next(), clone.next()), (Some('-'), Some('>')))
    }

    /// Consume `->` if present (after skipping whitespace). Returns whether
    /// it matched.
    pub fn try_eat_arrow(&mut self) -> bool {
        self.skip_ws();
        if self.at_arrow() {
            self.chars.next();
            self.chars.next();
            true
        } else {
            false
        }
    }

    pub fn try_eat(&mut self, literal: char) -> bool {
        self.skip_ws();
        if self.peek_char() == Some(literal) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    /// Peek (without consuming) whether the next non-whitespace character is
    /// `literal`.
    pub fn clone_peek_is(&self, literal: char) -> bool {
        let mut clone = self.chars.clone();
        loop {
            match clone.peek() {
                Some(c) if c.is_whitespace() => {
                    clone.next();
                }
                Some(c) => return *c == literal,
                None => return false,
            }
        }
    }

    pub fn at_end(&mut self) -> bool {
        self.skip_ws();
        self.peek_char().is_none()
    }

    /// Read one token name. Returns `Ok(None)` (without consuming anything)
    /// if the next characters are the arrow, so callers can distinguish "no
    /// more tokens here" from a genuine parse failure.
    pub fn read_token(&mut self, mode: TokenMode) -> Result<Option<String>, RuleParseError> {
        self.skip_ws();
        if self.at_arrow() {
            return Ok(None);
        }
        let Some(c) = self.peek_char() else {
            return Ok(None);
        };
        if SPECIAL_SYMBOLS.contains(&c) && !c.is_alphanumeric() {
            self.chars.next();
            return Ok(Some(c.to_string()));
        }
        if !c.is_alphanumeric() {
            return Err(self.err());
        }
        match mode {
            TokenMode::Default => {
                self.chars.next();
                Ok(Some(c.to_string()))
            }
            TokenMode::Long => {
                let mut word = String::new();
                while matches!(self.peek_char(), Some(c) if c.is_alphanumeric()) {
                    word.push(self.chars.next().unwrap());
                }
                Ok(Some(word))
            }
        }
    }

    /// Read a decimal real number. Only called right after a `:`, so digits
    /// here are unambiguously numeric rather than single-char tokens.
    pub fn read_real(&mut self) -> Result<f64, RuleParseError> {
        self.skip_ws();
        let mut text = String::new();
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit() || c == '.') {
            text.push(self.chars.next().unwrap());
        }
        text.parse::<f64>()
            .map_err(|_| RuleParseError::ExpectedProbability(self.line.to_string()))
    }

    /// Consume a separator between list items: a comma, or nothing if
    /// already separated by whitespace.
    pub fn skip_list_separator(&mut self) {
        self.skip_ws();
        if self.peek_char() == Some(',') {
            self.chars.next();
            self.skip_ws();
        }
    }
}
