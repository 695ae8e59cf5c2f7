//! Path lexer: raw expression text to an ordered token sequence

use crate::errors::{PathError, Result};
use crate::types::{Token, TokenKind};

/// Characters that terminate a tag or identifier run
const DELIMITERS: &[char] = &['/', '[', ']', '@', '=', '!', '<', '>', '*'];

/// Tokenizer for the constrained XPath-like syntax
///
/// Stateless; each call scans the whole input and returns a fresh token
/// sequence terminated by an [`TokenKind::End`] marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLexer;

impl PathLexer {
    /// Create a new lexer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a path expression
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        Scanner::new(input).run()
    }
}

/// Per-invocation cursor over the input characters
struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek(0) {
            if c.is_whitespace() {
                self.pos += 1;
                continue;
            }

            match c {
                '/' => {
                    let start = self.pos;
                    self.pos += 1;
                    // A second '/' merges into one double-slash token.
                    if self.peek(0) == Some('/') {
                        self.pos += 1;
                        tokens.push(Token::new(TokenKind::Slash, "//", start));
                    } else {
                        tokens.push(Token::new(TokenKind::Slash, "/", start));
                    }
                }
                '@' => {
                    tokens.push(Token::new(TokenKind::Attribute, "@", self.pos));
                    self.pos += 1;
                }
                '[' => {
                    tokens.push(Token::new(TokenKind::PredicateOpen, "[", self.pos));
                    self.pos += 1;
                }
                ']' => {
                    tokens.push(Token::new(TokenKind::PredicateClose, "]", self.pos));
                    self.pos += 1;
                }
                '*' => {
                    tokens.push(Token::new(TokenKind::Wildcard, "*", self.pos));
                    self.pos += 1;
                }
                '"' | '\'' => {
                    tokens.push(self.scan_literal(c)?);
                }
                '=' | '!' | '>' | '<' => {
                    tokens.push(self.scan_operator(c));
                }
                _ => {
                    if let Some(axis) = self.scan_axis() {
                        tokens.push(axis);
                    } else {
                        tokens.push(self.scan_tag());
                    }
                }
            }
        }

        tokens.push(Token::new(TokenKind::End, "", self.pos));
        Ok(tokens)
    }

    /// Scan a quoted literal, honoring backslash escapes. The token text is
    /// the raw content between the quotes (escapes intact); its offset is the
    /// first content character.
    fn scan_literal(&mut self, quote: char) -> Result<Token> {
        self.pos += 1;
        let start = self.pos;

        while let Some(c) = self.peek(0) {
            if c == quote {
                let text: String = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                return Ok(Token::new(TokenKind::Literal, text, start));
            }
            if c == '\\' && self.peek(1).is_some() {
                self.pos += 1;
            }
            self.pos += 1;
        }

        Err(PathError::UnterminatedLiteral { offset: start })
    }

    /// Scan a comparison operator, greedily taking a trailing '='
    fn scan_operator(&mut self, first: char) -> Token {
        let start = self.pos;
        let mut text = String::from(first);
        self.pos += 1;
        if self.peek(0) == Some('=') {
            text.push('=');
            self.pos += 1;
        }
        Token::new(TokenKind::Operator, text, start)
    }

    /// Try to scan an axis specifier: an identifier immediately followed by
    /// "::" before any delimiter. Returns None (without consuming anything)
    /// when the lookahead does not pan out.
    fn scan_axis(&mut self) -> Option<Token> {
        let start = self.pos;
        let mut i = self.pos;

        while let Some(&c) = self.chars.get(i) {
            if c.is_whitespace() || DELIMITERS.contains(&c) {
                return None;
            }
            if c == ':' {
                if i > start && self.chars.get(i + 1) == Some(&':') {
                    let name: String = self.chars[start..i].iter().collect();
                    self.pos = i + 2;
                    return Some(Token::new(TokenKind::Axis, name, start));
                }
                // A single ':' stays inside a tag run (namespace prefix).
                return None;
            }
            i += 1;
        }
        None
    }

    /// Scan a maximal run of non-delimiter, non-whitespace characters
    fn scan_tag(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek(0) {
            if c.is_whitespace() || DELIMITERS.contains(&c) {
                break;
            }
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        Token::new(TokenKind::Tag, text, start)
    }

    fn peek(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }
}
