//! Recursive-descent parser: token sequence to ordered path steps

use crate::errors::{PathError, Result};
use crate::types::{ComparisonOp, Condition, NodeTest, PathStep, Predicate, Token, TokenKind};

/// Parser for lexed path expressions
///
/// Stateless; each call walks the token sequence once and returns a fresh
/// step list. Any error aborts the whole parse with no partial result.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParser;

impl PathParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a token sequence into ordered path steps
    pub fn parse(&self, tokens: &[Token]) -> Result<Vec<PathStep>> {
        TokenCursor::new(tokens).run()
    }
}

/// Per-invocation cursor over the token sequence
struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    end: Token,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        let end_offset = tokens.last().map_or(0, |t| t.offset);
        Self {
            tokens,
            pos: 0,
            end: Token::new(TokenKind::End, "", end_offset),
        }
    }

    fn run(mut self) -> Result<Vec<PathStep>> {
        let mut steps = Vec::new();

        while !self.is_at_end() {
            let mut is_absolute = false;
            if self.eat(TokenKind::Slash).is_some() {
                is_absolute = true;
                // Two separator tokens in a row are the descendant shorthand
                // and contribute a step of their own.
                if self.eat(TokenKind::Slash).is_some() {
                    steps.push(PathStep {
                        axis: "descendant-or-self".to_string(),
                        node_test: NodeTest::Any,
                        predicate: None,
                        is_absolute: true,
                    });
                    continue;
                }
            }
            steps.push(self.parse_step(is_absolute)?);
        }

        Ok(steps)
    }

    /// Parse one step: optional axis, mandatory node test, optional predicate
    fn parse_step(&mut self, is_absolute: bool) -> Result<PathStep> {
        let axis = match self.eat(TokenKind::Axis) {
            Some(token) => token.text,
            None => "child".to_string(),
        };

        let mut node_test = if self.eat(TokenKind::Wildcard).is_some() {
            NodeTest::Any
        } else if let Some(token) = self.eat(TokenKind::Tag) {
            NodeTest::Named(token.text)
        } else {
            return Err(PathError::MissingNodeTest {
                offset: self.current().offset,
            });
        };

        let mut predicate = None;
        if self.eat(TokenKind::PredicateOpen).is_some() {
            predicate = Some(self.parse_predicate()?);
            if self.eat(TokenKind::PredicateClose).is_none() {
                return Err(PathError::UnclosedPredicate {
                    offset: self.current().offset,
                });
            }
        }

        if let Some(prefix) = self.eat(TokenKind::Namespace) {
            if let NodeTest::Named(tag) = node_test {
                node_test = NodeTest::Named(format!("{}:{}", prefix.text, tag));
            }
        }

        Ok(PathStep {
            axis,
            node_test,
            predicate,
            is_absolute,
        })
    }

    /// Parse predicate conditions until the closing bracket
    fn parse_predicate(&mut self) -> Result<Predicate> {
        let mut predicate = Predicate::default();

        loop {
            if self.check(TokenKind::PredicateClose) || self.is_at_end() {
                break;
            }

            // Bare comparison without '@' prefix, e.g. price>35
            if self.check(TokenKind::Tag)
                && self.peek(1).kind == TokenKind::Operator
                && matches!(self.peek(2).kind, TokenKind::Literal | TokenKind::Tag)
            {
                let name = self.consume(TokenKind::Tag, "attribute name")?;
                let op = self.expect_operator()?;
                let value = match self.eat(TokenKind::Literal) {
                    Some(token) => token,
                    None => self.consume(TokenKind::Tag, "comparison value")?,
                };
                predicate.conditions.push(Condition::Attribute {
                    name: name.text,
                    value: value.text,
                    op,
                });
                continue;
            }

            // Attribute test, e.g. @name='value'
            if self.eat(TokenKind::Attribute).is_some() {
                let name = self.consume(TokenKind::Tag, "attribute name")?;
                let op = self.expect_operator()?;
                let value = self.consume(TokenKind::Literal, "quoted value")?;
                predicate.conditions.push(Condition::Attribute {
                    name: name.text,
                    value: unescape(&value.text),
                    op,
                });
                continue;
            }

            // Position index, e.g. [2]
            if self.check(TokenKind::Tag) && starts_with_digit(&self.current().text) {
                let token = self.advance();
                let index = token.text.parse::<u32>().map_err(|_| {
                    PathError::UnexpectedPredicateToken {
                        text: token.text.clone(),
                        offset: token.offset,
                    }
                })?;
                predicate.conditions.push(Condition::Position { index });
                continue;
            }

            // Boolean connectives are recognized but never evaluated; all
            // conditions flatten into the resulting metadata.
            if self.check(TokenKind::Tag) && matches!(self.current().text.as_str(), "and" | "or")
            {
                self.advance();
                continue;
            }

            return Err(PathError::UnexpectedPredicateToken {
                text: self.current().text.clone(),
                offset: self.current().offset,
            });
        }

        Ok(predicate)
    }

    /// Consume an operator token and map it onto [`ComparisonOp`]
    fn expect_operator(&mut self) -> Result<ComparisonOp> {
        let token = self.consume(TokenKind::Operator, "comparison operator")?;
        ComparisonOp::parse(&token.text).ok_or(PathError::UnexpectedPredicateToken {
            text: token.text,
            offset: token.offset,
        })
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn consume(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token> {
        self.eat(kind).ok_or(PathError::ExpectedToken {
            expected,
            offset: self.current().offset,
        })
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    fn peek(&self, n: usize) -> &Token {
        self.tokens.get(self.pos + n).unwrap_or(&self.end)
    }

    fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::End
    }
}

fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Strip backslash escapes from a quoted literal's raw text
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
