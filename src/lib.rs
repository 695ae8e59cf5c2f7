//! XPath-like path expressions to canonical widget locator declarations
//!
//! This crate translates a constrained, XPath-like path syntax into an
//! ordered sequence of locator descriptors for GUI test automation:
//! - Lexer: raw path text to an ordered token sequence
//! - Parser: tokens to path steps (axis, node test, optional predicate)
//! - Classifier: heuristic tag-name to widget-archetype mapping
//! - Converter: steps to locators with deterministic UIDs and metadata,
//!   chained to their container in emission order
//! - Renderer: locators to `uid = { ... }` declaration text
//!
//! The stages compose through [`DeclarationPipeline`], and each one sits
//! behind an object-safe trait so callers can substitute any stage. The
//! crate emits descriptors only; it never talks to a GUI runtime.

pub mod classifier;
pub mod converter;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod renderer;
pub mod types;

pub use classifier::WidgetClassifier;
pub use converter::{canonicalize, LocatorConverter};
pub use errors::{PathError, Result};
pub use lexer::PathLexer;
pub use parser::PathParser;
pub use pipeline::{ConvertSteps, DeclarationPipeline, ParseSteps, RenderDecls, Tokenize};
pub use renderer::DeclarationRenderer;
pub use types::{
    ComparisonOp, Condition, Locator, NodeTest, PathStep, Predicate, Token, TokenKind,
};
