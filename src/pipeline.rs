//! Four-stage declaration pipeline with injectable stages
//!
//! Each stage is a capability slot behind an object-safe trait so callers
//! can substitute any stage while keeping the others. The pipeline holds no
//! per-invocation state: every call returns a freshly allocated result, so
//! a shared instance is safe to use from multiple threads.

use crate::converter::LocatorConverter;
use crate::errors::Result;
use crate::lexer::PathLexer;
use crate::parser::PathParser;
use crate::renderer::DeclarationRenderer;
use crate::types::{Locator, PathStep, Token};
use tracing::{debug, warn};

/// Tokenizer slot: raw expression text to tokens
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, input: &str) -> Result<Vec<Token>>;
}

/// Parser slot: tokens to ordered path steps
pub trait ParseSteps: Send + Sync {
    fn parse(&self, tokens: &[Token]) -> Result<Vec<PathStep>>;
}

/// Converter slot: steps to locator descriptors
pub trait ConvertSteps: Send + Sync {
    fn convert(&self, steps: &[PathStep]) -> Vec<Locator>;
}

/// Renderer slot: locators to declaration text
pub trait RenderDecls: Send + Sync {
    fn render(&self, locators: &[Locator]) -> String;
}

impl Tokenize for PathLexer {
    fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        PathLexer::tokenize(self, input)
    }
}

impl ParseSteps for PathParser {
    fn parse(&self, tokens: &[Token]) -> Result<Vec<PathStep>> {
        PathParser::parse(self, tokens)
    }
}

impl ConvertSteps for LocatorConverter {
    fn convert(&self, steps: &[PathStep]) -> Vec<Locator> {
        LocatorConverter::convert(self, steps)
    }
}

impl RenderDecls for DeclarationRenderer {
    fn render(&self, locators: &[Locator]) -> String {
        DeclarationRenderer::render(self, locators)
    }
}

/// Composable path-to-declaration pipeline
///
/// Control flow is strictly linear: text → tokens → steps → locators →
/// rendered text, once per input path.
pub struct DeclarationPipeline {
    tokenizer: Box<dyn Tokenize>,
    parser: Box<dyn ParseSteps>,
    converter: Box<dyn ConvertSteps>,
    renderer: Box<dyn RenderDecls>,
}

impl DeclarationPipeline {
    /// Compose a pipeline from caller-supplied stages
    pub fn new(
        tokenizer: Box<dyn Tokenize>,
        parser: Box<dyn ParseSteps>,
        converter: Box<dyn ConvertSteps>,
        renderer: Box<dyn RenderDecls>,
    ) -> Self {
        Self {
            tokenizer,
            parser,
            converter,
            renderer,
        }
    }

    /// Pipeline wired with the built-in stages
    pub fn standard() -> Self {
        Self::new(
            Box::new(PathLexer::new()),
            Box::new(PathParser::new()),
            Box::new(LocatorConverter::new()),
            Box::new(DeclarationRenderer::new()),
        )
    }

    /// Run lexer, parser and converter, returning the locator sequence
    pub fn locators(&self, path: &str) -> Result<Vec<Locator>> {
        let tokens = self.tokenizer.tokenize(path).map_err(|err| {
            warn!(%err, path, "lexical error in path expression");
            err
        })?;
        debug!(tokens = tokens.len(), path, "tokenized path expression");

        let steps = self.parser.parse(&tokens).map_err(|err| {
            warn!(%err, path, "syntax error in path expression");
            err
        })?;
        debug!(steps = steps.len(), "parsed path steps");

        Ok(self.converter.convert(&steps))
    }

    /// Full run: declaration text for every locator in the path
    pub fn declare(&self, path: &str) -> Result<String> {
        let locators = self.locators(path)?;
        Ok(self.renderer.render(&locators))
    }
}

impl Default for DeclarationPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
