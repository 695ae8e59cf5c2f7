//! Renders locator descriptors as declaration text

use crate::types::Locator;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Renders `uid = { ...metadata... }` declaration blocks
///
/// Purely textual: no parsing or validation happens here. The container
/// reference, when present, is spliced in as the trailing field and refers
/// to the containing locator by bare identifier, not as a quoted string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationRenderer;

impl DeclarationRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render one declaration block
    pub fn render_one(&self, locator: &Locator) -> String {
        let mut body = pretty_metadata(locator);
        if let Some(container) = &locator.container_uid {
            if let Some(open) = body.strip_suffix("\n}") {
                body = format!("{open},\n    \"container\": {container}\n}}");
            }
        }
        format!("{} = {}\n", locator.uid, body)
    }

    /// Render every locator, concatenated in input order
    pub fn render(&self, locators: &[Locator]) -> String {
        locators.iter().map(|l| self.render_one(l)).collect()
    }
}

/// Pretty-print the metadata map with four-space indentation
fn pretty_metadata(locator: &Locator) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    // A string-keyed map of scalars cannot fail to serialize.
    match locator.metadata.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buf).unwrap_or_default(),
        Err(_) => String::new(),
    }
}
