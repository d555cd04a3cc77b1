//! Traits for input readers and output renderers.

use crate::config::{Config, ParserConfig};
use crate::error::ParseError;
use accessible_math_core::SemanticNode;

/// A reader parses one input notation into a semantic tree.
pub trait Reader: Send + Sync {
    /// Format identifier (e.g., "latex", "mathml").
    fn format(&self) -> &'static str;

    /// Whether `input` looks like this reader's notation.
    fn detect(&self, input: &str) -> bool;

    /// Parse input into a tree rooted at a Root node.
    fn read(&self, source: &str, config: &ParserConfig) -> Result<SemanticNode, ParseError>;
}

/// A renderer turns a semantic tree into text.
pub trait Renderer: Send + Sync {
    /// Renderer identifier (e.g., "speech", "nemeth").
    fn name(&self) -> &'static str;

    /// Render the tree. Identical inputs always give identical output.
    fn render(&self, tree: &SemanticNode, config: &Config) -> String;
}
