//! Input readers - parse notation into a semantic tree.

pub mod latex;

pub use latex::{LATEX_READER, LatexReader, read_latex, read_latex_with};

#[cfg(feature = "read-mathml")]
pub mod mathml;

#[cfg(feature = "read-mathml")]
pub use mathml::{MATHML_READER, MathmlReader, read_mathml, read_mathml_with};

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use accessible_math_core::SemanticNode;

/// Whether trimmed input starts like an XML or `<math>` document.
pub fn looks_like_mathml(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with("<math") || trimmed.starts_with("<?xml")
}

/// Parse input with default settings, detecting LaTeX or MathML.
pub fn parse(input: &str) -> Result<SemanticNode, ParseError> {
    parse_with(input, &ParserConfig::default())
}

/// Parse input, detecting LaTeX or MathML.
pub fn parse_with(input: &str, config: &ParserConfig) -> Result<SemanticNode, ParseError> {
    if looks_like_mathml(input) {
        parse_detected_mathml(input, config)
    } else {
        read_latex_with(input, config)
    }
}

#[cfg(feature = "read-mathml")]
fn parse_detected_mathml(input: &str, config: &ParserConfig) -> Result<SemanticNode, ParseError> {
    read_mathml_with(input, config)
}

#[cfg(not(feature = "read-mathml"))]
fn parse_detected_mathml(_input: &str, _config: &ParserConfig) -> Result<SemanticNode, ParseError> {
    Err(ParseError::new(
        ParseErrorKind::InvalidMarkup,
        "MathML input requires the read-mathml feature",
    ))
}

/// Reject a finished tree deeper than the configured limit.
pub(crate) fn check_depth(
    tree: &SemanticNode,
    config: &ParserConfig,
) -> Result<(), ParseError> {
    let depth = tree.max_depth();
    if depth > config.max_depth {
        return Err(depth_exceeded(config.max_depth));
    }
    Ok(())
}

pub(crate) fn depth_exceeded(limit: usize) -> ParseError {
    ParseError::new(
        ParseErrorKind::DepthExceeded,
        format!("Expression nests deeper than the limit of {limit}"),
    )
}
