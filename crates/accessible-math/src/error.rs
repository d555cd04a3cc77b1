//! Parse errors.

/// What went wrong while reading an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A `{` without its `}`, or a stray `}`.
    UnclosedBrace,
    /// A `\sqrt[` index without its `]`.
    UnclosedBracket,
    /// A command or script operator missing its argument.
    MissingArgument,
    /// `^` or `_` with nothing before it.
    MissingBase,
    /// Malformed MathML or a MathML element with the wrong arity.
    InvalidMarkup,
    /// Nesting deeper than the configured limit.
    DepthExceeded,
}

/// Error produced by a reader.
///
/// When both the position and the source are known, `Display` appends a
/// context window around the position with a caret under it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}{context}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// Character offset into `source_text`.
    pub position: Option<usize>,
    pub source_text: Option<String>,
    context: String,
}

const CONTEXT_RADIUS: usize = 10;
const CONTEXT_PREFIX: &str = "  Context: ...";

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
            source_text: None,
            context: String::new(),
        }
    }

    /// Attach the offending character offset and the text it indexes.
    pub fn at(mut self, position: usize, source: &str) -> Self {
        self.context = context_window(position, source);
        self.position = Some(position);
        self.source_text = Some(source.to_string());
        self
    }
}

fn context_window(position: usize, source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let start = position.saturating_sub(CONTEXT_RADIUS).min(chars.len());
    let end = (position + CONTEXT_RADIUS).min(chars.len());
    let window: String = chars[start..end].iter().collect();
    let pad = " ".repeat(CONTEXT_PREFIX.chars().count() + position.saturating_sub(start));
    format!("\n{CONTEXT_PREFIX}{window}...\n{pad}^")
}
