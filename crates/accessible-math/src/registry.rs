//! Registry for readers and renderers.
//!
//! Built-ins are registered on first use, before any extension. Extension
//! authors add their own with [`register_reader`] and [`register_renderer`].

use crate::traits::{Reader, Renderer};
use std::sync::{OnceLock, PoisonError, RwLock};

/// Global reader registry.
static READERS: RwLock<Vec<&'static dyn Reader>> = RwLock::new(Vec::new());
static READERS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Global renderer registry.
static RENDERERS: RwLock<Vec<&'static dyn Renderer>> = RwLock::new(Vec::new());
static RENDERERS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom reader. Later registrations win format detection and
/// shadow built-ins with the same format.
pub fn register_reader(reader: &'static dyn Reader) {
    init_readers();
    push_reader(reader);
}

/// Register a custom renderer. It shadows any earlier renderer with the same
/// name, built-ins included.
pub fn register_renderer(renderer: &'static dyn Renderer) {
    init_renderers();
    push_renderer(renderer);
}

fn push_reader(reader: &'static dyn Reader) {
    tracing::debug!(format = reader.format(), "registered reader");
    READERS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(reader);
}

fn push_renderer(renderer: &'static dyn Renderer) {
    tracing::debug!(name = renderer.name(), "registered renderer");
    RENDERERS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(renderer);
}

fn init_readers() {
    READERS_INITIALIZED.get_or_init(|| {
        // LaTeX accepts anything, so it goes first and is tried last.
        push_reader(&crate::input::latex::LATEX_READER);
        #[cfg(feature = "read-mathml")]
        {
            push_reader(&crate::input::mathml::MATHML_READER);
        }
    });
}

fn init_renderers() {
    RENDERERS_INITIALIZED.get_or_init(|| {
        push_renderer(&crate::output::speech::SPEECH_RENDERER);
        push_renderer(&crate::output::braille::nemeth::NEMETH_RENDERER);
        push_renderer(&crate::output::braille::ueb::UEB_RENDERER);
        push_renderer(&crate::output::plain::PLAIN_TEXT_RENDERER);
    });
}

/// Get a reader by format name.
pub fn reader_for_format(format: &str) -> Option<&'static dyn Reader> {
    init_readers();
    READERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .rev()
        .find(|r| r.format() == format)
        .copied()
}

/// Get the most recently registered reader that claims `input`.
pub fn detect_reader(input: &str) -> Option<&'static dyn Reader> {
    init_readers();
    READERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .rev()
        .find(|r| r.detect(input))
        .copied()
}

/// Get a renderer by name.
pub fn renderer_for(name: &str) -> Option<&'static dyn Renderer> {
    init_renderers();
    RENDERERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .rev()
        .find(|r| r.name() == name)
        .copied()
}

/// Get all registered readers.
pub fn readers() -> Vec<&'static dyn Reader> {
    init_readers();
    READERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Get all registered renderers.
pub fn renderers() -> Vec<&'static dyn Renderer> {
    init_renderers();
    RENDERERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ParserConfig};
    use crate::error::ParseError;
    use accessible_math_core::{NodeType, SemanticNode};

    #[test]
    fn test_reader_lookup() {
        let reader = reader_for_format("latex").expect("latex reader");
        assert_eq!(reader.format(), "latex");
        assert!(reader_for_format("asciimath").is_none());
    }

    #[test]
    #[cfg(feature = "read-mathml")]
    fn test_detection() {
        let reader = detect_reader("  <math><mn>1</mn></math>").expect("mathml");
        assert_eq!(reader.format(), "mathml");
        let reader = detect_reader("x^2").expect("latex");
        assert_eq!(reader.format(), "latex");
    }

    #[test]
    fn test_renderer_lookup() {
        for name in ["speech", "nemeth", "ueb", "text"] {
            let renderer = renderer_for(name).expect(name);
            assert_eq!(renderer.name(), name);
        }
        assert!(renderers().len() >= 4);
    }

    #[test]
    fn test_render_via_registry() {
        let reader = reader_for_format("latex").unwrap();
        let tree = reader.read("1+2", &ParserConfig::default()).unwrap();
        let speech = renderer_for("speech").unwrap().render(&tree, &Config::default());
        assert_eq!(speech, "1 plus 2");
    }

    struct ShoutRenderer;

    impl Renderer for ShoutRenderer {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn render(&self, tree: &SemanticNode, _config: &Config) -> String {
            tree.leaves()
                .map(|leaf| leaf.content.to_uppercase())
                .collect::<Vec<_>>()
                .join(" ")
        }
    }

    static SHOUT: ShoutRenderer = ShoutRenderer;

    struct DigitsReader;

    impl Reader for DigitsReader {
        fn format(&self) -> &'static str {
            "digits"
        }

        fn detect(&self, input: &str) -> bool {
            input.starts_with("digits:")
        }

        fn read(&self, source: &str, _config: &ParserConfig) -> Result<SemanticNode, ParseError> {
            let body = source.trim_start_matches("digits:");
            Ok(SemanticNode::new(NodeType::Root).with_children(
                body.chars()
                    .map(|c| SemanticNode::leaf(NodeType::Number, c.to_string())),
            ))
        }
    }

    static DIGITS: DigitsReader = DigitsReader;

    #[test]
    fn test_custom_registration() {
        register_renderer(&SHOUT);
        register_reader(&DIGITS);

        let reader = detect_reader("digits:42").expect("custom reader");
        assert_eq!(reader.format(), "digits");
        let tree = reader.read("digits:42", &ParserConfig::default()).unwrap();
        assert_eq!(tree.children().len(), 2);

        let tree = reader_for_format("latex")
            .unwrap()
            .read("a+b", &ParserConfig::default())
            .unwrap();
        let out = renderer_for("shout").unwrap().render(&tree, &Config::default());
        assert_eq!(out, "A + B");
    }
}
