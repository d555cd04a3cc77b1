//! Registration order against the built-ins.
//!
//! Registry state is process-wide, so this file registers before any lookup
//! and holds a single test.

use accessible_math::{
    Config, NodeType, ParseError, ParserConfig, Reader, Renderer, SemanticNode, reader_for_format,
    readers, register_reader, register_renderer, renderer_for, renderers,
};

struct TaggedLatex;

impl Reader for TaggedLatex {
    fn format(&self) -> &'static str {
        "latex"
    }

    fn detect(&self, _input: &str) -> bool {
        false
    }

    fn read(&self, source: &str, config: &ParserConfig) -> Result<SemanticNode, ParseError> {
        let tree = accessible_math::input::read_latex_with(source, config)?;
        Ok(tree.with_metadata("custom", "true"))
    }
}

static TAGGED_LATEX: TaggedLatex = TaggedLatex;

struct Silent;

impl Renderer for Silent {
    fn name(&self) -> &'static str {
        "speech"
    }

    fn render(&self, _tree: &SemanticNode, _config: &Config) -> String {
        "silence".to_string()
    }
}

static SILENT: Silent = Silent;

#[test]
fn registration_before_first_lookup_shadows_builtins() {
    register_reader(&TAGGED_LATEX);
    register_renderer(&SILENT);

    let tree = reader_for_format("latex")
        .expect("latex reader")
        .read("x", &ParserConfig::default())
        .unwrap();
    assert!(tree.has_flag("custom"));
    assert_eq!(tree.node_type, NodeType::Root);

    let speech = renderer_for("speech").expect("speech renderer");
    assert_eq!(speech.render(&tree, &Config::default()), "silence");

    // Built-ins are still present underneath the overrides.
    assert_eq!(
        readers().iter().filter(|r| r.format() == "latex").count(),
        2
    );
    assert_eq!(
        renderers().iter().filter(|r| r.name() == "speech").count(),
        2
    );
    assert!(renderer_for("nemeth").is_some());
}
