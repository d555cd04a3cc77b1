//! Plain-text renderer.
//!
//! A linear rendering for debugging and logs: `(a)/(b)`, `x^2`, `√(x)`.

use crate::config::Config;
use crate::traits::Renderer;
use accessible_math_core::{NodeType, SemanticNode};

/// Plain-text renderer.
pub struct PlainTextRenderer;

/// Static instance of the plain-text renderer for registry.
pub static PLAIN_TEXT_RENDERER: PlainTextRenderer = PlainTextRenderer;

impl PlainTextRenderer {
    pub fn emit(tree: &SemanticNode) -> String {
        render_node(tree)
    }
}

impl Renderer for PlainTextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, tree: &SemanticNode, _config: &Config) -> String {
        Self::emit(tree)
    }
}

fn render_node(node: &SemanticNode) -> String {
    let child = |index: usize| node.child(index).map(render_node).unwrap_or_default();
    match node.node_type {
        NodeType::Root => joined(node, " "),
        NodeType::Group => {
            let inner = joined(node, " ");
            if node.children().len() > 1 {
                format!("({inner})")
            } else {
                inner
            }
        }
        NodeType::Fraction => format!("({})/({})", child(0), child(1)),
        NodeType::Superscript => format!("{}^{}", child(0), child(1)),
        NodeType::Subscript => format!("{}_{}", child(0), child(1)),
        NodeType::Sqrt => format!("√({})", child(0)),
        NodeType::NRoot => format!("√[{}]({})", child(0), child(1)),
        NodeType::Matrix => format!("[{}]", joined(node, "; ")),
        NodeType::MatrixRow => joined(node, ", "),
        _ if node.is_leaf() => node.content.clone(),
        _ if node.content.is_empty() => joined(node, " "),
        _ => format!("{} {}", node.content, joined(node, " ")),
    }
}

fn joined(node: &SemanticNode, separator: &str) -> String {
    node.children()
        .iter()
        .map(render_node)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
