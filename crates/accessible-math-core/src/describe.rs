//! Short human-readable descriptions of nodes.

use crate::{Metadata, NodeType, SemanticNode};

/// One-phrase description of a single node, such as `"fraction"` or
/// `"variable x"`. An `aria_label` in the node's accessibility metadata
/// takes precedence over the generated one.
pub fn describe(node: &SemanticNode) -> String {
    match node.accessibility.get("aria_label") {
        Some(label) => label.clone(),
        None => generated_label(node),
    }
}

/// The node's accessibility metadata, or [`accessibility_fallback`] when it
/// carries none.
pub fn accessibility_of(node: &SemanticNode) -> Metadata {
    if node.accessibility.is_empty() {
        accessibility_fallback(node)
    } else {
        node.accessibility.clone()
    }
}

/// Minimal accessibility metadata for a node that carries none:
/// `spoken_text`, `aria_role` and `aria_label`.
pub fn accessibility_fallback(node: &SemanticNode) -> Metadata {
    let kind = node.node_type.name();
    let spoken = if node.content.is_empty() {
        kind.to_string()
    } else {
        format!("{kind}: {}", node.content)
    };
    Metadata::from([
        ("spoken_text".to_string(), spoken),
        ("aria_role".to_string(), "group".to_string()),
        ("aria_label".to_string(), generated_label(node)),
    ])
}

fn generated_label(node: &SemanticNode) -> String {
    let content = &node.content;
    match node.node_type {
        NodeType::Root => "mathematical expression".to_string(),
        NodeType::Number => format!("number {content}"),
        NodeType::Identifier => format!("variable {content}"),
        NodeType::Operator => format!("operator {content}"),
        NodeType::Relation => format!("relation {content}"),
        NodeType::Fraction => "fraction".to_string(),
        NodeType::Superscript => "superscript".to_string(),
        NodeType::Subscript => "subscript".to_string(),
        NodeType::Sqrt => "square root".to_string(),
        NodeType::NRoot => "n-th root".to_string(),
        NodeType::Sum => "summation".to_string(),
        NodeType::Product => "product".to_string(),
        NodeType::Integral => "integral".to_string(),
        NodeType::Function => format!("function {content}"),
        other => other.name().to_lowercase().replace('_', " "),
    }
}
