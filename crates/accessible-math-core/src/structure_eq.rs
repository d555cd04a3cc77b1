//! Structural equality for semantic trees.
//!
//! `structure_eq` compares trees ignoring fields that depend on where or how
//! a tree was built rather than on what it means.
//!
//! # Ignored Fields
//!
//! - `node_id` - path ids change when a subtree is moved
//! - `accessibility` - consumer-supplied annotations
//!
//! # Compared Fields
//!
//! - Node type, content, metadata
//! - Children, in order

use crate::SemanticNode;

/// Trait for structural equality comparison.
///
/// Unlike `PartialEq`, this ignores node ids and accessibility metadata.
pub trait StructureEq {
    /// Compare two values for structural equality.
    fn structure_eq(&self, other: &Self) -> bool;
}

impl StructureEq for SemanticNode {
    fn structure_eq(&self, other: &Self) -> bool {
        self.node_type == other.node_type
            && self.content == other.content
            && self.metadata == other.metadata
            && vec_structure_eq(self.children(), other.children())
    }
}

/// Helper for comparing slices of structurally-comparable items.
pub fn vec_structure_eq<T: StructureEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structure_eq(y))
}

/// Helper for comparing optional structurally-comparable items.
pub fn option_structure_eq<T: StructureEq>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.structure_eq(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeType;

    #[test]
    fn ignores_node_ids() {
        let mut a = SemanticNode::new(NodeType::Root)
            .with_child(SemanticNode::leaf(NodeType::Number, "1"));
        let b = a.clone();
        a.assign_ids("eq7");
        assert_ne!(a, b);
        assert!(a.structure_eq(&b));
    }

    #[test]
    fn ignores_accessibility() {
        let a = SemanticNode::leaf(NodeType::Identifier, "x");
        let mut b = a.clone();
        b.accessibility.insert("aria_label".into(), "ex".into());
        assert!(a.structure_eq(&b));
    }

    #[test]
    fn content_differs() {
        let a = SemanticNode::leaf(NodeType::Identifier, "x");
        let b = SemanticNode::leaf(NodeType::Identifier, "y");
        assert!(!a.structure_eq(&b));
    }

    #[test]
    fn metadata_differs() {
        let a = SemanticNode::new(NodeType::Group);
        let b = SemanticNode::new(NodeType::Group).with_metadata("role", "numerator");
        assert!(!a.structure_eq(&b));
    }

    #[test]
    fn child_count_differs() {
        let a = SemanticNode::new(NodeType::Root);
        let b = SemanticNode::new(NodeType::Root).with_child(SemanticNode::new(NodeType::Space));
        assert!(!a.structure_eq(&b));
        assert!(option_structure_eq::<SemanticNode>(None, None));
        assert!(!option_structure_eq(Some(&a), None));
    }
}
