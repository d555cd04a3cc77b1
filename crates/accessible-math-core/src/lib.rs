//! Semantic tree for mathematical notation.
//!
//! `accessible-math-core` holds the format-agnostic model every reader
//! produces and every renderer consumes:
//!
//! ```text
//! LaTeX  ─┐                         ┌─> speech
//! MathML ─┴─> SemanticNode tree ────┼─> Nemeth / UEB Braille
//!                 │                 └─> plain text
//!                 └─> Navigator (cursor)
//! ```
//!
//! # Example
//!
//! ```
//! use accessible_math_core::{Navigator, NodeType, SemanticNode};
//!
//! let tree = SemanticNode::new(NodeType::Root).with_child(
//!     SemanticNode::new(NodeType::Fraction)
//!         .with_child(SemanticNode::new(NodeType::Group)
//!             .with_child(SemanticNode::leaf(NodeType::Identifier, "a")))
//!         .with_child(SemanticNode::new(NodeType::Group)
//!             .with_child(SemanticNode::leaf(NodeType::Identifier, "b"))),
//! );
//!
//! let mut nav = Navigator::new(&tree);
//! assert!(nav.enter());
//! assert!(nav.enter());
//! assert_eq!(nav.current().content, "a");
//! ```

pub mod describe;
pub mod navigator;
pub mod node;
pub mod node_type;
pub mod structure_eq;

pub use describe::{accessibility_fallback, accessibility_of, describe};
pub use navigator::Navigator;
pub use node::{MAX_TREE_DEPTH, Metadata, ROOT_NODE_ID, SemanticNode, TreePath, Walk};
pub use node_type::{NodeType, UnknownNodeType};
pub use structure_eq::{StructureEq, option_structure_eq, vec_structure_eq};
