//! Node kinds of the semantic tree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a [`SemanticNode`](crate::SemanticNode).
///
/// Serialized names are the upper-case identifiers used on the wire
/// (`"FRACTION"`, `"MATRIX_ROW"`, `"NROOT"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Root,
    Group,
    Number,
    Identifier,
    Operator,
    Relation,
    Fraction,
    Superscript,
    Subscript,
    Sqrt,
    #[serde(rename = "NROOT")]
    NRoot,
    Sum,
    Product,
    Integral,
    Limit,
    Function,
    Matrix,
    MatrixRow,
    Text,
    Space,
}

impl NodeType {
    pub const ALL: [NodeType; 20] = [
        NodeType::Root,
        NodeType::Group,
        NodeType::Number,
        NodeType::Identifier,
        NodeType::Operator,
        NodeType::Relation,
        NodeType::Fraction,
        NodeType::Superscript,
        NodeType::Subscript,
        NodeType::Sqrt,
        NodeType::NRoot,
        NodeType::Sum,
        NodeType::Product,
        NodeType::Integral,
        NodeType::Limit,
        NodeType::Function,
        NodeType::Matrix,
        NodeType::MatrixRow,
        NodeType::Text,
        NodeType::Space,
    ];

    /// Wire name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            NodeType::Root => "ROOT",
            NodeType::Group => "GROUP",
            NodeType::Number => "NUMBER",
            NodeType::Identifier => "IDENTIFIER",
            NodeType::Operator => "OPERATOR",
            NodeType::Relation => "RELATION",
            NodeType::Fraction => "FRACTION",
            NodeType::Superscript => "SUPERSCRIPT",
            NodeType::Subscript => "SUBSCRIPT",
            NodeType::Sqrt => "SQRT",
            NodeType::NRoot => "NROOT",
            NodeType::Sum => "SUM",
            NodeType::Product => "PRODUCT",
            NodeType::Integral => "INTEGRAL",
            NodeType::Limit => "LIMIT",
            NodeType::Function => "FUNCTION",
            NodeType::Matrix => "MATRIX",
            NodeType::MatrixRow => "MATRIX_ROW",
            NodeType::Text => "TEXT",
            NodeType::Space => "SPACE",
        }
    }

    /// Grouping kinds are structural wrappers that navigation looks through.
    pub fn is_grouping(self) -> bool {
        matches!(self, NodeType::Root | NodeType::Group)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`NodeType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node type: {0}")]
pub struct UnknownNodeType(pub String);

impl FromStr for NodeType {
    type Err = UnknownNodeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownNodeType(s.to_string()))
    }
}
