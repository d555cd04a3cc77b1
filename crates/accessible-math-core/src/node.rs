//! The semantic tree.
//!
//! A [`SemanticNode`] owns its children. Nothing points upward: a position in
//! the tree is a [`TreePath`] of child indices from the root, and upward
//! queries re-walk from the root.
//!
//! Node ids are path-based. The root is [`ROOT_NODE_ID`]; child `i` of a
//! node with id `P` is `P-i`. [`SemanticNode::push_child`] re-assigns ids for
//! the whole attached subtree, so a node moved to a new parent takes the id
//! of its new position.

use crate::NodeType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Id of a tree root.
pub const ROOT_NODE_ID: &str = "math";

/// Ordered string map used for node metadata and accessibility metadata.
pub type Metadata = BTreeMap<String, String>;

/// Deepest tree [`SemanticNode::from_json`] accepts.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Child indices leading from a root to a node. The empty path is the root.
pub type TreePath = Vec<usize>;

/// One node of a semantic tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    children: Vec<SemanticNode>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    node_id: String,
    #[serde(default)]
    pub accessibility: Metadata,
}

impl SemanticNode {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            content: String::new(),
            children: Vec::new(),
            metadata: Metadata::new(),
            node_id: ROOT_NODE_ID.to_string(),
            accessibility: Metadata::new(),
        }
    }

    /// A childless node with literal content.
    pub fn leaf(node_type: NodeType, content: impl Into<String>) -> Self {
        Self::new(node_type).with_content(content)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: SemanticNode) -> Self {
        self.push_child(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SemanticNode>) -> Self {
        for child in children {
            self.push_child(child);
        }
        self
    }

    /// Append `child` as the last child and give its subtree path ids.
    pub fn push_child(&mut self, mut child: SemanticNode) {
        child.assign_ids(format!("{}-{}", self.node_id, self.children.len()));
        self.children.push(child);
    }

    /// Detach and return the last child.
    pub fn pop_child(&mut self) -> Option<SemanticNode> {
        self.children.pop()
    }

    pub fn children(&self) -> &[SemanticNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&SemanticNode> {
        self.children.get(index)
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Re-assign path ids for this subtree, rooted at `id`.
    pub fn assign_ids(&mut self, id: impl Into<String>) {
        self.node_id = id.into();
        let mut stack: Vec<&mut SemanticNode> = vec![self];
        while let Some(node) = stack.pop() {
            let parent_id = node.node_id.clone();
            for (index, child) in node.children.iter_mut().enumerate() {
                child.node_id = format!("{parent_id}-{index}");
                stack.push(child);
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The `role` metadata entry (numerator, denominator, base, exponent, ...).
    pub fn role(&self) -> Option<&str> {
        self.metadata.get("role").map(String::as_str)
    }

    /// Whether a boolean metadata flag is set.
    pub fn has_flag(&self, key: &str) -> bool {
        self.metadata.get(key).is_some_and(|value| value == "true")
    }

    /// Pre-order traversal of this subtree, self first.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Leaf nodes of this subtree in document order.
    pub fn leaves(&self) -> impl Iterator<Item = &SemanticNode> {
        self.walk().filter(|node| node.is_leaf())
    }

    /// Children with Group and Root wrappers spliced out recursively.
    pub fn navigable_children(&self) -> Vec<&SemanticNode> {
        self.navigable_children_with_paths()
            .into_iter()
            .map(|(_, node)| node)
            .collect()
    }

    /// Like [`navigable_children`](Self::navigable_children), paired with
    /// each node's path relative to `self`.
    pub fn navigable_children_with_paths(&self) -> Vec<(TreePath, &SemanticNode)> {
        let mut out = Vec::new();
        let mut stack: Vec<(TreePath, &SemanticNode)> = self
            .children
            .iter()
            .enumerate()
            .rev()
            .map(|(index, child)| (vec![index], child))
            .collect();

        while let Some((path, node)) = stack.pop() {
            if node.node_type.is_grouping() {
                for (index, child) in node.children.iter().enumerate().rev() {
                    let mut child_path = path.clone();
                    child_path.push(index);
                    stack.push((child_path, child));
                }
            } else {
                out.push((path, node));
            }
        }
        out
    }

    /// The node at `path`, or `None` if the path leaves the tree.
    pub fn node_at(&self, path: &[usize]) -> Option<&SemanticNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Every node from `self` down to the node at `path`, inclusive.
    pub fn ancestors(&self, path: &[usize]) -> Option<Vec<&SemanticNode>> {
        let mut nodes = Vec::with_capacity(path.len() + 1);
        let mut node = self;
        nodes.push(node);
        for &index in path {
            node = node.children.get(index)?;
            nodes.push(node);
        }
        Some(nodes)
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Locate a node by id, returning its path and the node.
    pub fn find_by_id(&self, id: &str) -> Option<(TreePath, &SemanticNode)> {
        let mut stack: Vec<(TreePath, &SemanticNode)> = vec![(Vec::new(), self)];
        while let Some((path, node)) = stack.pop() {
            if node.node_id == id {
                return Some((path, node));
            }
            for (index, child) in node.children.iter().enumerate().rev() {
                let mut child_path = path.clone();
                child_path.push(index);
                stack.push((child_path, child));
            }
        }
        None
    }

    /// The JSON object form: `type`, `content`, `children`, `metadata`,
    /// `node_id`, `accessibility`.
    pub fn to_json_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("type".into(), Value::String(self.node_type.name().into()));
        object.insert("content".into(), Value::String(self.content.clone()));
        object.insert(
            "children".into(),
            Value::Array(self.children.iter().map(Self::to_json_value).collect()),
        );
        object.insert("metadata".into(), string_map(&self.metadata));
        object.insert("node_id".into(), Value::String(self.node_id.clone()));
        object.insert("accessibility".into(), string_map(&self.accessibility));
        Value::Object(object)
    }

    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }

    pub fn to_json_pretty(&self) -> String {
        // Serializing a `Value` built from strings cannot fail.
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_default()
    }

    /// Parse the JSON object form. Missing node ids are filled with path ids;
    /// ids present in the input are kept. Trees deeper than
    /// [`MAX_TREE_DEPTH`] are rejected.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Self::from_json_with_max_depth(json, MAX_TREE_DEPTH)
    }

    /// [`from_json`](Self::from_json) with an explicit depth limit.
    pub fn from_json_with_max_depth(json: &str, max_depth: usize) -> serde_json::Result<Self> {
        if json_nesting(json) > nesting_limit(max_depth) {
            return Err(too_deep(max_depth));
        }
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let mut node = SemanticNode::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        node.fill_missing_ids();
        Ok(node)
    }

    pub fn from_json_value(value: Value) -> serde_json::Result<Self> {
        if value_nesting(&value) > nesting_limit(MAX_TREE_DEPTH) {
            return Err(too_deep(MAX_TREE_DEPTH));
        }
        let mut node = SemanticNode::deserialize(serde_stacker::Deserializer::new(value))?;
        node.fill_missing_ids();
        Ok(node)
    }

    fn fill_missing_ids(&mut self) {
        if self.node_id.is_empty() {
            self.node_id = ROOT_NODE_ID.to_string();
        }
        let mut stack: Vec<&mut SemanticNode> = vec![self];
        while let Some(node) = stack.pop() {
            let parent_id = node.node_id.clone();
            for (index, child) in node.children.iter_mut().enumerate() {
                if child.node_id.is_empty() {
                    child.node_id = format!("{parent_id}-{index}");
                }
                stack.push(child);
            }
        }
    }
}

/// A node at tree depth `d` is a JSON object at nesting `2d + 1`, and its
/// metadata maps sit one level below that.
fn nesting_limit(max_depth: usize) -> usize {
    max_depth.saturating_mul(2).saturating_add(2)
}

fn too_deep(max_depth: usize) -> serde_json::Error {
    serde::de::Error::custom(format!("tree nests deeper than the limit of {max_depth}"))
}

/// Deepest bracket nesting in a JSON document, ignoring brackets in strings.
fn json_nesting(json: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut in_string = false;
    let mut escaped = false;
    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

fn value_nesting(value: &Value) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(value, 0usize)];
    while let Some((value, depth)) = stack.pop() {
        match value {
            Value::Array(items) => {
                deepest = deepest.max(depth + 1);
                stack.extend(items.iter().map(|item| (item, depth + 1)));
            }
            Value::Object(map) => {
                deepest = deepest.max(depth + 1);
                stack.extend(map.values().map(|item| (item, depth + 1)));
            }
            _ => {}
        }
    }
    deepest
}

fn string_map(map: &Metadata) -> Value {
    Value::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect(),
    )
}

/// Pre-order iterator returned by [`SemanticNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a SemanticNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a SemanticNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
