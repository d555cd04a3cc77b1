//! Whole-tree contract tests: serialization, identity and flattening.

use accessible_math_core::{MAX_TREE_DEPTH, Navigator, NodeType, SemanticNode, StructureEq};

fn role_group(role: &str, children: Vec<SemanticNode>) -> SemanticNode {
    SemanticNode::new(NodeType::Group)
        .with_metadata("role", role)
        .with_children(children)
}

/// `x^2 + \sqrt[3]{y} = 1` as the LaTeX reader shapes it.
fn sample() -> SemanticNode {
    let power = SemanticNode::new(NodeType::Superscript)
        .with_child(SemanticNode::leaf(NodeType::Identifier, "x").with_metadata("role", "base"))
        .with_child(role_group(
            "exponent",
            vec![SemanticNode::leaf(NodeType::Number, "2")],
        ));
    let root = SemanticNode::new(NodeType::NRoot)
        .with_child(role_group(
            "index",
            vec![SemanticNode::leaf(NodeType::Number, "3")],
        ))
        .with_child(role_group(
            "radicand",
            vec![SemanticNode::leaf(NodeType::Identifier, "y")],
        ));
    SemanticNode::new(NodeType::Root)
        .with_metadata("format", "latex")
        .with_children([
            power,
            SemanticNode::leaf(NodeType::Operator, "+"),
            root,
            SemanticNode::leaf(NodeType::Relation, "="),
            SemanticNode::leaf(NodeType::Number, "1"),
        ])
}

#[test]
fn serialization_round_trip_is_isomorphic() {
    let tree = sample();
    let restored = SemanticNode::from_json(&tree.to_json()).expect("valid json");
    assert!(restored.structure_eq(&tree));
    assert_eq!(restored, tree);
}

#[test]
fn pretty_json_parses_back() {
    let tree = sample();
    let restored = SemanticNode::from_json(&tree.to_json_pretty()).expect("valid json");
    assert_eq!(restored, tree);
}

#[test]
fn serde_and_manual_json_agree() {
    let tree = sample();
    assert_eq!(serde_json::to_value(&tree).unwrap(), tree.to_json_value());
}

#[test]
fn node_ids_are_unique() {
    let tree = sample();
    let mut ids: Vec<&str> = tree.walk().map(SemanticNode::node_id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn navigable_children_never_contain_wrappers() {
    let tree = sample();
    for node in tree.walk() {
        for child in node.navigable_children() {
            assert!(!child.node_type.is_grouping());
        }
    }
}

#[test]
fn flattening_is_idempotent() {
    let tree = sample();
    for node in tree.walk() {
        let once: Vec<&SemanticNode> = node.navigable_children();
        let twice: Vec<&SemanticNode> = once
            .iter()
            .flat_map(|child| {
                if child.node_type.is_grouping() {
                    child.navigable_children()
                } else {
                    vec![*child]
                }
            })
            .collect();
        assert_eq!(once, twice);
    }
}

#[test]
fn navigator_reaches_every_navigable_leaf() {
    let tree = sample();
    let mut nav = Navigator::new(&tree);
    assert!(nav.enter());
    let mut top_level = vec![nav.current().node_type];
    while nav.next() {
        top_level.push(nav.current().node_type);
    }
    assert_eq!(
        top_level,
        [
            NodeType::Superscript,
            NodeType::Operator,
            NodeType::NRoot,
            NodeType::Relation,
            NodeType::Number
        ]
    );

    assert!(nav.previous());
    assert!(nav.previous());
    assert!(nav.enter());
    assert_eq!(nav.current().content, "3");
    assert!(nav.next());
    assert_eq!(nav.current().content, "y");
    assert_eq!(nav.breadcrumb(), "mathematical expression > n-th root > variable y");
}

fn nested_groups(depth: usize) -> SemanticNode {
    let mut node = SemanticNode::leaf(NodeType::Identifier, "x");
    for _ in 1..depth {
        node = SemanticNode::new(NodeType::Group).with_child(node);
    }
    SemanticNode::new(NodeType::Root).with_child(node)
}

#[test]
fn deep_tree_round_trip() {
    let tree = nested_groups(200);
    assert_eq!(tree.max_depth(), 200);

    let restored = SemanticNode::from_json(&tree.to_json()).unwrap();
    assert_eq!(restored, tree);
    assert_eq!(restored.max_depth(), 200);

    let restored = SemanticNode::from_json_value(tree.to_json_value()).unwrap();
    assert_eq!(restored, tree);
}

#[test]
fn json_deeper_than_limit_is_rejected() {
    let depth = MAX_TREE_DEPTH + 8;
    let json = r#"{"type":"GROUP","children":["#.repeat(depth)
        + r#"{"type":"IDENTIFIER","content":"x"}"#
        + &"]}".repeat(depth);
    let err = SemanticNode::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("deeper than the limit"));

    let shallow = nested_groups(20).to_json();
    assert!(SemanticNode::from_json_with_max_depth(&shallow, 10).is_err());
    assert!(SemanticNode::from_json_with_max_depth(&shallow, 20).is_ok());
}

#[test]
fn brackets_inside_strings_do_not_count_as_nesting() {
    let content = "[".repeat(4 * MAX_TREE_DEPTH) + "\\\"{";
    let tree = SemanticNode::new(NodeType::Root)
        .with_child(SemanticNode::leaf(NodeType::Text, content.clone()));
    let restored = SemanticNode::from_json(&tree.to_json()).unwrap();
    assert_eq!(restored.children()[0].content, content);
}
