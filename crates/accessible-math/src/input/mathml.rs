//! MathML reader using roxmltree.
//!
//! Elements are matched by local name, so a namespace declaration on the
//! root never changes the result. `math` and unknown elements are
//! transparent: their children land in the enclosing node.

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::input::{check_depth, depth_exceeded, looks_like_mathml};
use crate::traits::Reader;
use accessible_math_core::{NodeType, SemanticNode};
use roxmltree::Node;

/// MathML reader.
pub struct MathmlReader;

impl Reader for MathmlReader {
    fn format(&self) -> &'static str {
        "mathml"
    }

    fn detect(&self, input: &str) -> bool {
        looks_like_mathml(input)
    }

    fn read(&self, source: &str, config: &ParserConfig) -> Result<SemanticNode, ParseError> {
        read_mathml_with(source, config)
    }
}

/// Static instance of the MathML reader for registry.
pub static MATHML_READER: MathmlReader = MathmlReader;

/// Parse a MathML document with default settings.
pub fn read_mathml(source: &str) -> Result<SemanticNode, ParseError> {
    read_mathml_with(source, &ParserConfig::default())
}

/// Parse a MathML document.
pub fn read_mathml_with(source: &str, config: &ParserConfig) -> Result<SemanticNode, ParseError> {
    let source = source.trim();
    let doc = roxmltree::Document::parse(source).map_err(|err| {
        ParseError::new(ParseErrorKind::InvalidMarkup, format!("Invalid MathML: {err}"))
    })?;

    let mut root = SemanticNode::new(NodeType::Root)
        .with_metadata("source", source)
        .with_metadata("format", "mathml");
    let mut walker = Walker {
        max_depth: config.max_depth,
        depth: 0,
    };
    walker.read_element(doc.root_element(), &mut root)?;
    check_depth(&root, config)?;
    Ok(root)
}

struct Walker {
    max_depth: usize,
    depth: usize,
}

impl Walker {
    fn read_element(&mut self, element: Node<'_, '_>, parent: &mut SemanticNode) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(depth_exceeded(self.max_depth));
        }
        let result = self.read_tagged(element, parent);
        self.depth -= 1;
        result
    }

    fn read_tagged(&mut self, element: Node<'_, '_>, parent: &mut SemanticNode) -> Result<(), ParseError> {
        let tag = element.tag_name().name();
        match tag {
            "mrow" => {
                let group = self.read_children_into(SemanticNode::new(NodeType::Group), element)?;
                parent.push_child(group);
            }
            "mfrac" => {
                let [numerator, denominator] = exact_children::<2>(element, tag)?;
                parent.push_child(
                    SemanticNode::new(NodeType::Fraction)
                        .with_child(self.role_group("numerator", numerator)?)
                        .with_child(self.role_group("denominator", denominator)?),
                );
            }
            "msup" | "msub" => {
                let [base, script] = exact_children::<2>(element, tag)?;
                let (kind, role) = if tag == "msup" {
                    (NodeType::Superscript, "exponent")
                } else {
                    (NodeType::Subscript, "subscript")
                };
                parent.push_child(
                    SemanticNode::new(kind)
                        .with_child(self.role_group("base", base)?)
                        .with_child(self.role_group(role, script)?),
                );
            }
            "msubsup" => {
                let [base, sub, sup] = exact_children::<3>(element, tag)?;
                let subscripted = SemanticNode::new(NodeType::Subscript)
                    .with_metadata("role", "base")
                    .with_child(self.role_group("base", base)?)
                    .with_child(self.role_group("subscript", sub)?);
                parent.push_child(
                    SemanticNode::new(NodeType::Superscript)
                        .with_child(subscripted)
                        .with_child(self.role_group("exponent", sup)?),
                );
            }
            "msqrt" => {
                if element_children(element).next().is_none() {
                    return Err(arity_error(tag, "at least 1", 0));
                }
                let radicand = self.read_children_into(
                    SemanticNode::new(NodeType::Group).with_metadata("role", "radicand"),
                    element,
                )?;
                parent.push_child(SemanticNode::new(NodeType::Sqrt).with_child(radicand));
            }
            "mroot" => {
                let [radicand, index] = exact_children::<2>(element, tag)?;
                parent.push_child(
                    SemanticNode::new(NodeType::NRoot)
                        .with_child(self.role_group("index", index)?)
                        .with_child(self.role_group("radicand", radicand)?),
                );
            }
            "mi" => parent.push_child(SemanticNode::leaf(NodeType::Identifier, text_of(element))),
            "mn" => parent.push_child(SemanticNode::leaf(NodeType::Number, text_of(element))),
            "mtext" => parent.push_child(SemanticNode::leaf(NodeType::Text, text_of(element))),
            "mo" => {
                let text = text_of(element);
                let kind = if RELATIONS.contains(&text.as_str()) {
                    NodeType::Relation
                } else {
                    NodeType::Operator
                };
                parent.push_child(SemanticNode::leaf(kind, text));
            }
            "mspace" => parent.push_child(SemanticNode::leaf(NodeType::Space, " ")),
            "mtable" => {
                let matrix = self.read_children_into(SemanticNode::new(NodeType::Matrix), element)?;
                parent.push_child(matrix);
            }
            "mtr" => {
                let row = self.read_children_into(SemanticNode::new(NodeType::MatrixRow), element)?;
                parent.push_child(row);
            }
            "mtd" => {
                let cell = self.read_children_into(
                    SemanticNode::new(NodeType::Group).with_metadata("role", "cell"),
                    element,
                )?;
                parent.push_child(cell);
            }
            "math" => {
                for child in element_children(element) {
                    self.read_element(child, parent)?;
                }
            }
            _ => {
                tracing::debug!(element = tag, "unknown MathML element read as transparent");
                for child in element_children(element) {
                    self.read_element(child, parent)?;
                }
            }
        }
        Ok(())
    }

    /// Read every element child of `element` into `node` and return it.
    fn read_children_into(
        &mut self,
        mut node: SemanticNode,
        element: Node<'_, '_>,
    ) -> Result<SemanticNode, ParseError> {
        for child in element_children(element) {
            self.read_element(child, &mut node)?;
        }
        Ok(node)
    }

    /// Read a single element into a Group tagged with `role`.
    fn role_group(&mut self, role: &str, element: Node<'_, '_>) -> Result<SemanticNode, ParseError> {
        let mut group = SemanticNode::new(NodeType::Group).with_metadata("role", role);
        self.read_element(element, &mut group)?;
        Ok(group)
    }
}

const RELATIONS: &[&str] = &["=", "<", ">", "≤", "≥", "≠"];

fn element_children<'a, 'input>(
    element: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    element.children().filter(Node::is_element)
}

/// The element children of `element`, which must number exactly `N`.
fn exact_children<'a, 'input, const N: usize>(
    element: Node<'a, 'input>,
    tag: &str,
) -> Result<[Node<'a, 'input>; N], ParseError> {
    let children: Vec<Node<'a, 'input>> = element_children(element).collect();
    let found = children.len();
    children
        .try_into()
        .map_err(|_| arity_error(tag, &N.to_string(), found))
}

fn arity_error(tag: &str, expected: &str, found: usize) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidMarkup,
        format!("<{tag}> expects {expected} child elements, found {found}"),
    )
}

/// All descendant text of `element`, trimmed.
fn text_of(element: Node<'_, '_>) -> String {
    element
        .descendants()
        .filter(Node::is_text)
        .filter_map(|node| node.text())
        .collect::<String>()
        .trim()
        .to_string()
}
