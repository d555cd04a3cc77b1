//! Speech renderer - turn a semantic tree into spoken English.
//!
//! Each node type has a composition rule that lists text fragments in a
//! fixed order; non-empty fragments are joined with single spaces. Lower
//! verbosity levels drop wrapper phrases by mapping them to empty strings
//! in the [`Phrase`] table.
//!
//! | Node        | Fragments                                              |
//! |-------------|--------------------------------------------------------|
//! | Fraction    | `fraction_start` numerator `fraction_over` denominator `fraction_end` |
//! | Superscript | base `superscript` exponent                            |
//! | Subscript   | base `subscript` subscript                             |
//! | Sqrt        | `sqrt` radicand `sqrt_end`                             |
//! | NRoot       | index `nroot` radicand                                 |
//! | Sum, Product, Integral | phrase, then every child                    |

pub mod rules;

pub use rules::Phrase;

use crate::config::{Config, Verbosity};
use crate::traits::Renderer;
use accessible_math_core::{NodeType, SemanticNode};
use std::collections::BTreeMap;

/// A per-node-type override consulted before the built-in rules.
pub type SpeechRule = Box<dyn Fn(&SemanticNode, &SpeechPass<'_>) -> String + Send + Sync>;

/// Speech renderer.
#[derive(Default)]
pub struct SpeechRenderer {
    rules: BTreeMap<NodeType, SpeechRule>,
}

/// Static instance of the speech renderer for registry.
pub static SPEECH_RENDERER: SpeechRenderer = SpeechRenderer::new();

impl SpeechRenderer {
    pub const fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Replace the rule for one node type.
    pub fn with_rule(
        mut self,
        node_type: NodeType,
        rule: impl Fn(&SemanticNode, &SpeechPass<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.rules.insert(node_type, Box::new(rule));
        self
    }

    /// Speak `tree` at `verbosity`.
    pub fn speak(&self, tree: &SemanticNode, verbosity: Verbosity) -> String {
        SpeechPass {
            renderer: self,
            verbosity,
        }
        .render(tree)
    }
}

impl Renderer for SpeechRenderer {
    fn name(&self) -> &'static str {
        "speech"
    }

    fn render(&self, tree: &SemanticNode, config: &Config) -> String {
        self.speak(tree, config.speech.style)
    }
}

/// Render state for one speech pass. Passed to custom rules so they can
/// recurse into children.
pub struct SpeechPass<'a> {
    renderer: &'a SpeechRenderer,
    verbosity: Verbosity,
}

impl SpeechPass<'_> {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn phrase(&self, phrase: Phrase) -> &'static str {
        phrase.text(self.verbosity)
    }

    pub fn render(&self, node: &SemanticNode) -> String {
        if let Some(rule) = self.renderer.rules.get(&node.node_type) {
            return rule(node, self);
        }

        let content = node.content.as_str();
        match node.node_type {
            NodeType::Root | NodeType::Group => self.render_children(node),
            NodeType::Number => rules::number_name(content).unwrap_or(content).to_string(),
            NodeType::Identifier => rules::identifier_name(content)
                .unwrap_or(content)
                .to_string(),
            NodeType::Operator => rules::operator_name(content).unwrap_or(content).to_string(),
            NodeType::Relation => rules::relation_name(content).unwrap_or(content).to_string(),
            NodeType::Function | NodeType::Text => content.to_string(),
            NodeType::Space => String::new(),
            NodeType::Fraction => join([
                self.phrase(Phrase::FractionStart).to_string(),
                self.render_child(node, 0),
                self.phrase(Phrase::FractionOver).to_string(),
                self.render_child(node, 1),
                self.phrase(Phrase::FractionEnd).to_string(),
            ]),
            NodeType::Superscript => join([
                self.render_child(node, 0),
                self.phrase(Phrase::Superscript).to_string(),
                self.render_child(node, 1),
            ]),
            NodeType::Subscript => join([
                self.render_child(node, 0),
                self.phrase(Phrase::Subscript).to_string(),
                self.render_child(node, 1),
            ]),
            NodeType::Sqrt => join([
                self.phrase(Phrase::Sqrt).to_string(),
                self.render_child(node, 0),
                self.phrase(Phrase::SqrtEnd).to_string(),
            ]),
            NodeType::NRoot => join([
                self.render_child(node, 0),
                self.phrase(Phrase::NRoot).to_string(),
                self.render_child(node, 1),
            ]),
            NodeType::Sum => self.phrase_then_children(Phrase::Sum, node),
            NodeType::Product => self.phrase_then_children(Phrase::Product, node),
            NodeType::Integral => self.phrase_then_children(Phrase::Integral, node),
            NodeType::Matrix => join([
                self.phrase(Phrase::MatrixStart).to_string(),
                self.render_children(node),
                self.phrase(Phrase::MatrixEnd).to_string(),
            ]),
            NodeType::MatrixRow => self.phrase_then_children(Phrase::Row, node),
            NodeType::Limit => self.render_default(node),
        }
    }

    /// Every child, spoken in order.
    pub fn render_children(&self, node: &SemanticNode) -> String {
        join(node.children().iter().map(|child| self.render(child)))
    }

    fn render_child(&self, node: &SemanticNode, index: usize) -> String {
        node.child(index)
            .map(|child| self.render(child))
            .unwrap_or_default()
    }

    fn phrase_then_children(&self, phrase: Phrase, node: &SemanticNode) -> String {
        join([self.phrase(phrase).to_string(), self.render_children(node)])
    }

    fn render_default(&self, node: &SemanticNode) -> String {
        if node.content.is_empty() {
            self.render_children(node)
        } else {
            node.content.clone()
        }
    }
}

/// Join fragments with single spaces, dropping empty ones.
fn join<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_latex;

    fn speak(latex: &str, verbosity: Verbosity) -> String {
        SPEECH_RENDERER.speak(&read_latex(latex).unwrap(), verbosity)
    }

    #[test]
    fn test_fraction_levels() {
        assert_eq!(
            speak("\\frac{a}{b}", Verbosity::Verbose),
            "start fraction a over b end fraction"
        );
        assert_eq!(speak("\\frac{a}{b}", Verbosity::Concise), "a over b");
        assert_eq!(speak("\\frac{a}{b}", Verbosity::Superbrief), "frac a b");
    }

    #[test]
    fn test_power() {
        assert_eq!(speak("x^2", Verbosity::Verbose), "x to the power of 2");
        assert_eq!(speak("x^2", Verbosity::Concise), "x to the 2");
        assert_eq!(speak("x^2", Verbosity::Superbrief), "x exp 2");
    }

    #[test]
    fn test_roots() {
        assert_eq!(
            speak("\\sqrt{x}", Verbosity::Verbose),
            "square root of x end root"
        );
        assert_eq!(speak("\\sqrt{x}", Verbosity::Concise), "square root of x");
        assert_eq!(speak("\\sqrt[3]{x}", Verbosity::Verbose), "3 root of x");
    }

    #[test]
    fn test_name_tables() {
        assert_eq!(
            speak("\\alpha \\leq \\Omega \\pm \\infty", Verbosity::Verbose),
            "alpha less than or equal to capital omega plus or minus infinity"
        );
    }

    #[test]
    fn test_big_operators() {
        assert_eq!(
            speak("\\sum x_i", Verbosity::Verbose),
            "summation of x subscript i"
        );
        assert_eq!(speak("\\int f", Verbosity::Superbrief), "int f");
        assert_eq!(speak("\\prod n", Verbosity::Concise), "product of n");
    }

    #[test]
    fn test_spaces_and_unknown_commands() {
        assert_eq!(speak("a \\, b", Verbosity::Verbose), "a b");
        assert_eq!(speak("\\foo", Verbosity::Verbose), "\\foo");
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(speak("", Verbosity::Verbose), "");
    }

    #[test]
    fn test_matrix() {
        let row = |a: &str, b: &str| {
            SemanticNode::new(NodeType::MatrixRow)
                .with_child(SemanticNode::leaf(NodeType::Number, a))
                .with_child(SemanticNode::leaf(NodeType::Number, b))
        };
        let tree = SemanticNode::new(NodeType::Root).with_child(
            SemanticNode::new(NodeType::Matrix)
                .with_child(row("1", "0"))
                .with_child(row("0", "1")),
        );
        assert_eq!(
            SPEECH_RENDERER.speak(&tree, Verbosity::Verbose),
            "start matrix row 1 0 row 0 1 end matrix"
        );
        assert_eq!(
            SPEECH_RENDERER.speak(&tree, Verbosity::Superbrief),
            "matrix 1 0 0 1"
        );
    }

    #[test]
    fn test_limit_falls_back_to_content() {
        let tree = SemanticNode::new(NodeType::Root)
            .with_child(SemanticNode::leaf(NodeType::Limit, "lim"));
        assert_eq!(SPEECH_RENDERER.speak(&tree, Verbosity::Verbose), "lim");
    }

    #[test]
    fn test_custom_rule() {
        let renderer = SpeechRenderer::new().with_rule(NodeType::Fraction, |node, pass| {
            format!(
                "the ratio of {} to {}",
                pass.render(&node.children()[0]),
                pass.render(&node.children()[1])
            )
        });
        let tree = read_latex("1 + \\frac{a}{b}").unwrap();
        assert_eq!(
            renderer.speak(&tree, Verbosity::Verbose),
            "1 plus the ratio of a to b"
        );
    }

    #[test]
    fn test_renderer_uses_config_style() {
        let mut config = Config::default();
        config.speech.style = Verbosity::Concise;
        let tree = read_latex("\\frac{1}{2}").unwrap();
        assert_eq!(SPEECH_RENDERER.render(&tree, &config), "1 over 2");
    }
}
