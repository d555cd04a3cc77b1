//! Nemeth Code renderer.
//!
//! Numbers use the dropped-digit cells after a numeric indicator, fractions
//! are bracketed by open and close indicators, and scripts follow their base
//! after a level indicator. No return-to-baseline indicator is emitted after
//! a script, and no indicator state is carried between runs of the same
//! category; each node is transcribed on its own.

use super::{
    BRAILLE_SPACE, BraillePass, BrailleRule, CAPITAL_INDICATOR, greek, letter, lowercase_letters,
    transcribe,
};
use crate::config::{BrailleConfig, BrailleNotation, Config};
use crate::traits::Renderer;
use accessible_math_core::{NodeType, SemanticNode};
use std::collections::BTreeMap;

/// Structural indicators.
pub mod indicators {
    pub const NUMERIC: &str = "⠼";
    pub const DECIMAL_POINT: &str = "⠨";
    pub const FRACTION_OPEN: &str = "⠹";
    pub const FRACTION_LINE: &str = "⠌";
    pub const FRACTION_CLOSE: &str = "⠼";
    pub const SUPERSCRIPT: &str = "⠘";
    pub const SUBSCRIPT: &str = "⠰";
    pub const RADICAL_OPEN: &str = "⠜";
    pub const RADICAL_CLOSE: &str = "⠻";
    pub const INFINITY: &str = "⠠⠿";
    pub const INTEGRAL: &str = "⠮";
    pub const SUMMATION: &str = "⠠⠨⠎";
    pub const PRODUCT: &str = "⠠⠨⠏";

    // Not emitted by the built-in rules; available to `with_rule` overrides.
    pub const BASELINE: &str = "⠐";
    pub const MULTIPURPOSE: &str = "⠸";
    pub const GRADE1_SYMBOL: &str = "⠰⠰";
    pub const GRADE1_WORD: &str = "⠰⠰⠰";
    pub const SHAPE: &str = "⠫";
}

/// Nemeth renderer.
#[derive(Default)]
pub struct NemethRenderer {
    rules: BTreeMap<NodeType, BrailleRule>,
}

/// Static instance of the Nemeth renderer for registry.
pub static NEMETH_RENDERER: NemethRenderer = NemethRenderer::new();

impl NemethRenderer {
    pub const fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Replace the rule for one node type.
    pub fn with_rule(
        mut self,
        node_type: NodeType,
        rule: impl Fn(&SemanticNode, &BraillePass<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.rules.insert(node_type, Box::new(rule));
        self
    }

    pub fn transcribe(&self, tree: &SemanticNode, settings: &BrailleConfig) -> String {
        transcribe(&self.rules, builtin, tree, settings, BrailleNotation::Nemeth)
    }
}

impl Renderer for NemethRenderer {
    fn name(&self) -> &'static str {
        "nemeth"
    }

    fn render(&self, tree: &SemanticNode, config: &Config) -> String {
        self.transcribe(tree, &config.braille)
    }
}

fn builtin(pass: &BraillePass<'_>, node: &SemanticNode) -> String {
    let content = node.content.as_str();
    match node.node_type {
        NodeType::Root | NodeType::Group => pass.render_children(node),
        NodeType::Number => number(content, pass.include_indicators()),
        NodeType::Identifier => identifier(content),
        NodeType::Operator => operator(content).unwrap_or(content).to_string(),
        NodeType::Relation => relation(content).unwrap_or(content).to_string(),
        NodeType::Fraction => [
            indicators::FRACTION_OPEN.to_string(),
            pass.render_child(node, 0),
            indicators::FRACTION_LINE.to_string(),
            pass.render_child(node, 1),
            indicators::FRACTION_CLOSE.to_string(),
        ]
        .concat(),
        NodeType::Superscript => [
            pass.render_child(node, 0),
            indicators::SUPERSCRIPT.to_string(),
            pass.render_child(node, 1),
        ]
        .concat(),
        NodeType::Subscript => [
            pass.render_child(node, 0),
            indicators::SUBSCRIPT.to_string(),
            pass.render_child(node, 1),
        ]
        .concat(),
        NodeType::Sqrt => [
            indicators::RADICAL_OPEN.to_string(),
            pass.render_child(node, 0),
            indicators::RADICAL_CLOSE.to_string(),
        ]
        .concat(),
        NodeType::NRoot => [
            pass.render_child(node, 0),
            indicators::RADICAL_OPEN.to_string(),
            pass.render_child(node, 1),
            indicators::RADICAL_CLOSE.to_string(),
        ]
        .concat(),
        NodeType::Sum => indicators::SUMMATION.to_string() + &pass.render_children(node),
        NodeType::Product => indicators::PRODUCT.to_string() + &pass.render_children(node),
        NodeType::Integral => indicators::INTEGRAL.to_string() + &pass.render_children(node),
        NodeType::Function => lowercase_letters(content),
        NodeType::Text => text(content),
        NodeType::Space => BRAILLE_SPACE.to_string(),
        NodeType::Limit | NodeType::Matrix | NodeType::MatrixRow => {
            if content.is_empty() {
                pass.render_children(node)
            } else {
                text(content)
            }
        }
    }
}

fn digit(c: char) -> Option<&'static str> {
    const DIGITS: [&str; 10] = ["⠴", "⠂", "⠆", "⠒", "⠲", "⠢", "⠖", "⠶", "⠦", "⠔"];
    c.to_digit(10).map(|d| DIGITS[d as usize])
}

fn number(content: &str, include_indicator: bool) -> String {
    let mut out = String::new();
    if include_indicator {
        out.push_str(indicators::NUMERIC);
    }
    for c in content.chars() {
        match (c, digit(c)) {
            (_, Some(cell)) => out.push_str(cell),
            ('.', None) => out.push_str(indicators::DECIMAL_POINT),
            (other, None) => out.push(other),
        }
    }
    out
}

fn identifier(content: &str) -> String {
    if let Some(cells) = greek(content) {
        return cells.to_string();
    }
    if content == "∞" {
        return indicators::INFINITY.to_string();
    }
    let mut chars = content.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(cell) = letter(c.to_ascii_lowercase()) {
            return if c.is_ascii_uppercase() {
                format!("{CAPITAL_INDICATOR}{cell}")
            } else {
                cell.to_string()
            };
        }
    }
    lowercase_letters(content)
}

fn text(content: &str) -> String {
    content
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match (letter(c), digit(c)) {
            (Some(cell), _) | (None, Some(cell)) => cell.to_string(),
            _ if c == ' ' => BRAILLE_SPACE.to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn operator(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "+" => "⠬",
        "-" | "−" => "⠤",
        "×" | "·" => "⠡",
        "÷" => "⠌",
        "±" => "⠬⠤",
        "∓" => "⠤⠬",
        "(" => "⠷",
        ")" => "⠾",
        "[" => "⠈⠷",
        "]" => "⠈⠾",
        "{" => "⠨⠷",
        "}" => "⠨⠾",
        _ => return None,
    })
}

/// Comparison signs, padded with Braille spaces on both sides.
fn relation(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "=" => "⠀⠿⠀",
        "<" => "⠀⠪⠀",
        ">" => "⠀⠻⠀",
        "≤" => "⠀⠪⠿⠀",
        "≥" => "⠀⠻⠿⠀",
        "≠" => "⠀⠿⠈⠱⠀",
        "≈" => "⠀⠈⠿⠀",
        _ => return None,
    })
}
