//! Unified English Braille (technical) renderer.
//!
//! Digits reuse the letter cells a-j after the numeric indicator, and every
//! uppercase letter carries its own capital indicator.

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
    pub const DECIMAL_POINT: &str = "⠲";
    pub const FRACTION_OPEN: &str = "⠷";
    pub const FRACTION_LINE: &str = "⠌";
    pub const FRACTION_CLOSE: &str = "⠾";
    pub const SUPERSCRIPT: &str = "⠔";
    pub const SUBSCRIPT: &str = "⠢";
    pub const RADICAL_OPEN: &str = "⠩";
    pub const RADICAL_CLOSE: &str = "⠱";
    pub const INFINITY: &str = "⠠⠿";
    pub const INTEGRAL: &str = "⠮";
    pub const SUMMATION: &str = "⠠⠨⠎";
    pub const PRODUCT: &str = "⠠⠨⠏";

    // Defined by the code but not emitted by any rule.
    pub const GRADE1: &str = "⠰";
}

/// UEB renderer.
#[derive(Default)]
pub struct UebRenderer {
    rules: BTreeMap<NodeType, BrailleRule>,
}

/// Static instance of the UEB renderer for registry.
pub static UEB_RENDERER: UebRenderer = UebRenderer::new();

impl UebRenderer {
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
        transcribe(&self.rules, builtin, tree, settings, BrailleNotation::Ueb)
    }
}

impl Renderer for UebRenderer {
    fn name(&self) -> &'static str {
        "ueb"
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
            indicators::RADICAL_OPEN.to_string(),
            indicators::SUPERSCRIPT.to_string(),
            pass.render_child(node, 0),
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
    const DIGITS: [&str; 10] = ["⠚", "⠁", "⠃", "⠉", "⠙", "⠑", "⠋", "⠛", "⠓", "⠊"];
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

/// A letter with a capital indicator when uppercase.
fn cased_letter(c: char) -> Option<String> {
    let cell = letter(c.to_ascii_lowercase())?;
    Some(if c.is_ascii_uppercase() {
        format!("{CAPITAL_INDICATOR}{cell}")
    } else {
        cell.to_string()
    })
}

fn identifier(content: &str) -> String {
    if let Some(cells) = greek(content) {
        return cells.to_string();
    }
    if content == "∞" {
        return indicators::INFINITY.to_string();
    }
    content
        .chars()
        .map(|c| cased_letter(c).unwrap_or_else(|| c.to_string()))
        .collect()
}

fn text(content: &str) -> String {
    content
        .chars()
        .map(|c| {
            if let Some(cells) = cased_letter(c) {
                cells
            } else if let Some(cell) = digit(c) {
                cell.to_string()
            } else if c == ' ' {
                BRAILLE_SPACE.to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn operator(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "+" => "⠬",
        "-" | "−" => "⠤",
        "×" => "⠐⠦",
        "·" => "⠐⠲",
        "÷" => "⠐⠌",
        "±" => "⠸⠖",
        "(" => "⠐⠣",
        ")" => "⠐⠜",
        "[" => "⠨⠣",
        "]" => "⠨⠜",
        "{" => "⠸⠣",
        "}" => "⠸⠜",
        _ => return None,
    })
}

fn relation(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "=" => "⠐⠶",
        "<" => "⠐⠪",
        ">" => "⠐⠕",
        "≤" => "⠐⠪⠶",
        "≥" => "⠐⠕⠶",
        "≠" => "⠐⠶⠈⠱",
        "≈" => "⠘⠶",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_latex;

    fn ueb(latex: &str) -> String {
        UEB_RENDERER.transcribe(&read_latex(latex).unwrap(), &BrailleConfig::default())
    }

    #[test]
    fn test_numbers() {
        assert_eq!(ueb("12"), "⠼⠁⠃");
        assert_eq!(ueb("0.5"), "⠼⠚⠲⠑");
    }

    #[test]
    fn test_number_without_indicator() {
        let settings = BrailleConfig {
            include_indicators: false,
            ..BrailleConfig::default()
        };
        let tree = read_latex("12").unwrap();
        assert_eq!(UEB_RENDERER.transcribe(&tree, &settings), "⠁⠃");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(ueb("\\frac{a}{b}"), "⠷⠁⠌⠃⠾");
    }

    #[test]
    fn test_scripts() {
        assert_eq!(ueb("x^2"), "⠭⠔⠼⠃");
        assert_eq!(ueb("x_i"), "⠭⠢⠊");
    }

    #[test]
    fn test_radicals() {
        assert_eq!(ueb("\\sqrt{x}"), "⠩⠭⠱");
        assert_eq!(ueb("\\sqrt[3]{x}"), "⠩⠔⠼⠉⠭⠱");
    }

    #[test]
    fn test_capitals_and_greek() {
        assert_eq!(ueb("A"), "⠠⠁");
        assert_eq!(ueb("\\alpha"), "⠨⠁");
        assert_eq!(ueb("\\Delta"), "⠠⠨⠙");
    }

    #[test]
    fn test_equation() {
        assert_eq!(ueb("x+1=2"), "⠭⠬⠼⠁⠐⠶⠼⠃");
        assert_eq!(ueb("2 \\times 3"), "⠼⠃⠐⠦⠼⠉");
    }

    #[test]
    fn test_text_keeps_capitals() {
        assert_eq!(ueb("\\text{Hi 5}"), "⠠⠓⠊⠀⠑");
    }

    #[test]
    fn test_empty() {
        assert_eq!(ueb(""), "");
    }
}
