//! Braille renderers - Nemeth and UEB.
//!
//! Both codes share one dispatch shape: per-node-type overrides first, then
//! the code's exhaustive built-in rules. Output is a pure function of the
//! tree and the Braille settings.

pub mod nemeth;
pub mod ueb;

pub use nemeth::{NEMETH_RENDERER, NemethRenderer};
pub use ueb::{UEB_RENDERER, UebRenderer};

use crate::config::{BrailleConfig, BrailleNotation, Config, UnsupportedPolicy};
use crate::traits::Renderer;
use accessible_math_core::{NodeType, SemanticNode};
use std::collections::BTreeMap;

/// The Braille space cell.
pub const BRAILLE_SPACE: &str = "⠀";

/// Capital indicator, shared by both codes.
pub const CAPITAL_INDICATOR: &str = "⠠";

/// A per-node-type override consulted before the built-in rules.
pub type BrailleRule = Box<dyn Fn(&SemanticNode, &BraillePass<'_>) -> String + Send + Sync>;

type BuiltinRules = fn(&BraillePass<'_>, &SemanticNode) -> String;

/// Render state for one Braille pass. Passed to custom rules so they can
/// recurse into children.
pub struct BraillePass<'a> {
    overrides: &'a BTreeMap<NodeType, BrailleRule>,
    builtin: BuiltinRules,
    include_indicators: bool,
}

impl BraillePass<'_> {
    /// Whether numeric indicators are emitted.
    pub fn include_indicators(&self) -> bool {
        self.include_indicators
    }

    pub fn render(&self, node: &SemanticNode) -> String {
        match self.overrides.get(&node.node_type) {
            Some(rule) => rule(node, self),
            None => (self.builtin)(self, node),
        }
    }

    /// Every child, concatenated.
    pub fn render_children(&self, node: &SemanticNode) -> String {
        node.children()
            .iter()
            .map(|child| self.render(child))
            .collect()
    }

    pub fn render_child(&self, node: &SemanticNode, index: usize) -> String {
        node.child(index)
            .map(|child| self.render(child))
            .unwrap_or_default()
    }
}

fn transcribe(
    overrides: &BTreeMap<NodeType, BrailleRule>,
    builtin: BuiltinRules,
    tree: &SemanticNode,
    settings: &BrailleConfig,
    notation: BrailleNotation,
) -> String {
    if settings.unsupported_fallback != UnsupportedPolicy::Describe {
        tracing::warn!(
            notation = %notation,
            policy = ?settings.unsupported_fallback,
            "unsupported-construct policy is reserved; rendering with describe"
        );
    }
    BraillePass {
        overrides,
        builtin,
        include_indicators: settings.include_indicators,
    }
    .render(tree)
}

/// The renderer for `notation`.
pub fn renderer_for_notation(notation: BrailleNotation) -> &'static dyn Renderer {
    match notation {
        BrailleNotation::Nemeth => &NEMETH_RENDERER,
        BrailleNotation::Ueb => &UEB_RENDERER,
    }
}

/// Render `tree` in the notation chosen by `config`.
pub fn to_braille(tree: &SemanticNode, config: &Config) -> String {
    renderer_for_notation(config.braille.notation).render(tree, config)
}

const LETTERS: [&str; 26] = [
    "⠁", "⠃", "⠉", "⠙", "⠑", "⠋", "⠛", "⠓", "⠊", "⠚", "⠅", "⠇", "⠍", "⠝", "⠕", "⠏", "⠟", "⠗",
    "⠎", "⠞", "⠥", "⠧", "⠺", "⠭", "⠽", "⠵",
];

/// Literary cell for a lowercase ASCII letter.
pub fn letter(c: char) -> Option<&'static str> {
    c.is_ascii_lowercase()
        .then(|| LETTERS[usize::from(c as u8 - b'a')])
}

/// Greek letter with its indicator, and capital indicator for capitals.
pub fn greek(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "α" => "⠨⠁",
        "β" => "⠨⠃",
        "γ" => "⠨⠛",
        "δ" => "⠨⠙",
        "ε" => "⠨⠑",
        "ζ" => "⠨⠵",
        "η" => "⠨⠱",
        "θ" => "⠨⠹",
        "ι" => "⠨⠊",
        "κ" => "⠨⠅",
        "λ" => "⠨⠇",
        "μ" => "⠨⠍",
        "ν" => "⠨⠝",
        "ξ" => "⠨⠭",
        "π" => "⠨⠏",
        "ρ" => "⠨⠗",
        "σ" => "⠨⠎",
        "τ" => "⠨⠞",
        "υ" => "⠨⠥",
        "φ" => "⠨⠋",
        "χ" => "⠨⠯",
        "ψ" => "⠨⠽",
        "ω" => "⠨⠺",
        "Α" => "⠠⠨⠁",
        "Β" => "⠠⠨⠃",
        "Γ" => "⠠⠨⠛",
        "Δ" => "⠠⠨⠙",
        "Θ" => "⠠⠨⠹",
        "Λ" => "⠠⠨⠇",
        "Ξ" => "⠠⠨⠭",
        "Π" => "⠠⠨⠏",
        "Σ" => "⠠⠨⠎",
        "Φ" => "⠠⠨⠋",
        "Ψ" => "⠠⠨⠽",
        "Ω" => "⠠⠨⠺",
        _ => return None,
    })
}

/// Letters mapped through the letter table, lowercased first.
pub(crate) fn lowercase_letters(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| letter(c).map_or_else(|| c.to_string(), str::to_string))
        .collect()
}
