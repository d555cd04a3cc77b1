//! LaTeX reader.
//!
//! A single left-to-right scan over the characters of the expression. There
//! is no precedence grammar: braces open Groups, commands and script
//! operators consume their arguments, and everything else becomes a leaf.
//! `^` and `_` take the node just emitted as their base.

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::input::{check_depth, depth_exceeded, looks_like_mathml};
use crate::traits::Reader;
use accessible_math_core::{NodeType, SemanticNode};

/// LaTeX reader.
pub struct LatexReader;

impl Reader for LatexReader {
    fn format(&self) -> &'static str {
        "latex"
    }

    fn detect(&self, input: &str) -> bool {
        !looks_like_mathml(input)
    }

    fn read(&self, source: &str, config: &ParserConfig) -> Result<SemanticNode, ParseError> {
        read_latex_with(source, config)
    }
}

/// Static instance of the LaTeX reader for registry.
pub static LATEX_READER: LatexReader = LatexReader;

/// Parse a LaTeX expression with default settings.
pub fn read_latex(source: &str) -> Result<SemanticNode, ParseError> {
    read_latex_with(source, &ParserConfig::default())
}

/// Parse a LaTeX expression. Surrounding `$` delimiters are ignored.
pub fn read_latex_with(source: &str, config: &ParserConfig) -> Result<SemanticNode, ParseError> {
    let latex = source.trim().trim_matches('$').trim();
    let chars: Vec<char> = latex.chars().collect();
    let mut root = SemanticNode::new(NodeType::Root)
        .with_metadata("source", latex)
        .with_metadata("format", "latex");

    let mut scanner = Scanner {
        chars: &chars,
        source: latex,
        max_depth: config.max_depth,
        depth: 0,
    };
    scanner.parse_range(0, chars.len(), &mut root)?;
    check_depth(&root, config)?;
    Ok(root)
}

struct Scanner<'a> {
    chars: &'a [char],
    source: &'a str,
    max_depth: usize,
    depth: usize,
}

impl Scanner<'_> {
    fn error(&self, kind: ParseErrorKind, message: impl Into<String>, position: usize) -> ParseError {
        ParseError::new(kind, message).at(position, self.source)
    }

    /// Parse `chars[start..end]` into children of `parent`.
    fn parse_range(
        &mut self,
        start: usize,
        end: usize,
        parent: &mut SemanticNode,
    ) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(depth_exceeded(self.max_depth).at(start, self.source));
        }
        let result = self.parse_tokens(start, end, parent);
        self.depth -= 1;
        result
    }

    fn parse_tokens(
        &mut self,
        mut pos: usize,
        end: usize,
        parent: &mut SemanticNode,
    ) -> Result<(), ParseError> {
        while pos < end {
            let c = self.chars[pos];
            pos = match c {
                c if c.is_whitespace() => pos + 1,
                '\\' => self.parse_command(pos, end, parent)?,
                '^' => self.parse_script(pos, end, parent, NodeType::Superscript)?,
                '_' => self.parse_script(pos, end, parent, NodeType::Subscript)?,
                '{' => {
                    let close = self.matching_brace(pos, end)?;
                    let mut group = SemanticNode::new(NodeType::Group);
                    self.parse_range(pos + 1, close, &mut group)?;
                    parent.push_child(group);
                    close + 1
                }
                '}' => {
                    return Err(self.error(
                        ParseErrorKind::UnclosedBrace,
                        "Unmatched closing brace",
                        pos,
                    ));
                }
                c if c.is_ascii_digit() => self.parse_number(pos, end, parent),
                '.' if pos + 1 < end && self.chars[pos + 1].is_ascii_digit() => {
                    self.parse_number(pos, end, parent)
                }
                c if c.is_alphabetic() => {
                    parent.push_child(SemanticNode::leaf(NodeType::Identifier, c));
                    pos + 1
                }
                c => {
                    parent.push_child(symbol_leaf(c));
                    pos + 1
                }
            };
        }
        Ok(())
    }

    fn parse_number(&self, start: usize, end: usize, parent: &mut SemanticNode) -> usize {
        let mut pos = start;
        let mut seen_point = false;
        while pos < end {
            match self.chars[pos] {
                c if c.is_ascii_digit() => {}
                '.' if !seen_point => seen_point = true,
                _ => break,
            }
            pos += 1;
        }
        let digits: String = self.chars[start..pos].iter().collect();
        parent.push_child(SemanticNode::leaf(NodeType::Number, digits));
        pos
    }

    fn parse_command(
        &mut self,
        pos: usize,
        end: usize,
        parent: &mut SemanticNode,
    ) -> Result<usize, ParseError> {
        let name_start = pos + 1;
        let name_end = self.command_end(pos, end);
        if name_start >= end {
            // A lone trailing backslash.
            return Ok(end);
        }
        if !self.chars[name_start].is_ascii_alphabetic() {
            let symbol = self.chars[name_start];
            if let Some(node) = control_symbol(symbol) {
                parent.push_child(node);
            }
            return Ok(name_end);
        }

        let name: String = self.chars[name_start..name_end].iter().collect();
        match name.as_str() {
            "frac" => return self.parse_frac(name_end, end, parent),
            "sqrt" => return self.parse_sqrt(name_end, end, parent),
            "text" | "mathrm" | "textrm" => return self.parse_text(name_end, end, parent, &name),
            "left" | "right" => return Ok(name_end),
            _ => {}
        }

        let node = if let Some(node) = big_operator(&name) {
            node
        } else if let Some(letter) = greek_letter(&name) {
            SemanticNode::leaf(NodeType::Identifier, letter)
        } else if let Some(symbol) = operator_command(&name) {
            SemanticNode::leaf(NodeType::Operator, symbol)
        } else if let Some(symbol) = relation_command(&name) {
            SemanticNode::leaf(NodeType::Relation, symbol)
        } else if name == "infty" {
            SemanticNode::leaf(NodeType::Identifier, "∞")
        } else if FUNCTIONS.contains(&name.as_str()) {
            SemanticNode::leaf(NodeType::Function, name.as_str())
        } else {
            tracing::debug!(command = %name, position = pos, "unknown LaTeX command kept as text");
            SemanticNode::leaf(NodeType::Text, format!("\\{name}"))
                .with_metadata("unknown_command", "true")
        };
        parent.push_child(node);
        Ok(name_end)
    }

    /// End of the command token starting at the backslash at `pos`: a run of
    /// letters, or a single symbol.
    fn command_end(&self, pos: usize, end: usize) -> usize {
        let mut i = pos + 1;
        if i < end && self.chars[i].is_ascii_alphabetic() {
            while i < end && self.chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            i
        } else {
            (i + 1).min(end)
        }
    }

    fn parse_frac(
        &mut self,
        pos: usize,
        end: usize,
        parent: &mut SemanticNode,
    ) -> Result<usize, ParseError> {
        let num_open = self.skip_whitespace(pos, end);
        if !self.is_at(num_open, end, '{') {
            return Err(self.error(
                ParseErrorKind::MissingArgument,
                "Expected { after \\frac",
                num_open,
            ));
        }
        let num_close = self.matching_brace(num_open, end)?;

        let den_open = self.skip_whitespace(num_close + 1, end);
        if !self.is_at(den_open, end, '{') {
            return Err(self.error(
                ParseErrorKind::MissingArgument,
                "Expected { for denominator",
                den_open,
            ));
        }
        let den_close = self.matching_brace(den_open, end)?;

        let numerator = self.parse_group("numerator", num_open + 1, num_close)?;
        let denominator = self.parse_group("denominator", den_open + 1, den_close)?;
        parent.push_child(
            SemanticNode::new(NodeType::Fraction)
                .with_child(numerator)
                .with_child(denominator),
        );
        Ok(den_close + 1)
    }

    fn parse_sqrt(
        &mut self,
        pos: usize,
        end: usize,
        parent: &mut SemanticNode,
    ) -> Result<usize, ParseError> {
        let mut next = self.skip_whitespace(pos, end);
        let mut index = None;
        if self.is_at(next, end, '[') {
            let close = (next + 1..end)
                .find(|&i| self.chars[i] == ']')
                .ok_or_else(|| {
                    self.error(
                        ParseErrorKind::UnclosedBracket,
                        "Unclosed [ in \\sqrt",
                        next,
                    )
                })?;
            if self.chars[next + 1..close].iter().any(|c| !c.is_whitespace()) {
                index = Some((next + 1, close));
            }
            next = self.skip_whitespace(close + 1, end);
        }

        if !self.is_at(next, end, '{') {
            return Err(self.error(
                ParseErrorKind::MissingArgument,
                "Expected { after \\sqrt",
                next,
            ));
        }
        let close = self.matching_brace(next, end)?;
        let radicand = self.parse_group("radicand", next + 1, close)?;

        let node = match index {
            Some((start, stop)) => SemanticNode::new(NodeType::NRoot)
                .with_child(self.parse_group("index", start, stop)?)
                .with_child(radicand),
            None => SemanticNode::new(NodeType::Sqrt).with_child(radicand),
        };
        parent.push_child(node);
        Ok(close + 1)
    }

    fn parse_text(
        &mut self,
        pos: usize,
        end: usize,
        parent: &mut SemanticNode,
        command: &str,
    ) -> Result<usize, ParseError> {
        let open = self.skip_whitespace(pos, end);
        if !self.is_at(open, end, '{') {
            return Err(self.error(
                ParseErrorKind::MissingArgument,
                format!("Expected {{ after \\{command}"),
                open,
            ));
        }
        let close = self.matching_brace(open, end)?;
        let text: String = self.chars[open + 1..close].iter().collect();
        parent.push_child(SemanticNode::leaf(NodeType::Text, text).with_metadata("command", command));
        Ok(close + 1)
    }

    fn parse_script(
        &mut self,
        pos: usize,
        end: usize,
        parent: &mut SemanticNode,
        kind: NodeType,
    ) -> Result<usize, ParseError> {
        let (role, missing_base, missing_arg) = match kind {
            NodeType::Superscript => (
                "exponent",
                "Superscript without base",
                "Expected exponent after ^",
            ),
            _ => (
                "subscript",
                "Subscript without base",
                "Expected subscript after _",
            ),
        };

        let Some(mut base) = parent.pop_child() else {
            return Err(self.error(ParseErrorKind::MissingBase, missing_base, pos));
        };
        // Each script wraps its base one level deeper, so a chain has to be
        // cut off here rather than after the tree is built.
        if self.depth + base.max_depth() + 1 > self.max_depth {
            return Err(depth_exceeded(self.max_depth).at(pos, self.source));
        }
        base.metadata
            .entry("role".to_string())
            .or_insert_with(|| "base".to_string());

        let arg = self.skip_whitespace(pos + 1, end);
        if arg >= end {
            return Err(self.error(ParseErrorKind::MissingArgument, missing_arg, pos));
        }

        let (payload, next) = match self.chars[arg] {
            '{' => {
                let close = self.matching_brace(arg, end)?;
                (self.parse_group(role, arg + 1, close)?, close + 1)
            }
            '\\' => {
                let token_end = self.command_end(arg, end);
                (self.parse_group(role, arg, token_end)?, token_end)
            }
            _ => (self.parse_group(role, arg, arg + 1)?, arg + 1),
        };

        parent.push_child(
            SemanticNode::new(kind)
                .with_child(base)
                .with_child(payload),
        );
        Ok(next)
    }

    /// Parse `chars[start..end]` into a Group tagged with `role`.
    fn parse_group(&mut self, role: &str, start: usize, end: usize) -> Result<SemanticNode, ParseError> {
        let mut group = SemanticNode::new(NodeType::Group).with_metadata("role", role);
        self.parse_range(start, end, &mut group)?;
        Ok(group)
    }

    /// Index of the `}` matching the `{` at `open`, searching before `end`.
    fn matching_brace(&self, open: usize, end: usize) -> Result<usize, ParseError> {
        let mut depth = 0usize;
        let mut i = open;
        while i < end {
            match self.chars[i] {
                '\\' => i += 1,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        Err(self.error(ParseErrorKind::UnclosedBrace, "Unclosed brace", open))
    }

    fn skip_whitespace(&self, mut pos: usize, end: usize) -> usize {
        while pos < end && self.chars[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    fn is_at(&self, pos: usize, end: usize, expected: char) -> bool {
        pos < end && self.chars[pos] == expected
    }
}

const FUNCTIONS: &[&str] = &["sin", "cos", "tan", "log", "ln", "exp", "lim"];

/// Leaf for a single character that is not a digit, letter or structural
/// token.
fn symbol_leaf(c: char) -> SemanticNode {
    match c {
        '+' | '-' | '(' | ')' | '[' | ']' => SemanticNode::leaf(NodeType::Operator, c),
        '*' => SemanticNode::leaf(NodeType::Operator, "×"),
        '/' => SemanticNode::leaf(NodeType::Operator, "÷"),
        '=' | '<' | '>' => SemanticNode::leaf(NodeType::Relation, c),
        _ => SemanticNode::leaf(NodeType::Text, c),
    }
}

/// Node for a backslash followed by a non-letter. `None` means the symbol
/// produces nothing.
fn control_symbol(symbol: char) -> Option<SemanticNode> {
    match symbol {
        '{' | '}' => Some(SemanticNode::leaf(NodeType::Operator, symbol)),
        ',' | ';' | ':' | '!' | ' ' => Some(
            SemanticNode::leaf(NodeType::Space, " ").with_metadata("command", symbol),
        ),
        '\\' => None,
        other => Some(SemanticNode::leaf(NodeType::Text, other)),
    }
}

fn big_operator(name: &str) -> Option<SemanticNode> {
    let (kind, symbol) = match name {
        "sum" => (NodeType::Sum, "∑"),
        "prod" => (NodeType::Product, "∏"),
        "int" => (NodeType::Integral, "∫"),
        _ => return None,
    };
    Some(SemanticNode::leaf(kind, symbol))
}

fn greek_letter(name: &str) -> Option<&'static str> {
    Some(match name {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" | "varepsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" => "θ",
        "iota" => "ι",
        "kappa" => "κ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "pi" => "π",
        "rho" => "ρ",
        "sigma" => "σ",
        "tau" => "τ",
        "upsilon" => "υ",
        "phi" | "varphi" => "φ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        "Alpha" => "Α",
        "Beta" => "Β",
        "Gamma" => "Γ",
        "Delta" => "Δ",
        "Theta" => "Θ",
        "Lambda" => "Λ",
        "Xi" => "Ξ",
        "Pi" => "Π",
        "Sigma" => "Σ",
        "Phi" => "Φ",
        "Psi" => "Ψ",
        "Omega" => "Ω",
        _ => return None,
    })
}

fn operator_command(name: &str) -> Option<&'static str> {
    Some(match name {
        "times" => "×",
        "cdot" => "·",
        "div" => "÷",
        "pm" => "±",
        "mp" => "∓",
        _ => return None,
    })
}

fn relation_command(name: &str) -> Option<&'static str> {
    Some(match name {
        "leq" | "le" => "≤",
        "geq" | "ge" => "≥",
        "neq" | "ne" => "≠",
        "approx" => "≈",
        "equiv" => "≡",
        "lt" => "<",
        "gt" => ">",
        _ => return None,
    })
}
