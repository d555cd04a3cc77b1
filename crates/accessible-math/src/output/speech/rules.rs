//! Phrase and name tables for spoken math.

use crate::config::Verbosity;

/// A structural phrase whose wording depends on verbosity.
///
/// Several concise and superbrief entries are empty; empty fragments are
/// dropped when speech is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    FractionStart,
    FractionOver,
    FractionEnd,
    Superscript,
    Subscript,
    Sqrt,
    SqrtEnd,
    NRoot,
    Sum,
    Product,
    Integral,
    MatrixStart,
    MatrixEnd,
    Row,
}

impl Phrase {
    /// Wording at `verbosity`.
    pub fn text(self, verbosity: Verbosity) -> &'static str {
        let (verbose, concise, superbrief) = match self {
            Phrase::FractionStart => ("start fraction", "", "frac"),
            Phrase::FractionOver => ("over", "over", ""),
            Phrase::FractionEnd => ("end fraction", "", ""),
            Phrase::Superscript => ("to the power of", "to the", "exp"),
            Phrase::Subscript => ("subscript", "sub", "sub"),
            Phrase::Sqrt => ("square root of", "square root of", "sqrt"),
            Phrase::SqrtEnd => ("end root", "", ""),
            Phrase::NRoot => ("root of", "root", "root"),
            Phrase::Sum => ("summation of", "sum of", "sum"),
            Phrase::Product => ("product of", "product of", "prod"),
            Phrase::Integral => ("integral of", "integral of", "int"),
            Phrase::MatrixStart => ("start matrix", "matrix", "matrix"),
            Phrase::MatrixEnd => ("end matrix", "", ""),
            Phrase::Row => ("row", "row", ""),
        };
        match verbosity {
            Verbosity::Verbose => verbose,
            Verbosity::Concise => concise,
            Verbosity::Superbrief => superbrief,
        }
    }
}

pub fn operator_name(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "+" => "plus",
        "-" | "−" => "minus",
        "×" | "·" => "times",
        "÷" => "divided by",
        "±" => "plus or minus",
        "∓" => "minus or plus",
        "(" => "open paren",
        ")" => "close paren",
        "[" => "open bracket",
        "]" => "close bracket",
        _ => return None,
    })
}

pub fn relation_name(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "=" => "equals",
        "<" => "less than",
        ">" => "greater than",
        "≤" => "less than or equal to",
        "≥" => "greater than or equal to",
        "≠" => "not equal to",
        "≈" => "approximately equal to",
        "≡" => "is identical to",
        _ => return None,
    })
}

/// Spoken form of special number values.
pub fn number_name(value: &str) -> Option<&'static str> {
    match value {
        "∞" => Some("infinity"),
        _ => None,
    }
}

/// Spoken names of Greek letters and `∞`.
pub fn identifier_name(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "α" => "alpha",
        "β" => "beta",
        "γ" => "gamma",
        "δ" => "delta",
        "ε" => "epsilon",
        "ζ" => "zeta",
        "η" => "eta",
        "θ" => "theta",
        "ι" => "iota",
        "κ" => "kappa",
        "λ" => "lambda",
        "μ" => "mu",
        "ν" => "nu",
        "ξ" => "xi",
        "π" => "pi",
        "ρ" => "rho",
        "σ" => "sigma",
        "τ" => "tau",
        "υ" => "upsilon",
        "φ" => "phi",
        "χ" => "chi",
        "ψ" => "psi",
        "ω" => "omega",
        "Α" => "capital alpha",
        "Β" => "capital beta",
        "Γ" => "capital gamma",
        "Δ" => "capital delta",
        "Θ" => "capital theta",
        "Λ" => "capital lambda",
        "Ξ" => "capital xi",
        "Π" => "capital pi",
        "Σ" => "capital sigma",
        "Φ" => "capital phi",
        "Ψ" => "capital psi",
        "Ω" => "capital omega",
        "∞" => "infinity",
        _ => return None,
    })
}
