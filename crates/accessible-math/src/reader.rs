//! High-level entry point bundling a configuration with parse and render.

use crate::config::{BrailleNotation, Config, Verbosity};
use crate::error::ParseError;
use crate::input;
use crate::output::{PlainTextRenderer, SPEECH_RENDERER, renderer_for_notation};
use crate::traits::Renderer;
use accessible_math_core::SemanticNode;
use serde::Serialize;

/// Speech and Braille for one input of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub input: String,
    pub speech: String,
    pub braille: String,
}

/// Parses expressions and renders them with one configuration.
///
/// ```
/// use accessible_math::MathReader;
///
/// let reader = MathReader::default();
/// assert_eq!(reader.to_speech("x^2").unwrap(), "x to the power of 2");
/// assert_eq!(reader.to_braille("12").unwrap(), "⠼⠂⠆");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MathReader {
    config: Config,
}

impl MathReader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.config.speech.style = verbosity;
    }

    pub fn set_notation(&mut self, notation: BrailleNotation) {
        self.config.braille.notation = notation;
    }

    /// Parse LaTeX or MathML, detected from the input.
    pub fn parse(&self, input: &str) -> Result<SemanticNode, ParseError> {
        input::parse_with(input, &self.config.parser)
    }

    pub fn parse_latex(&self, latex: &str) -> Result<SemanticNode, ParseError> {
        input::read_latex_with(latex, &self.config.parser)
    }

    #[cfg(feature = "read-mathml")]
    pub fn parse_mathml(&self, mathml: &str) -> Result<SemanticNode, ParseError> {
        input::read_mathml_with(mathml, &self.config.parser)
    }

    pub fn to_speech(&self, input: &str) -> Result<String, ParseError> {
        let tree = self.parse(input)?;
        Ok(SPEECH_RENDERER.render(&tree, &self.config))
    }

    /// Braille in the configured notation.
    pub fn to_braille(&self, input: &str) -> Result<String, ParseError> {
        self.to_braille_in(input, self.config.braille.notation)
    }

    pub fn to_braille_in(
        &self,
        input: &str,
        notation: BrailleNotation,
    ) -> Result<String, ParseError> {
        let tree = self.parse(input)?;
        Ok(renderer_for_notation(notation).render(&tree, &self.config))
    }

    pub fn to_text(&self, input: &str) -> Result<String, ParseError> {
        Ok(PlainTextRenderer::emit(&self.parse(input)?))
    }

    /// The parsed tree in its JSON object form.
    pub fn structure(&self, input: &str) -> Result<serde_json::Value, ParseError> {
        Ok(self.parse(input)?.to_json_value())
    }

    /// Speech and Braille for each input. A failing input yields its error
    /// without stopping the rest.
    pub fn read_batch<I, S>(&self, inputs: I) -> Vec<Result<Rendering, ParseError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let braille = renderer_for_notation(self.config.braille.notation);
        inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                let input = input.as_ref();
                let tree = self.parse(input).inspect_err(|err| {
                    tracing::warn!(index, error = %err.message, "batch item failed to parse");
                })?;
                Ok(Rendering {
                    input: input.to_string(),
                    speech: SPEECH_RENDERER.render(&tree, &self.config),
                    braille: braille.render(&tree, &self.config),
                })
            })
            .collect()
    }
}
