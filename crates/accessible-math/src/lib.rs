//! Accessible reading of mathematical notation.
//!
//! `accessible-math` reads LaTeX and MathML into a format-agnostic semantic
//! tree and renders that tree as spoken English or as Braille.
//!
//! # Architecture
//!
//! ```text
//! Input Notations        Tree                Outputs
//! ───────────────    ─────────────    ─────────────────────
//! LaTeX          ─┐                ┌─> speech (3 verbosity levels)
//!                 ├─> SemanticNode ┼─> Nemeth Braille
//! MathML         ─┘   (core crate) ├─> UEB Braille
//!                          │       └─> plain text
//!                          └─> Navigator (cursor)
//! ```
//!
//! # Example
//!
//! ```
//! use accessible_math::{input, Config, Renderer, SPEECH_RENDERER, NEMETH_RENDERER};
//!
//! let tree = input::parse("\\frac{a}{b}")?;
//! let config = Config::default();
//! assert_eq!(
//!     SPEECH_RENDERER.render(&tree, &config),
//!     "start fraction a over b end fraction"
//! );
//! assert_eq!(NEMETH_RENDERER.render(&tree, &config), "⠹⠁⠌⠃⠼");
//! # Ok::<(), accessible_math::ParseError>(())
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (unknown commands and elements at
//! `debug`, reserved Braille policies and failed batch items at `warn`) and
//! never installs a subscriber.

pub mod config;
pub mod error;
pub mod reader;
pub mod registry;
pub mod traits;

pub mod input;
pub mod output;

// Re-exports: semantic model
pub use accessible_math_core::{
    Metadata, Navigator, NodeType, ROOT_NODE_ID, SemanticNode, StructureEq, TreePath,
    MAX_TREE_DEPTH, accessibility_fallback, accessibility_of, describe,
};

// Re-exports: Traits and errors
pub use error::{ParseError, ParseErrorKind};
pub use traits::{Reader, Renderer};

// Re-exports: Configuration
pub use config::{
    BrailleConfig, BrailleNotation, Config, ConfigError, ParserConfig, SpeechConfig,
    UnsupportedPolicy, Verbosity,
};

// Re-exports: Registry
pub use registry::{
    detect_reader, reader_for_format, readers, register_reader, register_renderer, renderer_for,
    renderers,
};

// Re-exports: Built-in readers
pub use input::{LATEX_READER, LatexReader, parse, read_latex};
#[cfg(feature = "read-mathml")]
pub use input::{MATHML_READER, MathmlReader, read_mathml};

// Re-exports: Built-in renderers
pub use output::{
    NEMETH_RENDERER, NemethRenderer, PLAIN_TEXT_RENDERER, PlainTextRenderer, SPEECH_RENDERER,
    SpeechRenderer, UEB_RENDERER, UebRenderer, to_braille,
};

// Re-exports: Facade
pub use reader::{MathReader, Rendering};
