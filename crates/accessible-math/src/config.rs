//! Reader and renderer configuration.
//!
//! Example config.toml:
//! ```toml
//! [speech]
//! style = "concise"     # verbose | concise | superbrief
//! language = "en"
//!
//! [braille]
//! notation = "ueb"      # nemeth | ueb
//! include_indicators = true
//! unsupported_fallback = "describe"
//!
//! [parser]
//! max_depth = 256
//! ```
//!
//! Every section and key is optional. Renderers receive an already-built
//! `&Config`; nothing in this crate reads the environment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Error loading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },
}

/// How much framing speech output carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    #[default]
    Verbose,
    Concise,
    Superbrief,
}

impl Verbosity {
    pub fn name(self) -> &'static str {
        match self {
            Verbosity::Verbose => "verbose",
            Verbosity::Concise => "concise",
            Verbosity::Superbrief => "superbrief",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(Verbosity::Verbose),
            "concise" => Ok(Verbosity::Concise),
            "superbrief" => Ok(Verbosity::Superbrief),
            _ => Err(ConfigError::InvalidValue {
                field: "speech.style",
                value: s.to_string(),
            }),
        }
    }
}

/// Braille code to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrailleNotation {
    #[default]
    Nemeth,
    Ueb,
}

impl BrailleNotation {
    pub fn name(self) -> &'static str {
        match self {
            BrailleNotation::Nemeth => "nemeth",
            BrailleNotation::Ueb => "ueb",
        }
    }
}

impl fmt::Display for BrailleNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrailleNotation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nemeth" => Ok(BrailleNotation::Nemeth),
            "ueb" => Ok(BrailleNotation::Ueb),
            _ => Err(ConfigError::InvalidValue {
                field: "braille.notation",
                value: s.to_string(),
            }),
        }
    }
}

/// What Braille renderers do with constructs they have no code for.
///
/// Only `Describe` is implemented; the others are accepted and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    #[default]
    Describe,
    Warn,
    Error,
}

/// `[speech]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub style: Verbosity,
    /// Language tag handed through to speech consumers.
    pub language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            style: Verbosity::default(),
            language: "en".to_string(),
        }
    }
}

/// `[braille]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrailleConfig {
    pub notation: BrailleNotation,
    /// Emit the numeric indicator before numbers.
    pub include_indicators: bool,
    pub unsupported_fallback: UnsupportedPolicy,
}

impl Default for BrailleConfig {
    fn default() -> Self {
        Self {
            notation: BrailleNotation::default(),
            include_indicators: true,
            unsupported_fallback: UnsupportedPolicy::default(),
        }
    }
}

/// `[parser]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest tree a reader will build.
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub speech: SpeechConfig,
    pub braille: BrailleConfig,
    pub parser: ParserConfig,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.speech.style, Verbosity::Verbose);
        assert_eq!(config.speech.language, "en");
        assert_eq!(config.braille.notation, BrailleNotation::Nemeth);
        assert!(config.braille.include_indicators);
        assert_eq!(
            config.braille.unsupported_fallback,
            UnsupportedPolicy::Describe
        );
        assert_eq!(config.parser.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
[speech]
style = "superbrief"
"#,
        )
        .unwrap();
        assert_eq!(config.speech.style, Verbosity::Superbrief);
        assert_eq!(config.speech.language, "en");
        assert!(config.braille.include_indicators);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[braille]
notation = "ueb"
include_indicators = false

[parser]
max_depth = 32
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.braille.notation, BrailleNotation::Ueb);
        assert!(!config.braille.include_indicators);
        assert_eq!(config.parser.max_depth, 32);
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let err = Config::from_toml_str("[speech]\nstyle = \"chatty\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.speech.style = Verbosity::Concise;
        config.braille.unsupported_fallback = UnsupportedPolicy::Warn;
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Concise".parse::<Verbosity>().unwrap(), Verbosity::Concise);
        assert_eq!("UEB".parse::<BrailleNotation>().unwrap(), BrailleNotation::Ueb);
        assert!(matches!(
            "grade2".parse::<BrailleNotation>(),
            Err(ConfigError::InvalidValue {
                field: "braille.notation",
                ..
            })
        ));
    }
}
