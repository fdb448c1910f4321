//! Error types. Generation has exactly one failure kind: the input was not usable text.

use thiserror::Error;

/// Why an input sentence was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputReason {
  /// Empty, or whitespace only. `chars` is the length of the raw value.
  Empty { chars: usize },
  /// A dynamic value that is not a string (`found` is its JSON type name).
  NotText { found: &'static str },
}

impl std::fmt::Display for InvalidInputReason {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      InvalidInputReason::Empty { chars: 0 } => write!(f, "sentence is empty"),
      InvalidInputReason::Empty { chars } => write!(f, "sentence is whitespace only ({} chars)", chars),
      InvalidInputReason::NotText { found } => write!(f, "expected a string, found {}", found),
    }
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
  #[error("invalid input: {0}")]
  InvalidInput(InvalidInputReason),
}

/// Failures while loading lexicon overrides from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("failed to read lexicon config {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse lexicon config {path}: {source}")]
  Parse {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_name_the_offending_value() {
    let e = GenerateError::InvalidInput(InvalidInputReason::NotText { found: "number" });
    assert_eq!(e.to_string(), "invalid input: expected a string, found number");

    let e = GenerateError::InvalidInput(InvalidInputReason::Empty { chars: 3 });
    assert_eq!(e.to_string(), "invalid input: sentence is whitespace only (3 chars)");

    let e = GenerateError::InvalidInput(InvalidInputReason::Empty { chars: 0 });
    assert_eq!(e.to_string(), "invalid input: sentence is empty");
  }
}
