//! Optional lexicon overrides loaded from TOML.
//!
//! Expected schema:
//!
//! ```toml
//! [[clause]]
//! zh = "如果你明天来"
//! en = "If you came tomorrow"
//!
//! [[main]]
//! zh = "我就请你吃饭"
//! en = "I would treat you to dinner"
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::error::ConfigError;
use crate::lexicon::Lexicon;

pub const LEXICON_CONFIG_ENV: &str = "LEXICON_CONFIG_PATH";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct LexiconConfig {
  #[serde(default, rename = "clause")]
  pub clauses: Vec<TableEntry>,
  #[serde(default, rename = "main")]
  pub mains: Vec<TableEntry>,
}

/// One exact-match row: Chinese fragment → English fragment.
#[derive(Clone, Debug, Deserialize)]
pub struct TableEntry {
  pub zh: String,
  pub en: String,
}

impl LexiconConfig {
  /// Built-in lexicon with this config's rows merged on top.
  pub fn into_lexicon(self) -> Lexicon {
    let mut lex = Lexicon::new();
    lex.extend_tables(
      self.clauses.into_iter().map(|e| (e.zh, e.en)),
      self.mains.into_iter().map(|e| (e.zh, e.en)),
    );
    lex
  }
}

pub fn parse_lexicon_config(path: &str, text: &str) -> Result<LexiconConfig, ConfigError> {
  toml::from_str::<LexiconConfig>(text).map_err(|source| ConfigError::Parse { path: path.to_string(), source })
}

pub fn load_lexicon_from_path(path: &str) -> Result<LexiconConfig, ConfigError> {
  let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_string(), source })?;
  parse_lexicon_config(path, &text)
}

/// Attempt to load overrides from LEXICON_CONFIG_PATH. Unset or broken config yields None.
pub fn load_lexicon_config_from_env() -> Option<LexiconConfig> {
  let path = std::env::var(LEXICON_CONFIG_ENV).ok()?;
  match load_lexicon_from_path(&path) {
    Ok(cfg) => {
      info!(target: "ruguo", %path, clauses = cfg.clauses.len(), mains = cfg.mains.len(), "Loaded lexicon config (TOML)");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "ruguo", %path, error = %e, "Ignoring lexicon config");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_both_tables() {
    let text = r#"
      [[clause]]
      zh = "如果你明天来"
      en = "If you came tomorrow"

      [[main]]
      zh = "我就请你吃饭。"
      en = "I would treat you to dinner"
    "#;
    let cfg = parse_lexicon_config("inline.toml", text).expect("parse");
    assert_eq!(cfg.clauses.len(), 1);
    assert_eq!(cfg.mains.len(), 1);

    let lex = cfg.into_lexicon();
    assert_eq!(lex.table_sizes(), (4, 4));
    assert_eq!(lex.main_english("我就请你吃饭"), Some("I would treat you to dinner"));
  }

  #[test]
  fn empty_file_is_a_valid_config() {
    let cfg = parse_lexicon_config("empty.toml", "").expect("parse");
    assert!(cfg.clauses.is_empty() && cfg.mains.is_empty());
  }

  #[test]
  fn malformed_rows_are_reported() {
    let err = parse_lexicon_config("bad.toml", "[[clause]]\nzh = \"如果\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
  }

  #[test]
  fn missing_file_is_a_read_error() {
    let err = load_lexicon_from_path("/nonexistent/ruguo-lexicon.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
  }
}
