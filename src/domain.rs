//! Request-scoped values that flow through the pipeline: split, features, tense and the rendered pair.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Condition/result halves of a sentence.
/// `clause` is empty when no conjunction was found; `main_part` then holds the whole sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
  pub clause: String,
  pub main_part: String,
}

/// Shallow signals scanned from the full sentence.
/// Entries borrow from the lexicon they were matched against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Features<'a> {
  /// First time marker in vocabulary order, if any.
  pub time_marker: Option<&'a str>,
  /// Every action word that occurs in the sentence.
  pub actions: BTreeSet<&'a str>,
}

/// Two-level signal approximating an unfulfilled past condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenseParameter {
  High,
  Low,
}

impl TenseParameter {
  pub fn value(self) -> f32 {
    match self {
      TenseParameter::High => 0.8,
      TenseParameter::Low => 0.3,
    }
  }

  pub fn is_high(self) -> bool { self.value() > 0.5 }
}

impl std::fmt::Display for TenseParameter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:.1}", self.value())
  }
}

/// The only externally visible output: `{"chinese": ..., "english": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
  pub chinese: String,
  pub english: String,
}
