//! Orchestration: validate, then split → extract → tense → render.
//!
//! Every call is independent. The only shared data is the read-only lexicon.

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::domain::Rendered;
use crate::error::{GenerateError, InvalidInputReason};
use crate::features::extract_features;
use crate::lexicon::Lexicon;
use crate::render::{render_chinese, render_english};
use crate::split::split_sentence;
use crate::tense::tense_parameter;
use crate::util::trunc_for_log;

/// Translate one conditional sentence using the built-in lexicon.
pub fn sentence_generate(sentence: &str) -> Result<Rendered, GenerateError> {
  sentence_generate_with(Lexicon::builtin(), sentence)
}

/// Same as `sentence_generate`, against a caller-supplied lexicon.
#[instrument(level = "info", skip(lexicon, sentence), fields(sentence_len = sentence.chars().count()))]
pub fn sentence_generate_with(lexicon: &Lexicon, sentence: &str) -> Result<Rendered, GenerateError> {
  let sentence = validate(sentence)?;
  debug!(target: "ruguo", sentence = %trunc_for_log(sentence, 64), "Generating");

  let split = split_sentence(lexicon, sentence);
  let features = extract_features(lexicon, sentence);
  let tense = tense_parameter(lexicon, &features);

  let rendered = Rendered {
    chinese: render_chinese(&split),
    english: render_english(lexicon, &split, tense),
  };
  info!(target: "ruguo", conditional = !split.clause.is_empty(), %tense, "Sentence generated");
  Ok(rendered)
}

/// Entry point for dynamically typed input (e.g. a decoded JSON request).
/// Anything other than a JSON string is rejected with the type it turned out to be.
pub fn sentence_generate_value(value: &Value) -> Result<Rendered, GenerateError> {
  match value {
    Value::String(s) => sentence_generate(s),
    other => {
      let found = json_type_name(other);
      warn!(target: "ruguo", %found, "Rejected non-text input");
      Err(GenerateError::InvalidInput(InvalidInputReason::NotText { found }))
    }
  }
}

fn validate(sentence: &str) -> Result<&str, GenerateError> {
  let trimmed = sentence.trim();
  if trimmed.is_empty() {
    let chars = sentence.chars().count();
    warn!(target: "ruguo", chars, "Rejected empty input");
    return Err(GenerateError::InvalidInput(InvalidInputReason::Empty { chars }));
  }
  Ok(trimmed)
}

fn json_type_name(v: &Value) -> &'static str {
  match v {
    Value::Null => "null",
    Value::Bool(_) => "bool",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
