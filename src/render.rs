//! Bilingual rendering.
//!
//! Chinese: rejoin clause and main part with a full-width comma, terminate with 。 unless
//! the last part already carries its own terminator.
//!
//! English: exact lookup of each half in the lexicon tables; a miss falls back to a
//! generic phrase. The clause fallback only knows 她 ("she") vs everything else, and
//! the main-part fallback only knows the two tense levels.

use tracing::debug;

use crate::domain::{Split, TenseParameter};
use crate::lexicon::Lexicon;
use crate::util::{ends_with_terminator, CLAUSE_SEPARATOR};

const SHE: char = '她';

pub fn render_chinese(split: &Split) -> String {
  let body = match (split.clause.is_empty(), split.main_part.is_empty()) {
    (false, false) => format!("{}{}{}", split.clause, CLAUSE_SEPARATOR, split.main_part),
    (false, true) => split.clause.clone(),
    (true, _) => split.main_part.clone(),
  };
  if ends_with_terminator(&body) { body } else { format!("{}。", body) }
}

pub fn render_english(lexicon: &Lexicon, split: &Split, tense: TenseParameter) -> String {
  let clause_hit = lexicon.clause_english(&split.clause);
  let main_hit = lexicon.main_english(&split.main_part);
  debug!(target: "ruguo", clause_hit = clause_hit.is_some(), main_hit = main_hit.is_some(), %tense, "English table lookup");

  let clause_en = clause_hit.unwrap_or_else(|| {
    // With no clause the whole sentence sits in main_part, so look there instead.
    let subject_text = if split.clause.is_empty() { &split.main_part } else { &split.clause };
    if subject_text.contains(SHE) { "If she had done" } else { "If I had done" }
  });
  let main_en = main_hit.unwrap_or(if tense.is_high() { "I would have done it" } else { "I will do it" });

  format!("{}, {}.", clause_en, main_en)
}
