//! Clause splitting: condition vs result around the first recognized conjunction.
//!
//! Rules:
//! - Conjunctions are tried in lexicon order; the first one present anywhere wins.
//! - The clause region runs from that conjunction's first occurrence to the end.
//!   Anything before it is dropped.
//! - The region is cut at its first full-width comma. No comma means the whole region
//!   is the clause and the main part is empty.
//! - No conjunction (or an empty clause) means the whole sentence is the main part.

use tracing::debug;

use crate::domain::Split;
use crate::lexicon::Lexicon;
use crate::util::CLAUSE_SEPARATOR;

pub fn split_sentence(lexicon: &Lexicon, sentence: &str) -> Split {
  let region = lexicon
    .conjunctions
    .iter()
    .find_map(|conj| sentence.find(conj.as_str()).map(|idx| (conj, &sentence[idx..])));

  let mut split = Split::default();
  if let Some((conj, region)) = region {
    match region.split_once(CLAUSE_SEPARATOR) {
      Some((clause, main_part)) => {
        split.clause = clause.trim().to_string();
        split.main_part = main_part.trim().to_string();
      }
      None => split.clause = region.trim().to_string(),
    }
    debug!(target: "ruguo", conjunction = %conj, clause = %split.clause, main_part = %split.main_part, "Sentence split");
  }

  if split.clause.is_empty() {
    split.main_part = sentence.trim().to_string();
    debug!(target: "ruguo", "No conditional clause; whole sentence is the main part");
  }
  split
}

#[cfg(test)]
mod tests {
  use super::*;

  fn split(s: &str) -> Split { split_sentence(Lexicon::builtin(), s) }

  #[test]
  fn splits_at_first_comma_after_conjunction() {
    let s = split("如果她昨晚去参加活动，我就能遇见她。");
    assert_eq!(s.clause, "如果她昨晚去参加活动");
    assert_eq!(s.main_part, "我就能遇见她。");
  }

  #[test]
  fn only_the_first_comma_separates() {
    let s = split("要是我去，你去，他也去。");
    assert_eq!(s.clause, "要是我去");
    assert_eq!(s.main_part, "你去，他也去。");
  }

  #[test]
  fn no_comma_makes_whole_region_the_clause() {
    let s = split("假如明天下雨");
    assert_eq!(s.clause, "假如明天下雨");
    assert_eq!(s.main_part, "");
  }

  #[test]
  fn no_conjunction_falls_back_to_main_part() {
    let s = split("她去参加活动。");
    assert_eq!(s.clause, "");
    assert_eq!(s.main_part, "她去参加活动。");
  }

  #[test]
  fn list_order_beats_position_in_sentence() {
    // 若 appears first in the text, but 如果 is earlier in the conjunction list.
    let s = split("若是不行，如果她来，我就走。");
    assert_eq!(s.clause, "如果她来");
    assert_eq!(s.main_part, "我就走。");
  }

  #[test]
  fn text_before_conjunction_is_dropped() {
    let s = split("我想，如果他前天去看书，他就能看完这本书。");
    assert_eq!(s.clause, "如果他前天去看书");
    assert_eq!(s.main_part, "他就能看完这本书。");
  }

  #[test]
  fn trims_around_the_separator() {
    let s = split("如果我昨天去上班 ， 我就能完成工作");
    assert_eq!(s.clause, "如果我昨天去上班");
    assert_eq!(s.main_part, "我就能完成工作");
  }
}
