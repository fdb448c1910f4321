//! Fixed vocabularies and exact-match translation tables.
//!
//! List order matters: conjunctions and time markers are scanned front to back and the
//! first hit wins. The two translation tables are keyed by normalized fragment text
//! (see `util::normalize_key`), so adding a known sentence is a data change only.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::util::normalize_key;

const CONJUNCTIONS: [&str; 4] = ["如果", "假如", "要是", "若"];

const TIME_MARKERS: [&str; 7] = ["昨晚", "今天", "明天", "昨天", "前天", "明年", "去年"];

const PAST_TIME_MARKERS: [&str; 4] = ["昨晚", "昨天", "前天", "去年"];

const ACTIONS: [&str; 7] = ["去", "参加", "遇见", "做", "看", "听", "说"];

/// "meet / encounter"
const TARGET_ACTION: &str = "遇见";

const CLAUSE_TABLE: [(&str, &str); 3] = [
  ("如果她昨晚去参加活动", "If she had gone to the event last night"),
  ("如果我昨天去上班", "If I had gone to work yesterday"),
  ("如果他前天去看书", "If he had gone to read the day before yesterday"),
];

const MAIN_TABLE: [(&str, &str); 3] = [
  ("我就能遇见她", "I would have met her"),
  ("我就能完成工作", "I would have finished the work"),
  ("他就能看完这本书", "he would have finished reading this book"),
];

static BUILTIN: Lazy<Lexicon> = Lazy::new(Lexicon::new);

fn owned(words: &[&str]) -> Vec<String> {
  words.iter().map(|w| w.to_string()).collect()
}

#[derive(Clone, Debug)]
pub struct Lexicon {
  pub conjunctions: Vec<String>,
  pub time_markers: Vec<String>,
  pub past_time_markers: Vec<String>,
  pub actions: Vec<String>,
  pub target_action: String,
  clause_table: HashMap<String, String>,
  main_table: HashMap<String, String>,
}

impl Default for Lexicon {
  fn default() -> Self { Self::new() }
}

impl Lexicon {
  /// Fresh copy of the built-in vocabulary and tables.
  pub fn new() -> Self {
    let mut lex = Self {
      conjunctions: owned(&CONJUNCTIONS),
      time_markers: owned(&TIME_MARKERS),
      past_time_markers: owned(&PAST_TIME_MARKERS),
      actions: owned(&ACTIONS),
      target_action: TARGET_ACTION.to_string(),
      clause_table: HashMap::new(),
      main_table: HashMap::new(),
    };
    lex.extend_tables(
      CLAUSE_TABLE.iter().map(|(zh, en)| (zh.to_string(), en.to_string())),
      MAIN_TABLE.iter().map(|(zh, en)| (zh.to_string(), en.to_string())),
    );
    lex
  }

  /// Shared read-only instance used by `sentence_generate`.
  pub fn builtin() -> &'static Lexicon { &BUILTIN }

  /// Merge extra table entries. A later entry replaces an existing one with the same key.
  pub fn extend_tables<C, M>(&mut self, clauses: C, mains: M)
  where
    C: IntoIterator<Item = (String, String)>,
    M: IntoIterator<Item = (String, String)>,
  {
    for (zh, en) in clauses {
      self.clause_table.insert(normalize_key(&zh).to_string(), en);
    }
    for (zh, en) in mains {
      self.main_table.insert(normalize_key(&zh).to_string(), en);
    }
  }

  pub fn clause_english(&self, clause: &str) -> Option<&str> {
    self.clause_table.get(normalize_key(clause)).map(String::as_str)
  }

  pub fn main_english(&self, main_part: &str) -> Option<&str> {
    self.main_table.get(normalize_key(main_part)).map(String::as_str)
  }

  pub fn is_past_time(&self, marker: &str) -> bool {
    self.past_time_markers.iter().any(|m| m == marker)
  }

  pub fn table_sizes(&self) -> (usize, usize) {
    (self.clause_table.len(), self.main_table.len())
  }
}
