//! Small string helpers shared by the splitter, lexicon and renderer.

/// Sentence-final punctuation, full-width and ASCII.
pub const TERMINATORS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// Full-width comma separating the condition from the result.
pub const CLAUSE_SEPARATOR: char = '，';

pub fn ends_with_terminator(s: &str) -> bool {
  s.chars().last().map_or(false, |c| TERMINATORS.contains(&c))
}

/// Trim whitespace and any trailing terminators.
/// Table keys and lookups both go through this so "我就能遇见她。" finds "我就能遇见她".
pub fn normalize_key(s: &str) -> &str {
  s.trim().trim_end_matches(|c: char| TERMINATORS.contains(&c) || c.is_whitespace())
}

/// Log-safe truncation by chars (byte slicing would split Han characters).
pub fn trunc_for_log(s: &str, max_chars: usize) -> String {
  let total = s.chars().count();
  if total <= max_chars {
    s.to_string()
  } else {
    let head: String = s.chars().take(max_chars).collect();
    format!("{}… ({} chars total)", head, total)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_key_strips_terminators_and_space() {
    assert_eq!(normalize_key(" 我就能遇见她。 "), "我就能遇见她");
    assert_eq!(normalize_key("我就能遇见她！？"), "我就能遇见她");
    assert_eq!(normalize_key("如果我昨天去上班"), "如果我昨天去上班");
    assert_eq!(normalize_key("。"), "");
  }

  #[test]
  fn terminator_detection() {
    assert!(ends_with_terminator("她去参加活动。"));
    assert!(ends_with_terminator("Done!"));
    assert!(!ends_with_terminator("我就能遇见她"));
    assert!(!ends_with_terminator(""));
  }

  #[test]
  fn truncation_counts_chars_not_bytes() {
    assert_eq!(trunc_for_log("如果她", 5), "如果她");
    assert_eq!(trunc_for_log("如果她昨晚", 2), "如果… (5 chars total)");
  }
}
