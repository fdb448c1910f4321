//! Shallow feature extraction over the full sentence.
//! Plain substring tests, no segmentation: a word inside a longer word still matches.

use tracing::debug;

use crate::domain::Features;
use crate::lexicon::Lexicon;

/// First time marker (vocabulary order) plus every action word present.
pub fn extract_features<'a>(lexicon: &'a Lexicon, sentence: &str) -> Features<'a> {
  let time_marker = lexicon
    .time_markers
    .iter()
    .map(String::as_str)
    .find(|w| sentence.contains(w));

  let actions = lexicon
    .actions
    .iter()
    .map(String::as_str)
    .filter(|w| sentence.contains(w))
    .collect();

  let features = Features { time_marker, actions };
  debug!(target: "ruguo", time_marker = ?features.time_marker, actions = ?features.actions, "Features extracted");
  features
}
