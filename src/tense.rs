use crate::domain::{Features, TenseParameter};
use crate::lexicon::Lexicon;

/// High only when the time marker is in the past subset and the target action ("meet") is present.
pub fn tense_parameter(lexicon: &Lexicon, features: &Features<'_>) -> TenseParameter {
  let is_past = features.time_marker.map_or(false, |m| lexicon.is_past_time(m));
  let has_target = features.actions.contains(lexicon.target_action.as_str());
  if is_past && has_target { TenseParameter::High } else { TenseParameter::Low }
}
