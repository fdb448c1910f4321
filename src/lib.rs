//! Ruguo · Chinese conditional sentences to English counterfactuals
//!
//! A single pass over one sentence:
//!   1. validate and trim
//!   2. split at the first recognized conjunction (如果 / 假如 / 要是 / 若)
//!   3. scan for a time marker and action words
//!   4. derive a two-level tense parameter
//!   5. render a Chinese restatement and an English translation
//!
//! The English side is exact-match lookup over a small table of known fragments with a
//! generic template behind it. It is not a general translator.
//!
//! ```
//! let out = ruguo::sentence_generate("如果她昨晚去参加活动，我就能遇见她。").unwrap();
//! assert_eq!(out.english, "If she had gone to the event last night, I would have met her.");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod logic;
pub mod render;
pub mod split;
pub mod telemetry;
pub mod tense;
pub mod util;

pub use domain::{Features, Rendered, Split, TenseParameter};
pub use error::{ConfigError, GenerateError, InvalidInputReason};
pub use lexicon::Lexicon;
pub use logic::{sentence_generate, sentence_generate_value, sentence_generate_with};
