//! Demo entry point: runs the canonical example sentence and prints both renderings.
//!
//! Env variables:
//!   LEXICON_CONFIG_PATH : optional TOML with extra [[clause]] / [[main]] table rows
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or "warn,ruguo=debug"
//!   LOG_FORMAT          : "pretty" (default) or "json" structured logs
//!   OUTPUT_FORMAT       : "text" (default) or "json" for a {"chinese", "english"} object

use tracing::info;

use ruguo::config::load_lexicon_config_from_env;
use ruguo::{sentence_generate_with, telemetry};

const DEMO_SENTENCE: &str = "如果她昨晚去参加活动，我就能遇见她。";

fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let lexicon = load_lexicon_config_from_env()
    .map(|cfg| cfg.into_lexicon())
    .unwrap_or_default();
  let (clauses, mains) = lexicon.table_sizes();
  info!(target: "ruguo", clauses, mains, "Lexicon ready");

  let result = sentence_generate_with(&lexicon, DEMO_SENTENCE)?;

  match std::env::var("OUTPUT_FORMAT").as_deref() {
    Ok("json") => println!("{}", serde_json::to_string(&result)?),
    _ => {
      println!("中文生成结果：{}", result.chinese);
      println!("英文生成结果：{}", result.english);
    }
  }
  Ok(())
}
