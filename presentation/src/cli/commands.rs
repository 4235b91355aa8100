//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_application::GenerationPreset;
use council_domain::SessionMode;
use std::path::PathBuf;

/// Mode selectable with `--mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Initial answers, cross-examination and a conclusion
    Debate,
    /// Every member explains in turn, building on the previous answers
    Teach,
    /// Pick one member to answer
    #[value(name = "ask-one", alias = "ask")]
    AskOne,
}

impl From<ModeArg> for SessionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Debate => SessionMode::Debate,
            ModeArg::Teach => SessionMode::Teach,
            ModeArg::AskOne => SessionMode::AskOne,
        }
    }
}

/// Generation preset selectable with `--preset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Low temperature, long answers (reasoning models)
    Thorough,
    /// Higher temperature, short answers
    Brief,
}

impl From<PresetArg> for GenerationPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Thorough => GenerationPreset::Thorough,
            PresetArg::Brief => GenerationPreset::Brief,
        }
    }
}

/// CLI arguments for local-council
#[derive(Parser, Debug)]
#[command(name = "local-council")]
#[command(author, version, about = "A council of local LLMs that debate, teach and answer")]
#[command(long_about = r#"
Local Council puts several models served by a local OpenAI-compatible server
(LM Studio on port 1234 by default) in front of one topic.

Modes:
  debate   every member answers, then reviews the others, then one concludes
  teach    every member explains in turn, building on the previous answers
  ask-one  a single member of your choice answers

After each mode you can keep asking follow-ups that see the whole
conversation so far; type 'back' to return to the menu.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/local-council/config.toml   Global config

Example:
  local-council
  local-council --mode debate "Is Rust's borrow checker worth it?"
  local-council --preset brief --endpoint http://192.168.1.20:1234
"#)]
pub struct Cli {
    /// Run one session in this mode before showing the menu
    #[arg(long, value_enum, requires = "topic")]
    pub mode: Option<ModeArg>,

    /// Topic for --mode
    #[arg(value_name = "TOPIC", requires = "mode")]
    pub topic: Option<String>,

    /// Base URL of the inference server
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Generation preset
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// End debates after cross-examination
    #[arg(long)]
    pub no_conclusion: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Append a JSONL transcript of every session to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
