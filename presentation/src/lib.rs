//! Presentation layer for local-council
//!
//! This crate contains CLI definitions, the boxed console presenter,
//! progress spinners, line input and the interactive menu.

pub mod cli;
pub mod config;
pub mod input;
pub mod output;
pub mod progress;
pub mod shell;

// Re-export commonly used types
pub use cli::commands::{Cli, ModeArg, PresetArg};
pub use config::OutputConfig;
pub use input::ReedlineInput;
pub use output::console::{ConsoleFormatter, ConsoleTurnPresenter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use shell::{CouncilShell, MenuChoice};
