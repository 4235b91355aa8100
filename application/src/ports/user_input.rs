//! User input port
//!
//! Line-oriented input for the interactive parts of a session: the Ask-One
//! member pick and the follow-up prompt.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub trait UserInput: Send + Sync {
    /// Show `prompt` and block for one line.
    ///
    /// Returns `Ok(None)` when input has ended (EOF, Ctrl-D, Ctrl-C).
    fn read_line(&self, prompt: &str) -> Result<Option<String>, InputError>;
}
