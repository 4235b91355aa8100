//! [`UserInput`] backed by reedline

use council_application::{InputError, UserInput};
use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};
use std::borrow::Cow;
use std::sync::Mutex;

/// Prompt that shows exactly the given text, with no mode indicator
struct LinePrompt<'a>(&'a str);

impl Prompt for LinePrompt<'_> {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search: {}) ", prefix, history_search.term))
    }
}

/// Interactive line reader
///
/// Ctrl-C and Ctrl-D both end input, which the follow-up loop treats like
/// the exit keyword.
pub struct ReedlineInput {
    editor: Mutex<Reedline>,
}

impl ReedlineInput {
    pub fn new() -> Self {
        Self {
            editor: Mutex::new(Reedline::create()),
        }
    }
}

impl Default for ReedlineInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for ReedlineInput {
    fn read_line(&self, prompt: &str) -> Result<Option<String>, InputError> {
        let mut editor = self
            .editor
            .lock()
            .map_err(|_| InputError::Terminal("line editor lock poisoned".to_string()))?;

        match editor.read_line(&LinePrompt(prompt)) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => Ok(None),
            Err(e) => Err(InputError::Terminal(e.to_string())),
        }
    }
}
