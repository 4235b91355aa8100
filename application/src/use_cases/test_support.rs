//! Shared test doubles for the use case tests

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crate::ports::presenter::TurnPresenter;
use crate::ports::user_input::{InputError, UserInput};
use async_trait::async_trait;
use council_domain::{
    CouncilMember, CouncilRegistry, Model, Phase, PresentationTag, SessionMode, Topic,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One recorded request: (model, system prompt, user message)
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub system_prompt: String,
    pub content: String,
}

type CallLog = Arc<Mutex<Vec<RecordedCall>>>;
type Script = Arc<Mutex<VecDeque<Result<String, String>>>>;

/// Gateway that records every send and replies from a script
///
/// When the script runs dry, replies are `reply N` where N counts sends.
#[derive(Default)]
pub struct ScriptedGateway {
    calls: CallLog,
    script: Script,
    models: Vec<Model>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(replies: Vec<Result<&str, &str>>) -> Self {
        let script = replies
            .into_iter()
            .map(|r| r.map(str::to_string).map_err(str::to_string))
            .collect();
        Self {
            script: Arc::new(Mutex::new(script)),
            ..Self::default()
        }
    }

    pub fn with_models(mut self, models: Vec<Model>) -> Self {
        self.models = models;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

struct ScriptedSession {
    model: Model,
    system_prompt: String,
    calls: CallLog,
    script: Script,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                model: self.model.to_string(),
                system_prompt: self.system_prompt.clone(),
                content: content.to_string(),
            });
            calls.len()
        };
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(e)) => Err(GatewayError::ConnectionError(e)),
            None => Ok(format!("reply {}", n)),
        }
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
            calls: Arc::clone(&self.calls),
            script: Arc::clone(&self.script),
        }))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        if self.models.is_empty() {
            return Err(GatewayError::ConnectionError("connection refused".into()));
        }
        Ok(self.models.clone())
    }
}

/// Presenter that keeps every rendered label and notice
#[derive(Default)]
pub struct RecordingPresenter {
    pub labels: Mutex<Vec<String>>,
    pub texts: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<String>>,
    pub phases: Mutex<Vec<Phase>>,
    pub choices_shown: Mutex<usize>,
}

impl RecordingPresenter {
    pub fn labels(&self) -> Vec<String> {
        self.labels.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl TurnPresenter for RecordingPresenter {
    fn announce_session(&self, _mode: SessionMode, _topic: &Topic) {}

    fn announce_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    fn present_turn(&self, label: &str, text: &str, _tag: PresentationTag) {
        self.labels.lock().unwrap().push(label.to_string());
        self.texts.lock().unwrap().push(text.to_string());
    }

    fn present_member_choice(&self, _members: &[CouncilMember]) {
        *self.choices_shown.lock().unwrap() += 1;
    }

    fn show_current_topic(&self, _topic: &Topic) {}

    fn notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

/// Input that replays scripted lines, then reports end of input
pub struct ScriptedInput {
    lines: Mutex<VecDeque<Option<String>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: Mutex::new(lines.iter().map(|l| Some(l.to_string())).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }
}

impl UserInput for ScriptedInput {
    fn read_line(&self, prompt: &str) -> Result<Option<String>, InputError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.lines.lock().unwrap().pop_front().flatten())
    }
}

pub fn member(id: &str, name: &str) -> CouncilMember {
    CouncilMember::new(id, name, Model::Custom(format!("model-{}", id)))
}

pub fn registry(ids: &[(&str, &str)]) -> CouncilRegistry {
    CouncilRegistry::new(ids.iter().map(|(id, name)| member(id, name)).collect()).unwrap()
}
