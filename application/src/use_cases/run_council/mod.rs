//! Run Council use case
//!
//! Drives one mode invocation (Debate, Teach or Ask-One) against the
//! registry. Calls are strictly sequential: every member's turn is
//! sanitized, presented and appended to the context before the next
//! member's prompt is built.

mod ask_one;
mod debate;
mod teach;

use crate::config::SessionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::presenter::TurnPresenter;
use crate::ports::progress::ProgressNotifier;
use crate::ports::user_input::UserInput;
use council_domain::util::preview;
use council_domain::{
    ConversationContext, CouncilMember, CouncilRegistry, Phase, ResponseSanitizer, Session,
    SessionMode, Topic, Turn,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a mode
///
/// Gateway failures are not among them: they become `Error: <cause>` turns.
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error("{0} mode requires a topic")]
    MissingTopic(SessionMode),
}

/// Input for the RunCouncil use case
#[derive(Debug, Clone)]
pub struct RunCouncilInput {
    pub mode: SessionMode,
    /// Topic to discuss. Ask-One may leave it empty and ask the user instead.
    pub topic: Option<Topic>,
    /// Context inherited from a parent session
    pub context: ConversationContext,
}

impl RunCouncilInput {
    pub fn new(mode: SessionMode, topic: Topic) -> Self {
        Self {
            mode,
            topic: Some(topic),
            context: ConversationContext::new(),
        }
    }

    /// Ask-One started from the menu: member and topic are both asked for
    pub fn ask_one() -> Self {
        Self {
            mode: SessionMode::AskOne,
            topic: None,
            context: ConversationContext::new(),
        }
    }

    pub fn with_context(mut self, context: ConversationContext) -> Self {
        self.context = context;
        self
    }
}

/// Interactive collaborators for one run
#[derive(Clone, Copy)]
pub struct SessionPorts<'a> {
    pub presenter: &'a dyn TurnPresenter,
    pub progress: &'a dyn ProgressNotifier,
    pub input: &'a dyn UserInput,
}

/// Use case for running one council mode
pub struct RunCouncilUseCase<G: LlmGateway + 'static> {
    pub(super) gateway: Arc<G>,
    pub(super) registry: Arc<CouncilRegistry>,
    pub(super) params: SessionParams,
    pub(super) sanitizer: ResponseSanitizer,
    pub(super) logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> Clone for RunCouncilUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            registry: Arc::clone(&self.registry),
            params: self.params.clone(),
            sanitizer: self.sanitizer.clone(),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<G: LlmGateway + 'static> RunCouncilUseCase<G> {
    pub fn new(gateway: Arc<G>, registry: Arc<CouncilRegistry>, params: SessionParams) -> Self {
        Self {
            gateway,
            registry,
            params,
            sanitizer: ResponseSanitizer::default(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &CouncilRegistry {
        &self.registry
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    /// Run one mode invocation.
    ///
    /// Returns `Ok(None)` when Ask-One was abandoned (invalid member pick
    /// or empty question); no call was made and the inherited context is
    /// untouched.
    pub async fn execute(
        &self,
        input: RunCouncilInput,
        ports: &SessionPorts<'_>,
    ) -> Result<Option<Session>, RunCouncilError> {
        let RunCouncilInput {
            mode,
            topic,
            mut context,
        } = input;

        let topic = match (mode, topic) {
            (_, Some(topic)) => topic,
            (SessionMode::AskOne, None) => {
                return self.ask_one_interactive(context, ports).await;
            }
            (mode, None) => return Err(RunCouncilError::MissingTopic(mode)),
        };

        match mode {
            SessionMode::Debate => {
                self.start_session(mode, &topic, &context, ports);
                self.run_debate(&topic, &mut context, ports).await;
            }
            SessionMode::Teach => {
                self.start_session(mode, &topic, &context, ports);
                self.run_teach(&topic, &mut context, ports).await;
            }
            SessionMode::AskOne => {
                let Some(member) = self.pick_member(ports) else {
                    return Ok(None);
                };
                self.start_session(mode, &topic, &context, ports);
                self.run_ask_one(&member, &topic, &mut context, ports).await;
            }
        }

        Ok(Some(self.finish_session(mode, topic, context)))
    }

    pub(super) fn start_session(
        &self,
        mode: SessionMode,
        topic: &Topic,
        context: &ConversationContext,
        ports: &SessionPorts<'_>,
    ) {
        info!(
            "Starting {} on '{}' with {} inherited turns",
            mode,
            preview(topic.content(), 60),
            context.len()
        );
        ports.presenter.announce_session(mode, topic);
        self.logger.log(ConversationEvent::new(
            "session_started",
            serde_json::json!({
                "mode": mode.as_str(),
                "topic": topic.content(),
                "inherited_turns": context.len(),
                "members": self.registry.members().iter().map(|m| m.id()).collect::<Vec<_>>(),
            }),
        ));
    }

    pub(super) fn finish_session(
        &self,
        mode: SessionMode,
        topic: Topic,
        context: ConversationContext,
    ) -> Session {
        debug!("{} finished with {} turns", mode, context.len());
        self.logger.log(ConversationEvent::new(
            "session_completed",
            serde_json::json!({
                "mode": mode.as_str(),
                "topic": topic.content(),
                "turns": context.len(),
            }),
        ));
        Session::new(mode, topic, context)
    }

    /// Grounding text for a prompt built from the current log
    pub(super) fn grounding(&self, context: &ConversationContext) -> String {
        context.render(&self.params.window).trim_end().to_string()
    }

    /// One inference call producing exactly one appended turn
    pub(super) async fn respond(
        &self,
        member: &CouncilMember,
        phase: Phase,
        topic: &Topic,
        user_message: &str,
        context: &mut ConversationContext,
        ports: &SessionPorts<'_>,
    ) {
        ports.progress.on_member_start(&phase, member);
        self.logger.log(ConversationEvent::new(
            "llm_request",
            serde_json::json!({
                "member": member.id(),
                "model": member.model().as_str(),
                "phase": phase.as_str(),
                "bytes": user_message.len(),
            }),
        ));

        let (raw, success) = match self.complete(member, user_message).await {
            Ok(text) => (text, true),
            Err(e) => {
                warn!("{} failed: {}", member.display_name(), e);
                (format!("Error: {}", e), false)
            }
        };

        let text = self.sanitizer.sanitize(&raw);
        ports.progress.on_member_complete(&phase, member, success);

        let turn = Turn::new(member, topic, phase, text);
        ports.presenter.present(&turn, member.presentation_tag());
        self.logger.log(ConversationEvent::new(
            "turn",
            serde_json::json!({
                "member": turn.speaker_id(),
                "name": turn.speaker_name(),
                "phase": phase.as_str(),
                "topic": turn.topic(),
                "text": turn.text(),
                "success": success,
            }),
        ));
        context.push(turn);
    }

    async fn complete(
        &self,
        member: &CouncilMember,
        user_message: &str,
    ) -> Result<String, GatewayError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(member.model(), member.system_instruction())
            .await?;
        session.send(user_message).await
    }

    pub(super) async fn pause(&self) {
        if !self.params.pause.is_zero() {
            tokio::time::sleep(self.params.pause).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{
        RecordingPresenter, ScriptedGateway, ScriptedInput, registry,
    };
    use council_domain::{ContextWindow, TRUNCATED_REASONING_NOTICE};
    use std::time::Duration;

    fn params() -> SessionParams {
        SessionParams::default().with_pause(Duration::ZERO)
    }

    fn use_case(
        gateway: ScriptedGateway,
        members: &[(&str, &str)],
    ) -> (Arc<ScriptedGateway>, RunCouncilUseCase<ScriptedGateway>) {
        let gateway = Arc::new(gateway);
        let uc = RunCouncilUseCase::new(
            Arc::clone(&gateway),
            Arc::new(registry(members)),
            params(),
        );
        (gateway, uc)
    }

    fn topic(s: &str) -> Topic {
        Topic::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_teach_grounds_each_member_in_prior_turns() {
        let (gateway, uc) = use_case(
            ScriptedGateway::with_script(vec![Ok("Rust is a systems language.")]),
            &[("a", "A"), ("b", "B")],
        );
        let presenter = RecordingPresenter::default();
        let input = ScriptedInput::empty();
        let ports = SessionPorts {
            presenter: &presenter,
            progress: &NoProgress,
            input: &input,
        };

        let session = uc
            .execute(RunCouncilInput::new(SessionMode::Teach, topic("What is Rust?")), &ports)
            .await
            .unwrap()
            .unwrap();

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0].content,
            "What is Rust?\n\nStructure your answer with bullets or short paragraphs for easy reading."
        );
        assert!(calls[1].content.contains("A: Rust is a systems language."));
        assert!(calls[1].content.starts_with("Responses to 'What is Rust?':"));
        assert_eq!(session.context().len(), 2);
        assert_eq!(presenter.labels(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_calls_follow_registry_order() {
        let (gateway, uc) = use_case(
            ScriptedGateway::new(),
            &[("z", "Zed"), ("a", "Ay"), ("m", "Em")],
        );
        let presenter = RecordingPresenter::default();
        let input = ScriptedInput::empty();
        let ports = SessionPorts {
            presenter: &presenter,
            progress: &NoProgress,
            input: &input,
        };

        uc.execute(RunCouncilInput::new(SessionMode::Teach, topic("order")), &ports)
            .await
            .unwrap();

        let models: Vec<_> = gateway.calls().into_iter().map(|c| c.model).collect();
        assert_eq!(models, vec!["model-z", "model-a", "model-m"]);
    }

    #[tokio::test]
    async fn test_failed_call_becomes_error_turn() {
        let (gateway, uc) = use_case(
            ScriptedGateway::with_script(vec![Ok("first"), Err("refused"), Ok("third")]),
            &[("a", "A"), ("b", "B"), ("c", "C")],
        );
        let presenter = RecordingPresenter::default();
        let input = ScriptedInput::empty();
        let ports = SessionPorts {
            presenter: &presenter,
            progress: &NoProgress,
            input: &input,
        };

        let session = uc
            .execute(RunCouncilInput::new(SessionMode::Teach, topic("t")), &ports)
            .await
            .unwrap()
            .unwrap();

        let turns = session.context().turns();
        assert_eq!(turns.len(), 3);
        assert!(turns[1].text().starts_with("Error: "));
        assert!(turns[1].text().contains("refused"));
        // The third member still ran and saw the error turn
        assert_eq!(gateway.calls().len(), 3);
        assert!(gateway.calls()[2].content.contains("B: Error: "));
        assert_eq!(turns[2].text(), "third");
    }

    #[tokio::test]
    async fn test_reasoning_is_stripped_before_appending() {
        let (gateway, uc) = use_case(
            ScriptedGateway::with_script(vec![
                Ok("<think>hmm</think>\n  Final answer.  "),
                Ok("<think>still going"),
            ]),
            &[("a", "A"), ("b", "B")],
        );
        let presenter = RecordingPresenter::default();
        let input = ScriptedInput::empty();
        let ports = SessionPorts {
            presenter: &presenter,
            progress: &NoProgress,
            input: &input,
        };

        let session = uc
            .execute(RunCouncilInput::new(SessionMode::Teach, topic("t")), &ports)
            .await
            .unwrap()
            .unwrap();

        let turns = session.context().turns();
        assert_eq!(turns[0].text(), "Final answer.");
        assert_eq!(turns[1].text(), TRUNCATED_REASONING_NOTICE);
        assert!(!gateway.calls()[1].content.contains("hmm"));
    }

    #[tokio::test]
    async fn test_inherited_context_is_extended_not_replaced() {
        let (gateway, uc) = use_case(ScriptedGateway::new(), &[("a", "A"), ("b", "B")]);
        let presenter = RecordingPresenter::default();
        let input = ScriptedInput::empty();
        let ports = SessionPorts {
            presenter: &presenter,
            progress: &NoProgress,
            input: &input,
        };

        let first = uc
            .execute(RunCouncilInput::new(SessionMode::Teach, topic("one")), &ports)
            .await
            .unwrap()
            .unwrap();
        let parent = first.context().clone();

        let second = uc
            .execute(
                RunCouncilInput::new(SessionMode::Teach, topic("two")).with_context(parent.clone()),
                &ports,
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(&second.context().turns()[..2], parent.turns());
        assert_eq!(second.context().len(), 4);
        assert!(gateway.calls()[2].content.contains("Responses to 'one':"));
    }

    #[tokio::test]
    async fn test_window_limits_projection_only() {
        let gateway = Arc::new(ScriptedGateway::new());
        let uc = RunCouncilUseCase::new(
            Arc::clone(&gateway),
            Arc::new(registry(&[("a", "A"), ("b", "B"), ("c", "C")])),
            params().with_window(ContextWindow::last(1)),
        );
        let presenter = RecordingPresenter::default();
        let input = ScriptedInput::empty();
        let ports = SessionPorts {
            presenter: &presenter,
            progress: &NoProgress,
            input: &input,
        };

        let session = uc
            .execute(RunCouncilInput::new(SessionMode::Teach, topic("t")), &ports)
            .await
            .unwrap()
            .unwrap();

        let third = &gateway.calls()[2].content;
        assert!(third.contains("B: reply 2"));
        assert!(!third.contains("A: reply 1"));
        assert_eq!(session.context().len(), 3);
    }

    #[tokio::test]
    async fn test_system_instruction_is_forwarded() {
        let gateway = Arc::new(ScriptedGateway::new());
        let member = crate::use_cases::test_support::member("a", "A")
            .with_system_instruction("Be terse.");
        let uc = RunCouncilUseCase::new(
            Arc::clone(&gateway),
            Arc::new(CouncilRegistry::new(vec![member]).unwrap()),
            params(),
        );
        let presenter = RecordingPresenter::default();
        let input = ScriptedInput::empty();
        let ports = SessionPorts {
            presenter: &presenter,
            progress: &NoProgress,
            input: &input,
        };

        uc.execute(RunCouncilInput::new(SessionMode::Teach, topic("t")), &ports)
            .await
            .unwrap();

        assert_eq!(gateway.calls()[0].system_prompt, "Be terse.");
    }

    #[tokio::test]
    async fn test_whole_council_mode_without_topic_is_rejected() {
        let (gateway, uc) = use_case(ScriptedGateway::new(), &[("a", "A")]);
        let presenter = RecordingPresenter::default();
        let input = ScriptedInput::empty();
        let ports = SessionPorts {
            presenter: &presenter,
            progress: &NoProgress,
            input: &input,
        };
        let input = RunCouncilInput {
            mode: SessionMode::Debate,
            topic: None,
            context: ConversationContext::new(),
        };

        let result = uc.execute(input, &ports).await;
        assert!(matches!(
            result,
            Err(RunCouncilError::MissingTopic(SessionMode::Debate))
        ));
        assert!(gateway.calls().is_empty());
    }
}
