//! Continue Session use case
//!
//! After a mode finishes, the user may keep asking follow-up topics. Each
//! follow-up re-runs the same mode on a clone of the accumulated context and
//! becomes the new current session. The loop ends on an exit keyword or when
//! input ends.

use crate::config::SessionParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::run_council::{RunCouncilInput, RunCouncilUseCase, SessionPorts};
use council_domain::{Session, Topic};
use tracing::{debug, info, warn};

/// States of the follow-up loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpState {
    AwaitingFollowUp,
    Exited,
}

/// Classified follow-up line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUpInput {
    Exit,
    Empty,
    Topic(Topic),
}

/// Use case for the follow-up loop
pub struct ContinueSessionUseCase<G: LlmGateway + 'static> {
    run: RunCouncilUseCase<G>,
}

impl<G: LlmGateway + 'static> ContinueSessionUseCase<G> {
    pub fn new(run: RunCouncilUseCase<G>) -> Self {
        Self { run }
    }

    fn params(&self) -> &SessionParams {
        self.run.params()
    }

    /// Classify one line read at the follow-up prompt (`None` = input ended)
    pub fn classify(&self, line: Option<&str>) -> FollowUpInput {
        match line {
            None => FollowUpInput::Exit,
            Some(l) if self.params().is_exit_keyword(l) => FollowUpInput::Exit,
            Some(l) => match Topic::try_new(l) {
                Some(topic) => FollowUpInput::Topic(topic),
                None => FollowUpInput::Empty,
            },
        }
    }

    /// Drive the loop until the user leaves; returns the last session
    pub async fn run(&self, session: Session, ports: &SessionPorts<'_>) -> Session {
        let mut current = session;
        let mut state = FollowUpState::AwaitingFollowUp;
        let prompt = format!("Follow-up (or '{}'): ", self.params().primary_exit_keyword());

        while state == FollowUpState::AwaitingFollowUp {
            ports.presenter.show_current_topic(current.topic());

            let line = match ports.input.read_line(&prompt) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Input failed in follow-up loop: {}", e);
                    None
                }
            };

            state = match self.classify(line.as_deref()) {
                FollowUpInput::Exit => FollowUpState::Exited,
                FollowUpInput::Empty => FollowUpState::AwaitingFollowUp,
                FollowUpInput::Topic(topic) => {
                    current = self.follow_up(current, topic, ports).await;
                    FollowUpState::AwaitingFollowUp
                }
            };
        }

        debug!("Follow-up loop exited after {} turns", current.context().len());
        current
    }

    async fn follow_up(&self, current: Session, topic: Topic, ports: &SessionPorts<'_>) -> Session {
        info!("Follow-up in {} mode", current.mode());
        let input =
            RunCouncilInput::new(current.mode(), topic).with_context(current.context().clone());

        match self.run.execute(input, ports).await {
            Ok(Some(next)) => next,
            Ok(None) => current,
            Err(e) => {
                warn!("Follow-up failed: {}", e);
                ports.presenter.notice(&e.to_string());
                current
            }
        }
    }
}
