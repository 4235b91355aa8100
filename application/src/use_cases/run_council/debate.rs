//! Debate mode
//!
//! 1. Initial responses: every member answers, grounded in everything said so far
//! 2. Cross-examination: every member reviews a snapshot of the log taken
//!    at the end of phase 1
//! 3. Conclusion: the synthesizer summarizes the whole log (optional)

use super::{RunCouncilUseCase, SessionPorts};
use crate::ports::llm_gateway::LlmGateway;
use council_domain::{ConversationContext, Phase, PromptTemplate, Topic};
use tracing::{debug, info};

impl<G: LlmGateway + 'static> RunCouncilUseCase<G> {
    pub(super) async fn run_debate(
        &self,
        topic: &Topic,
        context: &mut ConversationContext,
        ports: &SessionPorts<'_>,
    ) {
        let phase_start = context.len();
        self.debate_initial(topic, context, ports).await;
        let initial_turns = context.len() - phase_start;
        self.debate_review(topic, initial_turns, context, ports).await;

        if self.params.debate_conclusion {
            self.debate_conclusion(topic, context, ports).await;
        } else {
            debug!("Skipping conclusion");
        }
    }

    async fn debate_initial(
        &self,
        topic: &Topic,
        context: &mut ConversationContext,
        ports: &SessionPorts<'_>,
    ) {
        let registry = self.registry.clone();
        info!("Phase 1: Initial Responses");
        ports.presenter.announce_phase(Phase::Initial);
        ports.progress.on_phase_start(&Phase::Initial, registry.len());

        for member in registry.members() {
            let prompt = PromptTemplate::member_prompt(topic.content(), &self.grounding(context));
            self.respond(member, Phase::Initial, topic, &prompt, context, ports)
                .await;
            self.pause().await;
        }

        ports.progress.on_phase_complete(&Phase::Initial);
    }

    async fn debate_review(
        &self,
        topic: &Topic,
        initial_turns: usize,
        context: &mut ConversationContext,
        ports: &SessionPorts<'_>,
    ) {
        let registry = self.registry.clone();
        info!("Phase 2: Cross-Examination");
        ports.presenter.announce_phase(Phase::Review);
        ports.progress.on_phase_start(&Phase::Review, registry.len());

        // Reviews are appended as they arrive but never shown to siblings.
        // The window may hide older history, never a phase-1 answer.
        let window = self.params.window.at_least(initial_turns);
        let snapshot = context.render(&window).trim_end().to_string();
        let prompt = PromptTemplate::review_prompt(topic.content(), &snapshot);

        for member in registry.members() {
            self.respond(member, Phase::Review, topic, &prompt, context, ports)
                .await;
            self.pause().await;
        }

        ports.progress.on_phase_complete(&Phase::Review);
    }

    async fn debate_conclusion(
        &self,
        topic: &Topic,
        context: &mut ConversationContext,
        ports: &SessionPorts<'_>,
    ) {
        let registry = self.registry.clone();
        let synthesizer = registry.synthesizer();
        info!("Phase 3: Conclusion by {}", synthesizer.display_name());
        ports.presenter.announce_phase(Phase::Synthesis);
        ports.progress.on_phase_start(&Phase::Synthesis, 1);

        let prompt = PromptTemplate::conclusion_prompt(&self.grounding(context));
        self.respond(synthesizer, Phase::Synthesis, topic, &prompt, context, ports)
            .await;

        ports.progress.on_phase_complete(&Phase::Synthesis);
    }
}
