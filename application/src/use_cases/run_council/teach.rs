//! Teach mode: every member answers once, each grounded in all prior turns

use super::{RunCouncilUseCase, SessionPorts};
use crate::ports::llm_gateway::LlmGateway;
use council_domain::{ConversationContext, Phase, PromptTemplate, Topic};
use tracing::info;

impl<G: LlmGateway + 'static> RunCouncilUseCase<G> {
    pub(super) async fn run_teach(
        &self,
        topic: &Topic,
        context: &mut ConversationContext,
        ports: &SessionPorts<'_>,
    ) {
        let registry = self.registry.clone();
        info!("Teach: {} members", registry.len());
        ports.progress.on_phase_start(&Phase::Initial, registry.len());

        for member in registry.members() {
            let prompt = PromptTemplate::member_prompt(topic.content(), &self.grounding(context));
            self.respond(member, Phase::Initial, topic, &prompt, context, ports)
                .await;
        }

        ports.progress.on_phase_complete(&Phase::Initial);
    }
}
