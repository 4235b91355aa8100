//! Ask-One mode: a single member chosen by the user answers

use super::{RunCouncilError, RunCouncilUseCase, SessionPorts};
use crate::ports::llm_gateway::LlmGateway;
use council_domain::{
    ConversationContext, CouncilMember, Phase, PromptTemplate, Session, SessionMode, Topic,
};
use tracing::{debug, info, warn};

impl<G: LlmGateway + 'static> RunCouncilUseCase<G> {
    /// Show the member list and resolve the user's pick.
    ///
    /// `None` for an invalid pick or ended input.
    pub(super) fn pick_member(&self, ports: &SessionPorts<'_>) -> Option<CouncilMember> {
        ports.presenter.present_member_choice(self.registry.members());
        let prompt = format!("Choice (1-{}): ", self.registry.len());

        let choice = match ports.input.read_line(&prompt) {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(e) => {
                warn!("Input failed during member pick: {}", e);
                return None;
            }
        };

        match self.registry.select(&choice) {
            Ok(member) => Some(member.clone()),
            Err(e) => {
                debug!("Ask-One abandoned: {}", e);
                None
            }
        }
    }

    /// Ask-One without a topic: pick the member, then ask for the question
    pub(super) async fn ask_one_interactive(
        &self,
        mut context: ConversationContext,
        ports: &SessionPorts<'_>,
    ) -> Result<Option<Session>, RunCouncilError> {
        let Some(member) = self.pick_member(ports) else {
            return Ok(None);
        };

        let question = match ports
            .input
            .read_line(&format!("Ask {}: ", member.display_name()))
        {
            Ok(line) => line.and_then(Topic::try_new),
            Err(e) => {
                warn!("Input failed while reading question: {}", e);
                None
            }
        };
        let Some(topic) = question else {
            debug!("Ask-One abandoned: empty question");
            return Ok(None);
        };

        self.start_session(SessionMode::AskOne, &topic, &context, ports);
        self.run_ask_one(&member, &topic, &mut context, ports).await;
        Ok(Some(self.finish_session(SessionMode::AskOne, topic, context)))
    }

    pub(super) async fn run_ask_one(
        &self,
        member: &CouncilMember,
        topic: &Topic,
        context: &mut ConversationContext,
        ports: &SessionPorts<'_>,
    ) {
        info!("Ask-One: {}", member.display_name());
        ports.progress.on_phase_start(&Phase::Initial, 1);

        let prompt = PromptTemplate::member_prompt(topic.content(), &self.grounding(context));
        self.respond(member, Phase::Initial, topic, &prompt, context, ports)
            .await;

        ports.progress.on_phase_complete(&Phase::Initial);
    }
}
