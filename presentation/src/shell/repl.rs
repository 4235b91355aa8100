//! Menu-driven session loop

use super::menu::MenuChoice;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use council_application::{
    CheckConnectionUseCase, ContinueSessionUseCase, LlmGateway, ProgressNotifier,
    RunCouncilInput, RunCouncilUseCase, SessionPorts, TurnPresenter, UserInput,
};
use council_domain::{SessionMode, Topic};
use std::sync::Arc;
use tracing::{debug, warn};

/// The interactive front end: menu, topic prompts and follow-up loops
pub struct CouncilShell<G: LlmGateway + 'static> {
    run: RunCouncilUseCase<G>,
    follow_up: ContinueSessionUseCase<G>,
    check: CheckConnectionUseCase<G>,
    presenter: Box<dyn TurnPresenter>,
    progress: Box<dyn ProgressNotifier>,
    input: Box<dyn UserInput>,
}

impl<G: LlmGateway + 'static> CouncilShell<G> {
    pub fn new(
        run: RunCouncilUseCase<G>,
        gateway: Arc<G>,
        presenter: Box<dyn TurnPresenter>,
        progress: Box<dyn ProgressNotifier>,
        input: Box<dyn UserInput>,
    ) -> Self {
        let check = CheckConnectionUseCase::new(gateway, Arc::new(run.registry().clone()));
        Self {
            follow_up: ContinueSessionUseCase::new(run.clone()),
            run,
            check,
            presenter,
            progress,
            input,
        }
    }

    fn ports(&self) -> SessionPorts<'_> {
        SessionPorts {
            presenter: self.presenter.as_ref(),
            progress: self.progress.as_ref(),
            input: self.input.as_ref(),
        }
    }

    pub fn print_welcome(&self) {
        let names = self
            .run
            .registry()
            .members()
            .iter()
            .map(|m| m.display_name())
            .collect::<Vec<_>>();
        println!();
        println!("{}", "--- Local Council ---".cyan().bold());
        println!("{} local models: {}", names.len(), names.join(", "));
        println!("Ask anything. Type a follow-up after each answer, or 'back' for the menu.");
    }

    /// Run the menu until the user exits or input ends
    pub async fn run(&self) {
        loop {
            print!("{}", MenuChoice::render());
            let line = match self.input.read_line("> ") {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Menu input failed: {}", e);
                    break;
                }
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Mode(mode)) => self.start_from_menu(mode).await,
                Some(MenuChoice::TestConnection) => {
                    self.test_connection().await;
                }
                Some(MenuChoice::Exit) => break,
                None => debug!("Ignoring menu input '{}'", line.trim()),
            }
        }
        println!("\nDone. Bye!");
    }

    async fn start_from_menu(&self, mode: SessionMode) {
        let input = match MenuChoice::topic_prompt(mode) {
            Some(prompt) => {
                let topic = match self.input.read_line(prompt) {
                    Ok(line) => line.and_then(Topic::try_new),
                    Err(e) => {
                        warn!("Topic input failed: {}", e);
                        None
                    }
                };
                match topic {
                    Some(topic) => RunCouncilInput::new(mode, topic),
                    None => return,
                }
            }
            None => RunCouncilInput::ask_one(),
        };
        self.run_session(input).await;
    }

    /// Run one mode, then its follow-up loop
    pub async fn run_session(&self, input: RunCouncilInput) {
        let ports = self.ports();
        match self.run.execute(input, &ports).await {
            Ok(Some(session)) => {
                self.follow_up.run(session, &ports).await;
            }
            Ok(None) => {}
            Err(e) => self.presenter.notice(&e.to_string()),
        }
    }

    /// Probe the server and print what it has loaded; returns whether it answered
    pub async fn test_connection(&self) -> bool {
        match self.check.execute().await {
            Ok(report) => {
                print!("{}", ConsoleFormatter::connection_report(&report));
                true
            }
            Err(e) => {
                println!("{} {}", "Cannot connect:".red().bold(), e);
                false
            }
        }
    }
}
