//! Application layer for local-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{GenerationParams, GenerationPreset, SessionParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    presenter::{NoPresenter, TurnPresenter},
    progress::{NoProgress, ProgressNotifier},
    user_input::{InputError, UserInput},
};
pub use use_cases::check_connection::{
    CheckConnectionError, CheckConnectionUseCase, ConnectionReport,
};
pub use use_cases::continue_session::{ContinueSessionUseCase, FollowUpInput, FollowUpState};
pub use use_cases::run_council::{
    RunCouncilError, RunCouncilInput, RunCouncilUseCase, SessionPorts,
};
