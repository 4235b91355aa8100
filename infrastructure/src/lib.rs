//! Infrastructure layer for local-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod lmstudio;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSource, ConfigValidationError, FileConfig, FileCouncilConfig,
    FileMemberConfig, FileOutputConfig,
};
pub use lmstudio::{
    DEFAULT_BASE_URL,
    error::{LmStudioError, Result},
    gateway::{DEFAULT_HEALTH_TIMEOUT, LmStudioGateway},
    session::LmStudioSession,
};
pub use logging::JsonlConversationLogger;
