//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`SessionParams`]: orchestration knobs (context window, pacing, exit keywords, conclusion)
//! - [`GenerationParams`]: per-request knobs sent to the inference endpoint

pub mod generation_params;
pub mod session_params;

pub use generation_params::{GenerationParams, GenerationPreset};
pub use session_params::SessionParams;
