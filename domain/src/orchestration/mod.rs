//! Council orchestration domain
//!
//! The vocabulary shared by the conversation protocols: which mode a
//! session runs, which phase a turn belongs to, and the session itself.

pub mod mode;
pub mod phase;
pub mod session;
