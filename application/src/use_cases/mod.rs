//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod check_connection;
pub mod continue_session;
pub mod run_council;

#[cfg(test)]
pub(crate) mod test_support;
