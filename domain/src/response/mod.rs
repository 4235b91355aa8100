//! Model response handling.
//!
//! - [`sanitizer::ResponseSanitizer`]: strips the reasoning block from raw output

pub mod sanitizer;
