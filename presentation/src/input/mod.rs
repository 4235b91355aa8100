//! Terminal line input

mod line_editor;

pub use line_editor::ReedlineInput;
