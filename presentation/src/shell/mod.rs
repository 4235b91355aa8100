//! Interactive menu loop

mod menu;
mod repl;

pub use menu::MenuChoice;
pub use repl::CouncilShell;
