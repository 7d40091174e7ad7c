pub mod commands;
pub mod process_command;

pub use commands::Cli;
pub use process_command::process_cli;
