// file: src/shell/mod.rs
// description: interactive front-end over stdin
// reference: internal module structure

pub mod command;
pub mod session;

pub use command::ShellCommand;
pub use session::Session;
