pub mod command_runner;
pub mod system_interpreter;

pub use command_runner::CommandProcessRunner;
pub use system_interpreter::{INTERPRETER_CANDIDATES, SystemInterpreterLocator};
