mod interpreter_locator;
mod process_runner;

pub use interpreter_locator::InterpreterLocator;
pub use process_runner::ProcessRunner;
