mod fake_interpreter;
mod recording_runner;

pub use fake_interpreter::FakeInterpreterLocator;
pub use recording_runner::RecordingProcessRunner;
