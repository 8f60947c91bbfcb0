use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::InterpreterLocator;

/// Locator returning a fixed interpreter, or failing when none is set.
#[derive(Default)]
pub struct FakeInterpreterLocator {
    pub interpreter: Option<PathBuf>,
    pub calls: Mutex<usize>,
}

impl FakeInterpreterLocator {
    pub fn new(interpreter: &str) -> Self {
        Self { interpreter: Some(PathBuf::from(interpreter)), calls: Mutex::new(0) }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl InterpreterLocator for FakeInterpreterLocator {
    fn locate(&self) -> Result<PathBuf, AppError> {
        *self.calls.lock().unwrap() += 1;
        self.interpreter
            .clone()
            .ok_or_else(|| AppError::InterpreterNotFound { candidates: vec!["python3".into()] })
    }
}
