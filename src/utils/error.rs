use std::fmt;

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  ConfigError(String),
  DomError(String),
  TimerError(String),
  ListenerError(String),
  ObserverError(String),
  WasmError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
      AppError::DomError(msg) => write!(f, "DOM error: {}", msg),
      AppError::TimerError(msg) => write!(f, "Timer error: {}", msg),
      AppError::ListenerError(msg) => write!(f, "Event listener error: {}", msg),
      AppError::ObserverError(msg) => write!(f, "Intersection observer error: {}", msg),
      AppError::WasmError(msg) => write!(f, "Wasm error: {}", msg),
    }
  }
}
