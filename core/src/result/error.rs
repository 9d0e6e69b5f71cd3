use std::any::Any;

use thiserror::Error;

/// Boxed thread-safe error, the default error type of [`RopResult`](super::RopResult).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by [`RopResult`](super::RopResult) itself, as opposed to caller errors it carries.
#[derive(Debug, Error)]
pub enum ResultError {
  #[error("Value does not exist; failed with: {cause}")]
  Failure {
    #[source]
    cause: BoxError,
  },
  #[error("Does not match filter")]
  FilterMismatch,
  #[error("Guarded computation panicked: {0}")]
  Panic(String),
  #[error("Guarded computation panicked, but the panic does not contain a message")]
  PanicNoMessage,
}

impl ResultError {
  /// Creates an error from a panic `payload` caught by [`catch_unwind`](std::panic::catch_unwind).
  pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
    match payload.downcast::<String>() {
      Ok(message) => Self::Panic(*message),
      Err(payload) => match payload.downcast::<&'static str>() {
        Ok(message) => Self::Panic(message.to_string()),
        Err(_) => Self::PanicNoMessage,
      },
    }
  }
}
