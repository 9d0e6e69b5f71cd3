use std::panic::{self, AssertUnwindSafe};

use super::{ResultError, RopResult};

/// Runs `f`, turning a panic into a [`Failure`](RopResult::Failure) holding [`ResultError::Panic`] or
/// [`ResultError::PanicNoMessage`].
pub(crate) fn guard<T, E: From<ResultError>>(f: impl FnOnce() -> RopResult<T, E>) -> RopResult<T, E> {
  match panic::catch_unwind(AssertUnwindSafe(f)) {
    Ok(result) => result,
    Err(payload) => {
      let error = ResultError::from_panic(payload);
      #[cfg(feature = "tracing")]
      tracing::debug!(%error, "guarded computation panicked; converting into failure");
      RopResult::Failure(E::from(error))
    }
  }
}
