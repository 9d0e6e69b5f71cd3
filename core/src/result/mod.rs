use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use error::{BoxError, ResultError};

use guard::guard;

mod convert;
mod error;
mod guard;

/// Success/failure value that is either [`Failure`](Self::Failure) or [`Success`](Self::Success).
///
/// Combinators that chain into caller-supplied logic producing a `RopResult` are guarded: a panic raised by the
/// closure becomes a [`Failure`](Self::Failure) holding a [`ResultError`], converted with `E: From<ResultError>`.
/// These are [`and_then`](Self::and_then), [`or_else`](Self::or_else), [`and_then_or_else`](Self::and_then_or_else),
/// [`zip`](Self::zip), the failure branch of [`map_or_else`](Self::map_or_else), and the [`tee`] constructor.
/// [`map`](Self::map) is not guarded; a panic in its closure propagates to the caller.
///
/// Equality and hashing ignore the error: any two failures are equal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
#[must_use]
pub enum RopResult<T, E = BoxError> {
  Failure(E),
  Success(T),
}


/// Creates a [`Failure`](RopResult::Failure) holding `error`.
#[inline]
pub fn failure<T, E>(error: E) -> RopResult<T, E> { RopResult::Failure(error) }

/// Creates a [`Success`](RopResult::Success) holding the value returned by `f`. `f` is evaluated eagerly and is not
/// guarded.
#[inline]
pub fn success<T, E>(f: impl FnOnce() -> T) -> RopResult<T, E> { RopResult::Success(f()) }

/// Evaluates `f` eagerly, returning a [`Success`](RopResult::Success) with its value, or a
/// [`Failure`](RopResult::Failure) if it panics.
#[inline]
pub fn tee<T, E: From<ResultError>>(f: impl FnOnce() -> T) -> RopResult<T, E> {
  guard(|| RopResult::Success(f()))
}

/// Evaluates `f` eagerly, mapping `Ok` to [`Success`](RopResult::Success) and `Err` to
/// [`Failure`](RopResult::Failure). A panic also becomes a failure.
#[inline]
pub fn tee_result<T, E: From<ResultError>>(f: impl FnOnce() -> Result<T, E>) -> RopResult<T, E> {
  guard(|| f().into())
}


impl<T, E> RopResult<T, E> {
  #[inline]
  pub const fn is_failure(&self) -> bool { matches!(self, Self::Failure(_)) }
  #[inline]
  pub const fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }

  #[inline]
  pub const fn as_ref(&self) -> RopResult<&T, &E> {
    match self {
      Self::Failure(error) => RopResult::Failure(error),
      Self::Success(value) => RopResult::Success(value),
    }
  }


  /// Returns the success value, or the value `f` computes from the error.
  #[inline]
  pub fn get_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self {
      Self::Failure(error) => f(error),
      Self::Success(value) => value,
    }
  }

  #[inline]
  pub fn get_or_null(self) -> Option<T> {
    match self {
      Self::Failure(_) => None,
      Self::Success(value) => Some(value),
    }
  }

  /// Returns the success value, or [`ResultError::Failure`] with the stored error as its source.
  pub fn get_or_throw(self) -> Result<T, ResultError> where
    E: Into<BoxError>
  {
    match self {
      Self::Failure(error) => {
        let cause = error.into();
        #[cfg(feature = "tracing")]
        tracing::trace!(%cause, "get_or_throw on failure");
        Err(ResultError::Failure { cause })
      }
      Self::Success(value) => Ok(value),
    }
  }


  /// Keeps the success value only if `predicate` holds for it, otherwise fails with
  /// [`ResultError::FilterMismatch`].
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self where
    E: From<ResultError>
  {
    match self {
      failed @ Self::Failure(_) => failed,
      Self::Success(value) => if predicate(&value) {
        Self::Success(value)
      } else {
        #[cfg(feature = "tracing")]
        tracing::trace!("success value does not match filter");
        Self::Failure(E::from(ResultError::FilterMismatch))
      },
    }
  }

  /// Maps the success value with `f`. Not guarded: use [`and_then`](Self::and_then) with [`tee`] when `f` can
  /// panic.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RopResult<U, E> {
    match self {
      Self::Failure(error) => RopResult::Failure(error),
      Self::Success(value) => RopResult::Success(f(value)),
    }
  }

  /// Maps the success value with `f`, or recovers a success value from the error with `or`. Only `or` is guarded.
  pub fn map_or_else<U>(self, f: impl FnOnce(T) -> U, or: impl FnOnce(E) -> U) -> RopResult<U, E> where
    E: From<ResultError>
  {
    match self {
      Self::Failure(error) => tee(|| or(error)),
      Self::Success(value) => RopResult::Success(f(value)),
    }
  }

  /// Chains into `f` on success. `f` may return a failure, and a panic in `f` becomes one.
  pub fn and_then<U>(self, f: impl FnOnce(T) -> RopResult<U, E>) -> RopResult<U, E> where
    E: From<ResultError>
  {
    match self {
      Self::Failure(error) => RopResult::Failure(error),
      Self::Success(value) => guard(|| f(value)),
    }
  }

  /// Chains into `f` on failure. `f` may recover into a success; a panic in `f` becomes a new failure.
  pub fn or_else(self, f: impl FnOnce(E) -> Self) -> Self where
    E: From<ResultError>
  {
    match self {
      Self::Failure(error) => guard(|| f(error)),
      succeeded @ Self::Success(_) => succeeded,
    }
  }

  /// Chains into `f` on success or into `or` on failure. Both are guarded.
  pub fn and_then_or_else<U>(
    self,
    f: impl FnOnce(T) -> RopResult<U, E>,
    or: impl FnOnce(E) -> RopResult<U, E>,
  ) -> RopResult<U, E> where
    E: From<ResultError>
  {
    match self {
      Self::Failure(error) => guard(|| or(error)),
      Self::Success(value) => guard(|| f(value)),
    }
  }

  /// Pairs the success value with the success value of `f`, which receives a reference to it. The first failure
  /// wins: `f` is not invoked on failure, and a failure or panic from `f` is returned as is.
  pub fn zip<U>(self, f: impl FnOnce(&T) -> RopResult<U, E>) -> RopResult<(T, U), E> where
    E: From<ResultError>
  {
    match self {
      Self::Failure(error) => RopResult::Failure(error),
      Self::Success(value) => match guard(|| f(&value)) {
        RopResult::Failure(error) => RopResult::Failure(error),
        RopResult::Success(other) => RopResult::Success((value, other)),
      },
    }
  }


  /// Runs `on_failure` or `on_success` depending on the variant. Not guarded.
  #[inline]
  pub fn match_with(self, on_failure: impl FnOnce(E), on_success: impl FnOnce(T)) {
    match self {
      Self::Failure(error) => on_failure(error),
      Self::Success(value) => on_success(value),
    }
  }

  /// Runs `on_success` on success; does nothing on failure.
  #[inline]
  pub fn if_success(self, on_success: impl FnOnce(T)) {
    self.match_with(|_| {}, on_success)
  }

  /// Reduces to a single value with `on_failure` or `on_success` depending on the variant. Not guarded.
  #[inline]
  pub fn fold<R>(self, on_failure: impl FnOnce(E) -> R, on_success: impl FnOnce(T) -> R) -> R {
    match self {
      Self::Failure(error) => on_failure(error),
      Self::Success(value) => on_success(value),
    }
  }
}

impl<T, E> RopResult<RopResult<T, E>, E> {
  /// Removes one level of nesting. An outer failure is returned unchanged.
  #[inline]
  pub fn flatten(self) -> RopResult<T, E> {
    match self {
      Self::Failure(error) => RopResult::Failure(error),
      Self::Success(inner) => inner,
    }
  }
}


impl<T: PartialEq, E> PartialEq for RopResult<T, E> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Failure(_), Self::Failure(_)) => true,
      (Self::Success(value), Self::Success(other)) => value == other,
      (Self::Failure(_), Self::Success(_)) | (Self::Success(_), Self::Failure(_)) => false,
    }
  }
}
impl<T: Eq, E> Eq for RopResult<T, E> {}

impl<T: Hash, E> Hash for RopResult<T, E> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    mem::discriminant(self).hash(state);
    match self {
      Self::Failure(_) => {}
      Self::Success(value) => value.hash(state),
    }
  }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for RopResult<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Failure(error) => write!(f, "Failure({})", error),
      Self::Success(value) => write!(f, "Success({})", value),
    }
  }
}
