use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use error::OptionError;

mod convert;
mod error;

/// Optional value that is either [`Absent`](Self::Absent) or [`Present`](Self::Present).
///
/// Combinators consume `self`; use [`as_ref`](Self::as_ref) to chain on a borrow. None of the combinators catch
/// panics raised by the closures passed to them. Use [`RopResult`](crate::RopResult) when those closures can fail.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub enum RopOption<T> {
  #[default]
  Absent,
  Present(T),
}


/// Creates an [`Absent`](RopOption::Absent) option.
#[inline]
pub fn none<T>() -> RopOption<T> { RopOption::Absent }

/// Creates a [`Present`](RopOption::Present) option holding the value returned by `f`. `f` is evaluated eagerly.
#[inline]
pub fn some<T>(f: impl FnOnce() -> T) -> RopOption<T> { RopOption::Present(f()) }

/// Creates an option from `f`, which returns `None` when there is no value.
#[inline]
pub fn from_nullable<T>(f: impl FnOnce() -> Option<T>) -> RopOption<T> {
  match f() {
    None => none(),
    Some(value) => RopOption::Present(value),
  }
}


impl<T> RopOption<T> {
  #[inline]
  pub const fn is_absent(&self) -> bool { matches!(self, Self::Absent) }
  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }

  #[inline]
  pub const fn as_ref(&self) -> RopOption<&T> {
    match self {
      Self::Absent => RopOption::Absent,
      Self::Present(value) => RopOption::Present(value),
    }
  }


  /// Returns the present value, or the value returned by `f` if absent.
  #[inline]
  pub fn get_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Self::Absent => f(),
      Self::Present(value) => value,
    }
  }

  #[inline]
  pub fn get_or_null(self) -> Option<T> {
    match self {
      Self::Absent => None,
      Self::Present(value) => Some(value),
    }
  }

  /// Returns the present value, or [`OptionError`] if absent.
  #[inline]
  pub fn get_or_throw(self) -> Result<T, OptionError> {
    match self {
      Self::Absent => {
        #[cfg(feature = "tracing")]
        tracing::trace!("get_or_throw on absent option");
        Err(OptionError)
      }
      Self::Present(value) => Ok(value),
    }
  }


  /// Keeps the present value only if `predicate` holds for it.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Absent => Self::Absent,
      Self::Present(value) => if predicate(&value) {
        Self::Present(value)
      } else {
        Self::Absent
      },
    }
  }

  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RopOption<U> {
    match self {
      Self::Absent => RopOption::Absent,
      Self::Present(value) => RopOption::Present(f(value)),
    }
  }

  /// Maps the present value with `f`, or creates a present value with `or` if absent. Always returns
  /// [`Present`](Self::Present).
  #[inline]
  pub fn map_or_else<U>(self, f: impl FnOnce(T) -> U, or: impl FnOnce() -> U) -> RopOption<U> {
    match self {
      Self::Absent => RopOption::Present(or()),
      Self::Present(value) => RopOption::Present(f(value)),
    }
  }

  /// Chains into `f` if present. `f` may return [`Absent`](Self::Absent).
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> RopOption<U>) -> RopOption<U> {
    match self {
      Self::Absent => RopOption::Absent,
      Self::Present(value) => f(value),
    }
  }

  /// Chains into `f` if absent. `f` may return [`Present`](Self::Present).
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      Self::Absent => f(),
      present @ Self::Present(_) => present,
    }
  }

  #[inline]
  pub fn and_then_or_else<U>(self, f: impl FnOnce(T) -> RopOption<U>, or: impl FnOnce() -> RopOption<U>) -> RopOption<U> {
    match self {
      Self::Absent => or(),
      Self::Present(value) => f(value),
    }
  }

  /// Returns whichever of `self` and `f()` is present if exactly one of them is, otherwise
  /// [`Absent`](Self::Absent). `f` is always evaluated, exactly once.
  #[inline]
  pub fn xor(self, f: impl FnOnce() -> Self) -> Self {
    match (self, f()) {
      (Self::Absent, Self::Absent) => Self::Absent,
      (Self::Absent, other @ Self::Present(_)) => other,
      (present @ Self::Present(_), Self::Absent) => present,
      (Self::Present(_), Self::Present(_)) => Self::Absent,
    }
  }

  /// Pairs the present value with the value of `f()` if both are present. `f` is always evaluated, exactly once.
  #[inline]
  pub fn zip<U>(self, f: impl FnOnce() -> RopOption<U>) -> RopOption<(T, U)> {
    match (self, f()) {
      (Self::Present(value), RopOption::Present(other)) => RopOption::Present((value, other)),
      (Self::Present(_), RopOption::Absent) => RopOption::Absent,
      (Self::Absent, RopOption::Present(_)) => RopOption::Absent,
      (Self::Absent, RopOption::Absent) => RopOption::Absent,
    }
  }


  /// Runs `on_absent` or `on_present` depending on the variant.
  #[inline]
  pub fn match_with(self, on_absent: impl FnOnce(), on_present: impl FnOnce(T)) {
    match self {
      Self::Absent => on_absent(),
      Self::Present(value) => on_present(value),
    }
  }

  /// Runs `on_present` if present; does nothing if absent.
  #[inline]
  pub fn if_present(self, on_present: impl FnOnce(T)) {
    self.match_with(|| {}, on_present)
  }

  /// Reduces to a single value with `on_absent` or `on_present` depending on the variant.
  #[inline]
  pub fn fold<R>(self, on_absent: impl FnOnce() -> R, on_present: impl FnOnce(T) -> R) -> R {
    match self {
      Self::Absent => on_absent(),
      Self::Present(value) => on_present(value),
    }
  }
}

impl<T> RopOption<RopOption<T>> {
  /// Removes one level of nesting.
  #[inline]
  pub fn flatten(self) -> RopOption<T> {
    match self {
      Self::Absent => RopOption::Absent,
      Self::Present(inner) => inner,
    }
  }
}

impl<T: fmt::Display> fmt::Display for RopOption<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Absent => f.write_str("Absent"),
      Self::Present(value) => write!(f, "Present({})", value),
    }
  }
}
