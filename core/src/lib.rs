//! Railway-oriented optional and success/failure value types.
//!
//! [`RopOption`] is either [`Absent`](RopOption::Absent) or [`Present`](RopOption::Present), and [`RopResult`] is
//! either [`Failure`](RopResult::Failure) or [`Success`](RopResult::Success). Both come with the same combinator
//! vocabulary, so a pipeline of steps short-circuits on the first empty or failed step:
//!
//! ```
//! use rop_core::option::some;
//! use rop_core::result::{success, tee, RopResult};
//!
//! let doubled = some(|| 5).filter(|x| *x > 3).map(|x| x * 2);
//! assert_eq!(doubled.get_or_throw(), Ok(10));
//!
//! fn divide(a: i32, b: i32) -> i32 { a / b }
//! let divided: RopResult<i32> = success(|| 2).and_then(|x| tee(|| divide(10, x - 2)));
//! assert!(divided.is_failure());
//! ```
//!
//! `RopResult` combinators that chain into caller-supplied logic are *guarded*: a panic inside the closure is caught
//! and stored as a [`ResultError`] failure. `RopResult::map` and every `RopOption` combinator are not guarded.

pub mod option;
pub mod result;

pub use option::{OptionError, RopOption};
pub use result::{BoxError, ResultError, RopResult};
