use thiserror::Error;

/// Returned by [`get_or_throw`](super::RopOption::get_or_throw) on an [`Absent`](super::RopOption::Absent) option.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("Value does not exist")]
pub struct OptionError;
