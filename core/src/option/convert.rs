use super::{from_nullable, RopOption};

impl<T> From<Option<T>> for RopOption<T> {
  #[inline]
  fn from(option: Option<T>) -> Self { from_nullable(|| option) }
}

impl<T> From<RopOption<T>> for Option<T> {
  #[inline]
  fn from(option: RopOption<T>) -> Self { option.fold(|| None, Some) }
}
