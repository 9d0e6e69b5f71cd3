use super::RopResult;

impl<T, E> From<Result<T, E>> for RopResult<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Err(error) => Self::Failure(error),
      Ok(value) => Self::Success(value),
    }
  }
}

impl<T, E> From<RopResult<T, E>> for Result<T, E> {
  #[inline]
  fn from(result: RopResult<T, E>) -> Self { result.fold(Err, Ok) }
}
