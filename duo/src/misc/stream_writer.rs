use core::future::Future;

/// A stream of values written asynchronously.
pub trait StreamWriter {
  /// Attempts to write ***all*** `bytes`.
  fn write_all(&mut self, bytes: &[u8]) -> impl Future<Output = crate::Result<()>>;
}

impl<T> StreamWriter for &mut T
where
  T: StreamWriter,
{
  #[inline]
  async fn write_all(&mut self, bytes: &[u8]) -> crate::Result<()> {
    (**self).write_all(bytes).await
  }
}
