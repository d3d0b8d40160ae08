use core::future::Future;

/// A stream of values sent asynchronously.
pub trait StreamReader {
  /// Pulls some bytes from this source into the specified buffer, returning how many bytes
  /// were read. Zero means that the counterpart closed the stream.
  fn read(&mut self, bytes: &mut [u8]) -> impl Future<Output = crate::Result<usize>>;
}

impl<T> StreamReader for &mut T
where
  T: StreamReader,
{
  #[inline]
  async fn read(&mut self, bytes: &mut [u8]) -> crate::Result<usize> {
    (**self).read(bytes).await
  }
}
