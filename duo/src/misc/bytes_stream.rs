use crate::misc::{StreamReader, StreamWriter};

/// In-memory stream. Reads consume the bytes given at construction while writes are collected
/// separately, which makes request/response exchanges easy to inspect.
#[derive(Debug, Default)]
pub struct BytesStream {
  idx: usize,
  input: Vec<u8>,
  output: Vec<u8>,
}

impl BytesStream {
  /// Everything written so far.
  #[inline]
  pub fn output(&self) -> &[u8] {
    &self.output
  }

  /// Number of input bytes that weren't read yet.
  #[inline]
  pub fn remaining(&self) -> usize {
    self.input.len().saturating_sub(self.idx)
  }
}

impl From<Vec<u8>> for BytesStream {
  #[inline]
  fn from(from: Vec<u8>) -> Self {
    Self { idx: 0, input: from, output: Vec::new() }
  }
}

impl StreamReader for BytesStream {
  #[inline]
  async fn read(&mut self, bytes: &mut [u8]) -> crate::Result<usize> {
    let working_buffer = self.input.get(self.idx..).unwrap_or_default();
    let len = working_buffer.len().min(bytes.len());
    if let (Some(to), Some(from)) = (bytes.get_mut(..len), working_buffer.get(..len)) {
      to.copy_from_slice(from);
    }
    self.idx = self.idx.wrapping_add(len);
    Ok(len)
  }
}

impl StreamWriter for BytesStream {
  #[inline]
  async fn write_all(&mut self, bytes: &[u8]) -> crate::Result<()> {
    self.output.extend_from_slice(bytes);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use crate::misc::{BytesStream, StreamReader, StreamWriter};

  #[tokio::test]
  async fn reads_are_bounded_by_the_destination() {
    let mut stream = BytesStream::from(vec![1, 2, 3, 4, 5]);
    let mut buffer = [0; 2];
    assert_eq!(stream.read(&mut buffer).await.unwrap(), 2);
    assert_eq!(buffer, [1, 2]);
    assert_eq!(stream.remaining(), 3);
    let mut buffer = [0; 8];
    assert_eq!(stream.read(&mut buffer).await.unwrap(), 3);
    assert_eq!(buffer[..3], [3, 4, 5]);
    assert_eq!(stream.read(&mut buffer).await.unwrap(), 0);
  }

  #[tokio::test]
  async fn writes_are_kept_apart_from_reads() {
    let mut stream = BytesStream::from(vec![9]);
    stream.write_all(b"ab").await.unwrap();
    stream.write_all(b"c").await.unwrap();
    assert_eq!(stream.output(), b"abc");
    assert_eq!(stream.remaining(), 1);
  }
}
