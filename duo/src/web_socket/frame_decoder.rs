use crate::web_socket::{Message, ReadFrameInfo, WebSocketError};

/// Decodes a buffer that is expected to contain exactly one whole client frame.
///
/// Bytes after the declared payload are ignored. A buffer that ends before the header or the
/// payload does is a protocol violation.
#[inline]
pub fn decode(bytes: &[u8], max_payload_len: usize) -> crate::Result<Message> {
  let Some(rfi) = ReadFrameInfo::from_bytes(bytes, max_payload_len)? else {
    return Err(WebSocketError::InvalidFrameHeaderBounds.into());
  };
  let Some(payload) = bytes.get(rfi.header_len.into()..rfi.frame_len()) else {
    return Err(WebSocketError::InvalidPayloadBounds.into());
  };
  let payload = payload.to_vec();
  rfi.into_message(payload)
}

/// Reassembles client frames that arrive split across, or packed into, arbitrary reads.
#[derive(Debug)]
pub struct FrameDecoder {
  buffer: Vec<u8>,
  max_payload_len: usize,
}

impl FrameDecoder {
  /// Frames declaring more than `max_payload_len` bytes are rejected before their payload is
  /// buffered.
  #[inline]
  pub fn new(max_payload_len: usize) -> Self {
    Self { buffer: Vec::new(), max_payload_len }
  }

  /// Number of bytes that still don't form a whole frame.
  #[inline]
  pub fn buffered(&self) -> usize {
    self.buffer.len()
  }

  /// Appends freshly read bytes.
  #[inline]
  pub fn extend(&mut self, bytes: &[u8]) {
    self.buffer.extend_from_slice(bytes);
  }

  /// Removes and decodes the first whole frame. `Ok(None)` means more bytes are needed.
  #[inline]
  pub fn next_message(&mut self) -> crate::Result<Option<Message>> {
    let Some(rfi) = ReadFrameInfo::from_bytes(&self.buffer, self.max_payload_len)? else {
      return Ok(None);
    };
    let frame_len = rfi.frame_len();
    if self.buffer.len() < frame_len {
      return Ok(None);
    }
    let payload = self.buffer.drain(..frame_len).skip(rfi.header_len.into()).collect();
    _trace!(op_code = ?rfi.op_code, payload_len = rfi.payload_len, "Decoded frame");
    rfi.into_message(payload).map(Some)
  }
}

impl Default for FrameDecoder {
  #[inline]
  fn default() -> Self {
    Self::new(crate::_MAX_PAYLOAD_LEN)
  }
}
