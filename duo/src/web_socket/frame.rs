use crate::web_socket::{
  unmask, OpCode, FIN_MASK, MASK_MASK, MAX_CONTROL_PAYLOAD_LEN, MAX_HEADER_LEN,
};

/// Encodes `text` into a single unmasked, final text frame. Server to client frames are never
/// masked.
#[inline]
pub fn encode_text(text: &str) -> Vec<u8> {
  Frame::new_fin(OpCode::Text, text.as_bytes()).to_bytes()
}

/// Unit of generic data used for communication.
#[derive(Debug)]
pub struct Frame<P> {
  header: [u8; MAX_HEADER_LEN],
  header_len: u8,
  op_code: OpCode,
  payload: P,
  payload_len: usize,
}

impl<P> Frame<P>
where
  P: AsRef<[u8]>,
{
  /// Creates a new instance that is considered final. Control payloads are truncated to 125
  /// bytes.
  #[inline]
  pub fn new_fin(op_code: OpCode, payload: P) -> Self {
    let mut header = [0; MAX_HEADER_LEN];
    let payload_len = if op_code.is_control() {
      payload.as_ref().len().min(MAX_CONTROL_PAYLOAD_LEN)
    } else {
      payload.as_ref().len()
    };
    let header_len = fill_header(&mut header, op_code, payload_len);
    Self { header, header_len, op_code, payload, payload_len }
  }

  /// Header bytes
  #[inline]
  pub fn header(&self) -> &[u8] {
    self.header.get(..self.header_len.into()).unwrap_or_default()
  }

  /// See [`OpCode`].
  #[inline]
  pub fn op_code(&self) -> OpCode {
    self.op_code
  }

  /// Frame's content.
  #[inline]
  pub fn payload(&self) -> &[u8] {
    self.payload.as_ref().get(..self.payload_len).unwrap_or_default()
  }

  /// Header followed by the payload, ready to be written into a stream.
  #[inline]
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(self.header().len().wrapping_add(self.payload_len));
    bytes.extend_from_slice(self.header());
    bytes.extend_from_slice(self.payload());
    bytes
  }

  /// Client flavour of [`Self::to_bytes`]: sets the mask bit, inserts `mask` after the length
  /// and masks the payload.
  #[inline]
  pub fn to_masked_bytes(&self, mask: [u8; 4]) -> Vec<u8> {
    let header = self.header();
    let mut bytes = Vec::with_capacity(header.len().wrapping_add(4).wrapping_add(self.payload_len));
    bytes.extend_from_slice(header);
    if let Some(elem) = bytes.get_mut(1) {
      *elem |= MASK_MASK;
    }
    bytes.extend_from_slice(&mask);
    let payload_begin = bytes.len();
    bytes.extend_from_slice(self.payload());
    unmask(bytes.get_mut(payload_begin..).unwrap_or_default(), mask);
    bytes
  }
}

fn fill_header(header: &mut [u8; MAX_HEADER_LEN], op_code: OpCode, payload_len: usize) -> u8 {
  let first = FIN_MASK | u8::from(op_code);
  match payload_len {
    0..=125 => {
      let [a, b, ..] = header;
      *a = first;
      *b = u8::try_from(payload_len).unwrap_or_default();
      2
    }
    126..=0xFFFF => {
      let [len_c, len_d] = u16::try_from(payload_len).map(u16::to_be_bytes).unwrap_or_default();
      let [a, b, c, d, ..] = header;
      *a = first;
      *b = 126;
      *c = len_c;
      *d = len_d;
      4
    }
    _ => {
      let len = u64::try_from(payload_len).map(u64::to_be_bytes).unwrap_or_default();
      let [a, b, rest @ ..] = header;
      *a = first;
      *b = 127;
      if let Some(elem) = rest.get_mut(..8) {
        elem.copy_from_slice(&len);
      }
      10
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::web_socket::{encode_text, Frame, OpCode};

  #[test]
  fn first_byte_is_final_text() {
    let bytes = encode_text("hi");
    assert_eq!(bytes, [0x81, 2, b'h', b'i']);
  }

  #[test]
  fn length_field_follows_payload_size() {
    let cases: [(usize, &[u8]); 4] = [
      (125, &[0x81, 125]),
      (126, &[0x81, 126, 0, 126]),
      (65535, &[0x81, 126, 0xFF, 0xFF]),
      (65536, &[0x81, 127, 0, 0, 0, 0, 0, 1, 0, 0]),
    ];
    for (len, header) in cases {
      let text = "a".repeat(len);
      let bytes = encode_text(&text);
      assert_eq!(bytes.get(..header.len()).unwrap(), header);
      assert_eq!(bytes.len(), header.len() + len);
      assert_eq!(&bytes[header.len()..], text.as_bytes());
    }
  }

  #[test]
  fn server_frames_are_never_masked() {
    let bytes = encode_text(&"b".repeat(300));
    assert_eq!(bytes[1] & 0b1000_0000, 0);
  }

  #[test]
  fn control_payloads_are_truncated() {
    let payload = [7u8; 200];
    let frame = Frame::new_fin(OpCode::Pong, &payload[..]);
    assert_eq!(frame.header(), &[0x8A, 125]);
    assert_eq!(frame.payload().len(), 125);
  }

  #[test]
  fn masked_bytes_follow_the_rfc_example() {
    let frame = Frame::new_fin(OpCode::Text, "Hello");
    assert_eq!(
      frame.to_masked_bytes([0x37, 0xfa, 0x21, 0x3d]),
      [0x81, 0x85, 0x37, 0xfa, 0x21, 0x3d, 0x7f, 0x9f, 0x4d, 0x51, 0x58]
    );
  }
}
