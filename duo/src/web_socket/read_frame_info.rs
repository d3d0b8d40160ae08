use crate::web_socket::{
  unmask, Message, OpCode, WebSocketError, FIN_MASK, MASK_MASK, MAX_CONTROL_PAYLOAD_LEN,
  OP_CODE_MASK, PAYLOAD_MASK, RSV_MASK,
};

/// Parameters of a client frame, extracted from its header.
#[derive(Debug)]
pub struct ReadFrameInfo {
  pub(crate) fin: bool,
  pub(crate) header_len: u8,
  pub(crate) mask: [u8; 4],
  pub(crate) op_code: OpCode,
  pub(crate) payload_len: usize,
}

impl ReadFrameInfo {
  /// Parses the header at the beginning of `bytes`.
  ///
  /// Returns `Ok(None)` when `bytes` does not contain a whole header yet. Invalid headers are
  /// rejected as soon as the offending byte is available.
  #[inline]
  pub fn from_bytes(bytes: &[u8], max_payload_len: usize) -> crate::Result<Option<Self>> {
    let [a, b, rest @ ..] = bytes else {
      return Ok(None);
    };
    let (fin, length_code, op_code) = Self::manage_first_two_bytes([*a, *b])?;
    let (header_len, payload_len, rest): (u8, usize, &[u8]) = match length_code {
      126 => {
        let [c, d, local_rest @ ..] = rest else {
          return Ok(None);
        };
        (4, u16::from_be_bytes([*c, *d]).into(), local_rest)
      }
      127 => {
        let [c, d, e, f, g, h, i, j, local_rest @ ..] = rest else {
          return Ok(None);
        };
        let len = u64::from_be_bytes([*c, *d, *e, *f, *g, *h, *i, *j]);
        (10, usize::try_from(len).map_err(|_err| WebSocketError::VeryLargePayload)?, local_rest)
      }
      _ => (2, length_code.into(), rest),
    };
    Self::manage_final_params(fin, op_code, max_payload_len, payload_len)?;
    let [e, f, g, h, ..] = rest else {
      return Ok(None);
    };
    Ok(Some(Self {
      fin,
      header_len: header_len.wrapping_add(4),
      mask: [*e, *f, *g, *h],
      op_code,
      payload_len,
    }))
  }

  /// Indicates if this is the final frame in a message.
  #[inline]
  pub fn fin(&self) -> bool {
    self.fin
  }

  /// Number of bytes occupied by the whole frame, header included.
  #[inline]
  pub fn frame_len(&self) -> usize {
    usize::from(self.header_len).saturating_add(self.payload_len)
  }

  /// Header length, masking key included.
  #[inline]
  pub fn header_len(&self) -> u8 {
    self.header_len
  }

  /// See [`OpCode`].
  #[inline]
  pub fn op_code(&self) -> OpCode {
    self.op_code
  }

  /// Declared payload length.
  #[inline]
  pub fn payload_len(&self) -> usize {
    self.payload_len
  }

  pub(crate) fn into_message(self, mut payload: Vec<u8>) -> crate::Result<Message> {
    unmask(&mut payload, self.mask);
    Ok(match self.op_code {
      OpCode::Close => Message::Close(payload),
      OpCode::Ping => Message::Ping(payload),
      OpCode::Pong => Message::Pong,
      OpCode::Binary | OpCode::Continuation | OpCode::Text => {
        Message::Text(String::from_utf8(payload)?)
      }
    })
  }

  fn manage_final_params(
    fin: bool,
    op_code: OpCode,
    max_payload_len: usize,
    payload_len: usize,
  ) -> crate::Result<()> {
    if op_code.is_control() && !fin {
      return Err(WebSocketError::UnexpectedFragmentedControlFrame.into());
    }
    if op_code.is_control() && payload_len > MAX_CONTROL_PAYLOAD_LEN {
      return Err(WebSocketError::VeryLargeControlFrame.into());
    }
    if payload_len > max_payload_len {
      return Err(WebSocketError::VeryLargePayload.into());
    }
    Ok(())
  }

  fn manage_first_two_bytes([a, b]: [u8; 2]) -> crate::Result<(bool, u8, OpCode)> {
    if a & RSV_MASK != 0 {
      return Err(WebSocketError::ReservedBitsAreNotZero.into());
    }
    if b & MASK_MASK == 0 {
      return Err(WebSocketError::MissingFrameMask.into());
    }
    let op_code = OpCode::try_from(a & OP_CODE_MASK)?;
    Ok((a & FIN_MASK != 0, b & PAYLOAD_MASK, op_code))
  }
}
