create_enum! {
  /// Defines how to interpret the payload data.
  #[derive(Clone, Copy, Debug, Eq, PartialEq)]
  #[repr(u8)]
  pub enum OpCode {
    /// Continuation of a previous frame.
    Continuation = 0b0000_0000,
    /// UTF-8 text.
    Text = 0b0000_0001,
    /// Opaque bytes.
    Binary = 0b0000_0010,
    /// Connection is closed.
    Close = 0b0000_1000,
    /// Test reachability.
    Ping = 0b0000_1001,
    /// Response of a ping frame.
    Pong = 0b0000_1010,
  }
}

impl OpCode {
  /// Close, ping and pong.
  #[inline]
  pub fn is_control(self) -> bool {
    matches!(self, OpCode::Close | OpCode::Ping | OpCode::Pong)
  }
}

#[cfg(test)]
mod tests {
  use crate::web_socket::{OpCode, WebSocketError};

  #[test]
  fn reserved_op_codes_are_rejected() {
    for byte in [3, 4, 5, 6, 7, 11, 12, 13, 14, 15] {
      assert!(matches!(
        OpCode::try_from(byte),
        Err(crate::Error::WebSocketError(WebSocketError::InvalidOpCodeByte { provided }))
          if provided == byte
      ));
    }
  }

  #[test]
  fn known_op_codes_round_trip() {
    let data = [OpCode::Continuation, OpCode::Text, OpCode::Binary];
    let control = [OpCode::Close, OpCode::Ping, OpCode::Pong];
    for op_code in data.into_iter().chain(control) {
      assert_eq!(OpCode::try_from(u8::from(op_code)).unwrap(), op_code);
    }
  }
}
