/// What a decoded client frame means to the relay.
#[derive(Debug, Eq, PartialEq)]
pub enum Message {
  /// Closing handshake. Holds the unmasked payload, whose first two bytes are the status code
  /// when present.
  Close(Vec<u8>),
  /// Must be answered with a pong carrying the same payload.
  Ping(Vec<u8>),
  /// Unsolicited or answered heartbeat. Ignored.
  Pong,
  /// Chat content or a command.
  Text(String),
}

impl Message {
  /// Text payload, if any.
  #[inline]
  pub fn text(&self) -> Option<&str> {
    if let Self::Text(elem) = self {
      Some(elem)
    } else {
      None
    }
  }
}
