/// Headers that take part in the upgrade negotiation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KnownHeaderName {
  /// connection
  Connection,
  /// content-length
  ContentLength,
  /// content-type
  ContentType,
  /// sec-websocket-accept
  SecWebSocketAccept,
  /// sec-websocket-key
  SecWebSocketKey,
  /// upgrade
  Upgrade,
}

impl KnownHeaderName {
  /// Canonical capitalization used when writing responses.
  #[inline]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Connection => "Connection",
      Self::ContentLength => "Content-Length",
      Self::ContentType => "Content-Type",
      Self::SecWebSocketAccept => "Sec-WebSocket-Accept",
      Self::SecWebSocketKey => "Sec-WebSocket-Key",
      Self::Upgrade => "Upgrade",
    }
  }
}
