use crate::matchmaking::ConnectionId;
use tokio::sync::mpsc::UnboundedSender;

/// Everything that can change the matchmaking state, in the order each connection produced it.
#[derive(Debug)]
pub enum Event {
  /// Handshake completed. `sender` feeds the writer task of the connection with encoded frames.
  Connect {
    /// Connection
    id: ConnectionId,
    /// Encoded frames
    sender: UnboundedSender<Vec<u8>>,
  },
  /// The connection was closed, sent an invalid frame or couldn't be written.
  Disconnect {
    /// Connection
    id: ConnectionId,
  },
  /// Text frame received.
  Text {
    /// Connection
    id: ConnectionId,
    /// Payload
    text: String,
  },
}
