use crate::matchmaking::ConnectionId;

/// Lifecycle of a connection as seen by the matchmaker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PeerState {
  /// Connected but neither queued nor paired. Reached when the partner disconnects, the
  /// connection stays here until it asks for `/next` or leaves.
  Idle,
  /// Unknown or already disconnected. Never referenced again.
  Gone,
  /// Paired with the contained connection.
  Paired(ConnectionId),
  /// Somewhere in the waiting queue.
  Waiting,
}
