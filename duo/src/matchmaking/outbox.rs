use crate::matchmaking::ConnectionId;

/// Delivery seam between the [`crate::matchmaking::Matchmaker`] and the transport.
///
/// Delivery is best-effort: a `false` is logged and otherwise ignored. The eventual close or
/// error of the failing connection is what triggers its cleanup.
pub trait Outbox {
  /// Encodes `text` and queues it for `id`. Returns `false` if it couldn't be queued.
  fn deliver(&mut self, id: ConnectionId, text: &str) -> bool;

  /// If `id` can still receive frames.
  fn is_writable(&self, id: ConnectionId) -> bool;
}

impl<T> Outbox for &mut T
where
  T: Outbox,
{
  #[inline]
  fn deliver(&mut self, id: ConnectionId, text: &str) -> bool {
    (**self).deliver(id, text)
  }

  #[inline]
  fn is_writable(&self, id: ConnectionId) -> bool {
    (**self).is_writable(id)
  }
}
