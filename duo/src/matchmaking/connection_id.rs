use core::fmt::{Display, Formatter};

/// Unique identity of a connection for the whole lifetime of the process.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ConnectionId(u64);

impl ConnectionId {
  /// Wraps a raw identifier.
  #[inline]
  pub const fn new(id: u64) -> Self {
    Self(id)
  }

  /// Raw identifier.
  #[inline]
  pub const fn get(self) -> u64 {
    self.0
  }
}

impl Display for ConnectionId {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Monotonic source of [`ConnectionId`]s. Identifiers are never reused.
#[derive(Debug, Default)]
pub struct ConnectionIdGenerator {
  next: u64,
}

impl ConnectionIdGenerator {
  /// Hands out the next identifier.
  #[inline]
  pub fn next_id(&mut self) -> ConnectionId {
    let id = ConnectionId(self.next);
    self.next = self.next.wrapping_add(1);
    id
  }
}
