use crate::{
  matchmaking::{ConnectionId, Outbox},
  web_socket::encode_text,
};
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;

/// [`Outbox`] that encodes texts into frames and hands them to the writer task of each
/// connection.
#[derive(Debug, Default)]
pub struct ChannelOutbox {
  senders: HashMap<ConnectionId, UnboundedSender<Vec<u8>>>,
}

impl ChannelOutbox {
  /// Registers the frame channel of `id`.
  #[inline]
  pub fn insert(&mut self, id: ConnectionId, sender: UnboundedSender<Vec<u8>>) {
    let _prev = self.senders.insert(id, sender);
  }

  /// Number of registered channels.
  #[inline]
  pub fn len(&self) -> usize {
    self.senders.len()
  }

  /// If there are no registered channels.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.senders.is_empty()
  }

  /// Drops the frame channel of `id`. Once all frames queued so far are written, the writer
  /// task closes its half of the stream.
  #[inline]
  pub fn remove(&mut self, id: ConnectionId) {
    let _prev = self.senders.remove(&id);
  }
}

impl Outbox for ChannelOutbox {
  #[inline]
  fn deliver(&mut self, id: ConnectionId, text: &str) -> bool {
    let Some(sender) = self.senders.get(&id) else {
      return false;
    };
    sender.send(encode_text(text)).is_ok()
  }

  #[inline]
  fn is_writable(&self, id: ConnectionId) -> bool {
    self.senders.get(&id).is_some_and(|el| !el.is_closed())
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    matchmaking::{ConnectionId, Outbox},
    server::ChannelOutbox,
    web_socket::encode_text,
  };
  use tokio::sync::mpsc;

  #[test]
  fn delivers_encoded_frames() {
    let id = ConnectionId::new(1);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut outbox = ChannelOutbox::default();
    outbox.insert(id, tx);
    assert!(outbox.is_writable(id));
    assert!(outbox.deliver(id, "hello"));
    assert_eq!(rx.try_recv().unwrap(), encode_text("hello"));
  }

  #[test]
  fn closed_or_unknown_channels_are_not_writable() {
    let id = ConnectionId::new(1);
    let (tx, rx) = mpsc::unbounded_channel();
    let mut outbox = ChannelOutbox::default();
    outbox.insert(id, tx);
    drop(rx);
    assert!(!outbox.is_writable(id));
    assert!(!outbox.deliver(id, "hello"));
    assert!(!outbox.is_writable(ConnectionId::new(2)));
    outbox.remove(id);
    assert!(outbox.is_empty());
  }
}
