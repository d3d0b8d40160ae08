use crate::{
  matchmaking::{ConnectionId, Notice, Outbox, PeerState, Registry},
  web_socket::NEXT_COMMAND,
};

/// Synchronous matchmaking and relay state machine.
///
/// Each method handles one event to completion, so whoever owns an instance serializes every
/// change made to the underlying [`Registry`].
#[derive(Debug)]
pub struct Matchmaker<O> {
  outbox: O,
  registry: Registry,
}

impl<O> Matchmaker<O>
where
  O: Outbox,
{
  /// New instance without connections.
  #[inline]
  pub fn new(outbox: O) -> Self {
    Self { outbox, registry: Registry::default() }
  }

  /// A handshake was completed.
  ///
  /// Pairs `id` with the longest waiting connection or, if nobody is waiting, puts `id` at the
  /// end of the queue.
  #[inline]
  pub fn connect(&mut self, id: ConnectionId) {
    if !self.registry.insert(id) {
      _warn!(%id, "Connection is already registered");
      return;
    }
    self.drop_unwritable_waiters();
    if let Some(partner) = self.registry.pop_waiting() {
      self.registry.pair(partner, id);
      _debug!(%id, %partner, "Paired with a waiting connection");
      self.notify(partner, Notice::PartnerConnected);
      self.notify(id, Notice::PartnerConnected);
    } else {
      self.registry.enqueue(id);
      _debug!(%id, "Waiting for a partner");
      self.notify(id, Notice::WaitingForPartner);
    }
  }

  /// `id` left. Calling this method more than once for the same connection is harmless.
  ///
  /// A paired partner is notified but stays out of the queue until it asks for
  /// [`NEXT_COMMAND`].
  #[inline]
  pub fn disconnect(&mut self, id: ConnectionId) {
    match self.registry.remove(id) {
      PeerState::Gone => {
        _trace!(%id, "Connection was already gone");
      }
      PeerState::Paired(partner) => {
        _debug!(%id, %partner, "Paired connection left");
        self.registry.set_idle(partner);
        if self.outbox.is_writable(partner) {
          self.notify(partner, Notice::PartnerDisconnected);
        }
      }
      PeerState::Idle | PeerState::Waiting => {
        _debug!(%id, "Unpaired connection left");
      }
    }
  }

  /// Text received from `id`.
  ///
  /// [`NEXT_COMMAND`] is handled by [`Self::next`], everything else is relayed verbatim to the
  /// partner. Texts of unpaired connections are dropped.
  #[inline]
  pub fn message(&mut self, id: ConnectionId, text: &str) {
    if text == NEXT_COMMAND {
      self.next(id);
      return;
    }
    let PeerState::Paired(partner) = self.registry.state(id) else {
      _trace!(%id, "Dropped text of an unpaired connection");
      return;
    };
    if !self.outbox.deliver(partner, text) {
      _warn!(%id, %partner, "Couldn't relay text");
    }
  }

  /// `id` wants someone else.
  ///
  /// A current partner is told that it was left and, if still writable, goes back to the queue
  /// before `id`. Afterwards the two longest waiting connections are paired, which can be the
  /// same two connections when nobody else is waiting.
  #[inline]
  pub fn next(&mut self, id: ConnectionId) {
    match self.registry.state(id) {
      PeerState::Gone => {
        _warn!(%id, "Unknown connection asked for a new partner");
        return;
      }
      PeerState::Paired(partner) => {
        _debug!(%id, %partner, "Pair was dissolved by request");
        self.registry.set_idle(id);
        self.registry.set_idle(partner);
        if self.outbox.is_writable(partner) {
          self.notify(partner, Notice::PartnerLeft);
          self.registry.enqueue(partner);
        }
        self.registry.enqueue(id);
      }
      PeerState::Idle | PeerState::Waiting => {
        self.registry.enqueue(id);
      }
    }
    self.notify(id, Notice::LookingForPartner);
    self.pair_waiters();
  }

  /// See [`Outbox`].
  #[inline]
  pub fn outbox(&self) -> &O {
    &self.outbox
  }

  /// Mutable version of [`Self::outbox`].
  #[inline]
  pub fn outbox_mut(&mut self) -> &mut O {
    &mut self.outbox
  }

  /// See [`Registry`].
  #[inline]
  pub fn registry(&self) -> &Registry {
    &self.registry
  }

  fn drop_unwritable_waiters(&mut self) {
    let Self { outbox, registry } = self;
    registry.retain_waiting(|id| outbox.is_writable(id));
  }

  fn notify(&mut self, id: ConnectionId, notice: Notice) {
    if !self.outbox.deliver(id, notice.as_str()) {
      _warn!(%id, ?notice, "Couldn't deliver notice");
    }
  }

  fn pair_waiters(&mut self) {
    self.drop_unwritable_waiters();
    while self.registry.waiting_len() >= 2 {
      let (Some(a), Some(b)) = (self.registry.pop_waiting(), self.registry.pop_waiting()) else {
        return;
      };
      self.registry.pair(a, b);
      _debug!(%a, %b, "Paired waiting connections");
      self.notify(a, Notice::PartnerConnected);
      self.notify(b, Notice::PartnerConnected);
    }
  }
}
