use crate::matchmaking::{ConnectionId, PeerState};
use std::collections::{HashMap, VecDeque};

/// Waiting queue and pairs of every live connection.
///
/// A connection is [`PeerState::Waiting`] if and only if it is inside the queue and pairs are
/// always stored on both sides. Mutations are restricted to the crate so that these
/// relationships can only change through [`crate::matchmaking::Matchmaker`].
#[derive(Debug, Default)]
pub struct Registry {
  peers: HashMap<ConnectionId, PeerState>,
  waiting: VecDeque<ConnectionId>,
}

impl Registry {
  /// If `id` is connected.
  #[inline]
  pub fn contains(&self, id: ConnectionId) -> bool {
    self.peers.contains_key(&id)
  }

  /// If there are no live connections.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.peers.is_empty()
  }

  /// Number of live connections.
  #[inline]
  pub fn len(&self) -> usize {
    self.peers.len()
  }

  /// Active pairs, each one yielded once with the smaller identifier first.
  #[inline]
  pub fn pairs(&self) -> impl Iterator<Item = (ConnectionId, ConnectionId)> + '_ {
    self.peers.iter().filter_map(|(id, state)| match state {
      PeerState::Paired(partner) if id < partner => Some((*id, *partner)),
      _ => None,
    })
  }

  /// State of `id`. Unknown identifiers are [`PeerState::Gone`].
  #[inline]
  pub fn state(&self, id: ConnectionId) -> PeerState {
    self.peers.get(&id).copied().unwrap_or(PeerState::Gone)
  }

  /// Waiting connections, longest waiting first.
  #[inline]
  pub fn waiting(&self) -> impl Iterator<Item = ConnectionId> + '_ {
    self.waiting.iter().copied()
  }

  /// Number of waiting connections.
  #[inline]
  pub fn waiting_len(&self) -> usize {
    self.waiting.len()
  }

  /// Registers `id` as [`PeerState::Idle`]. Returns `false` if it was already known.
  pub(crate) fn insert(&mut self, id: ConnectionId) -> bool {
    if self.peers.contains_key(&id) {
      return false;
    }
    let _ = self.peers.insert(id, PeerState::Idle);
    true
  }

  /// Appends `id` to the queue. Connections that are already waiting keep their position.
  pub(crate) fn enqueue(&mut self, id: ConnectionId) {
    let Some(state) = self.peers.get_mut(&id) else {
      return;
    };
    if *state == PeerState::Waiting {
      return;
    }
    *state = PeerState::Waiting;
    self.waiting.push_back(id);
  }

  /// Both sides become [`PeerState::Paired`]. Neither side can be waiting.
  pub(crate) fn pair(&mut self, a: ConnectionId, b: ConnectionId) {
    if a == b {
      return;
    }
    if let Some(state) = self.peers.get_mut(&a) {
      *state = PeerState::Paired(b);
    }
    if let Some(state) = self.peers.get_mut(&b) {
      *state = PeerState::Paired(a);
    }
  }

  /// Removes the longest waiting connection from the queue, leaving it [`PeerState::Idle`].
  pub(crate) fn pop_waiting(&mut self) -> Option<ConnectionId> {
    let id = self.waiting.pop_front()?;
    if let Some(state) = self.peers.get_mut(&id) {
      *state = PeerState::Idle;
    }
    Some(id)
  }

  /// Forgets `id`, returning its last state.
  pub(crate) fn remove(&mut self, id: ConnectionId) -> PeerState {
    let Some(state) = self.peers.remove(&id) else {
      return PeerState::Gone;
    };
    if state == PeerState::Waiting {
      self.waiting.retain(|el| *el != id);
    }
    state
  }

  /// Waiting connections that don't satisfy `cb` leave the queue and become idle.
  pub(crate) fn retain_waiting(&mut self, mut cb: impl FnMut(ConnectionId) -> bool) {
    let Self { peers, waiting } = self;
    waiting.retain(|id| {
      if cb(*id) {
        return true;
      }
      if let Some(state) = peers.get_mut(id) {
        *state = PeerState::Idle;
      }
      false
    });
  }

  /// Leaves a paired or waiting connection unattached.
  pub(crate) fn set_idle(&mut self, id: ConnectionId) {
    let Some(state) = self.peers.get_mut(&id) else {
      return;
    };
    if *state == PeerState::Waiting {
      self.waiting.retain(|el| *el != id);
    }
    *state = PeerState::Idle;
  }
}
