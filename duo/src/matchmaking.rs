//! Decides who talks to whom.
//!
//! Every connection is, at any moment, in exactly one [`PeerState`]. The [`Registry`] keeps those
//! states together with the FIFO queue of waiting connections and only the [`Matchmaker`] is
//! allowed to mutate it, one event at a time.

mod connection_id;
mod matchmaker;
mod notice;
mod outbox;
mod peer_state;
mod registry;

pub use connection_id::{ConnectionId, ConnectionIdGenerator};
pub use matchmaker::Matchmaker;
pub use notice::Notice;
pub use outbox::Outbox;
pub use peer_state::PeerState;
pub use registry::Registry;
