//! Tokio runtime of the relay.
//!
//! ```text
//!             ┌──────────────┐   Event    ┌────────────────────────────┐
//!  client ──▶ │ reader task  │ ─────────▶ │ engine task (Matchmaker)   │
//!             └──────────────┘            └────────────────────────────┘
//!             ┌──────────────┐  frames                 │
//!  client ◀── │ writer task  │ ◀───────────────────────┘
//!             └──────────────┘
//! ```
//!
//! Every accepted connection gets its own task that reads the request head and then either
//! serves a static asset or completes the WebSocket handshake. Upgraded connections are split
//! into a reader and a writer while the engine task is the only owner of the matchmaking state.

mod channel_outbox;
mod connection;
mod engine;
mod event;

pub use channel_outbox::ChannelOutbox;
pub use event::Event;

use crate::{http::StaticAssets, matchmaking::ConnectionIdGenerator, Config};
use connection::Connection;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::mpsc};

/// Listens for browsers, serves the chat page and relays messages between pairs.
#[derive(Debug)]
pub struct Server {
  config: Config,
}

impl Server {
  /// New instance that does nothing until [`Self::run`] is called.
  #[inline]
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  /// See [`Config`].
  #[inline]
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Binds [`Config::addr`] and serves forever.
  #[inline]
  pub async fn run(self) -> crate::Result<()> {
    let listener = TcpListener::bind(self.config.addr).await?;
    self.serve(listener).await
  }

  /// Serves connections accepted by an already bound `listener`.
  ///
  /// Failures of individual connections, accepting included, are logged and never stop the
  /// loop.
  #[inline]
  pub async fn serve(self, listener: TcpListener) -> crate::Result<()> {
    _info!(addr = %listener.local_addr()?, "Server is listening");
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let _engine = tokio::spawn(engine::run(events_rx));
    let assets = Arc::new(StaticAssets::new(self.config.public_dir));
    let mut ids = ConnectionIdGenerator::default();
    loop {
      let (tcp_stream, _peer_addr) = match listener.accept().await {
        Ok(elem) => elem,
        Err(_err) => {
          _warn!(err = %_err, "Couldn't accept connection");
          continue;
        }
      };
      let id = ids.next_id();
      _debug!(%id, peer_addr = %_peer_addr, "Accepted connection");
      let conn = Connection {
        assets: Arc::clone(&assets),
        events: events_tx.clone(),
        id,
        max_payload_len: self.config.max_payload_len,
      };
      let fun = async move {
        if let Err(_err) = conn.handle(tcp_stream).await {
          if _err.is_protocol_violation() {
            _debug!(%id, err = %_err, "Connection sent an invalid frame");
          } else {
            _debug!(%id, err = %_err, "Connection failed");
          }
        }
      };
      #[cfg(feature = "tracing")]
      let fun = tracing::Instrument::instrument(fun, tracing::debug_span!("connection", %id));
      let _jh = tokio::spawn(fun);
    }
  }
}
