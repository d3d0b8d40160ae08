use crate::{
  http::{RequestHead, StaticAssets},
  matchmaking::ConnectionId,
  misc::{StreamReader, StreamWriter},
  server::Event,
  web_socket::{handshake, Frame, FrameDecoder, Message, OpCode},
};
use std::sync::Arc;
use tokio::{
  io::AsyncWriteExt,
  net::{tcp::OwnedReadHalf, TcpStream},
  sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
};

const PROTOCOL_ERROR: u16 = 1002;
const READ_BUFFER_LEN: usize = 4 * 1024;

pub(crate) struct Connection {
  pub(crate) assets: Arc<StaticAssets>,
  pub(crate) events: UnboundedSender<Event>,
  pub(crate) id: ConnectionId,
  pub(crate) max_payload_len: usize,
}

impl Connection {
  pub(crate) async fn handle(self, mut tcp_stream: TcpStream) -> crate::Result<()> {
    let req = RequestHead::read(&mut tcp_stream).await?;
    if !handshake::is_upgrade_request(&req) {
      let _status_code = self.assets.respond(&req, &mut tcp_stream).await?;
      _debug!(id = %self.id, path = req.path(), status_code = ?_status_code, "Served asset");
      tcp_stream.shutdown().await?;
      return Ok(());
    }
    if let Err(err) = handshake::accept(&req, &mut tcp_stream).await {
      _debug!(id = %self.id, "Handshake was rejected");
      let _rslt = tcp_stream.shutdown().await;
      return Err(err);
    }
    _debug!(id = %self.id, "Handshake was accepted");
    let leftover = req.into_leftover();
    let (read_half, write_half) = tcp_stream.into_split();
    let (frames_tx, frames_rx) = mpsc::unbounded_channel();
    if self.events.send(Event::Connect { id: self.id, sender: frames_tx.clone() }).is_err() {
      return Ok(());
    }
    let _jh = tokio::spawn(write_frames(self.events.clone(), self.id, frames_rx, write_half));
    let rslt = self.read_frames(&frames_tx, leftover, read_half).await;
    if let Err(err) = &rslt {
      if err.is_protocol_violation() {
        let frame = Frame::new_fin(OpCode::Close, PROTOCOL_ERROR.to_be_bytes());
        let _rslt = frames_tx.send(frame.to_bytes());
      }
    }
    drop(frames_tx);
    let _rslt = self.events.send(Event::Disconnect { id: self.id });
    rslt
  }

  async fn read_frames(
    &self,
    frames: &UnboundedSender<Vec<u8>>,
    leftover: Vec<u8>,
    mut stream: OwnedReadHalf,
  ) -> crate::Result<()> {
    let mut decoder = FrameDecoder::new(self.max_payload_len);
    decoder.extend(&leftover);
    let mut buffer = vec![0; READ_BUFFER_LEN];
    loop {
      while let Some(message) = decoder.next_message()? {
        match message {
          Message::Close(payload) => {
            _debug!(id = %self.id, "Received close frame");
            let code = payload.get(..2).unwrap_or_default();
            let _rslt = frames.send(Frame::new_fin(OpCode::Close, code).to_bytes());
            return Ok(());
          }
          Message::Ping(payload) => {
            let _rslt = frames.send(Frame::new_fin(OpCode::Pong, &payload).to_bytes());
          }
          Message::Pong => {}
          Message::Text(text) => {
            if self.events.send(Event::Text { id: self.id, text }).is_err() {
              return Ok(());
            }
          }
        }
      }
      let read = stream.read(&mut buffer).await?;
      if read == 0 {
        _debug!(id = %self.id, buffered = decoder.buffered(), "Connection was closed");
        return Ok(());
      }
      decoder.extend(buffer.get(..read).unwrap_or_default());
    }
  }
}

// Dropping `stream` after the last frame closes the write half of the connection.
async fn write_frames<SW>(
  events: UnboundedSender<Event>,
  id: ConnectionId,
  mut frames: UnboundedReceiver<Vec<u8>>,
  mut stream: SW,
) where
  SW: StreamWriter,
{
  while let Some(frame) = frames.recv().await {
    if let Err(_err) = stream.write_all(&frame).await {
      _debug!(%id, err = %_err, "Couldn't write frame");
      frames.close();
      let _rslt = events.send(Event::Disconnect { id });
      return;
    }
  }
}
