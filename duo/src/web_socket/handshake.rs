//! Opening handshake: turns an upgrade request into a WebSocket connection.

use crate::{
  http::{HttpError, KnownHeaderName, RequestHead, Response, StatusCode},
  misc::StreamWriter,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use httparse::Header;
use sha1::{Digest, Sha1};

const GUID: &[u8] = b"258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// Validates `req` and writes the `101 Switching Protocols` response.
///
/// Requests without `Upgrade: websocket` or without `Sec-WebSocket-Key` receive a
/// `400 Bad Request` and an error is returned. Callers are expected to drop the stream in that
/// case, nothing else is kept.
#[inline]
pub async fn accept<SW>(req: &RequestHead, stream: &mut SW) -> crate::Result<()>
where
  SW: StreamWriter,
{
  let key = match validate(req) {
    Ok(elem) => elem,
    Err(err) => {
      reject(stream).await?;
      return Err(err.into());
    }
  };
  let swa = derived_key(key);
  let headers = [
    Header { name: KnownHeaderName::Upgrade.as_str(), value: b"websocket" },
    Header { name: KnownHeaderName::Connection.as_str(), value: b"Upgrade" },
    Header { name: KnownHeaderName::SecWebSocketAccept.as_str(), value: swa.as_bytes() },
  ];
  Response { body: &[], headers: &headers, status_code: StatusCode::SwitchingProtocols }
    .write(stream)
    .await
}

/// `base64(SHA-1(key ‖ GUID))`, the value of `Sec-WebSocket-Accept`.
#[inline]
pub fn derived_key(key: &[u8]) -> String {
  let mut sha1 = Sha1::new();
  sha1.update(key);
  sha1.update(GUID);
  STANDARD.encode(sha1.finalize())
}

/// If `req` asks to switch protocols, regardless of the target protocol.
#[inline]
pub fn is_upgrade_request(req: &RequestHead) -> bool {
  req.header(KnownHeaderName::Upgrade.as_str()).is_some()
}

async fn reject<SW>(stream: &mut SW) -> crate::Result<()>
where
  SW: StreamWriter,
{
  let headers = [Header { name: KnownHeaderName::Connection.as_str(), value: b"close" }];
  Response { body: &[], headers: &headers, status_code: StatusCode::BadRequest }
    .write(stream)
    .await
}

fn validate(req: &RequestHead) -> Result<&[u8], HttpError> {
  if !req.has_header_value(KnownHeaderName::Upgrade.as_str(), b"websocket") {
    return Err(HttpError::MissingHeader(KnownHeaderName::Upgrade));
  }
  match req.header(KnownHeaderName::SecWebSocketKey.as_str()).map(<[u8]>::trim_ascii) {
    Some(key) if !key.is_empty() => Ok(key),
    _ => Err(HttpError::MissingHeader(KnownHeaderName::SecWebSocketKey)),
  }
}
