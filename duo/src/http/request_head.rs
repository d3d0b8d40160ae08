use crate::{http::HttpError, misc::StreamReader};
use httparse::{Request, Status, EMPTY_HEADER};

const MAX_READ_HEADER_LEN: usize = 64;
const MAX_READ_LEN: usize = 8 * 1024;

/// Owned request line and headers of an incoming HTTP/1.1 request.
#[derive(Debug)]
pub struct RequestHead {
  headers: Vec<(String, Vec<u8>)>,
  leftover: Vec<u8>,
  method: String,
  path: String,
}

impl RequestHead {
  /// Reads `stream` until a whole request head is available.
  ///
  /// Bytes received after the head are kept in [`Self::leftover`] because clients are allowed to
  /// send WebSocket frames right after the upgrade request.
  #[inline]
  pub async fn read<SR>(stream: &mut SR) -> crate::Result<Self>
  where
    SR: StreamReader,
  {
    let mut buffer = vec![0; MAX_READ_LEN];
    let mut read: usize = 0;
    loop {
      let read_buffer = match buffer.get_mut(read..) {
        Some(elem) if !elem.is_empty() => elem,
        _ => return Err(HttpError::VeryLargeHttp.into()),
      };
      let local_read = stream.read(read_buffer).await?;
      if local_read == 0 {
        return Err(crate::Error::UnexpectedStreamReadEOF);
      }
      read = read.wrapping_add(local_read);
      if let Some(elem) = Self::parse(buffer.get(..read).unwrap_or_default())? {
        return Ok(elem);
      }
    }
  }

  /// Parses `bytes`. `Ok(None)` means that the head is still incomplete.
  #[inline]
  pub fn parse(bytes: &[u8]) -> crate::Result<Option<Self>> {
    let mut headers_buffer = [EMPTY_HEADER; MAX_READ_HEADER_LEN];
    let mut req = Request::new(&mut headers_buffer);
    let len = match req.parse(bytes)? {
      Status::Complete(elem) => elem,
      Status::Partial => return Ok(None),
    };
    let (Some(method), Some(path)) = (req.method, req.path) else {
      return Err(HttpError::MissingRequestLine.into());
    };
    Ok(Some(Self {
      headers: req.headers.iter().map(|el| (el.name.to_owned(), el.value.to_vec())).collect(),
      leftover: bytes.get(len..).unwrap_or_default().to_vec(),
      method: method.to_owned(),
      path: path.to_owned(),
    }))
  }

  /// Checks if the header `name` exists and if one of its comma-separated values is `value`.
  /// Both comparisons are ASCII case-insensitive.
  #[inline]
  pub fn has_header_value(&self, name: &str, value: &[u8]) -> bool {
    self.headers.iter().any(|(local_name, local_value)| {
      local_name.trim().eq_ignore_ascii_case(name)
        && local_value.split(|el| *el == b',').any(|el| el.trim_ascii().eq_ignore_ascii_case(value))
    })
  }

  /// Value of the first header called `name`, compared case-insensitively.
  #[inline]
  pub fn header(&self, name: &str) -> Option<&[u8]> {
    self.headers.iter().find_map(|(local_name, local_value)| {
      local_name.trim().eq_ignore_ascii_case(name).then_some(local_value.as_slice())
    })
  }

  /// Bytes that followed the request head in the same reads.
  #[inline]
  pub fn leftover(&self) -> &[u8] {
    &self.leftover
  }

  /// Request method, for example, `GET`.
  #[inline]
  pub fn method(&self) -> &str {
    &self.method
  }

  /// Request target without the query string.
  #[inline]
  pub fn path(&self) -> &str {
    self.path.split_once('?').map_or(self.path.as_str(), |(path, _)| path)
  }

  /// Moves out [`Self::leftover`].
  #[inline]
  pub fn into_leftover(self) -> Vec<u8> {
    self.leftover
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    http::{HttpError, RequestHead},
    misc::BytesStream,
  };

  const REQ: &[u8] = b"GET /chat?room=1 HTTP/1.1\r\nHost: localhost\r\nUpgrade: WebSocket\r\n\
    Connection: keep-alive, Upgrade\r\n\r\n";

  #[test]
  fn partial_heads_need_more_bytes() {
    assert!(RequestHead::parse(&REQ[..REQ.len() - 2]).unwrap().is_none());
  }

  #[test]
  fn parsed_fields() {
    let mut bytes = REQ.to_vec();
    bytes.extend_from_slice(&[0x81, 0x80]);
    let head = RequestHead::parse(&bytes).unwrap().unwrap();
    assert_eq!(head.method(), "GET");
    assert_eq!(head.path(), "/chat");
    assert_eq!(head.header("host"), Some(&b"localhost"[..]));
    assert!(head.has_header_value("upgrade", b"websocket"));
    assert!(head.has_header_value("CONNECTION", b"upgrade"));
    assert!(!head.has_header_value("connection", b"close"));
    assert_eq!(head.into_leftover(), [0x81, 0x80]);
  }

  #[tokio::test]
  async fn read_from_stream() {
    let mut stream = BytesStream::from(REQ.to_vec());
    let head = RequestHead::read(&mut stream).await.unwrap();
    assert_eq!(head.path(), "/chat");
    assert!(head.leftover().is_empty());
  }

  #[tokio::test]
  async fn eof_before_head_is_complete() {
    let mut stream = BytesStream::from(b"GET / HTTP/1.1\r\n".to_vec());
    assert!(matches!(
      RequestHead::read(&mut stream).await,
      Err(crate::Error::UnexpectedStreamReadEOF)
    ));
  }

  #[tokio::test]
  async fn very_large_heads_are_rejected() {
    let mut bytes = b"GET / HTTP/1.1\r\nX-Filler: ".to_vec();
    bytes.extend(core::iter::repeat(b'a').take(10 * 1024));
    let mut stream = BytesStream::from(bytes);
    assert!(matches!(
      RequestHead::read(&mut stream).await,
      Err(crate::Error::HttpError(HttpError::VeryLargeHttp))
    ));
  }
}
