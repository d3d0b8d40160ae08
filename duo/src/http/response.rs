use crate::{
  http::{KnownHeaderName, StatusCode},
  misc::StreamWriter,
};
use httparse::Header;

/// Everything needed to write a HTTP/1.1 response.
///
/// `Content-Length` is appended automatically, except for `101 Switching Protocols` where the
/// connection stops being HTTP right after the head.
#[derive(Debug)]
pub struct Response<'any> {
  /// Body
  pub body: &'any [u8],
  /// Headers, written in the given order.
  pub headers: &'any [Header<'any>],
  /// Status code
  pub status_code: StatusCode,
}

impl<'any> Response<'any> {
  /// Response without headers or body.
  #[inline]
  pub const fn empty(status_code: StatusCode) -> Self {
    Self { body: &[], headers: &[], status_code }
  }

  /// Serialized status line, headers and body.
  #[inline]
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(128usize.wrapping_add(self.body.len()));
    extend_rn(
      &mut bytes,
      &[
        b"HTTP/1.1 ",
        self.status_code.code().to_string().as_bytes(),
        b" ",
        self.status_code.reason().as_bytes(),
      ],
    );
    for header in self.headers {
      extend_rn(&mut bytes, &[header.name.as_bytes(), b": ", header.value]);
    }
    if self.status_code != StatusCode::SwitchingProtocols {
      extend_rn(
        &mut bytes,
        &[
          KnownHeaderName::ContentLength.as_str().as_bytes(),
          b": ",
          self.body.len().to_string().as_bytes(),
        ],
      );
    }
    extend_rn(&mut bytes, &[]);
    bytes.extend_from_slice(self.body);
    bytes
  }

  /// Writes [`Self::to_bytes`] into `stream`.
  #[inline]
  pub async fn write<SW>(&self, stream: &mut SW) -> crate::Result<()>
  where
    SW: StreamWriter,
  {
    stream.write_all(&self.to_bytes()).await
  }
}

fn extend_rn(bytes: &mut Vec<u8>, slices: &[&[u8]]) {
  for slice in slices {
    bytes.extend_from_slice(slice);
  }
  bytes.extend_from_slice(b"\r\n");
}

#[cfg(test)]
mod tests {
  use crate::http::{Mime, Response, StatusCode};
  use httparse::Header;

  #[test]
  fn body_carries_content_length() {
    let headers = [Header { name: "Content-Type", value: Mime::TextPlain.as_str().as_bytes() }];
    let res = Response { body: b"Not found", headers: &headers, status_code: StatusCode::NotFound };
    assert_eq!(
      res.to_bytes(),
      b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 9\r\n\r\nNot found"
    );
  }

  #[test]
  fn switching_protocols_has_no_content_length() {
    let res = Response::empty(StatusCode::SwitchingProtocols);
    assert_eq!(res.to_bytes(), b"HTTP/1.1 101 Switching Protocols\r\n\r\n");
  }
}
