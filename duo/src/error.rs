use crate::{http::HttpError, web_socket::WebSocketError};
use core::fmt::{Debug, Display, Formatter};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External - Misc
  //
  HttpParse(httparse::Error),
  #[cfg(feature = "_tracing-tree")]
  TryInitError(tracing_subscriber::util::TryInitError),

  // External - Std
  //
  AddrParseError(core::net::AddrParseError),
  IoError(std::io::Error),
  ParseIntError(core::num::ParseIntError),
  Utf8Error(core::str::Utf8Error),

  // Generic
  //
  /// Unexpected end of file when reading from a stream.
  UnexpectedStreamReadEOF,

  // Internal
  //
  HttpError(HttpError),
  WebSocketError(WebSocketError),
}

impl Error {
  /// Invalid frames received from a client. The only sensible reaction is to drop the
  /// connection.
  #[inline]
  pub fn is_protocol_violation(&self) -> bool {
    matches!(self, Self::WebSocketError(_) | Self::Utf8Error(_))
  }
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<httparse::Error> for Error {
  #[inline]
  #[track_caller]
  fn from(from: httparse::Error) -> Self {
    Self::HttpParse(from)
  }
}

#[cfg(feature = "_tracing-tree")]
impl From<tracing_subscriber::util::TryInitError> for Error {
  #[inline]
  fn from(from: tracing_subscriber::util::TryInitError) -> Self {
    Self::TryInitError(from)
  }
}

impl From<core::net::AddrParseError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: core::net::AddrParseError) -> Self {
    Self::AddrParseError(from)
  }
}

impl From<std::io::Error> for Error {
  #[inline]
  #[track_caller]
  fn from(from: std::io::Error) -> Self {
    Self::IoError(from)
  }
}

impl From<core::num::ParseIntError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: core::num::ParseIntError) -> Self {
    Self::ParseIntError(from)
  }
}

impl From<core::str::Utf8Error> for Error {
  #[inline]
  #[track_caller]
  fn from(from: core::str::Utf8Error) -> Self {
    Self::Utf8Error(from)
  }
}

impl From<std::string::FromUtf8Error> for Error {
  #[inline]
  #[track_caller]
  fn from(from: std::string::FromUtf8Error) -> Self {
    Self::Utf8Error(from.utf8_error())
  }
}

impl From<HttpError> for Error {
  #[inline]
  fn from(from: HttpError) -> Self {
    Self::HttpError(from)
  }
}

impl From<WebSocketError> for Error {
  #[inline]
  fn from(from: WebSocketError) -> Self {
    Self::WebSocketError(from)
  }
}
