use crate::http::KnownHeaderName;

/// HTTP error
#[derive(Debug)]
pub enum HttpError {
  /// A request lacks a header, or the header lacks the expected value.
  MissingHeader(KnownHeaderName),
  /// Received a request without a method or a path.
  MissingRequestLine,
  /// The request head doesn't fit the reading buffer.
  VeryLargeHttp,
}
