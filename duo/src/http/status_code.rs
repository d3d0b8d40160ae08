/// HTTP status codes produced by the relay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusCode {
  /// 101
  SwitchingProtocols,
  /// 200
  Ok,
  /// 400
  BadRequest,
  /// 404
  NotFound,
  /// 500
  InternalServerError,
}

impl StatusCode {
  /// Numeric representation.
  #[inline]
  pub const fn code(self) -> u16 {
    match self {
      Self::SwitchingProtocols => 101,
      Self::Ok => 200,
      Self::BadRequest => 400,
      Self::NotFound => 404,
      Self::InternalServerError => 500,
    }
  }

  /// Reason phrase of the status line.
  #[inline]
  pub const fn reason(self) -> &'static str {
    match self {
      Self::SwitchingProtocols => "Switching Protocols",
      Self::Ok => "OK",
      Self::BadRequest => "Bad Request",
      Self::NotFound => "Not Found",
      Self::InternalServerError => "Internal Server Error",
    }
  }
}
