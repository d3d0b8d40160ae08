/// Used to specify the data type that is going to be sent to a counterpart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mime {
  /// application/javascript
  ApplicationJavascript,
  /// text/html
  TextHtml,
  /// text/plain
  TextPlain,
}

impl Mime {
  /// Common string representation.
  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::ApplicationJavascript => "application/javascript",
      Self::TextHtml => "text/html",
      Self::TextPlain => "text/plain",
    }
  }
}
