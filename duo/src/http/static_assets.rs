use crate::{
  http::{KnownHeaderName, Mime, RequestHead, Response, StatusCode},
  misc::StreamWriter,
};
use httparse::Header;
use std::path::{Path, PathBuf};

/// Serves the chat page and its script from a directory.
#[derive(Clone, Debug)]
pub struct StaticAssets {
  dir: PathBuf,
}

impl StaticAssets {
  /// `dir` must contain `index.html` and `script.js`.
  #[inline]
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// Base directory.
  #[inline]
  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// Writes the asset requested by `req`, or an error page, into `stream`.
  ///
  /// Returns the status code that was sent.
  #[inline]
  pub async fn respond<SW>(&self, req: &RequestHead, stream: &mut SW) -> crate::Result<StatusCode>
  where
    SW: StreamWriter,
  {
    let (file, mime, error_body): (_, _, &[u8]) = match req.path() {
      "/" => ("index.html", Mime::TextHtml, b"Error loading page"),
      "/script.js" => ("script.js", Mime::ApplicationJavascript, b"Error loading script"),
      _ => {
        write_text(stream, b"Not found", StatusCode::NotFound).await?;
        return Ok(StatusCode::NotFound);
      }
    };
    let content = match tokio::fs::read(self.dir.join(file)).await {
      Ok(elem) => elem,
      Err(_err) => {
        _warn!(file, err = %_err, "Couldn't read asset");
        write_text(stream, error_body, StatusCode::InternalServerError).await?;
        return Ok(StatusCode::InternalServerError);
      }
    };
    let headers =
      [Header { name: KnownHeaderName::ContentType.as_str(), value: mime.as_str().as_bytes() }];
    Response { body: &content, headers: &headers, status_code: StatusCode::Ok }
      .write(stream)
      .await?;
    Ok(StatusCode::Ok)
  }
}

async fn write_text<SW>(stream: &mut SW, body: &[u8], status_code: StatusCode) -> crate::Result<()>
where
  SW: StreamWriter,
{
  let headers = [Header {
    name: KnownHeaderName::ContentType.as_str(),
    value: Mime::TextPlain.as_str().as_bytes(),
  }];
  Response { body, headers: &headers, status_code }.write(stream).await
}
