//! The slice of HTTP/1.1 needed to upgrade connections and to serve the chat page.

mod http_error;
mod known_header_name;
mod mime;
mod request_head;
mod response;
#[cfg(feature = "tokio")]
mod static_assets;
mod status_code;

pub use http_error::HttpError;
pub use known_header_name::KnownHeaderName;
pub use mime::Mime;
pub use request_head::RequestHead;
pub use response::Response;
#[cfg(feature = "tokio")]
pub use static_assets::StaticAssets;
pub use status_code::StatusCode;

