#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

mod config;
mod error;
pub mod http;
pub mod matchmaking;
pub mod misc;
#[cfg(feature = "tokio")]
pub mod server;
pub mod web_socket;

pub use config::Config;
pub use error::Error;

pub(crate) const _MAX_PAYLOAD_LEN: usize = 1024 * 1024;

/// Shortcut of [`core::result::Result<T, Error>`].
pub type Result<T> = core::result::Result<T, Error>;
