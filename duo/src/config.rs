use crate::misc::FromVars;
use core::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const ADDR: &str = "DUO_ADDR";
const MAX_PAYLOAD_LEN: &str = "DUO_MAX_PAYLOAD_LEN";
const PUBLIC_DIR: &str = "DUO_PUBLIC_DIR";

/// Runtime parameters of the relay.
///
/// Usually built through [`crate::misc::EnvVars`] from `DUO_ADDR`, `DUO_MAX_PAYLOAD_LEN` and
/// `DUO_PUBLIC_DIR`. Absent variables fall back to [`Config::default`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
  /// Listening address.
  pub addr: SocketAddr,
  /// Client frames declaring a bigger payload terminate the connection.
  pub max_payload_len: usize,
  /// Directory that contains `index.html` and `script.js`.
  pub public_dir: PathBuf,
}

impl Default for Config {
  #[inline]
  fn default() -> Self {
    Self {
      addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
      max_payload_len: crate::_MAX_PAYLOAD_LEN,
      public_dir: PathBuf::from("public"),
    }
  }
}

impl FromVars for Config {
  #[inline]
  fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self> {
    let mut this = Self::default();
    for (key, value) in vars {
      match key.as_str() {
        ADDR => this.addr = value.trim().parse()?,
        MAX_PAYLOAD_LEN => this.max_payload_len = value.trim().parse()?,
        PUBLIC_DIR => this.public_dir = PathBuf::from(value),
        _ => {}
      }
    }
    Ok(this)
  }
}
