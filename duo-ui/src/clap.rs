use clap::Parser;
use core::net::SocketAddr;
use duo::{misc::EnvVars, server::Server, Config};
use std::path::PathBuf;

pub(crate) async fn init() -> duo::Result<()> {
  let args = Cli::parse();
  Server::new(args.into_config()?).run().await
}

/// Anonymous one-to-one chat relay.
///
/// Configuration is read from `DUO_ADDR`, `DUO_MAX_PAYLOAD_LEN` and `DUO_PUBLIC_DIR`, either
/// from the process environment merged with the nearest `.env` file or from the file passed
/// with `-e`. Flags take precedence.
#[derive(Debug, clap::Parser)]
#[command(author, long_about = None, name = "duo", version)]
struct Cli {
  /// Listening address
  #[arg(long, short = 'a', value_name = "Address")]
  addr: Option<SocketAddr>,
  /// `.env` file used instead of the environment
  #[arg(long, short = 'e', value_name = "Path")]
  env_file: Option<PathBuf>,
  /// Maximum payload length of client frames
  #[arg(long, short = 'm', value_name = "Bytes")]
  max_payload_len: Option<usize>,
  /// Directory with `index.html` and `script.js`
  #[arg(long, short = 'p', value_name = "Path")]
  public_dir: Option<PathBuf>,
}

impl Cli {
  fn into_config(self) -> duo::Result<Config> {
    let mut config = match &self.env_file {
      Some(path) => EnvVars::<Config>::from_env_path(path)?.finish(),
      None => EnvVars::<Config>::from_available()?.finish(),
    };
    if let Some(elem) = self.addr {
      config.addr = elem;
    }
    if let Some(elem) = self.max_payload_len {
      config.max_payload_len = elem;
    }
    if let Some(elem) = self.public_dir {
      config.public_dir = elem;
    }
    Ok(config)
  }
}
