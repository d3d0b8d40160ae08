//! Miscellaneous

mod bytes_stream;
mod env_vars;
mod stream_reader;
mod stream_writer;
#[cfg(feature = "tokio")]
mod tokio;

pub use bytes_stream::BytesStream;
pub use env_vars::{EnvVars, FromVars};
pub use stream_reader::StreamReader;
pub use stream_writer::StreamWriter;

/// A tracing register with optioned parameters.
///
/// `RUST_LOG` takes precedence over `fallback_opt`.
#[cfg(feature = "_tracing-tree")]
#[inline]
pub fn tracing_tree_init(fallback_opt: Option<&str>) -> crate::Result<()> {
  use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
  let fallback = fallback_opt.unwrap_or("");
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
  let tracing_tree = tracing_tree::HierarchicalLayer::default()
    .with_indent_amount(2)
    .with_indent_lines(true)
    .with_targets(true)
    .with_thread_ids(true)
    .with_thread_names(true)
    .with_verbose_entry(false)
    .with_verbose_exit(false)
    .with_writer(std::io::stderr);
  tracing_subscriber::Registry::default().with(env_filter).with(tracing_tree).try_init()?;
  Ok(())
}
