//! Command-line launcher of the duo chat relay.

mod clap;

#[tokio::main]
async fn main() -> duo::Result<()> {
  duo::misc::tracing_tree_init(Some("info"))?;
  clap::init().await
}
