//! Chess client binary.
//!
//! Connects to the backend websocket, starts a session from flags or environment,
//! and plays human moves typed at the prompt.

use clap::Parser;
use gambit::cli::*;
use gambit::exchange::*;
use gambit::session::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gambit::log();
    gambit::kys();
    let args = Args::parse();
    let link = Link::connect(&args.url).await?;
    let handle = SessionHandle::open(link, args.settings());
    let notices = handle.watch()?;
    handle.start(args.config()).await?;
    Terminal::from(handle).run(notices).await
}
