//! Practice referee binary.
//!
//! Serves the chess protocol at `/chess/` on `BIND_ADDR`, answering AI requests with random legal moves.

use gambit::referee::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gambit::log();
    gambit::kys();
    Server::run(Arc::new(Fish)).await?;
    Ok(())
}
