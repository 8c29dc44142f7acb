//! Mixed-strategy chess client.
//!
//! Each color is driven by a [`Strategy`](strategy::Strategy): a human dropping pieces,
//! a local random mover, or a remote AI reached over a persistent websocket.
//! The [`session`] actor is the single source of truth for the board and the move log,
//! and the [`exchange`] keeps exactly one move request in flight at a time.
//!
//! ## Modules
//!
//! - [`rules`] — Board adapter over `shakmaty` (legality, FEN, terminal detection)
//! - [`exchange`] — Wire protocol, websocket link, single-flight request correlation
//! - [`strategy`] — Human / random / AI move selection
//! - [`history`] — Append-only log of applied moves and annotations
//! - [`session`] — Turn orchestration state machine and its handle
//! - [`referee`] — Practice backend speaking the same protocol (requires `server` feature)
//! - [`cli`] — Terminal front end (requires `cli` feature)
pub mod exchange;
pub mod history;
pub mod rules;
pub mod session;
pub mod strategy;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "server")]
pub mod referee;

// ============================================================================
// STRATEGY PACING
// Settling intervals make automatic turns perceptible on the board.
// ============================================================================
/// Delay before the random mover acts (milliseconds).
pub const RANDOM_SETTLE_MS: u64 = 3000;
/// Delay before the AI mover asks the backend (milliseconds).
pub const AI_SETTLE_MS: u64 = 500;

// ============================================================================
// EXCHANGE
// ============================================================================
/// Time a pending move request may wait for its answer before it is declared lost.
pub const RESPONSE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

// ============================================================================
// SESSION DEFAULTS
// ============================================================================
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "ollama-llama3.1";
/// Models the backend is known to serve.
pub const KNOWN_MODELS: [&str; 3] = ["openai-gpt-4o", "openai-gpt-4o-mini", "ollama-llama3.1"];
/// Model ids with this prefix are paid providers and need an API key.
pub const PAID_MODEL_PREFIX: &str = "openai";
/// Backend endpoint the client dials by default.
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:8000/chess/";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(any(feature = "cli", feature = "server"))]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(any(feature = "cli", feature = "server"))]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
