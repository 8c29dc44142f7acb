//! Turn orchestration.
//!
//! A session is one actor task that owns the board and the move log. Everything else
//! talks to it through a [`SessionHandle`]; strategy invocations and acknowledgements run
//! as side tasks and post their completions back into the same mailbox.
mod command;
mod config;
mod error;
mod handle;
mod notice;
mod orchestrator;
mod phase;
mod settings;
mod snapshot;

pub use command::*;
pub use config::*;
pub use error::*;
pub use handle::*;
pub use notice::*;
pub use orchestrator::*;
pub use phase::*;
pub use settings::*;
pub use snapshot::*;
