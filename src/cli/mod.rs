//! Terminal front end: flags in, board and annotations out.
mod args;
mod diagram;
mod entry;
mod terminal;

pub use args::*;
pub use diagram::*;
pub use entry::*;
pub use terminal::*;
