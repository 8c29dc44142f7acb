//! Move-selection policies, one per color, fixed for the session.
mod resolution;
mod strategy;

pub use resolution::*;
pub use strategy::*;
