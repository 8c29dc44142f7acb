//! Rules engine adapter.
//!
//! Thin layer over `shakmaty` exposing exactly what the session needs:
//! apply a move, list legal moves, whose turn it is, and whether the game is over.
//! Moves cross this boundary as [`Ply`] (wire-shaped `{from, to, promotion}`),
//! positions as FEN strings.
mod board;
mod color;
mod error;
mod outcome;
mod ply;

pub use board::*;
pub use color::*;
pub use error::*;
pub use outcome::*;
pub use ply::*;
