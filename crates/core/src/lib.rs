//! Sokoban Core - Shared primitives for the level tooling

mod error;
mod positions;

pub use error::*;
pub use positions::*;
