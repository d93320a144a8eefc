//! # Sokoban Levels
//!
//! This crate parses the plain-text Sokoban level notation into structured
//! levels for solvers, renderers and editors.
//!
//! ## Features
//! - Multi-level file parser with `;` separator lines carrying titles
//! - Wall/floor tile grid with ragged rows preserved
//! - Player, jewel and goal positions in source order
//! - Streaming loads from files or any buffered reader
//!
//! ## Level Format
//!
//! | Char | Meaning |
//! |------|---------|
//! | `#`  | wall |
//! | `@`  | player |
//! | `+`  | player on goal |
//! | `$`  | jewel |
//! | `*`  | jewel on goal |
//! | `.`  | goal |
//! | ` `  | floor |
//!
//! ```rust
//! use sokoban_levels::LevelLoader;
//!
//! let levels = LevelLoader::parse_str("; Level 1\n#####\n#@$.#\n#####\n").unwrap();
//! assert_eq!(levels.get(0).unwrap().col_count, 5);
//! ```

pub mod error;
pub mod level;
pub mod tiles;
pub mod parser;
pub mod set;

pub use error::{LevelError, Result};
pub use level::Level;
pub use tiles::{Glyph, TileKind};
pub use parser::{parse as parse_levels, LevelLoader};
pub use set::LevelSet;
