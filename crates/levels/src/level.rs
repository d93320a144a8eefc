//! Level structure
//!
//! Represents a single Sokoban puzzle: its wall/floor grid plus the
//! positions of the player, jewels and goals.

use crate::tiles::{Glyph, TileKind};
use serde::{Deserialize, Serialize};
use sokoban_core::GridPosition;

/// A single Sokoban level
///
/// Rows may be ragged: each entry of `tiles` holds exactly as many squares
/// as its source line had characters, while `col_count` records the widest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Title from the `;` separator line
    pub title: String,

    /// Number of grid rows
    pub row_count: usize,

    /// Width of the widest grid row
    pub col_count: usize,

    /// Wall/floor grid, one inner vector per row
    pub tiles: Vec<Vec<TileKind>>,

    /// Player start, if a player character was present
    pub player: Option<GridPosition>,

    /// Jewel (box) positions in row-major source order
    pub jewels: Vec<GridPosition>,

    /// Goal positions in row-major source order
    pub goals: Vec<GridPosition>,
}

impl Level {
    /// Create a new empty level
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            row_count: 0,
            col_count: 0,
            tiles: Vec::new(),
            player: None,
            jewels: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Record one glyph at `pos`, updating the entity lists
    ///
    /// A later player glyph replaces an earlier one.
    pub(crate) fn place(&mut self, glyph: Glyph, pos: GridPosition) {
        if glyph.is_player() {
            self.player = Some(pos);
        }
        if glyph.is_jewel() {
            self.jewels.push(pos);
        }
        if glyph.is_goal() {
            self.goals.push(pos);
        }
    }

    /// Append a completed grid row
    pub(crate) fn push_row(&mut self, row: Vec<TileKind>) {
        self.col_count = self.col_count.max(row.len());
        self.tiles.push(row);
        self.row_count = self.tiles.len();
    }

    /// Get the tile at a position, `None` outside the row's literal width
    pub fn tile_at(&self, pos: GridPosition) -> Option<TileKind> {
        self.tiles.get(pos.row)?.get(pos.col).copied()
    }

    /// Check if a position holds a wall
    pub fn is_wall(&self, pos: GridPosition) -> bool {
        self.tile_at(pos) == Some(TileKind::Wall)
    }

    /// Check if a position is a goal square
    pub fn is_goal(&self, pos: GridPosition) -> bool {
        self.goals.contains(&pos)
    }

    /// Check if a jewel starts on a position
    pub fn has_jewel(&self, pos: GridPosition) -> bool {
        self.jewels.contains(&pos)
    }

    /// Literal width of a row
    pub fn row_width(&self, row: usize) -> Option<usize> {
        self.tiles.get(row).map(Vec::len)
    }

    pub fn jewel_count(&self) -> usize {
        self.jewels.len()
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }
}
