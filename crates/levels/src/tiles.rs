//! Tile system for levels
//!
//! Every square of a Sokoban grid is either a wall or floor. Boxes, goals
//! and the player sit on floor squares and are tracked separately on the
//! [`Level`](crate::Level) as position lists.

use serde::{Deserialize, Serialize};

/// Static nature of one grid square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Impassable square
    Wall,
    /// Passable square, possibly holding a goal, jewel or the player
    Floor,
}

/// One recognized character of the level notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// `#`
    Wall,
    /// `@`
    Player,
    /// `+`
    PlayerOnGoal,
    /// `$`
    Jewel,
    /// `*`
    JewelOnGoal,
    /// `.`
    Goal,
    /// ` `
    Floor,
}

impl Glyph {
    /// Every glyph in the notation
    pub const ALL: [Glyph; 7] = [
        Glyph::Wall,
        Glyph::Player,
        Glyph::PlayerOnGoal,
        Glyph::Jewel,
        Glyph::JewelOnGoal,
        Glyph::Goal,
        Glyph::Floor,
    ];

    /// Classify a single byte, returning `None` for anything outside the notation
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x23 => Some(Glyph::Wall),
            0x40 => Some(Glyph::Player),
            0x2b => Some(Glyph::PlayerOnGoal),
            0x24 => Some(Glyph::Jewel),
            0x2a => Some(Glyph::JewelOnGoal),
            0x2e => Some(Glyph::Goal),
            0x20 => Some(Glyph::Floor),
            _ => None,
        }
    }

    /// Classify a character
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok().and_then(Self::from_byte)
    }

    /// Character this glyph is written as
    pub fn as_char(self) -> char {
        match self {
            Glyph::Wall => '#',
            Glyph::Player => '@',
            Glyph::PlayerOnGoal => '+',
            Glyph::Jewel => '$',
            Glyph::JewelOnGoal => '*',
            Glyph::Goal => '.',
            Glyph::Floor => ' ',
        }
    }

    /// Tile kind recorded in the grid for this glyph
    #[inline]
    pub fn tile(self) -> TileKind {
        match self {
            Glyph::Wall => TileKind::Wall,
            _ => TileKind::Floor,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        matches!(self, Glyph::Player | Glyph::PlayerOnGoal)
    }

    #[inline]
    pub fn is_jewel(self) -> bool {
        matches!(self, Glyph::Jewel | Glyph::JewelOnGoal)
    }

    #[inline]
    pub fn is_goal(self) -> bool {
        matches!(self, Glyph::PlayerOnGoal | Glyph::JewelOnGoal | Glyph::Goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_table() {
        assert_eq!(Glyph::from_byte(b'#'), Some(Glyph::Wall));
        assert_eq!(Glyph::from_byte(b'@'), Some(Glyph::Player));
        assert_eq!(Glyph::from_byte(b'+'), Some(Glyph::PlayerOnGoal));
        assert_eq!(Glyph::from_byte(b'$'), Some(Glyph::Jewel));
        assert_eq!(Glyph::from_byte(b'*'), Some(Glyph::JewelOnGoal));
        assert_eq!(Glyph::from_byte(b'.'), Some(Glyph::Goal));
        assert_eq!(Glyph::from_byte(b' '), Some(Glyph::Floor));
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(Glyph::from_byte(b'%'), None);
        assert_eq!(Glyph::from_byte(b'\t'), None);
        assert_eq!(Glyph::from_byte(b'-'), None);
        assert_eq!(Glyph::from_char('é'), None);
    }

    #[test]
    fn test_only_wall_glyph_is_wall_tile() {
        for glyph in Glyph::ALL {
            let expected = if glyph == Glyph::Wall {
                TileKind::Wall
            } else {
                TileKind::Floor
            };
            assert_eq!(glyph.tile(), expected);
            assert_eq!(Glyph::from_char(glyph.as_char()), Some(glyph));
        }
    }

    #[test]
    fn test_combined_glyphs() {
        assert!(Glyph::JewelOnGoal.is_jewel());
        assert!(Glyph::JewelOnGoal.is_goal());
        assert!(!Glyph::JewelOnGoal.is_player());

        assert!(Glyph::PlayerOnGoal.is_player());
        assert!(Glyph::PlayerOnGoal.is_goal());
        assert!(!Glyph::PlayerOnGoal.is_jewel());
    }

    #[test]
    fn test_tile_kind_serializes_lowercase() {
        let json = serde_json::to_string(&[TileKind::Wall, TileKind::Floor]).unwrap();
        assert_eq!(json, r#"["wall","floor"]"#);
    }
}
