//! Ordered collection of parsed levels

use crate::level::Level;

/// Levels from one source, in the order their separators appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get a level by its position in the source
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Find the first level with an exact title match
    pub fn find_by_title(&self, title: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.title == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.levels.iter()
    }

    pub fn into_inner(self) -> Vec<Level> {
        self.levels
    }
}

impl From<Vec<Level>> for LevelSet {
    fn from(levels: Vec<Level>) -> Self {
        Self::new(levels)
    }
}

impl IntoIterator for LevelSet {
    type Item = Level;
    type IntoIter = std::vec::IntoIter<Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.into_iter()
    }
}

impl<'a> IntoIterator for &'a LevelSet {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
