//! Level file parser
//!
//! Parses the plain-text Sokoban level notation. A file holds any number of
//! levels, each introduced by a `;` separator line carrying its title and
//! followed by the rows of its grid:
//!
//! ```text
//! ; Level 1
//! #####
//! #@$.#
//! #####
//! ```
//!
//! Blank lines are ignored wherever they appear.

use crate::level::Level;
use crate::set::LevelSet;
use crate::tiles::Glyph;
use crate::{LevelError, Result};
use sokoban_core::GridPosition;
use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Parse a sequence of lines into levels
///
/// Either every level is returned or the first error is; a malformed line
/// never yields a partial result.
pub fn parse<I, S>(lines: I) -> Result<Vec<Level>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LevelParser::new();
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    Ok(parser.finish())
}

/// State for one pass over a level file
///
/// The level being filled is always the last one opened.
struct LevelParser {
    levels: Vec<Level>,
    line_number: usize,
}

impl LevelParser {
    fn new() -> Self {
        Self {
            levels: Vec::new(),
            line_number: 0,
        }
    }

    /// Consume one input line
    fn feed(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;
        let line = strip_terminator(raw);

        if line.trim().is_empty() {
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix(';') {
            self.open_level(rest.trim());
            return Ok(());
        }

        self.parse_row(line)
    }

    /// Start a new level from a separator line
    fn open_level(&mut self, title: &str) {
        tracing::info!("{}", title);
        self.levels.push(Level::new(title));
    }

    /// Parse a grid row into the current level
    fn parse_row(&mut self, line: &str) -> Result<()> {
        let line_number = self.line_number;
        let level = self
            .levels
            .last_mut()
            .ok_or_else(|| LevelError::RowBeforeLevel {
                line_number,
                line: line.to_string(),
            })?;

        let row = level.row_count;
        let mut tiles = Vec::with_capacity(line.len());

        for (col, c) in line.chars().enumerate() {
            let glyph = Glyph::from_char(c).ok_or_else(|| LevelError::UnrecognizedCharacter {
                character: c,
                line_number,
                column: col,
                line: line.to_string(),
            })?;

            tiles.push(glyph.tile());
            level.place(glyph, GridPosition::new(row, col));
        }

        level.push_row(tiles);
        Ok(())
    }

    fn finish(self) -> Vec<Level> {
        self.levels
    }
}

/// Remove a trailing `\n`, `\r\n` or `\r`
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Level file loader
pub struct LevelLoader;

impl LevelLoader {
    /// Load all levels from a file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LevelSet> {
        let path = path.as_ref();
        tracing::debug!("Loading levels from {}", path.display());

        let file = fs::File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LevelError::NotFound(path.display().to_string()),
            _ => LevelError::FileError(e),
        })?;

        let levels = Self::load_reader(BufReader::new(file))?;

        tracing::info!("Loaded {} levels from {}", levels.len(), path.display());
        Ok(levels)
    }

    /// Stream levels from a buffered reader
    pub fn load_reader<R: BufRead>(reader: R) -> Result<LevelSet> {
        let mut parser = LevelParser::new();
        for line in reader.lines() {
            parser.feed(&line?)?;
        }
        Ok(LevelSet::new(parser.finish()))
    }

    /// Parse levels from in-memory text
    pub fn parse_str(data: &str) -> Result<LevelSet> {
        parse(data.lines()).map(LevelSet::new)
    }
}
