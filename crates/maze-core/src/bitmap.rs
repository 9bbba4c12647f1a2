// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Two-valued wall bitmaps.
//!
//! The decomposer only ever sees the [`WallMap`] predicate. Image decoding
//! lives with the caller; [`Bitmap`] is the in-memory form everything else
//! converts into.

use crate::error::MazeError;

/// Read-only wall predicate over integer tile coordinates.
///
/// Coordinates passed to [`WallMap::is_wall`] are always inside
/// `0..width() x 0..height()`; callers clip before querying.
pub trait WallMap {
    /// Columns in the map.
    fn width(&self) -> u32;
    /// Rows in the map.
    fn height(&self) -> u32;
    /// `true` when tile `(x, y)` is solid.
    fn is_wall(&self, x: u32, y: u32) -> bool;
}

impl<M: WallMap + ?Sized> WallMap for &M {
    fn width(&self) -> u32 {
        (**self).width()
    }
    fn height(&self) -> u32 {
        (**self).height()
    }
    fn is_wall(&self, x: u32, y: u32) -> bool {
        (**self).is_wall(x, y)
    }
}

/// Row-major wall bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Bitmap {
    /// Glyph for a wall cell in [`Bitmap::from_rows`].
    pub const WALL: char = '#';
    /// Glyph for an open cell in [`Bitmap::from_rows`].
    pub const OPEN: char = '.';

    /// Wraps a row-major cell buffer.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyBitmap);
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(MazeError::DimensionMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Samples `f(x, y)` for every tile.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> bool,
    ) -> Result<Self, MazeError> {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self::from_cells(width, height, cells)
    }

    /// Parses ASCII art, one string per row: `#` is wall, `.` is open.
    ///
    /// ```
    /// use maze_core::{Bitmap, WallMap};
    /// let map = Bitmap::from_rows(["#.#", "..."]).unwrap();
    /// assert_eq!((map.width(), map.height()), (3, 2));
    /// assert!(map.is_wall(2, 0));
    /// ```
    pub fn from_rows<I, S>(rows: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0usize;
        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let mut found = 0usize;
            for (col, glyph) in line.chars().enumerate() {
                cells.push(match glyph {
                    Self::WALL => true,
                    Self::OPEN => false,
                    _ => return Err(MazeError::InvalidGlyph { row, col, glyph }),
                });
                found += 1;
            }
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(MazeError::RaggedRows {
                    row,
                    expected,
                    found,
                });
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(MazeError::DimensionMismatch {
                expected: width.saturating_mul(height),
                found: cells.len(),
            });
        };
        Self::from_cells(w, h, cells)
    }

    /// Number of wall tiles.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Renders the map back to `#`/`.` rows.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| {
                row.iter()
                    .map(|wall| if *wall { Self::WALL } else { Self::OPEN })
                    .collect()
            })
            .collect()
    }
}

impl WallMap for Bitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_wall(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let err = Bitmap::from_rows(["###", "#"]).unwrap_err();
        assert_eq!(
            err,
            MazeError::RaggedRows {
                row: 1,
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_unknown_glyphs() {
        let err = Bitmap::from_rows(["#x#"]).unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidGlyph {
                row: 0,
                col: 1,
                glyph: 'x'
            }
        );
    }

    #[test]
    fn rejects_empty_input() {
        let rows: [&str; 0] = [];
        assert_eq!(Bitmap::from_rows(rows), Err(MazeError::EmptyBitmap));
        assert_eq!(Bitmap::from_rows([""]), Err(MazeError::EmptyBitmap));
    }

    #[test]
    fn cell_buffer_must_match_dimensions() {
        assert_eq!(
            Bitmap::from_cells(2, 2, vec![true; 3]),
            Err(MazeError::DimensionMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let map = Bitmap::from_fn(3, 2, |x, y| x == 2 && y == 1).unwrap();
        assert_eq!(map.to_rows(), vec!["...".to_string(), "..#".to_string()]);
        assert_eq!(map.wall_count(), 1);
    }
}
