// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised while building an in-memory wall bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The bitmap has zero rows or zero columns.
    #[error("maze bitmap is empty")]
    EmptyBitmap,
    /// A text row differs in length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A text row contains a character that is neither `#` nor `.`.
    #[error("unexpected glyph {glyph:?} at row {row}, column {col}")]
    InvalidGlyph {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// Offending character.
        glyph: char,
    },
    /// A flat cell buffer does not match `width * height`.
    #[error("expected {expected} cells for the stated dimensions, got {found}")]
    DimensionMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
}
