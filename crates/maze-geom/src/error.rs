// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Failures raised by fallible box constructors and accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoxError {
    /// Corner index outside `0..=7`.
    #[error("corner index {index} out of range (a box has 8 corners, 0..=7)")]
    CornerOutOfRange {
        /// Offending index.
        index: usize,
    },
    /// A box cannot be bounded from zero points.
    #[error("cannot build a bounding box from an empty point set")]
    EmptyPointSet,
}
