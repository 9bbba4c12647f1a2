// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// One of the three cardinal world axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Bitmap columns.
    X,
    /// Up.
    Y,
    /// Bitmap rows.
    Z,
}

impl Axis {
    /// All axes in search order; ties in penetration depth resolve to the
    /// earliest entry.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of the axis.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Positive unit vector along the axis.
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::UNIT_X,
            Self::Y => Vec3::UNIT_Y,
            Self::Z => Vec3::UNIT_Z,
        }
    }
}
