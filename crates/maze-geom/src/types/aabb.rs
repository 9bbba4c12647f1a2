// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::BoxError;
use crate::math::{Mat4, Vec3};
use crate::types::axis::Axis;
use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components. Every
///   constructor and arithmetic operator re-normalises to keep this true.
/// - Boxes are plain values; copies never alias.
///
/// Corner numbering used by [`Aabb::corner`]:
///
/// | idx | corner            |
/// |-----|-------------------|
/// | 0   | `min`             |
/// | 1   | `min + dx`        |
/// | 2   | `min + dx + dy`   |
/// | 3   | `min + dy`        |
/// | 4   | `min + dy + dz`   |
/// | 5   | `min + dz`        |
/// | 6   | `min + dx + dz`   |
/// | 7   | `max`             |
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        assert!(
            min.x() <= max.x() && min.y() <= max.y() && min.z() <= max.z(),
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Builds a box spanning two arbitrary opposite corners.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(&b),
            max: a.max(&b),
        }
    }

    /// Builds a box from an origin and a signed size.
    ///
    /// A negative size on an axis extends the box toward negative
    /// coordinates from `origin` on that axis.
    ///
    /// ```
    /// use maze_geom::{Aabb, math::Vec3};
    /// let b = Aabb::from_origin_dimensions(Vec3::new(2.0, 2.0, 2.0), Vec3::new(-1.0, 3.0, -1.0));
    /// assert_eq!(b.min().to_array(), [1.0, 2.0, 1.0]);
    /// assert_eq!(b.max().to_array(), [2.0, 5.0, 2.0]);
    /// ```
    pub fn from_origin_dimensions(origin: Vec3, dims: Vec3) -> Self {
        let shift = dims.min(&Vec3::ZERO);
        let min = origin + shift;
        Self {
            min,
            max: min + dims.abs(),
        }
    }

    /// Builds the minimal AABB that contains all `points`.
    pub fn from_points(points: &[Vec3]) -> Result<Self, BoxError> {
        let (first, rest) = points.split_first().ok_or(BoxError::EmptyPointSet)?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Extent along each axis (`max - min`).
    pub fn dimensions(&self) -> Vec3 {
        self.max - self.min
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Returns a copy moved so its minimum corner sits at `new_min`.
    pub fn at(&self, new_min: Vec3) -> Self {
        Self {
            min: new_min,
            max: new_min + self.dimensions(),
        }
    }

    /// All eight corners in index order.
    pub fn corners(&self) -> [Vec3; 8] {
        let d = self.dimensions();
        let dx = Vec3::new(d.x(), 0.0, 0.0);
        let dy = Vec3::new(0.0, d.y(), 0.0);
        let dz = Vec3::new(0.0, 0.0, d.z());
        let m = self.min;
        [
            m,
            m + dx,
            m + dx + dy,
            m + dy,
            m + dy + dz,
            m + dz,
            m + dx + dz,
            self.max,
        ]
    }

    /// Returns corner `index`.
    ///
    /// # Errors
    /// [`BoxError::CornerOutOfRange`] when `index > 7`.
    pub fn corner(&self, index: usize) -> Result<Vec3, BoxError> {
        self.corners()
            .get(index)
            .copied()
            .ok_or(BoxError::CornerOutOfRange { index })
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, p: &Vec3) -> bool {
        Axis::ALL.iter().all(|a| {
            let i = a.index();
            p[i] >= self.min[i] && p[i] <= self.max[i]
        })
    }

    /// Returns `true` if the boxes overlap on all three axes.
    ///
    /// Inclusive: boxes that only share a face, edge or corner collide.
    pub fn collides(&self, other: &Self) -> bool {
        Axis::ALL.iter().all(|a| {
            let i = a.index();
            intervals_collide(self.min[i], self.max[i], other.min[i], other.max[i])
        })
    }

    /// Returns the union of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Grows the box by `m` in every direction (shrinks when negative).
    pub fn inflate(&self, m: f32) -> Self {
        let d = Vec3::splat(m);
        Self::from_corners(self.min - d, self.max + d)
    }

    /// Non-uniform scale about the world origin.
    pub fn scaled(&self, factors: Vec3) -> Self {
        Self::from_corners(self.min.mul_elem(&factors), self.max.mul_elem(&factors))
    }

    /// Bounds this box after transformation by `mat`.
    ///
    /// Evaluates all eight corners, so rotations are re-bounded as well.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let corners = self.corners();
        let mut min = mat.transform_point(&corners[0]);
        let mut max = min;
        for c in &corners[1..] {
            let p = mat.transform_point(c);
            min = min.min(&p);
            max = max.max(&p);
        }
        Self { min, max }
    }

    /// Projects every corner onto `axis` and returns `(min, max)` of the
    /// dot products.
    fn project(&self, axis: Axis) -> (f32, f32) {
        let unit = axis.unit();
        self.corners()
            .iter()
            .map(|c| c.dot(&unit))
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), f| {
                (lo.min(f), hi.max(f))
            })
    }

    /// Searches the three cardinal axes for the one with the smallest
    /// absolute signed overlap against `other`.
    ///
    /// The result is only a penetration when the boxes collide; for
    /// separated boxes it describes the smallest gap instead. Prefer
    /// [`Aabb::intersection`], which checks first.
    pub fn least_separation(&self, other: &Self) -> Penetration {
        let mut best = Penetration {
            axis: Axis::X,
            depth: f32::INFINITY,
            side: 1.0,
        };
        for axis in Axis::ALL {
            let (a_min, a_max) = self.project(axis);
            let (b_min, b_max) = other.project(axis);
            let depth = signed_overlap(a_min, a_max, b_min, b_max);
            if depth.abs() < best.depth.abs() {
                let side = if a_max > b_max { -1.0 } else { 1.0 };
                best = Penetration { axis, depth, side };
            }
        }
        best
    }

    /// Minimum translation vector pushing `self` out of `other`.
    ///
    /// Returns `None` when the boxes do not collide. Subtracting
    /// [`Penetration::vector`] from `self` separates the pair on the
    /// reported axis (leaving the faces touching).
    pub fn intersection(&self, other: &Self) -> Option<Penetration> {
        self.collides(other).then(|| self.least_separation(other))
    }
}

/// Per-axis overlap of `[min1, max1]` and `[min2, max2]` (inclusive).
pub fn intervals_collide(min1: f32, max1: f32, min2: f32, max2: f32) -> bool {
    min1.max(min2) <= max1.min(max2)
}

/// Signed overlap of interval 1 against interval 2.
///
/// When interval 1 reaches further right (`max1 > max2`) the result is
/// `min1 - max2`; otherwise `max1 - min2`. Subtracting the value from
/// interval 1 moves it clear of interval 2, so operand order matters.
pub fn signed_overlap(min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    if max1 > max2 {
        return min1 - max2;
    }
    max1 - min2
}

/// Axis and signed depth of the smallest separating move between two boxes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Penetration {
    axis: Axis,
    depth: f32,
    // +1 when subtracting moves the first box toward -axis, -1 otherwise.
    side: f32,
}

impl Penetration {
    /// Winning axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Signed depth along [`Penetration::axis`].
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// `axis * depth`; subtract it from the first box to separate.
    pub fn vector(&self) -> Vec3 {
        self.axis.unit() * self.depth
    }

    /// Same correction, pushed `skin` further along the separating
    /// direction so the boxes end up strictly apart.
    pub fn with_skin(&self, skin: f32) -> Self {
        Self {
            depth: self.depth + self.side * skin,
            ..*self
        }
    }
}

impl Add<Vec3> for Aabb {
    type Output = Self;
    fn add(self, off: Vec3) -> Self {
        Self {
            min: self.min + off,
            max: self.max + off,
        }
    }
}

impl AddAssign<Vec3> for Aabb {
    fn add_assign(&mut self, off: Vec3) {
        *self = *self + off;
    }
}

impl Sub<Vec3> for Aabb {
    type Output = Self;
    fn sub(self, off: Vec3) -> Self {
        Self {
            min: self.min - off,
            max: self.max - off,
        }
    }
}

impl SubAssign<Vec3> for Aabb {
    fn sub_assign(&mut self, off: Vec3) {
        *self = *self - off;
    }
}

impl Mul<f32> for Aabb {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self::from_corners(self.min * s, self.max * s)
    }
}

impl Div<f32> for Aabb {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Self::from_corners(self.min / s, self.max / s)
    }
}
