// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for maze collision.

This crate provides:
- Float32 `Vec3` and column-major `Mat4` with model-transform helpers.
- Axis-aligned bounding boxes (`Aabb`) with an inclusive collision test.
- A three-axis minimum-penetration search (`Penetration`).

Design notes:
- Every box constructor and operator keeps `min <= max` per axis.
- Boxes are values; there is no shared identity between copies.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Failure types.
pub mod error;
/// Vector and matrix helpers.
pub mod math;
/// Box and axis types.
pub mod types;

pub use error::BoxError;
pub use types::aabb::{intervals_collide, signed_overlap, Aabb, Penetration};
pub use types::axis::Axis;
