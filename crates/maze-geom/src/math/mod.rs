// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Float32 vector and matrix helpers used by the collision types.
//!
//! Model transforms are plain [`Mat4`] values; [`translate`], [`scale`] and
//! [`rotate_about`] post-multiply an existing matrix the same way a scene
//! graph accumulates local transforms.

mod mat4;
mod vec3;

pub use mat4::{rotate_about, scale, translate, Mat4};
pub use vec3::Vec3;

/// Degeneracy threshold for lengths and normalisation.
pub const EPSILON: f32 = 1e-6;

