// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Box types and the penetration search.
//!
//! Collision is inclusive on faces: two boxes sharing a face collide with a
//! zero-depth penetration. Resolution code that needs strict separation
//! applies [`aabb::Penetration::with_skin`].

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Cardinal axes used by the separating-axis search."]
pub mod axis;
