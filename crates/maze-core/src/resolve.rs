// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Position-based movement with immediate overlap correction.
//!
//! Each step derives a displacement from direction, speed and `dt`, moves the
//! candidate volume, then scans every solid linearly. Every colliding solid
//! contributes its minimum translation vector and the vectors are summed into
//! one correction. With two or more simultaneous contacts the sum can push
//! further than any single contact requires; that overshoot is accepted.

use maze_geom::math::Vec3;
use maze_geom::Aabb;
use tracing::trace;

/// Per-frame movement intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRequest {
    /// Desired direction; normalised before use, zero means stand still.
    pub direction: Vec3,
    /// Apply the sprint multiplier.
    pub sprint: bool,
    /// Elapsed seconds.
    pub dt: f32,
}

impl MoveRequest {
    /// A request that does not move.
    pub const fn idle(dt: f32) -> Self {
        Self {
            direction: Vec3::ZERO,
            sprint: false,
            dt,
        }
    }
}

/// Outcome of [`MovementResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Volume after correction.
    pub volume: Aabb,
    /// Uncorrected displacement.
    pub displacement: Vec3,
    /// Summed correction subtracted from the candidate.
    pub correction: Vec3,
    /// Solids the candidate touched.
    pub contacts: usize,
}

impl Resolution {
    /// `true` when the request asked for movement.
    pub fn moved(&self) -> bool {
        !self.displacement.is_zero()
    }
}

/// Converts move requests into corrected volumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementResolver {
    speed: f32,
    sprint_factor: f32,
    skin: f32,
}

impl Default for MovementResolver {
    fn default() -> Self {
        Self::new(3.0, 2.0)
    }
}

impl MovementResolver {
    /// Extra push along each contact axis so corrected volumes end up
    /// strictly apart under the inclusive collision test.
    pub const DEFAULT_SKIN: f32 = 1e-4;

    /// Resolver moving at `speed` m/s, multiplied by `sprint_factor` when
    /// sprinting.
    pub fn new(speed: f32, sprint_factor: f32) -> Self {
        Self {
            speed,
            sprint_factor,
            skin: Self::DEFAULT_SKIN,
        }
    }

    /// Overrides the contact skin; `0.0` leaves corrected faces touching.
    pub fn with_skin(mut self, skin: f32) -> Self {
        self.skin = skin;
        self
    }

    /// Base speed in m/s.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Sprint multiplier.
    pub fn sprint_factor(&self) -> f32 {
        self.sprint_factor
    }

    /// `direction * speed * (sprint ? factor : 1) * dt`.
    pub fn displacement(&self, request: &MoveRequest) -> Vec3 {
        if request.direction.is_zero() {
            return Vec3::ZERO;
        }
        let boost = if request.sprint {
            self.sprint_factor
        } else {
            1.0
        };
        request.direction.normalize() * (self.speed * boost * request.dt)
    }

    /// Moves `current` per `request` and corrects against `solids`.
    pub fn resolve<'a, I>(&self, current: &Aabb, request: &MoveRequest, solids: I) -> Resolution
    where
        I: IntoIterator<Item = &'a Aabb>,
    {
        let displacement = self.displacement(request);
        let candidate = *current + displacement;

        let mut correction = Vec3::ZERO;
        let mut contacts = 0usize;
        for solid in solids {
            if let Some(p) = candidate.intersection(solid) {
                correction += p.with_skin(self.skin).vector();
                contacts += 1;
            }
        }
        if contacts > 1 {
            trace!(contacts, ?correction, "summed multi-contact correction");
        }

        Resolution {
            volume: candidate - correction,
            displacement,
            correction,
            contacts,
        }
    }
}
