// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! First-person camera: position plus yaw/pitch, basis derived on demand.

use glam::{Mat4, Vec3};

pub const MAX_PITCH_DEG: f32 = 89.0;
const NEAR: f32 = 0.05;
const FAR: f32 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsCamera {
    pub position: Vec3,
    /// Degrees; 0 looks down +X, 90 down +Z.
    pub yaw_deg: f32,
    /// Degrees, clamped to ±[`MAX_PITCH_DEG`].
    pub pitch_deg: f32,
    pub fov_deg: f32,
}

impl Default for FpsCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            fov_deg: 90.0,
        }
    }
}

impl FpsCamera {
    pub fn looking_at(position: Vec3, target: Vec3, fov_deg: f32) -> Self {
        let d = target - position;
        let yaw_deg = d.z.atan2(d.x).to_degrees();
        let pitch_deg = d
            .y
            .atan2(d.x.hypot(d.z))
            .to_degrees()
            .clamp(-MAX_PITCH_DEG, MAX_PITCH_DEG);
        Self {
            position,
            yaw_deg,
            pitch_deg,
            fov_deg,
        }
    }

    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw_deg.to_radians(), self.pitch_deg.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    /// Forward projected onto the ground plane.
    pub fn flat_forward(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    pub fn right(&self) -> Vec3 {
        self.flat_forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Applies a mouse delta in pixels.
    pub fn look(&mut self, dx: f32, dy: f32, deg_per_px: f32, invert_y: bool) {
        let sign = if invert_y { 1.0 } else { -1.0 };
        self.yaw_deg = (self.yaw_deg + dx * deg_per_px).rem_euclid(360.0);
        self.pitch_deg =
            (self.pitch_deg + sign * dy * deg_per_px).clamp(-MAX_PITCH_DEG, MAX_PITCH_DEG);
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_to_rh(self.position, self.forward(), Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_deg.to_radians(), aspect.max(0.1), NEAR, FAR);
        proj * view
    }
}
