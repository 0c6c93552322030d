// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scalar helpers and orientation math shared by the motion emulators
//!
//! Vector, quaternion and matrix primitives come from `glam`. This module adds
//! the few conventions the dynamics code relies on:
//! - a sign function that returns zero for zero (unlike `f32::signum`)
//! - per-axis linear interpolation
//! - conversions between sensor readings and orientations
//! - pitch/roll/yaw extraction from a world rotation

use glam::{Mat3, Quat, Vec2, Vec3};

/// Sign of `value`: -1, 0 or 1
///
/// `NaN` maps to 0 so a degenerate stop distance produces no control input.
#[inline]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Per-component linear interpolation between `start` and `end`
#[inline]
pub fn lerp_vec3(start: Vec3, end: Vec3, t: Vec3) -> Vec3 {
    start + (end - start) * t
}

/// Rotation that maps +Z onto the direction of `accel`
///
/// Perfect up/down readings have no defined rotation axis; +Y is used instead.
/// A zero reading gives the identity.
pub fn rotation_from_acceleration(accel: Vec3) -> Quat {
    let normalized = accel.normalize_or_zero();
    if normalized == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let angle = normalized.dot(Vec3::Z).clamp(-1.0, 1.0).acos();
    let axis = normalized.cross(Vec3::Z);

    let axis = if axis.length_squared() != 0.0 {
        axis.normalize()
    } else {
        Vec3::Y
    };

    Quat::from_axis_angle(axis, angle)
}

/// Rotation described by a gyroscope delta (axis * radians)
pub fn rotation_from_gyroscope(gyro: Vec3) -> Quat {
    let length = gyro.length();
    if length != 0.0 {
        Quat::from_axis_angle(gyro / length, length)
    } else {
        Quat::IDENTITY
    }
}

/// Rotation matrix for per-axis angles, applied X first, then Y, then Z
pub fn rotational_matrix(angle: Vec3) -> Mat3 {
    Mat3::from_rotation_z(angle.z) * Mat3::from_rotation_y(angle.y) * Mat3::from_rotation_x(angle.x)
}

/// Pitch of a world rotation (elevation of the rotated +Z axis)
pub fn pitch(world_rotation: Quat) -> f32 {
    let vec = world_rotation * Vec3::Z;
    vec.y.atan2(Vec2::new(vec.x, vec.z).length())
}

/// Roll of a world rotation
pub fn roll(world_rotation: Quat) -> f32 {
    let vec = world_rotation * Vec3::Z;
    vec.x.atan2(vec.z)
}

/// Yaw of a world rotation
pub fn yaw(world_rotation: Quat) -> f32 {
    let vec = world_rotation.inverse() * Vec3::Y;
    vec.x.atan2(vec.y)
}
