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

//! Swing emulation
//!
//! The remote follows the swing input inside a conic envelope: a circle of
//! `max_distance` in the lateral plane, and a forward/backward range that
//! grows by `(1 - cos(angle)) * max_distance` as the arm twists into a
//! backswing. Hitting the envelope kills motion on the clamped axes so the
//! controller does not bounce off it.

use super::SwingInput;
use crate::core::kinematics::{approach_angle_with_accel, approach_position_with_jerk, MotionState};
use crate::core::math::{lerp_vec3, sign};
use glam::{Vec2, Vec3};

pub fn emulate_swing(state: &mut MotionState, input: &SwingInput, time_elapsed: f32) {
    let max_distance = input.max_distance;
    let max_angle = input.twist_angle;

    // Swing X/Y is remote X/Z. Remote X+ is to the left.
    let target_position = Vec3::new(-input.state.x, -input.state.z, input.state.y);

    // Jerk is scaled based on input distance from center.
    // X and Z share a scale for sane movement about the circle.
    let xz_target_dist = Vec2::new(target_position.x, target_position.z).length();
    let y_target_dist = target_position.y.abs();
    let target_dist = Vec3::new(xz_target_dist, y_target_dist, xz_target_dist);
    let speed = lerp_vec3(
        Vec3::splat(input.return_speed),
        Vec3::splat(input.speed),
        target_dist / max_distance,
    );

    // Jerk required to reach `speed` when traveling 1 meter.
    let max_jerk = speed * speed * speed * 4.0;

    // Rotational acceleration to approximately match the completion time of the swing.
    let max_accel = max_angle * speed.x * speed.x;

    // Twist follows lateral displacement.
    let target_angle =
        Vec3::new(-target_position.z, 0.0, target_position.x) / max_distance * max_angle;

    // Doubled angular acceleration reduces spurious stabs.
    approach_angle_with_accel(&mut state.rotational, target_angle, max_accel * 2.0, time_elapsed);

    // Clamp X and Z rotation.
    let rotational = &mut state.rotational;
    for axis in [0, 2] {
        if (rotational.angle[axis] / max_angle).abs() > 1.0
            && sign(rotational.angular_velocity[axis]) == sign(rotational.angle[axis])
        {
            rotational.angular_velocity[axis] = 0.0;
        }
    }

    // Pull the target back as the swing twists, like an outstretched arm.
    let backwards_angle = rotational.angle.x.abs().max(rotational.angle.z.abs());
    let backwards_movement = (1.0 - backwards_angle.cos()) * max_distance;

    approach_position_with_jerk(
        &mut state.positional,
        target_position + Vec3::new(0.0, backwards_movement, 0.0),
        max_jerk,
        time_elapsed,
    );

    // Clamp left/right/up/down movement within the configured circle.
    let positional = &mut state.positional;
    let xz_progress =
        Vec2::new(positional.position.x, positional.position.z).length() / max_distance;
    if xz_progress > 1.0 {
        positional.position.x /= xz_progress;
        positional.position.z /= xz_progress;

        positional.stop_axis(0);
        positional.stop_axis(2);
    }

    // Clamp forward/backward movement, leaving room for the backswing.
    let y_progress = positional.position.y / max_distance;
    let max_y_progress = 2.0 - max_angle.cos();
    if y_progress > max_y_progress || y_progress < -1.0 {
        positional.position.y = positional
            .position
            .y
            .max(-max_distance)
            .min(max_y_progress * max_distance);
        positional.stop_axis(1);
    }
}
