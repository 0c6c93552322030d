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

//! IR pointer emulation
//!
//! The remote is placed a fixed distance in front of the sensor bar and turned
//! so that its camera sees the bar where the cursor says it should be.

use super::PointInput;
use crate::core::kinematics::{approach_angle_with_accel, MotionState, RotationalState};
use glam::Vec3;

/// Distance from the sensor bar in meters (1-3 m is the recommended range)
pub const NEUTRAL_DISTANCE: f32 = 2.0;

/// How far forward the remote moves when the cursor is hidden
pub const HIDDEN_DISTANCE: f32 = 1000.0;

pub fn emulate_point(state: &mut MotionState, input: &PointInput, time_elapsed: f32) {
    if !input.cursor.visible {
        // Move the remote a kilometer forward so the sensor bar is always behind it.
        *state = MotionState::default();
        state.positional.position = Vec3::new(0.0, -HIDDEN_DISTANCE, 0.0);
        return;
    }

    let reappearing = state.positional.position.y < 0.0;

    // With the bar below the screen the offset applies negatively, which keeps
    // the cursor behaving the same either way.
    let height = input.vertical_offset * input.sensor_bar.offset_sign();

    let yaw_scale = input.total_yaw / 2.0;
    let pitch_scale = input.total_pitch / 2.0;

    // Just jump to the target position.
    state.positional.position = Vec3::new(0.0, NEUTRAL_DISTANCE, -height);
    state.positional.velocity = Vec3::ZERO;
    state.positional.acceleration = Vec3::ZERO;

    let cursor = input.cursor.position;
    let target_angle = Vec3::new(pitch_scale * -cursor.y, 0.0, yaw_scale * -cursor.x);

    if reappearing {
        state.rotational = RotationalState {
            angle: target_angle,
            angular_velocity: Vec3::ZERO,
        };
        return;
    }

    approach_angle_with_accel(
        &mut state.rotational,
        target_angle,
        input.response.max_accel(),
        time_elapsed,
    );
}
