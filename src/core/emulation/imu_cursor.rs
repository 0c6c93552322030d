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

//! IMU pointer emulation
//!
//! Integrates real gyroscope data into a pointer orientation. Accelerometer
//! data, when present, keeps pitch and roll from drifting; yaw has no absolute
//! reference so it is clamped and can be recentered.

use super::filter::{complementary_filter, ACCELEROMETER_REST_NORMAL};
use super::{ImuCursorInput, ImuCursorState};
use crate::core::math::{pitch, rotation_from_gyroscope, yaw};
use glam::{Quat, Vec3};

pub fn emulate_imu_cursor(state: &mut ImuCursorState, input: &ImuCursorInput, time_elapsed: f32) {
    // Reset if pointing is disabled or we have no gyro data.
    let angular_velocity = match input.gyro {
        Some(angular_velocity) if input.enabled => angular_velocity,
        _ => {
            *state = ImuCursorState::default();
            return;
        }
    };

    // Apply rotation from gyro data.
    let gyro_rotation = rotation_from_gyroscope(angular_velocity * -time_elapsed);
    state.rotation = gyro_rotation * state.rotation;

    // If we have some non-zero accel data use it to adjust gyro drift.
    let accel = input.accel.unwrap_or(Vec3::ZERO);
    if accel.length_squared() != 0.0 {
        state.rotation = complementary_filter(
            state.rotation,
            accel,
            input.accel_weight,
            ACCELEROMETER_REST_NORMAL,
        );
    }

    // Clamp yaw within configured bounds.
    let current_yaw = yaw(state.rotation);
    let max_yaw = input.total_yaw / 2.0;
    let mut target_yaw = current_yaw.max(-max_yaw).min(max_yaw);

    if input.recenter {
        state.recentered_pitch = pitch(state.rotation);
        target_yaw = 0.0;
    }

    if current_yaw != target_yaw {
        state.rotation *= Quat::from_rotation_z(target_yaw - current_yaw);
    }

    // Normalize for floating point inaccuracies.
    state.rotation = state.rotation.normalize();
}
