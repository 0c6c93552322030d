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

//! Tilt emulation

use super::TiltInput;
use crate::core::kinematics::{approach_angle_with_accel, RotationalState};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

pub fn emulate_tilt(state: &mut RotationalState, input: &TiltInput, time_elapsed: f32) {
    // 180 degrees is the max tilt value.
    let roll = input.state.x * PI;
    let pitch = input.state.y * PI;

    let target_angle = Vec3::new(pitch, -roll, 0.0);

    // Wrap the current angle around when the target is more than half a turn away.
    for i in 0..3 {
        let angle = &mut state.angle[i];
        if (*angle - target_angle[i]).abs() > PI {
            *angle -= TAU.copysign(*angle);
        }
    }

    // Reaching full speed and stopping again over one turn.
    let max_accel = input.max_rotational_velocity.powi(2) / TAU;

    approach_angle_with_accel(state, target_angle, max_accel, time_elapsed);
}
