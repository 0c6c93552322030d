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

//! Shake emulation
//!
//! Shaking alternates the target between `+intensity/2` and `-intensity/2`
//! every half cycle. The cycle is paced by `ShakeState::phase`, so the settled
//! period is exactly `1 / frequency` regardless of how quickly each stroke
//! arrives. Jerk is sized so a full stroke (rest to rest) fits in its half cycle.

use super::{ShakeInput, ShakeState};
use crate::core::kinematics::{approach_axis, JerkLimited};
use glam::Vec3;

pub fn emulate_shake(state: &mut ShakeState, input: &ShakeInput, time_elapsed: f32) {
    let shaking = input.state != Vec3::ZERO;

    let direction = if state.phase < 0.5 { 1.0 } else { -1.0 };
    let target_position = input.state * (input.intensity / 2.0 * direction);

    // Time from "top" to "bottom" of one shake.
    let travel_time = 1.0 / input.frequency / 2.0;

    // A stroke is four constant-jerk segments.
    let segment_time = travel_time / 4.0;

    for i in 0..3 {
        let half_distance = target_position[i]
            .abs()
            .max(state.positional.position[i].abs());

        if half_distance == 0.0 {
            // At rest on a zero target.
            state.positional.stop_axis(i);
            continue;
        }

        let jerk = half_distance / segment_time.powi(3);

        let mut axis = state.positional.axis(i);
        approach_axis::<JerkLimited>(&mut axis, target_position[i], jerk, time_elapsed);
        state.positional.set_axis(i, axis);
    }

    if shaking {
        state.phase += input.frequency * time_elapsed;
        if state.phase >= 1.0 {
            state.phase -= 1.0;
        }
    } else {
        state.phase = 0.0;
    }
}
