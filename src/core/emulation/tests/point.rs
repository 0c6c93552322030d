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

//! IR pointer emulation tests

use super::super::*;
use super::{DT, TOTAL_PITCH, TOTAL_YAW};
use crate::core::kinematics::MotionState;
use glam::Vec3;

fn point(cursor: CursorState) -> PointInput {
    PointInput {
        cursor,
        vertical_offset: 0.1,
        total_yaw: TOTAL_YAW,
        total_pitch: TOTAL_PITCH,
        sensor_bar: SensorBarPosition::Top,
        response: PointerResponse::Standard,
    }
}

#[test]
fn test_point_hidden_moves_far_forward() {
    let mut state = MotionState::default();
    state.rotational.angle = Vec3::new(0.2, 0.0, 0.1);

    emulate_point(&mut state, &point(CursorState::hidden()), DT);

    assert_eq!(state.positional.position, Vec3::new(0.0, -HIDDEN_DISTANCE, 0.0));
    assert_eq!(state.positional.velocity, Vec3::ZERO);
    assert_eq!(state.rotational.angle, Vec3::ZERO);
}

#[test]
fn test_point_reappearing_snaps_to_target() {
    let mut state = MotionState::default();
    emulate_point(&mut state, &point(CursorState::hidden()), DT);

    emulate_point(&mut state, &point(CursorState::visible(0.5, 0.5)), DT);

    let expected = Vec3::new(TOTAL_PITCH / 2.0 * -0.5, 0.0, TOTAL_YAW / 2.0 * -0.5);
    assert_eq!(state.rotational.angle, expected);
    assert_eq!(state.rotational.angular_velocity, Vec3::ZERO);
    assert_eq!(
        state.positional.position,
        Vec3::new(0.0, NEUTRAL_DISTANCE, -0.1)
    );
}

#[test]
fn test_point_visible_approaches_gradually() {
    let mut state = MotionState::default();
    let input = point(CursorState::visible(1.0, 0.0));
    let target = -TOTAL_YAW / 2.0;

    emulate_point(&mut state, &input, DT);
    assert!(state.rotational.angle.z < 0.0);
    assert!(state.rotational.angle.z > target);

    for _ in 0..200 {
        emulate_point(&mut state, &input, DT);
    }
    assert_eq!(state.rotational.angle.z, target);
}

#[test]
fn test_point_bottom_sensor_bar_flips_height() {
    let mut state = MotionState::default();
    let input = PointInput {
        sensor_bar: SensorBarPosition::Bottom,
        ..point(CursorState::default())
    };

    emulate_point(&mut state, &input, DT);

    assert_eq!(state.positional.position, Vec3::new(0.0, NEUTRAL_DISTANCE, 0.1));
}

#[test]
fn test_point_fast_response_arrives_sooner() {
    let ticks_to_arrive = |response: PointerResponse| {
        let mut state = MotionState::default();
        let input = PointInput {
            response,
            ..point(CursorState::visible(-1.0, 1.0))
        };
        (1..1000)
            .find(|_| {
                emulate_point(&mut state, &input, DT);
                state.rotational.angle.x == TOTAL_PITCH / 2.0 * -1.0
            })
            .unwrap_or(usize::MAX)
    };

    let fast = ticks_to_arrive(PointerResponse::Fast);
    let standard = ticks_to_arrive(PointerResponse::Standard);
    assert!(fast < standard, "fast {} vs standard {}", fast, standard);
    assert!(standard < 1000);
}
