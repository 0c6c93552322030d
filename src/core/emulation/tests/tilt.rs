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

//! Tilt emulation tests

use super::super::*;
use super::DT;
use crate::core::kinematics::RotationalState;
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn tilt(x: f32, y: f32) -> TiltInput {
    TiltInput {
        state: Vec2::new(x, y),
        max_rotational_velocity: TAU * 2.0,
    }
}

#[test]
fn test_tilt_roll_maps_to_negative_y_angle() {
    let mut state = RotationalState::default();

    for _ in 0..1000 {
        emulate_tilt(&mut state, &tilt(0.5, 0.0), DT);
    }

    assert_eq!(state.angle, Vec3::new(0.0, -FRAC_PI_2, 0.0));
}

#[test]
fn test_tilt_pitch_maps_to_x_angle() {
    let mut state = RotationalState::default();

    for _ in 0..1000 {
        emulate_tilt(&mut state, &tilt(0.0, -0.25), DT);
    }

    assert_eq!(state.angle.x, -PI / 4.0);
}

#[test]
fn test_tilt_wraps_the_short_way_around() {
    let mut state = RotationalState {
        angle: Vec3::new(3.0, 0.0, 0.0),
        angular_velocity: Vec3::ZERO,
    };
    let target = -0.95 * PI;

    emulate_tilt(&mut state, &tilt(0.0, -0.95), DT);

    // Unwrapped below -PI and now rising toward the target.
    assert!(
        state.angle.x < -PI,
        "angle {} should have wrapped past -PI",
        state.angle.x
    );
    assert!(state.angular_velocity.x > 0.0);

    for _ in 0..200 {
        emulate_tilt(&mut state, &tilt(0.0, -0.95), DT);
        assert!(state.angle.x <= target + 1e-6);
    }

    assert_eq!(state.angle.x, target);
}

#[test]
fn test_tilt_faster_velocity_arrives_sooner() {
    let ticks_to_arrive = |max_rotational_velocity: f32| {
        let mut state = RotationalState::default();
        let input = TiltInput {
            state: Vec2::new(0.0, 0.5),
            max_rotational_velocity,
        };
        (1..2000)
            .find(|_| {
                emulate_tilt(&mut state, &input, DT);
                state.angle.x == FRAC_PI_2
            })
            .unwrap_or(usize::MAX)
    };

    assert!(ticks_to_arrive(TAU * 4.0) < ticks_to_arrive(TAU));
}
