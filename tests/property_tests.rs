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

//! Property tests for the kinematic core

use glam::Vec3;
use motion_dynamics::core::emulation::{emulate_imu_cursor, ImuCursorInput, ImuCursorState};
use motion_dynamics::core::kinematics::{
    approach_angle_with_accel, approach_position_with_jerk, stop_distance_with_accel,
    stop_distance_with_jerk, PositionalState, RotationalState,
};
use motion_dynamics::core::sensor::{convert_accel_data, ACCEL_MAX_VALUE};
use proptest::prelude::*;

const TIME_ELAPSED: f32 = 1.0 / 200.0;

fn vec3_in(range: std::ops::Range<f32>) -> impl Strategy<Value = Vec3> {
    (range.clone(), range.clone(), range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn stop_distance_with_accel_follows_velocity(
        velocity in prop_oneof![-50.0f64..-0.001, 0.001f64..50.0],
        max_accel in 0.1f64..1000.0,
    ) {
        let distance = stop_distance_with_accel(velocity, max_accel);
        prop_assert_eq!(distance.signum(), velocity.signum());
        let expected = velocity * velocity / (2.0 * max_accel);
        prop_assert!((distance.abs() - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn stop_distance_with_jerk_is_odd(
        velocity in 0.001f64..50.0,
        acceleration in -100.0f64..100.0,
        max_jerk in 1.0f64..100_000.0,
    ) {
        let forward = stop_distance_with_jerk(velocity, acceleration, max_jerk);
        let backward = stop_distance_with_jerk(-velocity, -acceleration, max_jerk);
        prop_assert_eq!(forward, -backward);
    }

    #[test]
    fn stop_distance_with_jerk_from_steady_velocity(
        velocity in prop_oneof![-50.0f64..-0.001, 0.001f64..50.0],
        max_jerk in 1.0f64..100_000.0,
    ) {
        let distance = stop_distance_with_jerk(velocity, 0.0, max_jerk);
        prop_assert_eq!(distance.signum(), velocity.signum());
    }

    #[test]
    fn accel_report_stays_in_range(accel in vec3_in(-1000.0..1000.0)) {
        let report = convert_accel_data(accel, 0x200, 0x268);
        prop_assert!(report.x <= ACCEL_MAX_VALUE);
        prop_assert!(report.y <= ACCEL_MAX_VALUE);
        prop_assert!(report.z <= ACCEL_MAX_VALUE);
    }

    #[test]
    fn angle_approach_lands_on_target(
        target in 0.01f32..3.0,
        max_accel in 1.0f32..500.0,
    ) {
        let mut state = RotationalState::default();
        for _ in 0..2000 {
            approach_angle_with_accel(&mut state, Vec3::new(target, -target, 0.0), max_accel, TIME_ELAPSED);
            prop_assert!(state.angle.x <= target + 1e-5);
            prop_assert!(state.angle.y >= -target - 1e-5);
            prop_assert_eq!(state.angle.z, 0.0);
        }

        prop_assert_eq!(state.angle.x, target);
        prop_assert_eq!(state.angle.y, -target);
        prop_assert_eq!(state.angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn position_approach_never_passes_target(
        target in 0.01f32..1.0,
        max_jerk in 10.0f32..50_000.0,
    ) {
        let mut state = PositionalState::default();
        for _ in 0..2000 {
            approach_position_with_jerk(
                &mut state,
                Vec3::new(target, 0.0, -target),
                Vec3::splat(max_jerk),
                TIME_ELAPSED,
            );
            prop_assert!(state.position.x <= target + 1e-5);
            prop_assert!(state.position.z >= -target - 1e-5);
            prop_assert_eq!(state.position.y, 0.0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    #[test]
    fn imu_rotation_stays_normalized(
        ticks in prop::collection::vec(
            (vec3_in(-20.0..20.0), vec3_in(-30.0..30.0), prop::bool::weighted(0.01)),
            10_000,
        ),
        accel_weight in 0.0f32..=1.0,
    ) {
        let mut state = ImuCursorState::default();

        for (tick, (gyro, accel, recenter)) in ticks.into_iter().enumerate() {
            let input = ImuCursorInput {
                enabled: true,
                gyro: Some(gyro),
                accel: Some(accel),
                accel_weight,
                total_yaw: 25.0_f32.to_radians(),
                recenter,
            };
            emulate_imu_cursor(&mut state, &input, TIME_ELAPSED);

            let length = state.rotation.length();
            prop_assert!(
                (length - 1.0).abs() <= 1e-6,
                "tick {}: rotation length {}",
                tick,
                length
            );
        }
    }
}
