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

//! Gyro/accelerometer complementary filter

use glam::{Quat, Vec3};

/// Accelerometer direction of a remote lying flat and still
pub const ACCELEROMETER_REST_NORMAL: Vec3 = Vec3::Z;

/// Nudge a gyro-integrated orientation toward the accelerometer's down vector
///
/// The gyro orientation drifts; the accelerometer is noisy but absolute. The
/// angle between where the gyro says `accelerometer_normal` should point and
/// where the accelerometer says it points is corrected by `accel_weight`
/// (0.0 to 1.0) per call.
///
/// Parallel or antiparallel readings return `gyroscope` unchanged, as does a
/// zero accelerometer vector.
pub fn complementary_filter(
    gyroscope: Quat,
    accelerometer: Vec3,
    accel_weight: f32,
    accelerometer_normal: Vec3,
) -> Quat {
    let gyro_vec = gyroscope * accelerometer_normal;
    let normalized_accel = accelerometer.normalize_or_zero();
    if normalized_accel == Vec3::ZERO {
        return gyroscope;
    }

    let cos_angle = normalized_accel.dot(gyro_vec);

    if cos_angle > -1.0 && cos_angle < 1.0 {
        let axis = gyro_vec.cross(normalized_accel);
        let axis = if axis.length_squared() != 0.0 {
            axis.normalize()
        } else {
            Vec3::Y
        };

        Quat::from_axis_angle(axis, cos_angle.acos() * accel_weight) * gyroscope
    } else {
        gyroscope
    }
}
