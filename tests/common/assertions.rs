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

//! Custom assertions for motion testing

use glam::Vec3;
use motion_dynamics::core::sensor::AccelData;

/// Assert two vectors are within `epsilon` of each other
#[allow(dead_code)]
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        (actual - expected).length() <= epsilon,
        "Vector mismatch: expected {:?}, got {:?} (epsilon {})",
        expected,
        actual,
        epsilon
    );
}

/// Assert an accelerometer report matches exactly
#[allow(dead_code)]
pub fn assert_accel_report(actual: AccelData, expected: (u16, u16, u16)) {
    assert_eq!(
        (actual.x, actual.y, actual.z),
        expected,
        "Accel report mismatch: expected 0x{:03X} 0x{:03X} 0x{:03X}, got 0x{:03X} 0x{:03X} 0x{:03X}",
        expected.0,
        expected.1,
        expected.2,
        actual.x,
        actual.y,
        actual.z
    );
}
