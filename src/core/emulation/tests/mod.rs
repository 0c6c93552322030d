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

//! Emulation module tests
//!
//! Tests are organized into the following modules:
//! - `shake`: cycle period and amplitude
//! - `tilt`: shortest-path unwrapping
//! - `swing`: envelope clamps and return to center
//! - `point`: hiding, reappearing, sensor bar placement
//! - `filter`: complementary filter corrections
//! - `imu_cursor`: gyro integration, yaw clamp, recentering

mod point;
mod tilt;

use std::f32::consts::TAU;

const DT: f32 = 1.0 / 200.0;

/// Pointer ranges used by most pointer tests (25 and 20 degrees)
const TOTAL_YAW: f32 = 25.0 / 360.0 * TAU;
const TOTAL_PITCH: f32 = 20.0 / 360.0 * TAU;
