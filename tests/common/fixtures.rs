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

//! Test fixtures for common test scenarios

use glam::{Vec2, Vec3};
use motion_dynamics::core::config::MotionConfig;
use motion_dynamics::core::correction::CorrectionTable;
use motion_dynamics::core::device::{DeviceInput, MotionDevice};

/// Create a device with the built-in aim corrections installed
#[allow(dead_code)]
pub fn create_device_with_corrections() -> MotionDevice {
    let mut device = MotionDevice::new(MotionConfig::default());
    device.set_correction_table(CorrectionTable::builtin().expect("built-in table parses"));
    device
}

/// Input with every manual gesture partially engaged
#[allow(dead_code)]
pub fn busy_input() -> DeviceInput {
    DeviceInput {
        swing: Vec3::new(0.4, 0.8, -0.3),
        tilt: Vec2::new(-0.6, 0.2),
        shake: Vec3::new(0.0, 0.5, 1.0),
        ..DeviceInput::default()
    }
}

/// Step `device` with `input` for `ticks` update ticks
#[allow(dead_code)]
pub fn run_ticks(device: &mut MotionDevice, input: &DeviceInput, ticks: usize) {
    for _ in 0..ticks {
        device.step_dynamics(input);
    }
}
