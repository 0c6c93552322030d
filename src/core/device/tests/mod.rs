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

//! Motion device tests
//!
//! Tests are organized into the following modules:
//! - `composition`: sensor outputs composed from the channel states
//! - `pointer`: title corrections feeding the point channel


use super::*;

/// Run `ticks` updates with the same input
fn run(device: &mut MotionDevice, input: &DeviceInput, ticks: usize) {
    for _ in 0..ticks {
        device.step_dynamics(input);
    }
}
