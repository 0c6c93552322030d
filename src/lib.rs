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

//! Motion controller dynamics library
//!
//! This library emulates the physical motion of a pointing remote driven by
//! ordinary inputs (sticks, buttons, a mouse cursor or a phone's IMU) and
//! turns it into the accelerometer, gyroscope and IR camera data the real
//! hardware would report.
//!
//! # Example
//!
//! ```
//! use motion_dynamics::core::{DeviceInput, MotionConfig, MotionDevice};
//! use glam::Vec3;
//!
//! let mut device = MotionDevice::new(MotionConfig::default());
//!
//! // Hold the swing stick to the right for a tenth of a second
//! let input = DeviceInput {
//!     swing: Vec3::new(1.0, 0.0, 0.0),
//!     ..DeviceInput::default()
//! };
//! for _ in 0..20 {
//!     device.step_dynamics(&input);
//! }
//!
//! let report = device.accel_report(None);
//! assert!(report.x <= 0x3FF);
//! ```

pub mod core;
