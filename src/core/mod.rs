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

//! Core motion components
//!
//! This module contains everything needed to emulate the motion sensors of a
//! pointing remote:
//! - Kinematics (stopping distance, bang-bang approach controllers)
//! - Gesture emulators (swing, tilt, shake, point, IMU cursor)
//! - Sensor encoding (accelerometer report format)
//! - Per-title aim corrections
//! - Device composition, configuration and snapshots

pub mod config;
pub mod correction;
pub mod device;
pub mod emulation;
pub mod error;
pub mod kinematics;
pub mod math;
pub mod sensor;
pub mod snapshot;

// Re-export commonly used types
pub use config::MotionConfig;
pub use correction::{AspectRatio, CorrectionTable};
pub use device::{DeviceInput, MotionDevice, UPDATE_FREQ};
pub use emulation::CursorState;
pub use error::{MotionError, Result};
pub use sensor::AccelData;
pub use snapshot::DynamicsSnapshot;
