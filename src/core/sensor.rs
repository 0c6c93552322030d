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

//! Accelerometer sensor encoding
//!
//! The remote reports acceleration as three 10-bit unsigned values. Calibration
//! stores the raw readings for zero g and one g; every other reading is linear
//! between them and saturates at the ends of the 10-bit range.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Standard gravity in m/s²
pub const GRAVITY_ACCELERATION: f64 = 9.80665;

/// Factory calibration: raw 8-bit reading at zero g
pub const ACCEL_ZERO_G: u16 = 0x80;

/// Factory calibration: raw 8-bit reading at one g
pub const ACCEL_ONE_G: u16 = 0x9A;

/// Largest encodable reading (10-bit)
pub const ACCEL_MAX_VALUE: u16 = (1 << 10) - 1;

/// Encoded accelerometer triple, each value in `0..=1023`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelData {
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

/// Zero-g and one-g reference readings at 10-bit precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelCalibration {
    pub zero_g: u16,
    pub one_g: u16,
}

impl AccelCalibration {
    /// Build a calibration from 8-bit reference readings
    ///
    /// The two extra bits of precision are zero.
    pub fn from_eight_bit(zero_g: u8, one_g: u8) -> Self {
        Self {
            zero_g: u16::from(zero_g) << 2,
            one_g: u16::from(one_g) << 2,
        }
    }

    /// Encode a physical acceleration with this calibration
    pub fn encode(&self, accel: Vec3) -> AccelData {
        convert_accel_data(accel, self.zero_g, self.one_g)
    }
}

impl Default for AccelCalibration {
    fn default() -> Self {
        Self {
            zero_g: ACCEL_ZERO_G << 2,
            one_g: ACCEL_ONE_G << 2,
        }
    }
}

/// Convert an acceleration in m/s² to calibrated 10-bit readings
///
/// Out-of-range inputs saturate to `0` or `1023`; they never wrap.
pub fn convert_accel_data(accel: Vec3, zero_g: u16, one_g: u16) -> AccelData {
    let counts_per_g = f32::from(one_g) - f32::from(zero_g);
    let scaled_accel = accel * counts_per_g / GRAVITY_ACCELERATION as f32;

    let encode = |axis: f32| -> u16 {
        let value = (axis + f32::from(zero_g)).round() as i64;
        value.clamp(0, i64::from(ACCEL_MAX_VALUE)) as u16
    };

    AccelData {
        x: encode(scaled_accel.x),
        y: encode(scaled_accel.y),
        z: encode(scaled_accel.z),
    }
}
