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

//! Per-gesture motion emulation
//!
//! Each emulator turns one human input group (stick, buttons, mouse cursor,
//! motion sensor) into a kinematic target for one channel of the remote and
//! hands it to the approach controllers:
//! - Swing: positional + rotational, jerk/accel scaled by distance from center
//! - Tilt: rotational, shortest-path angle unwrapping
//! - Shake: positional, oscillates at a configured frequency
//! - Point: IR pointer orientation in front of the sensor bar
//! - IMU cursor: pointer orientation from real gyro/accel data
//!
//! Input snapshots carry already-resolved settings; nothing here looks up
//! configuration or title data.

mod filter;
mod imu_cursor;
mod point;
mod shake;
mod swing;
mod tilt;

pub use filter::{complementary_filter, ACCELEROMETER_REST_NORMAL};
pub use imu_cursor::emulate_imu_cursor;
pub use point::{emulate_point, HIDDEN_DISTANCE, NEUTRAL_DISTANCE};
pub use shake::emulate_shake;
pub use swing::emulate_swing;
pub use tilt::emulate_tilt;

use crate::core::kinematics::PositionalState;
use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Shake group snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeInput {
    /// Per-axis shake amount, 0.0 to 1.0
    pub state: Vec3,
    /// Peak-to-peak travel in meters
    pub intensity: f32,
    /// Shakes per second (Hz), non-zero
    pub frequency: f32,
}

/// Tilt group snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltInput {
    /// Roll (x) and pitch (y), -1.0 to 1.0 where 1.0 is half a turn
    pub state: Vec2,
    /// Maximum rotational velocity in rad/s, non-zero
    pub max_rotational_velocity: f32,
}

/// Swing group snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingInput {
    /// Displacement in meters: x left/right, y up/down, z forward/backward
    pub state: Vec3,
    /// Radius of the swing envelope in meters, non-zero
    pub max_distance: f32,
    /// Twist at full lateral displacement, radians, non-zero
    pub twist_angle: f32,
    /// Speed at full displacement, m/s
    pub speed: f32,
    /// Speed when returning to center, m/s
    pub return_speed: f32,
}

/// Where the sensor bar sits relative to the screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorBarPosition {
    #[default]
    Top,
    Bottom,
}

impl SensorBarPosition {
    /// Sign applied to the pointer's vertical offset
    pub fn offset_sign(self) -> f32 {
        match self {
            SensorBarPosition::Top => 1.0,
            SensorBarPosition::Bottom => -1.0,
        }
    }
}

/// How quickly the pointer orientation follows the cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerResponse {
    #[default]
    Standard,
    /// More responsive, at the cost of more motion-sensor desync
    Fast,
}

impl PointerResponse {
    /// Angular acceleration ceiling in rad/s²
    pub fn max_accel(self) -> f32 {
        match self {
            PointerResponse::Standard => TAU * 8.0,
            PointerResponse::Fast => TAU * 50.0,
        }
    }
}

/// Cursor position with visibility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    /// -1.0 to 1.0 on each axis, +y up
    pub position: Vec2,
    pub visible: bool,
}

impl CursorState {
    pub fn visible(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            visible: true,
        }
    }

    pub fn hidden() -> Self {
        Self {
            position: Vec2::ZERO,
            visible: false,
        }
    }

    /// Visible at `position`, or hidden when there is none
    pub fn from_position(position: Option<Vec2>) -> Self {
        position.map_or_else(Self::hidden, |p| Self::visible(p.x, p.y))
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::visible(0.0, 0.0)
    }
}

/// IR pointer snapshot with title corrections already applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointInput {
    pub cursor: CursorState,
    /// Height of the pointer above the sensor bar, meters
    pub vertical_offset: f32,
    /// Horizontal field covered by the cursor, radians
    pub total_yaw: f32,
    /// Vertical field covered by the cursor, radians
    pub total_pitch: f32,
    pub sensor_bar: SensorBarPosition,
    pub response: PointerResponse,
}

/// IMU pointer snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuCursorInput {
    pub enabled: bool,
    /// Angular velocity in rad/s, `None` when no gyro data arrived this tick
    pub gyro: Option<Vec3>,
    /// Acceleration in m/s², `None` when no accel data arrived this tick
    pub accel: Option<Vec3>,
    /// Fraction of the gyro/accel disagreement corrected per tick
    pub accel_weight: f32,
    /// Yaw range, radians
    pub total_yaw: f32,
    /// Capture the current pitch as center and zero the yaw
    pub recenter: bool,
}

/// Shake channel: kinematic state plus the cycle position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShakeState {
    pub positional: PositionalState,
    /// Position within the current shake cycle, 0.0 to 1.0
    pub phase: f32,
}

/// IMU pointer orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImuCursorState {
    /// Unit quaternion
    pub rotation: Quat,
    pub recentered_pitch: f32,
}

impl Default for ImuCursorState {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            recentered_pitch: 0.0,
        }
    }
}

#[cfg(test)]
mod tests;
