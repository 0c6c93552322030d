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

//! Motion device
//!
//! Owns one kinematic state per motion channel of the emulated remote, steps
//! them once per update tick, and composes them into what the remote's sensors
//! report: total acceleration, angular velocity and the transformation used to
//! project the sensor bar into the IR camera.

use crate::core::config::MotionConfig;
use crate::core::correction::{AimProfile, AspectRatio, CorrectionTable};
use crate::core::emulation::{
    emulate_imu_cursor, emulate_point, emulate_shake, emulate_swing, emulate_tilt, CursorState,
    ImuCursorState, PointInput, ShakeState,
};
use crate::core::kinematics::{MotionState, RotationalState};
use crate::core::math::rotational_matrix;
use crate::core::sensor::{AccelCalibration, AccelData, GRAVITY_ACCELERATION};
use bitflags::bitflags;
use glam::{Mat3, Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Dynamics update rate in Hz
pub const UPDATE_FREQ: u32 = 200;

/// Title ids reported when no title is running
const NO_TITLE_IDS: [&str; 2] = ["", "00000000"];

bitflags! {
    /// How the remote is being held
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct OrientationFlags: u8 {
        /// Turned a quarter turn, buttons to the left
        const SIDEWAYS = 0b01;
        /// Pointing up
        const UPRIGHT = 0b10;
    }
}

impl OrientationFlags {
    pub fn from_config(config: &MotionConfig) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::SIDEWAYS, config.orientation.sideways);
        flags.set(Self::UPRIGHT, config.orientation.upright);
        flags
    }
}

/// Human input for one update tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceInput {
    /// Swing stick, -1.0 to 1.0 per axis (x left/right, y up/down, z forward/backward)
    pub swing: Vec3,
    /// Tilt stick, -1.0 to 1.0 (x roll, y pitch)
    pub tilt: Vec2,
    /// Shake amount per axis, 0.0 to 1.0
    pub shake: Vec3,
    pub cursor: CursorState,
    /// Real gyroscope reading in rad/s
    pub imu_gyro: Option<Vec3>,
    /// Real accelerometer reading in m/s²
    pub imu_accel: Option<Vec3>,
    /// Recenter the IMU pointer this tick
    pub recenter: bool,
}

/// Kinematic state of every motion channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicsState {
    pub swing: MotionState,
    pub tilt: RotationalState,
    pub point: MotionState,
    pub shake: ShakeState,
    pub imu_cursor: ImuCursorState,
}

/// Emulated motion-sensing remote
///
/// # Example
/// ```
/// use motion_dynamics::core::config::MotionConfig;
/// use motion_dynamics::core::device::{DeviceInput, MotionDevice};
///
/// let mut device = MotionDevice::new(MotionConfig::default());
/// device.step_dynamics(&DeviceInput::default());
///
/// let report = device.accel_report(None);
/// assert_eq!((report.x, report.y, report.z), (0x200, 0x200, 0x268));
/// ```
#[derive(Debug, Clone)]
pub struct MotionDevice {
    /// Settings for every input group
    config: MotionConfig,

    /// Held sideways and/or upright
    orientation: OrientationFlags,

    /// Per-title aim corrections
    corrections: CorrectionTable,

    /// Running title id, `None` when nothing is running
    active_title: Option<String>,

    /// Output aspect ratio of the running title
    aspect: AspectRatio,

    /// Channel states
    state: DynamicsState,

    /// Update ticks since the last reset
    tick_count: u64,

    /// Calibration used for accelerometer reports
    calibration: AccelCalibration,
}

impl MotionDevice {
    /// Create a device at rest with no aim corrections installed
    pub fn new(config: MotionConfig) -> Self {
        Self {
            orientation: OrientationFlags::from_config(&config),
            config,
            corrections: CorrectionTable::new(),
            active_title: None,
            aspect: AspectRatio::Standard,
            state: DynamicsState::default(),
            tick_count: 0,
            calibration: AccelCalibration::default(),
        }
    }

    /// Zero every channel state
    pub fn reset(&mut self) {
        log::debug!("Motion device reset after {} ticks", self.tick_count);
        self.state = DynamicsState::default();
        self.tick_count = 0;
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Replace the settings, keeping the channel states
    pub fn set_config(&mut self, config: MotionConfig) {
        self.orientation = OrientationFlags::from_config(&config);
        self.config = config;
    }

    pub fn orientation_flags(&self) -> OrientationFlags {
        self.orientation
    }

    pub fn set_orientation_flags(&mut self, flags: OrientationFlags) {
        self.orientation = flags;
    }

    /// Install a per-title aim correction table
    pub fn set_correction_table(&mut self, table: CorrectionTable) {
        log::info!("Installed aim correction table with {} titles", table.len());
        self.corrections = table;
    }

    pub fn correction_table(&self) -> &CorrectionTable {
        &self.corrections
    }

    /// Set the running title and its output aspect ratio
    ///
    /// The empty id and `00000000` mean no title is running; widescreen is
    /// ignored for them.
    pub fn set_active_title(&mut self, id: &str, aspect: AspectRatio) {
        let (title, aspect) = if NO_TITLE_IDS.contains(&id) {
            (None, AspectRatio::Standard)
        } else {
            (Some(id.to_owned()), aspect)
        };

        if title != self.active_title || aspect != self.aspect {
            log::debug!("Active title: {} ({})", title.as_deref().unwrap_or("none"), aspect);
        }

        self.active_title = title;
        self.aspect = aspect;
    }

    pub fn active_title(&self) -> Option<&str> {
        self.active_title.as_deref()
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect
    }

    /// Correction profile for the running title, if any applies
    pub fn active_profile(&self) -> Option<&AimProfile> {
        if !self.config.pointer.aim_correction {
            return None;
        }
        let id = self.active_title.as_deref()?;
        self.corrections.lookup(id, self.aspect)
    }

    pub fn state(&self) -> &DynamicsState {
        &self.state
    }

    /// Replace every channel state, e.g. from a snapshot
    pub fn restore_state(&mut self, state: DynamicsState, tick_count: u64) {
        self.state = state;
        self.tick_count = tick_count;
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Resolve a cursor into point emulator input
    ///
    /// With aim correction on and a profile for the running title, the cursor
    /// is warped and the profile's geometry replaces the pointer settings.
    pub fn point_input(&self, cursor: CursorState) -> PointInput {
        let pointer = &self.config.pointer;
        let defaults = pointer.aim(cursor.position);
        let profile = self.active_profile();

        let aim = match profile {
            Some(profile) => profile.resolve(cursor.position, defaults),
            None => defaults,
        };

        PointInput {
            cursor: CursorState {
                position: aim.cursor,
                visible: cursor.visible,
            },
            vertical_offset: aim.vertical_offset,
            total_yaw: aim.total_yaw,
            total_pitch: aim.total_pitch,
            sensor_bar: pointer.sensor_bar,
            response: pointer.response(profile.is_some()),
        }
    }

    /// Advance every channel by one update tick
    ///
    /// Channels are stepped in a fixed order: swing, tilt, point, shake,
    /// IMU cursor.
    pub fn step_dynamics(&mut self, input: &DeviceInput) {
        let time_elapsed = 1.0 / UPDATE_FREQ as f32;
        let point_input = self.point_input(input.cursor);
        let config = &self.config;

        emulate_swing(
            &mut self.state.swing,
            &config.swing.swing_input(input.swing),
            time_elapsed,
        );
        emulate_tilt(
            &mut self.state.tilt,
            &config.tilt.tilt_input(input.tilt),
            time_elapsed,
        );
        emulate_point(&mut self.state.point, &point_input, time_elapsed);
        emulate_shake(
            &mut self.state.shake,
            &config.shake.shake_input(input.shake),
            time_elapsed,
        );
        emulate_imu_cursor(
            &mut self.state.imu_cursor,
            &config
                .imu_cursor
                .imu_input(input.imu_gyro, input.imu_accel, input.recenter),
            time_elapsed,
        );

        self.tick_count += 1;

        log::trace!(
            "tick {}: swing={:?} tilt={:?} point={:?} shake={:?}",
            self.tick_count,
            self.state.swing.positional.position,
            self.state.tilt.angle,
            self.state.point.rotational.angle,
            self.state.shake.positional.position
        );
    }

    /// Rotation applied by how the remote is held
    pub fn orientation(&self) -> Quat {
        let sideways = if self.orientation.contains(OrientationFlags::SIDEWAYS) {
            1.0
        } else {
            0.0
        };
        let upright = if self.orientation.contains(OrientationFlags::UPRIGHT) {
            1.0
        } else {
            0.0
        };

        Quat::from_rotation_z(TAU / -4.0 * sideways) * Quat::from_rotation_x(TAU / 4.0 * upright)
    }

    /// World-to-remote transformation including point, swing, tilt and shake
    ///
    /// # Arguments
    ///
    /// * `extra_rotation` - Additional rotation applied before the channel rotations
    pub fn transformation(&self, extra_rotation: Mat3) -> Mat4 {
        let state = &self.state;

        Mat4::from_translation(-state.shake.positional.position)
            * Mat4::from_mat3(
                extra_rotation
                    * rotational_matrix(-state.tilt.angle)
                    * rotational_matrix(-state.point.rotational.angle)
                    * rotational_matrix(-state.swing.rotational.angle),
            )
            * Mat4::from_translation(
                -state.swing.positional.position - state.point.positional.position,
            )
    }

    /// Acceleration felt by the remote
    ///
    /// `extra_acceleration` is rotated with the remote; shake is not.
    pub fn acceleration(&self, extra_acceleration: Vec3) -> Vec3 {
        let swing = self.state.swing.positional.acceleration;
        let accel = self.orientation()
            * self
                .transformation(Mat3::IDENTITY)
                .transform_vector3(swing + extra_acceleration);

        accel + self.state.shake.positional.acceleration
    }

    /// Angular velocity of the remote
    pub fn angular_velocity(&self, extra_angular_velocity: Vec3) -> Vec3 {
        let state = &self.state;
        self.orientation()
            * (state.tilt.angular_velocity
                + state.swing.rotational.angular_velocity
                + state.point.rotational.angular_velocity
                + extra_angular_velocity)
    }

    /// Acceleration including a real or default (resting, one g up) accelerometer reading
    pub fn total_acceleration(&self, imu_accel: Option<Vec3>) -> Vec3 {
        let default_accel = Vec3::new(0.0, 0.0, GRAVITY_ACCELERATION as f32);
        self.acceleration(imu_accel.unwrap_or(default_accel))
    }

    /// Angular velocity including a real gyroscope reading
    pub fn total_angular_velocity(&self, imu_gyro: Option<Vec3>) -> Vec3 {
        self.angular_velocity(imu_gyro.unwrap_or(Vec3::ZERO))
    }

    /// Transformation including the IMU pointer orientation
    pub fn total_transformation(&self) -> Mat4 {
        let imu = &self.state.imu_cursor;
        self.transformation(Mat3::from_quat(
            imu.rotation * Quat::from_rotation_x(imu.recentered_pitch),
        ))
    }

    /// Encoded accelerometer report for the current state
    pub fn accel_report(&self, imu_accel: Option<Vec3>) -> AccelData {
        self.calibration.encode(self.total_acceleration(imu_accel))
    }
}

#[cfg(test)]
mod tests;
