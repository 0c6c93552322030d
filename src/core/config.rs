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

//! Motion settings
//!
//! One section per input group, stored as TOML. Values use the units a user
//! would configure (centimeters, degrees, revolutions per second); the
//! `*_input` helpers convert them to the SI units the emulators take.
//!
//! ```toml
//! [swing]
//! distance = 50.0
//! speed = 16.0
//!
//! [pointer]
//! sensor_bar = "bottom"
//! aim_correction = true
//! ```

use crate::core::correction::ResolvedAim;
use crate::core::emulation::{
    ImuCursorInput, PointerResponse, SensorBarPosition, ShakeInput, SwingInput, TiltInput,
};
use crate::core::error::{MotionError, Result};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::path::{Path, PathBuf};

/// Swing group settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwingConfig {
    /// Distance from center at full input, centimeters
    pub distance: f32,
    /// Speed at full input, m/s
    pub speed: f32,
    /// Speed when returning to center, m/s
    pub return_speed: f32,
    /// Twist at full lateral input, degrees
    pub angle: f32,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            distance: 50.0,
            speed: 16.0,
            return_speed: 2.0,
            angle: 90.0,
        }
    }
}

impl SwingConfig {
    /// Build emulator input from a normalized (-1.0 to 1.0) swing state
    pub fn swing_input(&self, state: Vec3) -> SwingInput {
        let max_distance = self.distance / 100.0;
        SwingInput {
            state: state * max_distance,
            max_distance,
            twist_angle: self.angle.to_radians(),
            speed: self.speed,
            return_speed: self.return_speed,
        }
    }
}

/// Tilt group settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TiltConfig {
    /// Revolutions per second
    pub max_rotational_velocity: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rotational_velocity: 7.0,
        }
    }
}

impl TiltConfig {
    pub fn tilt_input(&self, state: Vec2) -> TiltInput {
        TiltInput {
            state,
            max_rotational_velocity: self.max_rotational_velocity * TAU,
        }
    }
}

/// Shake group settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShakeConfig {
    /// Peak-to-peak travel, centimeters
    pub intensity: f32,
    /// Hz
    pub frequency: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            intensity: 5.0,
            frequency: 6.0,
        }
    }
}

impl ShakeConfig {
    pub fn shake_input(&self, state: Vec3) -> ShakeInput {
        ShakeInput {
            state,
            intensity: self.intensity / 100.0,
            frequency: self.frequency,
        }
    }
}

/// IR pointer settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerConfig {
    /// Centimeters
    pub vertical_offset: f32,
    /// Degrees
    pub total_yaw: f32,
    /// Degrees
    pub total_pitch: f32,
    pub sensor_bar: SensorBarPosition,
    /// Apply per-title aim corrections
    pub aim_correction: bool,
    /// Faster pointer response for titles with an aim correction
    pub fast_pointer: bool,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            vertical_offset: 10.0,
            total_yaw: 25.0,
            total_pitch: 20.0,
            sensor_bar: SensorBarPosition::Top,
            aim_correction: true,
            fast_pointer: false,
        }
    }
}

impl PointerConfig {
    /// Uncorrected pointer geometry for `cursor`
    pub fn aim(&self, cursor: Vec2) -> ResolvedAim {
        ResolvedAim {
            cursor,
            vertical_offset: self.vertical_offset / 100.0,
            total_yaw: self.total_yaw.to_radians(),
            total_pitch: self.total_pitch.to_radians(),
        }
    }

    /// Response for a cursor that did or did not get a title correction
    pub fn response(&self, aim_corrected: bool) -> PointerResponse {
        if self.fast_pointer && aim_corrected {
            PointerResponse::Fast
        } else {
            PointerResponse::Standard
        }
    }
}

/// IMU pointer settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImuCursorConfig {
    pub enabled: bool,
    /// Degrees
    pub total_yaw: f32,
    /// Fraction of gyro drift corrected from the accelerometer per update, 0.0 to 1.0
    pub accel_weight: f32,
}

impl Default for ImuCursorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            total_yaw: 25.0,
            accel_weight: 0.02,
        }
    }
}

impl ImuCursorConfig {
    pub fn imu_input(
        &self,
        gyro: Option<Vec3>,
        accel: Option<Vec3>,
        recenter: bool,
    ) -> ImuCursorInput {
        ImuCursorInput {
            enabled: self.enabled,
            gyro,
            accel,
            accel_weight: self.accel_weight,
            total_yaw: self.total_yaw.to_radians(),
            recenter,
        }
    }
}

/// How the remote is held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrientationConfig {
    pub sideways: bool,
    pub upright: bool,
}

/// Complete motion configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub swing: SwingConfig,
    pub tilt: TiltConfig,
    pub shake: ShakeConfig,
    pub pointer: PointerConfig,
    pub imu_cursor: ImuCursorConfig,
    pub orientation: OrientationConfig,
    /// Correction table to use instead of the bundled one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction_table: Option<PathBuf>,
}

impl MotionConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: MotionConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        log::debug!("Loaded motion config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration as TOML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Reject values the emulators would divide by or that are out of range
    pub fn validate(&self) -> Result<()> {
        positive("swing.distance", self.swing.distance)?;
        positive("swing.angle", self.swing.angle)?;
        positive("swing.speed", self.swing.speed)?;
        positive("swing.return_speed", self.swing.return_speed)?;
        positive("tilt.max_rotational_velocity", self.tilt.max_rotational_velocity)?;
        non_negative("shake.intensity", self.shake.intensity)?;
        positive("shake.frequency", self.shake.frequency)?;
        non_negative("pointer.total_yaw", self.pointer.total_yaw)?;
        non_negative("pointer.total_pitch", self.pointer.total_pitch)?;
        non_negative("imu_cursor.total_yaw", self.imu_cursor.total_yaw)?;
        unit_range("imu_cursor.accel_weight", self.imu_cursor.accel_weight)?;
        if !self.pointer.vertical_offset.is_finite() {
            return Err(MotionError::InvalidSetting {
                name: "pointer.vertical_offset",
                value: self.pointer.vertical_offset,
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MotionError::InvalidSetting {
            name,
            value,
            reason: "must be greater than zero",
        })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MotionError::InvalidSetting {
            name,
            value,
            reason: "must not be negative",
        })
    }
}

fn unit_range(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MotionError::InvalidSetting {
            name,
            value,
            reason: "must be between 0 and 1",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(MotionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = MotionConfig::from_toml_str("").unwrap();
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config = MotionConfig::from_toml_str(
            r#"
            [swing]
            distance = 25.0

            [pointer]
            sensor_bar = "bottom"
            fast_pointer = true
            "#,
        )
        .unwrap();

        assert_eq!(config.swing.distance, 25.0);
        assert_eq!(config.swing.speed, SwingConfig::default().speed);
        assert_eq!(config.pointer.sensor_bar, SensorBarPosition::Bottom);
        assert!(config.pointer.fast_pointer);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let result = MotionConfig::from_toml_str("[shake]\nfrequency = 0.0\n");
        match result {
            Err(MotionError::InvalidSetting { name, value, .. }) => {
                assert_eq!(name, "shake.frequency");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected invalid setting, got {:?}", other),
        }
    }

    #[test]
    fn test_accel_weight_range() {
        let mut config = MotionConfig::default();
        config.imu_cursor.accel_weight = 1.5;
        assert!(config.validate().is_err());

        config.imu_cursor.accel_weight = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = MotionConfig::from_toml_str("[tilt]\nspeed = 3.0\n");
        assert!(matches!(result, Err(MotionError::ConfigParse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let mut config = MotionConfig::default();
        config.orientation.sideways = true;
        config.tilt.max_rotational_velocity = 3.5;
        config.correction_table = Some(PathBuf::from("corrections.toml"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motion.toml");
        config.save(&path).unwrap();

        assert_eq!(MotionConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_swing_input_units() {
        let input = SwingConfig::default().swing_input(Vec3::new(1.0, 0.0, -0.5));
        assert_eq!(input.max_distance, 0.5);
        assert_eq!(input.state, Vec3::new(0.5, 0.0, -0.25));
        assert!((input.twist_angle - TAU / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_response() {
        let mut pointer = PointerConfig::default();
        assert_eq!(pointer.response(true), PointerResponse::Standard);

        pointer.fast_pointer = true;
        assert_eq!(pointer.response(false), PointerResponse::Standard);
        assert_eq!(pointer.response(true), PointerResponse::Fast);
    }
}
