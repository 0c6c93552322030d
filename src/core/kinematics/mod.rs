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

//! Kinematic state and bang-bang approach control
//!
//! Every motion channel of the emulated remote is a small kinematic system
//! driven toward a target once per update tick:
//! - rotational channels limit angular acceleration (second order)
//! - positional channels limit jerk (third order)
//!
//! Both use the same control law: apply the extreme control value toward the
//! target until the stopping distance under that limit would reach it, then
//! reverse. The decision is re-evaluated every tick, so there is no explicit
//! mode to track.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use motion_dynamics::core::kinematics::{approach_angle_with_accel, RotationalState};
//!
//! let mut state = RotationalState::default();
//! let target = Vec3::new(1.0, 0.0, 0.0);
//!
//! for _ in 0..400 {
//!     approach_angle_with_accel(&mut state, target, 10.0, 1.0 / 200.0);
//! }
//!
//! assert_eq!(state.angle, target);
//! assert_eq!(state.angular_velocity, Vec3::ZERO);
//! ```

mod approach;
mod stop_distance;

pub use approach::{
    approach_angle_with_accel, approach_axis, approach_position_with_jerk, AccelLimited,
    ControlLaw, JerkLimited,
};
pub use stop_distance::{stop_distance_with_accel, stop_distance_with_jerk};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Position, velocity and acceleration of a translating channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionalState {
    /// Position in meters
    pub position: Vec3,
    /// Velocity in m/s
    pub velocity: Vec3,
    /// Acceleration in m/s²
    pub acceleration: Vec3,
}

/// Per-axis angle and angular velocity of a rotating channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationalState {
    /// Angle in radians, one per axis
    pub angle: Vec3,
    /// Angular velocity in rad/s
    pub angular_velocity: Vec3,
}

/// A channel that both translates and rotates (swing, point)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    pub positional: PositionalState,
    pub rotational: RotationalState,
}

impl PositionalState {
    /// Derivatives along one axis, position first
    #[inline]
    pub fn axis(&self, axis: usize) -> [f32; 3] {
        [self.position[axis], self.velocity[axis], self.acceleration[axis]]
    }

    #[inline]
    pub fn set_axis(&mut self, axis: usize, [position, velocity, acceleration]: [f32; 3]) {
        self.position[axis] = position;
        self.velocity[axis] = velocity;
        self.acceleration[axis] = acceleration;
    }

    /// Kill velocity and acceleration along one axis, keeping the position
    pub fn stop_axis(&mut self, axis: usize) {
        self.velocity[axis] = 0.0;
        self.acceleration[axis] = 0.0;
    }
}

impl RotationalState {
    /// Derivatives along one axis, angle first
    #[inline]
    pub fn axis(&self, axis: usize) -> [f32; 2] {
        [self.angle[axis], self.angular_velocity[axis]]
    }

    #[inline]
    pub fn set_axis(&mut self, axis: usize, [angle, angular_velocity]: [f32; 2]) {
        self.angle[axis] = angle;
        self.angular_velocity[axis] = angular_velocity;
    }
}

#[cfg(test)]
mod tests;
