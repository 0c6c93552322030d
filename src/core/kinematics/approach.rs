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

//! Bang-bang approach with stopping-distance lookahead
//!
//! One control law serves every derivative order. Per axis and per tick:
//! 1. Compute how far the axis would still travel if braked at the limit.
//! 2. Steer with `sign(offset - stop_distance) * limit`.
//! 3. Integrate the derivatives with the kinematic polynomial, highest first.
//! 4. If the step would cross the target, settle exactly on it instead.
//!
//! [`ControlLaw`] supplies the order-specific parts: the stopping distance and
//! how an axis settles.

use super::stop_distance::{stop_distance_with_accel, stop_distance_with_jerk};
use super::{PositionalState, RotationalState};
use crate::core::math::sign;
use glam::Vec3;

/// Offsets smaller than this snap straight onto an angular target
const ANGLE_SETTLE_EPSILON: f32 = 0.0001;

/// Order-specific pieces of the approach control law
///
/// Axis slices hold `ORDER` derivatives, position first. The control input is
/// the derivative one above the last tracked one.
pub trait ControlLaw {
    /// Number of tracked derivatives, position included
    const ORDER: usize;

    /// Signed distance travelled before velocity reaches zero under `limit`
    fn stop_distance(axis: &[f32], limit: f32) -> f32;

    /// Whether a step of `change` toward a target `offset` away should settle
    fn overshoots(offset: f32, change: f32) -> bool;

    /// Place the axis exactly on `target`
    fn settle(axis: &mut [f32], target: f32, offset: f32, time_elapsed: f32);
}

/// Second order: angle and angular velocity, angular acceleration is the control
#[derive(Debug, Clone, Copy)]
pub struct AccelLimited;

/// Third order: position, velocity and acceleration, jerk is the control
#[derive(Debug, Clone, Copy)]
pub struct JerkLimited;

impl ControlLaw for AccelLimited {
    const ORDER: usize = 2;

    fn stop_distance(axis: &[f32], limit: f32) -> f32 {
        stop_distance_with_accel(f64::from(axis[1]), f64::from(limit)) as f32
    }

    fn overshoots(offset: f32, change: f32) -> bool {
        offset.abs() < ANGLE_SETTLE_EPSILON || change / offset > 1.0
    }

    fn settle(axis: &mut [f32], target: f32, offset: f32, time_elapsed: f32) {
        // Report the velocity that would have landed exactly on target.
        axis[1] = offset / time_elapsed;
        axis[0] = target;
    }
}

impl ControlLaw for JerkLimited {
    const ORDER: usize = 3;

    fn stop_distance(axis: &[f32], limit: f32) -> f32 {
        stop_distance_with_jerk(f64::from(axis[1]), f64::from(axis[2]), f64::from(limit)) as f32
    }

    fn overshoots(offset: f32, change: f32) -> bool {
        // TODO: Also settle when a smaller jerk would have undershot.
        change / offset > 1.0
    }

    fn settle(axis: &mut [f32], target: f32, _offset: f32, _time_elapsed: f32) {
        // Assume we would have stopped right on target.
        axis[2] = 0.0;
        axis[1] = 0.0;
        axis[0] = target;
    }
}

/// Drive one axis toward `target` for one tick
///
/// `limit` is the maximum magnitude of the control input and must be non-zero.
pub fn approach_axis<L: ControlLaw>(axis: &mut [f32], target: f32, limit: f32, time_elapsed: f32) {
    debug_assert_eq!(axis.len(), L::ORDER);

    let offset = target - axis[0];
    let stop_offset = offset - L::stop_distance(axis, limit);
    let control = sign(stop_offset) * limit;

    let change = integrate(axis, control, time_elapsed);

    if L::overshoots(offset, change) {
        L::settle(axis, target, offset, time_elapsed);
    } else {
        axis[0] += change;
    }
}

/// Advance every derivative above position and return the change in position
///
/// Higher derivatives are updated first so each lower one integrates the fresh
/// values above it.
fn integrate(axis: &mut [f32], control: f32, time_elapsed: f32) -> f32 {
    for order in (1..axis.len()).rev() {
        axis[order] += taylor_step(axis, order, control, time_elapsed);
    }
    taylor_step(axis, 0, control, time_elapsed)
}

/// Change of derivative `order` over one tick: Σ d[k] dtⁿ / n!
fn taylor_step(axis: &[f32], order: usize, control: f32, time_elapsed: f32) -> f32 {
    let mut change = 0.0;
    let mut factor = 1.0;

    for higher in order + 1..=axis.len() {
        factor *= time_elapsed / (higher - order) as f32;
        let value = axis.get(higher).copied().unwrap_or(control);
        change += value * factor;
    }

    change
}

/// Approach `angle_target` with angular acceleration limited to `max_accel`
pub fn approach_angle_with_accel(
    state: &mut RotationalState,
    angle_target: Vec3,
    max_accel: f32,
    time_elapsed: f32,
) {
    for i in 0..3 {
        let mut axis = state.axis(i);
        approach_axis::<AccelLimited>(&mut axis, angle_target[i], max_accel, time_elapsed);
        state.set_axis(i, axis);
    }
}

/// Approach `position_target` with per-axis jerk limited to `max_jerk`
pub fn approach_position_with_jerk(
    state: &mut PositionalState,
    position_target: Vec3,
    max_jerk: Vec3,
    time_elapsed: f32,
) {
    for i in 0..3 {
        let mut axis = state.axis(i);
        approach_axis::<JerkLimited>(&mut axis, position_target[i], max_jerk[i], time_elapsed);
        state.set_axis(i, axis);
    }
}
