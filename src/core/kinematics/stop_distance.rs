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

//! Closed-form stopping distances
//!
//! Both functions answer the same question: if the opposing extreme control is
//! applied right now, how far does the quantity travel before its velocity
//! reaches zero? The answer is signed in the direction of travel.
//!
//! Computed in `f64`; callers work in `f32` but the cubic terms lose too much
//! precision at high jerk values otherwise.

/// Distance covered while braking `velocity` to zero at a constant `max_accel`
///
/// `max_accel` must be non-zero.
#[inline]
pub fn stop_distance_with_accel(velocity: f64, max_accel: f64) -> f64 {
    velocity * velocity / (2.0 * max_accel.copysign(velocity))
}

/// Distance covered while braking to zero velocity with jerk bounded by `max_jerk`
///
/// Based on constant-jerk motion, `s = s0 + v0 t + a0 t² / 2 + j t³ / 6`: first
/// the acceleration is driven to zero, then the remaining velocity is removed
/// in the shortest possible time.
///
/// `max_jerk` must be non-zero.
pub fn stop_distance_with_jerk(velocity: f64, acceleration: f64, max_jerk: f64) -> f64 {
    // Math below expects velocity to be non-negative.
    let velocity_flip = if velocity < 0.0 { -1.0 } else { 1.0 };

    let v_0 = velocity * velocity_flip;
    let a_0 = acceleration * velocity_flip;
    let j = max_jerk;

    // Time to reach zero acceleration.
    let t_0 = a_0 / j;

    // Distance to reach zero acceleration.
    let d_0 = a_0.powi(3) / (3.0 * j * j) + (a_0 * v_0) / j;

    // Velocity at zero acceleration.
    let v_1 = v_0 + a_0 * t_0.abs() - (j * t_0 * t_0 / 2.0).copysign(t_0);

    // Distance to complete stop.
    let d_1 = v_1.abs().powf(1.5).copysign(v_1) / j.sqrt();

    (d_0 + d_1) * velocity_flip
}
