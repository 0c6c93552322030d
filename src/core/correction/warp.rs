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

//! Cursor warp rules
//!
//! A warp rule adjusts one cursor axis. Rules run in order over the same
//! cursor, so later rules see the effect of earlier ones through the current
//! value, while the origin (`x0`/`y0`) stays at the cursor as it arrived unless
//! a `rebase` rule moves it.
//!
//! Arithmetic is done in `f64`; the tuned constants were calibrated that way.

use serde::{Deserialize, Serialize};

/// Cursor axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Strict sign test; zero matches neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    fn matches(self, value: f64) -> bool {
        match self {
            Sign::Positive => value > 0.0,
            Sign::Negative => value < 0.0,
        }
    }
}

/// Sign conditions a rule requires before it applies
///
/// `x0`/`y0` test the origin, `x`/`y` the current cursor value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x0: Option<Sign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y0: Option<Sign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Sign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Sign>,
}

impl SignFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn matches(&self, cursor: &[f64; 2], origin: &[f64; 2]) -> bool {
        let test = |sign: Option<Sign>, value: f64| sign.is_none_or(|sign| sign.matches(value));

        test(self.x0, origin[0])
            && test(self.y0, origin[1])
            && test(self.x, cursor[0])
            && test(self.y, cursor[1])
    }
}

/// Adjustment applied to one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarpOp {
    /// Move toward zero by `k * |x0| * |y0|`
    ///
    /// The positive side is adjusted first; a value pushed past zero gets the
    /// negative-side adjustment too.
    Pull(f64),
    /// Add `k * |x0| * |y0|`
    Cross(f64),
    /// Add `shift * |source0|`
    Linear { shift: f64, source: Axis },
    /// Multiply by `base + slope * (pivot - |axis0|)`
    Taper { base: f64, slope: f64, pivot: f64 },
    Scale(f64),
    Offset(f64),
    /// Use the current value as the origin for later rules
    Rebase,
}

/// One conditional adjustment of a cursor axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WarpRule {
    pub axis: Axis,
    pub op: WarpOp,
    #[serde(default, skip_serializing_if = "SignFilter::is_empty")]
    pub when: SignFilter,
}

impl WarpRule {
    pub fn new(axis: Axis, op: WarpOp) -> Self {
        Self {
            axis,
            op,
            when: SignFilter::default(),
        }
    }

    pub fn when(mut self, when: SignFilter) -> Self {
        self.when = when;
        self
    }

    /// Apply the rule to `cursor`, possibly moving `origin`
    pub fn apply(&self, cursor: &mut [f64; 2], origin: &mut [f64; 2]) {
        if !self.when.matches(cursor, origin) {
            return;
        }

        let axis = self.axis.index();
        let cross = origin[0].abs() * origin[1].abs();
        let value = &mut cursor[axis];

        match self.op {
            WarpOp::Pull(k) => {
                if *value > 0.0 {
                    *value -= k * cross;
                }
                if *value < 0.0 {
                    *value += k * cross;
                }
            }
            WarpOp::Cross(k) => *value += k * cross,
            WarpOp::Linear { shift, source } => *value += shift * origin[source.index()].abs(),
            WarpOp::Taper { base, slope, pivot } => {
                *value *= base + slope * (pivot - origin[axis].abs());
            }
            WarpOp::Scale(k) => *value *= k,
            WarpOp::Offset(k) => *value += k,
            WarpOp::Rebase => origin[axis] = *value,
        }
    }
}
