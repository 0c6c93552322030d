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

//! Per-title pointer aim corrections
//!
//! Some titles expect the IR pointer to cover a different field of view, or to
//! sit at a different height, than the user's pointer settings describe.
//! Aim corrections are tuned per title and per output aspect ratio and are kept
//! as data: a TOML document maps title ids to [`AimProfile`]s.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use motion_dynamics::core::correction::{AspectRatio, CorrectionTable};
//!
//! let table = CorrectionTable::builtin().unwrap();
//! let profile = table.lookup("RZJE69", AspectRatio::Standard).unwrap();
//!
//! assert_eq!(profile.yaw, Some(23.9));
//! // Corrections pull the lower half of the screen toward the center.
//! assert!(profile.warp_cursor(Vec2::new(0.5, -0.5)).x < 0.5);
//! ```

mod warp;

pub use warp::{Axis, Sign, SignFilter, WarpOp, WarpRule};

use crate::core::error::{MotionError, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Correction table shipped with the crate
const BUILTIN_TABLE: &str = include_str!("../../../data/aim_corrections.toml");

/// Output aspect ratio the title is rendering at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// 4:3
    #[default]
    Standard,
    /// 16:9
    Widescreen,
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Standard => write!(f, "4:3"),
            AspectRatio::Widescreen => write!(f, "16:9"),
        }
    }
}

/// Pointer geometry in SI units, ready for the point emulator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAim {
    pub cursor: Vec2,
    /// Meters
    pub vertical_offset: f32,
    /// Radians
    pub total_yaw: f32,
    /// Radians
    pub total_pitch: f32,
}

/// Tuned correction for one title at one aspect ratio
///
/// Unset geometry fields keep the user's pointer settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AimProfile {
    /// Centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_offset: Option<f32>,
    /// Degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f32>,
    /// Degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warp: Vec<WarpRule>,
}

impl AimProfile {
    /// Run the warp rules over a cursor position
    pub fn warp_cursor(&self, cursor: Vec2) -> Vec2 {
        let mut current = [f64::from(cursor.x), f64::from(cursor.y)];
        let mut origin = current;

        for rule in &self.warp {
            rule.apply(&mut current, &mut origin);
        }

        Vec2::new(current[0] as f32, current[1] as f32)
    }

    /// Warp `cursor` and override the geometry of `defaults` where set
    pub fn resolve(&self, cursor: Vec2, defaults: ResolvedAim) -> ResolvedAim {
        ResolvedAim {
            cursor: self.warp_cursor(cursor),
            vertical_offset: self
                .vertical_offset
                .map_or(defaults.vertical_offset, |cm| cm / 100.0),
            total_yaw: self.yaw.map_or(defaults.total_yaw, f32::to_radians),
            total_pitch: self.pitch.map_or(defaults.total_pitch, f32::to_radians),
        }
    }
}

/// Corrections for one title, possibly sold under several ids
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleCorrection {
    #[serde(default)]
    pub name: String,
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<AimProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widescreen: Option<AimProfile>,
}

impl TitleCorrection {
    pub fn profile(&self, aspect: AspectRatio) -> Option<&AimProfile> {
        match aspect {
            AspectRatio::Standard => self.standard.as_ref(),
            AspectRatio::Widescreen => self.widescreen.as_ref(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CorrectionFile {
    #[serde(default)]
    titles: Vec<TitleCorrection>,
}

/// Title id lookup over a set of [`TitleCorrection`]s
///
/// A title id may carry at most one profile per aspect ratio across the whole
/// table.
#[derive(Debug, Clone, Default)]
pub struct CorrectionTable {
    titles: Vec<TitleCorrection>,
    index: HashMap<(String, AspectRatio), usize>,
}

impl CorrectionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, rejecting ids with two profiles for the same aspect ratio
    pub fn from_titles(titles: Vec<TitleCorrection>) -> Result<Self> {
        let mut index = HashMap::new();

        for (position, title) in titles.iter().enumerate() {
            for aspect in [AspectRatio::Standard, AspectRatio::Widescreen] {
                if title.profile(aspect).is_none() {
                    continue;
                }
                for id in &title.ids {
                    if index.insert((id.clone(), aspect), position).is_some() {
                        return Err(MotionError::DuplicateTitle(format!("{} ({})", id, aspect)));
                    }
                }
            }
        }

        Ok(Self { titles, index })
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CorrectionFile = toml::from_str(text)?;
        Self::from_titles(file.titles)
    }

    /// Load a correction table from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&text)?;

        log::debug!(
            "Loaded {} aim corrections from {}",
            table.len(),
            path.display()
        );

        Ok(table)
    }

    /// The table bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_TABLE)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let file = CorrectionFile {
            titles: self.titles.clone(),
        };
        Ok(toml::to_string(&file)?)
    }

    /// Profile for a title id at an aspect ratio
    pub fn lookup(&self, id: &str, aspect: AspectRatio) -> Option<&AimProfile> {
        let position = self.index.get(&(id.to_owned(), aspect))?;
        self.titles[*position].profile(aspect)
    }

    /// Title entry covering `id` at either aspect ratio
    pub fn title(&self, id: &str) -> Option<&TitleCorrection> {
        [AspectRatio::Standard, AspectRatio::Widescreen]
            .into_iter()
            .find_map(|aspect| self.index.get(&(id.to_owned(), aspect)))
            .map(|&position| &self.titles[position])
    }

    pub fn titles(&self) -> &[TitleCorrection] {
        &self.titles
    }

    /// Number of title entries
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests;
