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

/// Motion emulation error types
use thiserror::Error;

/// Result type for motion emulation operations
pub type Result<T> = std::result::Result<T, MotionError>;

/// Main error type for the motion core
///
/// The per-tick numeric code never fails; these errors come from the
/// surfaces around it (configuration, correction tables, snapshots).
#[derive(Error, Debug)]
pub enum MotionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid setting {name} = {value}: {reason}")]
    InvalidSetting {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate aim correction for {0}")]
    DuplicateTitle(String),

    #[error("Snapshot encode error: {0}")]
    SnapshotEncode(#[from] bincode::error::EncodeError),

    #[error("Snapshot decode error: {0}")]
    SnapshotDecode(#[from] bincode::error::DecodeError),

    #[error("Incompatible snapshot version: expected {expected}, got {got}")]
    SnapshotVersion { expected: u32, got: u32 },
}
