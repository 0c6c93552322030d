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

//! Dynamics snapshots
//!
//! A snapshot captures every motion channel of a [`MotionDevice`] so a session
//! can resume with the remote mid-swing instead of snapping back to rest.
//!
//! # Snapshot Format
//!
//! Snapshots are serialized with bincode (serde mode):
//! - Version number
//! - Metadata (timestamp, running title, aspect ratio, tick count)
//! - Channel states (swing, tilt, point, shake, IMU cursor)
//!
//! # Version Compatibility
//!
//! Loading a snapshot written with a different version fails with
//! [`MotionError::SnapshotVersion`].
//!
//! # Example
//!
//! ```no_run
//! use motion_dynamics::core::config::MotionConfig;
//! use motion_dynamics::core::device::MotionDevice;
//! use motion_dynamics::core::snapshot::DynamicsSnapshot;
//!
//! let mut device = MotionDevice::new(MotionConfig::default());
//! // ... step the device ...
//!
//! DynamicsSnapshot::from_device(&device).save_to_file("motion.snap").unwrap();
//!
//! let snapshot = DynamicsSnapshot::load_from_file("motion.snap").unwrap();
//! snapshot.apply_to(&mut device);
//! ```

use crate::core::correction::AspectRatio;
use crate::core::device::{DynamicsState, MotionDevice};
use crate::core::error::{MotionError, Result};
use bincode::config;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Snapshot format version
///
/// Incremented whenever a channel state changes shape.
pub const SNAPSHOT_VERSION: u32 = 1;

/// When and for what a snapshot was taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub timestamp: DateTime<Utc>,

    /// Running title id, empty when none
    pub title_id: String,

    pub aspect: AspectRatio,

    /// Update ticks since the device was reset
    pub tick_count: u64,
}

/// Versioned copy of a device's dynamic state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicsSnapshot {
    pub version: u32,
    pub metadata: SnapshotMetadata,
    pub state: DynamicsState,
}

impl DynamicsSnapshot {
    /// Capture the device's current state
    pub fn from_device(device: &MotionDevice) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            metadata: SnapshotMetadata {
                timestamp: Utc::now(),
                title_id: device.active_title().unwrap_or_default().to_owned(),
                aspect: device.aspect_ratio(),
                tick_count: device.tick_count(),
            },
            state: *device.state(),
        }
    }

    /// Restore the captured channel states and tick count
    ///
    /// The running title is left alone; it belongs to the session, not the
    /// snapshot.
    pub fn apply_to(&self, device: &mut MotionDevice) {
        if device.active_title().unwrap_or_default() != self.metadata.title_id {
            log::warn!(
                "Applying snapshot taken for title '{}' while '{}' is running",
                self.metadata.title_id,
                device.active_title().unwrap_or_default()
            );
        }
        device.restore_state(self.state, self.metadata.tick_count);
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serde::encode_to_vec(self, config::standard())?)
    }

    /// Decode a snapshot and verify its version
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (snapshot, _): (DynamicsSnapshot, usize) =
            bincode::serde::decode_from_slice(bytes, config::standard())?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(MotionError::SnapshotVersion {
                expected: SNAPSHOT_VERSION,
                got: snapshot.version,
            });
        }

        Ok(snapshot)
    }

    /// Save snapshot to file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be created
    /// - Serialization fails
    /// - Write operation fails
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let encoded = self.to_bytes()?;
        let mut file = File::create(path)?;
        file.write_all(&encoded)?;
        Ok(())
    }

    /// Load snapshot from file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be opened or read
    /// - Deserialization fails
    /// - Version is incompatible
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;

        Self::from_bytes(&buffer)
    }
}
