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

use clap::{Parser, ValueEnum};
use glam::{Vec2, Vec3};
use log::{error, info};
use motion_dynamics::core::config::MotionConfig;
use motion_dynamics::core::correction::{AspectRatio, CorrectionTable};
use motion_dynamics::core::device::{DeviceInput, MotionDevice, UPDATE_FREQ};
use motion_dynamics::core::emulation::CursorState;
use motion_dynamics::core::error::Result;
use motion_dynamics::core::sensor::AccelData;
use motion_dynamics::core::snapshot::DynamicsSnapshot;
use serde::Serialize;
use std::path::PathBuf;

/// Gesture held for the first half of the run, then released
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Gesture {
    /// Remote lying still
    Idle,
    /// Full forward tilt
    Tilt,
    /// Swing to the right
    Swing,
    /// Shake on every axis
    Shake,
    /// Cursor moved to the upper right
    Point,
    /// Constant real gyroscope rotation
    Imu,
}

/// Motion controller dynamics simulator
#[derive(Parser)]
#[command(name = "motion-sim")]
#[command(about = "Simulate motion remote dynamics and print sensor reports", long_about = None)]
struct Args {
    /// Path to a TOML motion configuration
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Path to a TOML aim correction table (overrides the configured one)
    #[arg(long)]
    corrections: Option<PathBuf>,

    /// Running title id (e.g., RZJE69)
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Title renders at 16:9
    #[arg(short = 'w', long)]
    widescreen: bool,

    /// Gesture to perform
    #[arg(short = 'g', long, value_enum, default_value = "idle")]
    gesture: Gesture,

    /// Number of update ticks to simulate
    #[arg(short = 'n', long, default_value = "400")]
    ticks: u64,

    /// Print one JSON frame per tick to stdout
    #[arg(long)]
    json: bool,

    /// Write a dynamics snapshot here when done
    #[arg(long)]
    save_snapshot: Option<PathBuf>,
}

/// One tick of sensor output
#[derive(Serialize)]
struct Frame {
    tick: u64,
    accel: AccelData,
    /// rad/s
    angular_velocity: [f32; 3],
    /// Sensor bar position in remote space, meters
    sensor_bar: [f32; 3],
}

fn gesture_input(gesture: Gesture, held: bool) -> DeviceInput {
    let mut input = DeviceInput::default();
    if !held {
        return input;
    }

    match gesture {
        Gesture::Idle => {}
        Gesture::Tilt => input.tilt = Vec2::new(0.0, 1.0),
        Gesture::Swing => input.swing = Vec3::new(1.0, 0.0, 0.0),
        Gesture::Shake => input.shake = Vec3::ONE,
        Gesture::Point => input.cursor = CursorState::visible(0.5, 0.4),
        Gesture::Imu => {
            input.imu_gyro = Some(Vec3::new(0.0, 0.0, 0.5));
            input.imu_accel = Some(Vec3::new(0.0, 0.0, 9.8));
        }
    }
    input
}

fn load_config(args: &Args) -> Result<MotionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            MotionConfig::load(path)?
        }
        None => MotionConfig::default(),
    };

    if args.gesture == Gesture::Imu && !config.imu_cursor.enabled {
        info!("Enabling IMU cursor for the imu gesture");
        config.imu_cursor.enabled = true;
    }

    Ok(config)
}

fn load_corrections(args: &Args, config: &MotionConfig) -> Result<CorrectionTable> {
    match args.corrections.as_ref().or(config.correction_table.as_ref()) {
        Some(path) => {
            info!("Loading aim corrections from: {}", path.display());
            CorrectionTable::load(path)
        }
        None => CorrectionTable::builtin(),
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (ignore if not found)
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Logs go to stderr so JSON frames on stdout stay clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("motion-sim v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = load_config(&args).inspect_err(|e| error!("Failed to load config: {}", e))?;
    let corrections = load_corrections(&args, &config)
        .inspect_err(|e| error!("Failed to load aim corrections: {}", e))?;
    info!("{} titles with aim corrections", corrections.len());

    let mut device = MotionDevice::new(config);
    device.set_correction_table(corrections);

    if let Some(title) = &args.title {
        let aspect = if args.widescreen {
            AspectRatio::Widescreen
        } else {
            AspectRatio::Standard
        };
        device.set_active_title(title, aspect);
        if device.active_profile().is_some() {
            info!("Aim correction active for {} ({})", title, aspect);
        }
    }

    info!(
        "Simulating {:?} for {} ticks ({:.2} s)",
        args.gesture,
        args.ticks,
        args.ticks as f64 / f64::from(UPDATE_FREQ)
    );

    let total_ticks = args.ticks;
    let release_tick = total_ticks / 2;
    let log_interval = (total_ticks / 10).max(1);

    for tick in 0..total_ticks {
        let input = gesture_input(args.gesture, tick < release_tick);
        device.step_dynamics(&input);

        let report = device.accel_report(input.imu_accel);

        if tick % log_interval == 0 && tick > 0 {
            info!(
                "Progress: {}/{} ticks | accel: 0x{:03X} 0x{:03X} 0x{:03X}",
                tick, total_ticks, report.x, report.y, report.z
            );
        }

        if args.json {
            let frame = Frame {
                tick: device.tick_count(),
                accel: report,
                angular_velocity: device.total_angular_velocity(input.imu_gyro).to_array(),
                sensor_bar: device
                    .total_transformation()
                    .transform_point3(Vec3::ZERO)
                    .to_array(),
            };
            println!("{}", serde_json::to_string(&frame)?);
        }
    }

    info!("Simulation completed");
    info!("Total ticks: {}", device.tick_count());

    if let Some(path) = &args.save_snapshot {
        DynamicsSnapshot::from_device(&device).save_to_file(path)?;
        info!("Snapshot saved to: {}", path.display());
    }

    Ok(())
}
