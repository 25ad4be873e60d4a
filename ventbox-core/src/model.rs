//! # Enclosure Model Module
//!
//! This module holds the fixed engineering assumptions behind the analyzer:
//! the displacement of the driver and bracing, the driver's mounting depth,
//! the Helmholtz constant and every acceptance threshold used by the
//! suggestion and safety stages.
//!
//! ## Features
//! - A single `EnclosureModel` value instead of scattered literals
//! - Reference values for the 12" woofer the analyzer was built around
//! - Per-usage target tuning frequencies
//! - JSON (de)serialization so an alternate driver model can be loaded;
//!   fields missing from a file fall back to the reference values

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::usage::UsageType;

/// Engineering constants for one driver / vent-shape combination.
///
/// Lengths are in cm, volumes in liters, areas in cm² and frequencies in Hz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnclosureModel {
    /// Volume occupied by the driver's basket and magnet (L).
    pub driver_displacement: f64,
    /// Volume occupied by internal bracing (L).
    pub bracing_displacement: f64,
    /// Depth the driver reaches into the box from the baffle (cm).
    pub driver_depth: f64,
    /// Number of identical triangular vents.
    pub port_count: u32,
    /// Helmholtz constant for cm / liter inputs.
    pub helmholtz_k: f64,
    /// End correction is `end_correction_factor * sqrt(total area)`.
    pub end_correction_factor: f64,
    pub min_net_volume: f64,
    pub max_net_volume: f64,
    /// Below this total vent area, port noise becomes likely (cm²).
    pub min_port_area: f64,
    /// Installable range for the vent duct (cm).
    pub min_port_length: f64,
    pub max_port_length: f64,
    /// Deadband around the target inside which the box counts as tuned (Hz).
    pub frequency_tolerance: f64,
    pub min_magnet_clearance: f64,
    pub min_rear_port_clearance: f64,
    pub karaoke_target_hz: f64,
    pub music_target_hz: f64,
}

impl Default for EnclosureModel {
    fn default() -> Self {
        Self {
            driver_displacement: 3.0,
            bracing_displacement: 1.0,
            driver_depth: 13.0,
            port_count: 2,
            helmholtz_k: 23562.5,
            end_correction_factor: 0.732,
            min_net_volume: 50.0,
            max_net_volume: 70.0,
            min_port_area: 150.0,
            min_port_length: 8.0,
            max_port_length: 35.0,
            frequency_tolerance: 1.0,
            min_magnet_clearance: 5.0,
            min_rear_port_clearance: 5.0,
            // Midpoints of the 47-48 Hz and 44-45 Hz bands.
            karaoke_target_hz: 47.5,
            music_target_hz: 44.5,
        }
    }
}

/// The reference model, built once and shared by every `analyze` call.
pub static REFERENCE_MODEL: Lazy<EnclosureModel> = Lazy::new(EnclosureModel::default);

impl EnclosureModel {
    /// Fixed volume subtracted from the raw box volume (driver + bracing).
    pub fn total_static_displacement(&self) -> f64 {
        self.driver_displacement + self.bracing_displacement
    }

    /// Target tuning frequency for the given usage.
    pub fn target_frequency(&self, usage: UsageType) -> f64 {
        match usage {
            UsageType::Karaoke => self.karaoke_target_hz,
            UsageType::Music => self.music_target_hz,
        }
    }

    /// Whether a net volume sits inside the acceptable band (inclusive).
    pub fn volume_in_band(&self, net_volume: f64) -> bool {
        net_volume >= self.min_net_volume && net_volume <= self.max_net_volume
    }

    /// Whether a suggested duct length can physically be installed (inclusive).
    ///
    /// A NaN length is never installable.
    pub fn length_installable(&self, length: f64) -> bool {
        (self.min_port_length..=self.max_port_length).contains(&length)
    }

    /// Loads a model from JSON text. Missing fields keep their reference value.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
