//! Construction safety checks.
//!
//! Each check looks at a single condition and knows nothing about the others or
//! about the tuning suggestion. `check_all` runs every check and returns the
//! triggered warnings in display order.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::model::EnclosureModel;

/// A triggered safety check, carrying the measured value that tripped it.
///
/// Serializes as its human-readable message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SafetyWarning {
    /// Total vent area is below the minimum; expect chuffing and turbulence.
    PortAreaTooSmall { area: f64, min: f64 },
    /// Net volume below the band; bass lacks output.
    VolumeTooSmall { volume: f64, min: f64 },
    /// Net volume above the band; bass gets loose.
    VolumeTooLarge { volume: f64, max: f64 },
    /// Too little air between the magnet and the rear panel.
    MagnetClearance { clearance: f64, min: f64 },
    /// The duct ends too close to the rear panel.
    RearPortClearance { clearance: f64, min: f64 },
    /// The duct is at least as deep as the box.
    PortDeeperThanBox { length: f64, depth: f64 },
}

impl SafetyWarning {
    /// True for conditions that make the build physically impossible.
    pub fn is_geometric_error(&self) -> bool {
        matches!(self, SafetyWarning::PortDeeperThanBox { .. })
    }
}

impl fmt::Display for SafetyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SafetyWarning::PortAreaTooSmall { area, min } => write!(
                f,
                "Total vent area {area}cm² < {min}cm² (high risk of port noise)."
            ),
            SafetyWarning::VolumeTooSmall { volume, min } => write!(
                f,
                "Net box volume {volume:.1}L < {min}L (bass lacks punch)."
            ),
            SafetyWarning::VolumeTooLarge { volume, max } => write!(
                f,
                "Net box volume {volume:.1}L > {max}L (bass loses control)."
            ),
            SafetyWarning::MagnetClearance { clearance, min } => write!(
                f,
                "Magnet to rear panel clearance {clearance:.1}cm < {min}cm (air gets choked)."
            ),
            SafetyWarning::RearPortClearance { clearance, min } => write!(
                f,
                "Vent duct end to rear panel {clearance:.1}cm < {min}cm (vent gets choked)."
            ),
            SafetyWarning::PortDeeperThanBox { length, depth } => write!(
                f,
                "Error: vent duct depth ({length}cm) exceeds box depth ({depth}cm)."
            ),
        }
    }
}

impl Serialize for SafetyWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Measurements the checks run against.
#[derive(Debug, Clone, Copy)]
pub struct SafetyInputs {
    pub total_area: f64,
    pub net_volume: f64,
    pub box_depth: f64,
    pub port_length: f64,
}

/// Distance from the back of the driver to the rear panel (cm).
pub fn magnet_clearance(model: &EnclosureModel, box_depth: f64) -> f64 {
    box_depth - model.driver_depth
}

/// Distance from the inner end of the vent duct to the rear panel (cm).
pub fn rear_port_clearance(box_depth: f64, port_length: f64) -> f64 {
    box_depth - port_length
}

/// Runs every check and returns the triggered warnings in display order.
pub fn check_all(model: &EnclosureModel, inputs: &SafetyInputs) -> Vec<SafetyWarning> {
    let mut warnings = Vec::new();

    if inputs.total_area < model.min_port_area {
        warnings.push(SafetyWarning::PortAreaTooSmall {
            area: inputs.total_area,
            min: model.min_port_area,
        });
    }

    if inputs.net_volume < model.min_net_volume {
        warnings.push(SafetyWarning::VolumeTooSmall {
            volume: inputs.net_volume,
            min: model.min_net_volume,
        });
    } else if inputs.net_volume > model.max_net_volume {
        warnings.push(SafetyWarning::VolumeTooLarge {
            volume: inputs.net_volume,
            max: model.max_net_volume,
        });
    }

    let magnet = magnet_clearance(model, inputs.box_depth);
    if magnet < model.min_magnet_clearance {
        warnings.push(SafetyWarning::MagnetClearance {
            clearance: magnet,
            min: model.min_magnet_clearance,
        });
    }

    let rear = rear_port_clearance(inputs.box_depth, inputs.port_length);
    if rear < model.min_rear_port_clearance {
        warnings.push(SafetyWarning::RearPortClearance {
            clearance: rear,
            min: model.min_rear_port_clearance,
        });
    }

    if inputs.port_length >= inputs.box_depth {
        warnings.push(SafetyWarning::PortDeeperThanBox {
            length: inputs.port_length,
            depth: inputs.box_depth,
        });
    }

    warnings
}
