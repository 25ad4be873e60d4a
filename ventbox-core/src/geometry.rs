//! # Geometry Module
//!
//! Input geometry for the analyzer and the area / volume stages computed from it.
//! All lengths are internal (airspace) measurements in centimeters; volumes are
//! returned in liters.
//!
//! Nothing here rejects zero or negative inputs. They flow through the
//! arithmetic and show up as zero or negative areas and volumes.

use serde::{Deserialize, Serialize};

/// Internal box dimensions in cm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// Width (cm)
    pub w: f64,
    /// Height (cm)
    pub h: f64,
    /// Depth (cm)
    pub d: f64,
}

impl Default for BoxDimensions {
    fn default() -> Self {
        Self { w: 35.0, h: 60.0, d: 32.0 }
    }
}

/// Cross-section and depth of one triangular vent. Every vent in the box is
/// assumed identical to this one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrianglePortConfig {
    /// Triangle base (cm)
    pub base: f64,
    /// Triangle height (cm)
    pub height: f64,
    /// Current duct depth into the box (cm)
    pub length: f64,
}

impl Default for TrianglePortConfig {
    fn default() -> Self {
        Self { base: 10.0, height: 10.0, length: 20.0 }
    }
}

/// Area of a single triangular vent: `base * height / 2` (cm²).
pub fn port_area(port: &TrianglePortConfig) -> f64 {
    (port.base * port.height) / 2.0
}

/// Combined area of `port_count` identical vents (cm²).
pub fn total_port_area(port: &TrianglePortConfig, port_count: u32) -> f64 {
    port_area(port) * port_count as f64
}

/// Raw internal volume `w * h * d`, converted from cm³ to liters.
pub fn raw_volume(dims: &BoxDimensions) -> f64 {
    (dims.w * dims.h * dims.d) / 1000.0
}

/// Air displaced by the vent ducts themselves (L).
pub fn port_volume(total_area: f64, length: f64) -> f64 {
    (total_area * length) / 1000.0
}

/// Effective volume left for the air spring. Not clamped; may be zero or negative.
pub fn net_volume(raw_volume: f64, static_displacement: f64, port_volume: f64) -> f64 {
    raw_volume - static_displacement - port_volume
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_triangles_make_a_rectangle() {
        let port = TrianglePortConfig { base: 10.0, height: 10.0, length: 20.0 };
        assert_eq!(port_area(&port), 50.0);
        assert_eq!(total_port_area(&port, 2), 100.0);

        let port = TrianglePortConfig { base: 12.5, height: 7.0, length: 20.0 };
        assert_eq!(total_port_area(&port, 2), 12.5 * 7.0);
    }

    #[test]
    fn default_box_volumes() {
        let dims = BoxDimensions::default();
        let port = TrianglePortConfig::default();
        let raw = raw_volume(&dims);
        assert!((raw - 67.2).abs() < 1e-9);

        let vent = port_volume(total_port_area(&port, 2), port.length);
        assert!((vent - 2.0).abs() < 1e-9);
        assert!((net_volume(raw, 4.0, vent) - 61.2).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_propagate() {
        let flat = TrianglePortConfig { base: 0.0, height: 10.0, length: 20.0 };
        assert_eq!(total_port_area(&flat, 2), 0.0);

        let negative = TrianglePortConfig { base: -4.0, height: 10.0, length: 20.0 };
        assert_eq!(total_port_area(&negative, 2), -40.0);

        let tiny = BoxDimensions { w: 10.0, h: 10.0, d: 10.0 };
        assert_eq!(net_volume(raw_volume(&tiny), 4.0, 0.0), -3.0);
    }
}
