//! # Helmholtz Resonance Module
//!
//! This module models the vented box as a Helmholtz resonator and provides both
//! directions of the tuning formula:
//!
//! ```text
//! Fb = sqrt( k * S / ((L + ec) * Vb) )        ec = 0.732 * sqrt(S)
//! L  = k * S / (Fb^2 * Vb) - ec
//! ```
//!
//! `S` is the total vent area (cm²), `L` the duct length (cm), `Vb` the net box
//! volume (L) and `k` the model's Helmholtz constant.
//!
//! ## Length refinement
//! The net volume itself depends on `L`, since a longer duct displaces more air.
//! `required_length` resolves this with exactly two passes: solve against the
//! current net volume, recompute the net volume with that length, then solve
//! again. The pass count is fixed. Iterating further would change results at
//! the edges of the input range.

use crate::geometry;
use crate::model::EnclosureModel;

/// Additive duct-mouth correction, proportional to `sqrt(total_area)` (cm).
pub fn end_correction(model: &EnclosureModel, total_area: f64) -> f64 {
    model.end_correction_factor * total_area.sqrt()
}

/// Resonant frequency of the box for a given duct length.
///
/// Returns `None` unless net volume, vent area and duct length are all strictly
/// positive; outside that region the formula divides by zero or takes the
/// root of a negative number.
pub fn tuning_frequency(
    model: &EnclosureModel,
    total_area: f64,
    length: f64,
    net_volume: f64,
) -> Option<f64> {
    if net_volume > 0.0 && total_area > 0.0 && length > 0.0 {
        let effective_length = length + end_correction(model, total_area);
        Some(((model.helmholtz_k * total_area) / (effective_length * net_volume)).sqrt())
    } else {
        None
    }
}

/// Intermediate values of the two-pass length solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRefinement {
    /// Length solved against the net volume of the current duct.
    pub first_pass: f64,
    /// Net volume recomputed with `first_pass` as the duct length.
    pub refined_net_volume: f64,
    /// Length solved against `refined_net_volume`. This is the suggestion.
    pub length: f64,
}

/// Duct length that tunes the box to `target_hz`, using the fixed two-pass
/// refinement described in the module docs.
///
/// No guard is applied to the refined net volume: when it is zero or negative
/// the result is negative or non-finite and callers must range-check it.
pub fn required_length(
    model: &EnclosureModel,
    total_area: f64,
    raw_volume: f64,
    net_volume: f64,
    target_hz: f64,
) -> LengthRefinement {
    let ec = end_correction(model, total_area);
    let solve = |volume: f64| (model.helmholtz_k * total_area) / (target_hz.powi(2) * volume) - ec;

    let first_pass = solve(net_volume);
    let refined_net_volume = geometry::net_volume(
        raw_volume,
        model.total_static_displacement(),
        geometry::port_volume(total_area, first_pass),
    );
    let length = solve(refined_net_volume);

    LengthRefinement { first_pass, refined_net_volume, length }
}
