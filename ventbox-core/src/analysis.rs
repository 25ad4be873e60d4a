//! # Box Analysis Module
//!
//! The analyzer proper: turns box geometry, vent geometry and intended usage into
//! volumes, the current tuning frequency, a correction for the vent length and
//! the list of safety warnings.
//!
//! ## Stages
//! 1. Vent area
//! 2. Raw, vent and net volumes
//! 3. Current tuning frequency (guarded Helmholtz formula)
//! 4. Target frequency for the usage
//! 5. Suggested vent length (two-pass refinement, feasibility check)
//! 6. Safety checks
//!
//! The analysis never fails. Degenerate inputs come back as a zero tuning
//! frequency, negative volumes or out-of-range suggested lengths.

use serde::Serialize;

use crate::geometry::{self, BoxDimensions, TrianglePortConfig};
use crate::helmholtz;
use crate::model::{EnclosureModel, REFERENCE_MODEL};
use crate::safety::{self, SafetyInputs, SafetyWarning};
use crate::usage::UsageType;

/// What the builder should do with the vent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionAction {
    /// Current tuning is within tolerance of the target.
    Perfect,
    /// Change the duct length to `suggested_length`.
    AdjustLength,
    /// The required duct length cannot be installed; the vent area has to change.
    Impossible,
}

impl SuggestionAction {
    pub fn headline(&self) -> &'static str {
        match self {
            SuggestionAction::Perfect => "TUNED",
            SuggestionAction::AdjustLength => "ADJUST VENT DEPTH",
            SuggestionAction::Impossible => "OUT OF SPEC",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            SuggestionAction::Perfect => "Current dimensions are already optimal for this driver.",
            SuggestionAction::AdjustLength => {
                "Change the vent duct length to reach the optimal Fb."
            }
            SuggestionAction::Impossible => {
                "The current vent area cannot reach the target by changing depth. Change the vent area."
            }
        }
    }
}

/// Direction and amount of a vent length change (cm, always non-negative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthAdjustment {
    Extend(f64),
    Shorten(f64),
}

/// Everything the analyzer derives from one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Raw internal volume (L).
    pub v_raw: f64,
    /// Net volume after driver, bracing and vent displacement (L).
    pub v_net: f64,
    /// Combined vent area (cm²).
    pub s_total: f64,
    /// Current tuning in Hz, or `0.0` when it cannot be computed.
    pub fb_current: f64,
    pub fb_target: f64,
    /// `fb_current - fb_target`; positive means tuned above target.
    pub delta_fb: f64,
    pub action: SuggestionAction,
    /// Proposed duct length (cm). Out-of-range values are kept as-is.
    pub suggested_length: f64,
    /// `suggested_length - current length` (cm).
    pub length_diff: f64,
    /// Triggered safety checks; each serializes as its message text.
    pub warnings: Vec<SafetyWarning>,
    pub magnet_clearance: f64,
    pub rear_port_clearance: f64,
}

impl AnalysisResult {
    /// Current tuning, or `None` when volume, area or length was not positive.
    ///
    /// The guarded formula only yields positive frequencies, so the `0.0`
    /// sentinel in `fb_current` is unambiguous.
    pub fn current_tuning(&self) -> Option<f64> {
        (self.fb_current > 0.0).then_some(self.fb_current)
    }

    /// True when the box is tuned above the target.
    pub fn is_sharp(&self) -> bool {
        self.fb_current > self.fb_target
    }

    /// How to change the duct, only meaningful for `AdjustLength`.
    pub fn length_adjustment(&self) -> Option<LengthAdjustment> {
        if self.action != SuggestionAction::AdjustLength {
            return None;
        }
        let amount = self.length_diff.abs();
        if self.length_diff > 0.0 {
            Some(LengthAdjustment::Extend(amount))
        } else {
            Some(LengthAdjustment::Shorten(amount))
        }
    }

    pub fn volume_in_band(&self, model: &EnclosureModel) -> bool {
        model.volume_in_band(self.v_net)
    }

    pub fn area_sufficient(&self, model: &EnclosureModel) -> bool {
        self.s_total >= model.min_port_area
    }

    /// Fill of a 0-60 Hz frequency meter, never below 10%.
    pub fn meter_fraction(&self) -> f64 {
        (self.fb_current / 60.0).clamp(0.1, 1.0)
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Analyzes a box against the reference driver model.
pub fn analyze(
    dims: &BoxDimensions,
    port: &TrianglePortConfig,
    usage: UsageType,
) -> AnalysisResult {
    analyze_with(&REFERENCE_MODEL, dims, port, usage)
}

/// Analyzes a box against an explicit driver model.
pub fn analyze_with(
    model: &EnclosureModel,
    dims: &BoxDimensions,
    port: &TrianglePortConfig,
    usage: UsageType,
) -> AnalysisResult {
    // --- Stage 1: vent area ---
    let s_total = geometry::total_port_area(port, model.port_count);

    // --- Stage 2: volumes ---
    let v_raw = geometry::raw_volume(dims);
    let v_port = geometry::port_volume(s_total, port.length);
    let v_net = geometry::net_volume(v_raw, model.total_static_displacement(), v_port);

    // --- Stage 3: current tuning ---
    let fb_current = helmholtz::tuning_frequency(model, s_total, port.length, v_net).unwrap_or(0.0);

    // --- Stage 4: target ---
    let fb_target = model.target_frequency(usage);
    let delta_fb = fb_current - fb_target;

    // --- Stage 5: suggestion ---
    let (action, suggested_length) = if delta_fb.abs() <= model.frequency_tolerance {
        (SuggestionAction::Perfect, port.length)
    } else {
        let refined = helmholtz::required_length(model, s_total, v_raw, v_net, fb_target);
        let action = if model.length_installable(refined.length) {
            SuggestionAction::AdjustLength
        } else {
            SuggestionAction::Impossible
        };
        (action, refined.length)
    };

    // --- Stage 6: safety ---
    let warnings = safety::check_all(
        model,
        &SafetyInputs {
            total_area: s_total,
            net_volume: v_net,
            box_depth: dims.d,
            port_length: port.length,
        },
    );

    AnalysisResult {
        v_raw,
        v_net,
        s_total,
        fb_current,
        fb_target,
        delta_fb,
        action,
        suggested_length,
        length_diff: suggested_length - port.length,
        warnings,
        magnet_clearance: safety::magnet_clearance(model, dims.d),
        rear_port_clearance: safety::rear_port_clearance(dims.d, port.length),
    }
}
