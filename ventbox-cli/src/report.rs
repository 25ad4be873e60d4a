//! # Text Report
//!
//! Renders an `AnalysisResult` as the plain-text result card printed by the CLI.
//! Layout, top to bottom:
//! - status headline and summary
//! - current vs target tuning with the signed deviation and a frequency meter
//! - the suggested action (extend/shorten, new depth) or the out-of-range notice
//! - net volume and vent area, marked with `!` when outside the model's band
//! - the list of safety warnings

use std::fmt;
use ventbox_core::{AnalysisResult, EnclosureModel, LengthAdjustment, SuggestionAction};

const METER_WIDTH: usize = 30;

/// A result card for one analysis, rendered through `Display`.
pub struct Report<'a> {
    pub result: &'a AnalysisResult,
    pub model: &'a EnclosureModel,
}

pub fn render(result: &AnalysisResult, model: &EnclosureModel) -> String {
    Report { result, model }.to_string()
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.result, self.model)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, result: &AnalysisResult, model: &EnclosureModel) -> fmt::Result {
    writeln!(out, "== {} ==", result.action.headline())?;
    writeln!(out, "{}", result.action.summary())?;
    writeln!(out)?;

    let current = match result.current_tuning() {
        Some(fb) => format!("{fb:.1} Hz"),
        None => "n/a".to_string(),
    };
    let sign = if result.delta_fb > 0.0 { "+" } else { "" };
    writeln!(
        out,
        "Current {current}  ->  Target {} Hz  (deviation {sign}{:.1} Hz)",
        result.fb_target, result.delta_fb
    )?;
    let tuning = if result.current_tuning().is_none() {
        ""
    } else if result.is_sharp() {
        "  sharp"
    } else {
        "  flat"
    };
    writeln!(out, "{}{tuning}", meter_bar(result))?;
    writeln!(out)?;

    match result.action {
        SuggestionAction::Perfect => {}
        SuggestionAction::AdjustLength => {
            let verb = match result.length_adjustment() {
                Some(LengthAdjustment::Extend(cm)) => format!("Extend the vent by {cm:.1} cm"),
                Some(LengthAdjustment::Shorten(cm)) => format!("Shorten the vent by {cm:.1} cm"),
                None => String::new(),
            };
            writeln!(out, "Suggested action: {verb}")?;
            writeln!(out, "New vent depth:   {:.1} cm", result.suggested_length)?;
            writeln!(out)?;
        }
        SuggestionAction::Impossible => {
            writeln!(out, "Depth adjustment cannot fix this box!")?;
            writeln!(
                out,
                "Required depth ({:.1}cm) is outside the safe range ({}-{}cm).",
                result.suggested_length, model.min_port_length, model.max_port_length
            )?;
            writeln!(out, "-> Change the vent face size (increase/decrease the area).")?;
            writeln!(out)?;
        }
    }

    let volume_flag = if result.volume_in_band(model) { "" } else { " !" };
    let area_flag = if result.area_sufficient(model) { "" } else { " !" };
    writeln!(out, "Net volume Vb:    {:.1} L{volume_flag}", result.v_net)?;
    writeln!(out, "Total vent area:  {:.0} cm²{area_flag}", result.s_total)?;

    if !result.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Warnings:")?;
        for warning in &result.warnings {
            let bullet = if warning.is_geometric_error() { "✖" } else { "•" };
            writeln!(out, "  {bullet} {warning}")?;
        }
    }
    Ok(())
}

/// `[#####-----]` with the fill taken from the result's meter fraction.
/// A box tuned above target fills with `+` instead of `#`.
fn meter_bar(result: &AnalysisResult) -> String {
    let filled = (result.meter_fraction() * METER_WIDTH as f64).round() as usize;
    let fill = if result.is_sharp() { "+" } else { "#" };
    format!("[{}{}]", fill.repeat(filled), "-".repeat(METER_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ventbox_core::{analyze, BoxDimensions, TrianglePortConfig, UsageType};

    fn reference_model() -> EnclosureModel {
        EnclosureModel::default()
    }

    #[test]
    fn adjust_length_report() {
        let result = analyze(
            &BoxDimensions::default(),
            &TrianglePortConfig::default(),
            UsageType::Karaoke,
        );
        let text = render(&result, &reference_model());

        assert!(text.starts_with("== ADJUST VENT DEPTH =="));
        assert!(text.contains("Current 37.5 Hz  ->  Target 47.5 Hz  (deviation -10.0 Hz)"));
        assert!(text.contains("Shorten the vent by 10.5 cm"));
        assert!(text.contains("New vent depth:   9.5 cm"));
        assert!(text.contains("Net volume Vb:    61.2 L\n"));
        assert!(text.contains("Total vent area:  100 cm² !"));
        assert!(text.contains("  • Total vent area 100cm² < 150cm²"));
        assert!(text.contains("]  flat\n"));
    }

    #[test]
    fn sharp_box_uses_sharp_meter() {
        let result = analyze(
            &BoxDimensions::default(),
            &TrianglePortConfig { base: 20.0, height: 20.0, length: 20.0 },
            UsageType::Karaoke,
        );
        let text = render(&result, &reference_model());
        // ~70 Hz fills the whole 60 Hz meter.
        assert!(text.contains(&format!("[{}]  sharp\n", "+".repeat(30))));
    }

    #[test]
    fn geometric_error_gets_its_own_bullet() {
        let result = analyze(
            &BoxDimensions::default(),
            &TrianglePortConfig { length: 32.0, ..TrianglePortConfig::default() },
            UsageType::Karaoke,
        );
        let text = render(&result, &reference_model());
        assert!(text.contains("  ✖ Error: vent duct depth (32cm) exceeds box depth (32cm)."));
        assert!(text.contains("  • Vent duct end to rear panel 0.0cm < 5cm"));
    }

    #[test]
    fn perfect_report_has_no_action() {
        let result = analyze(
            &BoxDimensions::default(),
            &TrianglePortConfig { length: 10.0, ..TrianglePortConfig::default() },
            UsageType::Karaoke,
        );
        let text = render(&result, &reference_model());
        assert!(text.starts_with("== TUNED =="));
        assert!(!text.contains("Suggested action"));
        assert!(!text.contains("safe range"));
    }

    #[test]
    fn impossible_report_shows_raw_length() {
        let result = analyze(
            &BoxDimensions::default(),
            &TrianglePortConfig { base: 3.0, height: 3.0, length: 20.0 },
            UsageType::Karaoke,
        );
        let text = render(&result, &reference_model());
        assert!(text.starts_with("== OUT OF SPEC =="));
        assert!(text.contains("Required depth (-0.7cm) is outside the safe range (8-35cm)."));
    }

    #[test]
    fn uncomputable_tuning_is_not_shown_as_zero() {
        let result = analyze(
            &BoxDimensions { w: 10.0, h: 10.0, d: 10.0 },
            &TrianglePortConfig::default(),
            UsageType::Music,
        );
        let text = render(&result, &reference_model());
        assert!(text.contains("Current n/a  ->  Target 44.5 Hz"));
        assert!(text.contains(&format!("[{}{}]\n", "#".repeat(3), "-".repeat(27))));
    }
}
