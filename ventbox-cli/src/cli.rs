use anyhow::Result;
use clap::Parser;
use std::convert::Infallible;
use std::path::PathBuf;
use tracing::info;
use ventbox_core::design::{self, BoxDesign};
use ventbox_core::UsageType;

/// Parses a number the way a form field would: the longest numeric prefix
/// counts, anything unreadable becomes 0.
pub fn lenient_number(s: &str) -> Result<f64, Infallible> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut mantissa_end = digits_from(end);
    if mantissa_end < bytes.len() && bytes[mantissa_end] == b'.' {
        mantissa_end = digits_from(mantissa_end + 1);
    }
    // A lone sign or dot is not a number.
    if !s[end..mantissa_end].bytes().any(|b| b.is_ascii_digit()) {
        return Ok(0.0);
    }
    end = mantissa_end;

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Ok(s[..end].parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Analyzes a vented enclosure with two triangular ports.
#[derive(Parser, Debug)]
#[command(name = "ventbox", version, allow_negative_numbers = true)]
pub struct CliArgs {
    /// Internal box width (cm)
    #[arg(long, value_parser = lenient_number)]
    pub width: Option<f64>,

    /// Internal box height (cm)
    #[arg(long, value_parser = lenient_number)]
    pub height: Option<f64>,

    /// Internal box depth (cm)
    #[arg(long, value_parser = lenient_number)]
    pub depth: Option<f64>,

    /// Triangle base of one vent (cm)
    #[arg(long, value_parser = lenient_number)]
    pub base: Option<f64>,

    /// Triangle height of one vent (cm)
    #[arg(long, value_parser = lenient_number)]
    pub port_height: Option<f64>,

    /// Current vent duct depth into the box (cm)
    #[arg(long, value_parser = lenient_number)]
    pub length: Option<f64>,

    /// karaoke or music
    #[arg(long)]
    pub usage: Option<UsageType>,

    /// Design file to start from; explicit flags override its values
    #[arg(long)]
    pub design: Option<PathBuf>,

    /// Write the effective inputs to this design file
    #[arg(long)]
    pub save_design: Option<PathBuf>,

    /// Alternate enclosure model (JSON)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Builds the inputs to analyze: the design file (or the reference build)
    /// with any explicit flags applied on top.
    pub fn resolve_design(&self) -> Result<BoxDesign> {
        let mut design = match &self.design {
            Some(path) => {
                info!("Loading design from {:?}", path);
                design::load_design(path)?
            }
            None => BoxDesign::default(),
        };

        let overrides = [
            (self.width, &mut design.dimensions.w),
            (self.height, &mut design.dimensions.h),
            (self.depth, &mut design.dimensions.d),
            (self.base, &mut design.port.base),
            (self.port_height, &mut design.port.height),
            (self.length, &mut design.port.length),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(usage) = self.usage {
            design.usage = usage;
        }
        Ok(design)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lenient_numbers() {
        assert_eq!(lenient_number("12.5"), Ok(12.5));
        assert_eq!(lenient_number("  32"), Ok(32.0));
        assert_eq!(lenient_number("12cm"), Ok(12.0));
        assert_eq!(lenient_number("-4"), Ok(-4.0));
        assert_eq!(lenient_number(".5"), Ok(0.5));
        assert_eq!(lenient_number("1e2"), Ok(100.0));
        assert_eq!(lenient_number("3e"), Ok(3.0));
        assert_eq!(lenient_number("abc"), Ok(0.0));
        assert_eq!(lenient_number(""), Ok(0.0));
        assert_eq!(lenient_number("-"), Ok(0.0));
        assert_eq!(lenient_number("."), Ok(0.0));
    }

    #[test]
    fn defaults_to_reference_build() {
        let args = CliArgs::try_parse_from(["ventbox"]).unwrap();
        assert_eq!(args.resolve_design().unwrap(), BoxDesign::default());
        assert!(!args.json);
    }

    #[test]
    fn flags_override_fields() {
        let args = CliArgs::try_parse_from([
            "ventbox", "--depth", "15", "--length", "abc", "--usage", "music", "--port-height", "-2",
        ])
        .unwrap();
        let design = args.resolve_design().unwrap();
        assert_eq!(design.dimensions.d, 15.0);
        assert_eq!(design.dimensions.w, 35.0);
        assert_eq!(design.port.length, 0.0);
        assert_eq!(design.port.height, -2.0);
        assert_eq!(design.usage, UsageType::Music);
    }

    #[test]
    fn unknown_usage_is_rejected() {
        assert!(CliArgs::try_parse_from(["ventbox", "--usage", "cinema"]).is_err());
    }

    #[test]
    fn flags_override_design_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("design.json");
        let saved = BoxDesign {
            usage: UsageType::Music,
            ..BoxDesign::default()
        };
        design::save_design(&saved, &path).unwrap();

        let args = CliArgs::try_parse_from([
            "ventbox",
            "--design",
            path.to_str().unwrap(),
            "--width",
            "40",
        ])
        .unwrap();
        let design = args.resolve_design().unwrap();
        assert_eq!(design.dimensions.w, 40.0);
        assert_eq!(design.usage, UsageType::Music);
    }
}
