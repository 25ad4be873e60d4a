use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::analysis::{analyze_with, AnalysisResult};
use crate::geometry::{BoxDimensions, TrianglePortConfig};
use crate::model::EnclosureModel;
use crate::usage::UsageType;

/// A complete set of analyzer inputs for one enclosure.
/// This is the top-level object you save to and load from a file.
///
/// The default is the reference build: a 35 x 60 x 32 cm box with two
/// 10 x 10 cm vents 20 cm deep, tuned for karaoke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxDesign {
    #[serde(rename = "box")]
    pub dimensions: BoxDimensions,
    pub port: TrianglePortConfig,
    #[serde(default)]
    pub usage: UsageType,
}

impl BoxDesign {
    pub fn analyze(&self, model: &EnclosureModel) -> AnalysisResult {
        analyze_with(model, &self.dimensions, &self.port, self.usage)
    }
}

/// Saves a design to a pretty-printed JSON file.
pub fn save_design(design: &BoxDesign, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(design)?;
    let mut file = File::create(path)
        .with_context(|| format!("Could not create design file {}", path.display()))?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Loads a design previously written by `save_design`.
pub fn load_design(path: impl AsRef<Path>) -> Result<BoxDesign> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .with_context(|| format!("Could not open design file {}", path.display()))?;
    let mut data = String::new();
    file.read_to_string(&mut data)?;
    let design: BoxDesign = serde_json::from_str(&data)
        .with_context(|| format!("Invalid design file {}", path.display()))?;
    Ok(design)
}

/// Loads an enclosure model from a JSON file. Missing fields keep the reference value.
pub fn load_model(path: impl AsRef<Path>) -> Result<EnclosureModel> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read model file {}", path.display()))?;
    EnclosureModel::from_json(&data)
        .with_context(|| format!("Invalid model file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SuggestionAction;
    use tempfile::TempDir;

    #[test]
    fn save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("design.json");
        let design = BoxDesign {
            dimensions: BoxDimensions { w: 40.0, h: 55.5, d: 30.0 },
            port: TrianglePortConfig { base: 12.0, height: 14.0, length: 18.0 },
            usage: UsageType::Music,
        };

        save_design(&design, &path).unwrap();
        assert_eq!(load_design(&path).unwrap(), design);
    }

    #[test]
    fn file_layout() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("design.json");
        save_design(&BoxDesign::default(), &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["box"]["d"], 32.0);
        assert_eq!(json["port"]["length"], 20.0);
        assert_eq!(json["usage"], "karaoke");
    }

    #[test]
    fn usage_defaults_when_missing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("design.json");
        std::fs::write(
            &path,
            r#"{ "box": { "w": 35, "h": 60, "d": 32 }, "port": { "base": 10, "height": 10, "length": 20 } }"#,
        )
        .unwrap();

        let design = load_design(&path).unwrap();
        assert_eq!(design, BoxDesign::default());
    }

    #[test]
    fn missing_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let err = load_design(tmp.path().join("nope.json")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }

    #[test]
    fn model_file_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("model.json");
        std::fs::write(&path, r#"{ "karaoke_target_hz": 37.5 }"#).unwrap();

        let model = load_model(&path).unwrap();
        assert_eq!(model.karaoke_target_hz, 37.5);

        // The reference box sits at ~37.54 Hz, inside the new deadband.
        let result = BoxDesign::default().analyze(&model);
        assert_eq!(result.action, SuggestionAction::Perfect);
    }
}
