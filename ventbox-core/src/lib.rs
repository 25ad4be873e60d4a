// ventbox-core/src/lib.rs

//! The core logic for the vented box analyzer.
//! This crate turns enclosure and vent geometry into volumes, the current
//! Helmholtz tuning, a corrected vent length and construction warnings.
//! It is pure and headless: no I/O happens during analysis, and the only
//! file access is the optional design/model loading in `design`.

pub mod analysis;
pub mod design;
pub mod geometry;
pub mod helmholtz;
pub mod model;
pub mod safety;
pub mod usage;

pub use analysis::{analyze, analyze_with, AnalysisResult, LengthAdjustment, SuggestionAction};
pub use design::BoxDesign;
pub use geometry::{BoxDimensions, TrianglePortConfig};
pub use model::EnclosureModel;
pub use safety::SafetyWarning;
pub use usage::UsageType;
