//! # Ventbox - Vented Box Analyzer CLI
//!
//! Command line front-end for `ventbox-core`. It collects the box and vent
//! measurements (from flags and/or a saved design file), runs one analysis and
//! prints the result card, or the raw result as JSON with `--json`.
//!
//! Logs go to stderr through `tracing`; set `LOG_LEVEL` (e.g. `debug`) to see them.

mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ventbox_core::design;
use ventbox_core::EnclosureModel;

use cli::CliArgs;

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let model = match &cli_args.model {
        Some(path) => {
            info!("Loading enclosure model from {:?}", path);
            design::load_model(path)?
        }
        None => EnclosureModel::default(),
    };

    let box_design = cli_args.resolve_design()?;
    if let Some(path) = &cli_args.save_design {
        design::save_design(&box_design, path)?;
        info!("Design saved to {:?}", path);
    }

    debug!(?box_design, "Analyzing");
    let result = box_design.analyze(&model);
    info!(
        action = ?result.action,
        fb_current = result.fb_current,
        fb_target = result.fb_target,
        suggested_length = result.suggested_length,
        "Analysis finished"
    );
    for message in result.warning_messages() {
        debug!(%message, "Safety check triggered");
    }

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&result, &model));
    }
    Ok(())
}
