// File: crates/grid-demo/src/main.rs
// Summary: Demo loads irregular samples from CSV (or the built-in set), resamples them
//          onto a uniform grid and writes the category-axis encoding to JSON.

mod input;
mod logging;

use anyhow::{Context, Result};
use grid_core::{fixtures, ChannelConfig, ChannelMode, ChartEncoding, Resampler, SeriesKind};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::input::{load_csv, LoadedSamples};

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    mode: Option<ChannelMode>,
    kind: SeriesKind,
    connect_nulls: bool,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = parse_args(std::env::args().skip(1));

    let (stem, loaded) = match &args.input {
        Some(path) => {
            let loaded = load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!("Loaded {} samples from {}", loaded.samples.len(), path.display());
            (file_stem(path), loaded)
        }
        None => {
            info!("No input file given; using the built-in irregular demo set");
            let samples = fixtures::irregular_xy();
            ("demo".to_string(), LoadedSamples { channels: vec!["y".to_string()], samples })
        }
    };
    if loaded.samples.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }

    let mode = args.mode.unwrap_or(ChannelMode::Interpolate);
    let config = loaded
        .channels
        .iter()
        .fold(ChannelConfig::new(), |cfg, name| cfg.with_channel(name.as_str(), mode));
    if config.is_empty() {
        warn!("Input has no channel columns; output will only carry grid positions");
    }

    let series = Resampler::new(config.clone()).resample(&loaded.samples)?;
    match series.step() {
        Some(step) => info!(
            "Grid step {} -> {} rows ({} real, {} synthetic)",
            step,
            series.len(),
            series.original_count(),
            series.synthetic_count()
        ),
        None => info!("Single sample; no grid to build"),
    }

    let encoding = ChartEncoding::new(&series, &config, args.kind).with_connect_nulls(args.connect_nulls);
    let out = out_name(&stem);
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&out, encoding.to_json_pretty()?).with_context(|| format!("writing {}", out.display()))?;
    info!("Wrote {}", out.display());

    Ok(())
}

/// `grid-demo [input.csv] [--interpolate | --passthrough] [--bar] [--connect-nulls]`
fn parse_args(raw: impl Iterator<Item = String>) -> Args {
    let mut args = Args::default();
    for arg in raw {
        match arg.as_str() {
            "--interpolate" => args.mode = Some(ChannelMode::Interpolate),
            "--passthrough" => args.mode = Some(ChannelMode::Passthrough),
            "--bar" => args.kind = SeriesKind::Bar,
            "--connect-nulls" => args.connect_nulls = true,
            flag if flag.starts_with("--") => warn!("Ignoring unknown flag {flag}"),
            path => args.input = Some(PathBuf::from(path)),
        }
    }
    args
}

fn file_stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("input").to_string()
}

/// Output file like target/out/grid_<stem>.json
fn out_name(stem: &str) -> PathBuf {
    PathBuf::from("target/out").join(format!("grid_{stem}.json"))
}
