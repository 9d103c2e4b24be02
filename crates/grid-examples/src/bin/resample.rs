// File: crates/grid-examples/src/bin/resample.rs
// Summary: Minimal example that resamples a few irregular points and prints the grid.

use grid_core::{resample, ChannelConfig, ChannelMode, InputSample};

fn main() {
    // (x, y) pairs with uneven spacing; smallest gap is 0.5
    let points = [(0.0, 1.0), (0.5, 1.5), (2.0, 0.5), (3.0, 2.5)];
    let samples = points
        .iter()
        .map(|&(x, y)| InputSample::try_from_f64(x, &[("y", Some(y))]))
        .collect::<Result<Vec<_>, _>>()
        .expect("finite points");

    let rows = resample(&samples, &ChannelConfig::y(ChannelMode::Interpolate)).expect("ascending points");
    for row in &rows {
        let y = row.value("y").map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        let marker = if row.is_original() { "*" } else { " " };
        println!("{marker} x={:<6} y={y}", row.x.to_string());
    }
}
