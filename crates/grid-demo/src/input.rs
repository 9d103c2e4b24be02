// File: crates/grid-demo/src/input.rs
// Summary: CSV loading: first column is x, remaining columns are channels.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use grid_core::{parse_decimal, InputSample};
use tracing::debug;

/// Samples plus the channel names taken from the header row.
#[derive(Debug)]
pub struct LoadedSamples {
    pub channels: Vec<String>,
    pub samples: Vec<InputSample>,
}

pub fn load_csv(path: &Path) -> Result<LoadedSamples> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_from_reader(file)
}

/// Parse CSV text. Blank channel cells are absent values.
pub fn load_from_reader<R: Read>(reader: R) -> Result<LoadedSamples> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    debug!(?headers, "csv headers");
    if headers.is_empty() {
        bail!("missing header row");
    }
    let channels = headers[1..].to_vec();

    let mut samples = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let x = rec.get(0).unwrap_or_default();
        let x = parse_decimal(x).with_context(|| format!("row {}: column `{}`", row + 1, headers[0]))?;
        let mut sample = InputSample::new(x);
        for (col, name) in channels.iter().enumerate() {
            let cell = rec.get(col + 1).unwrap_or_default();
            let value = if cell.is_empty() {
                None
            } else {
                Some(parse_decimal(cell).with_context(|| format!("row {}: column `{name}`", row + 1))?)
            };
            sample = sample.with_channel(name.as_str(), value);
        }
        samples.push(sample);
    }
    Ok(LoadedSamples { channels, samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::Decimal;

    #[test]
    fn reads_channels_and_blank_cells() {
        let text = "x,y,y2\n1,1,5\n2.1, 3 ,\n2.5,4,4.5\n";
        let loaded = load_from_reader(text.as_bytes()).expect("valid csv");
        assert_eq!(loaded.channels, vec!["y", "y2"]);
        assert_eq!(loaded.samples.len(), 3);
        assert_eq!(loaded.samples[1].x, Decimal::new(21, 1));
        assert_eq!(loaded.samples[1].value("y"), Some(Decimal::from(3)));
        assert_eq!(loaded.samples[1].value("y2"), None);
        assert!(loaded.samples[1].channels.contains_key("y2"));
    }

    #[test]
    fn bad_cell_names_row_and_column() {
        let text = "x,y\n1,1\n2,oops\n";
        let err = load_from_reader(text.as_bytes()).expect_err("bad cell");
        assert!(format!("{err:#}").contains("row 2: column `y`"), "{err:#}");
    }
}
