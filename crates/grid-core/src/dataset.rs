// File: crates/grid-core/src/dataset.rs
// Summary: Renderer-neutral category-axis dataset and series encoding for resampled rows.
// Notes:
// - Values cross into f64 only here, at the display boundary, via
//   `ToPrimitive::to_f64`. The float may differ from the decimal in its last bit.

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::channel::ChannelConfig;
use crate::error::GridError;
use crate::resample::ResampledSeries;
use crate::sample::OutputSample;
use crate::types::{CATEGORY_AXIS, ORIGINAL_X_DIMENSION, VALUE_AXIS, X_DIMENSION};

/// How a renderer should draw one channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Line,
    Bar,
}

/// Column-named rows: `dimensions` = `["x", <channels...>, "originalX"]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    pub dimensions: Vec<String>,
    pub source: Vec<Vec<Option<f64>>>,
}

impl Dataset {
    pub fn from_rows(rows: &[OutputSample], channels: &ChannelConfig) -> Self {
        let dimensions: Vec<String> = std::iter::once(X_DIMENSION)
            .chain(channels.names())
            .chain(std::iter::once(ORIGINAL_X_DIMENSION))
            .map(str::to_string)
            .collect();
        let source: Vec<Vec<Option<f64>>> = rows
            .iter()
            .map(|row| {
                std::iter::once(Some(row.x))
                    .chain(channels.names().map(|name| row.value(name)))
                    .chain(std::iter::once(row.original_x))
                    .map(|v| v.and_then(|d| d.to_f64()))
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { dimensions, source }
    }

    pub fn from_series(series: &ResampledSeries, channels: &ChannelConfig) -> Self {
        Self::from_rows(series.rows(), channels)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Per row: draw a marker only where a real sample sits.
    pub fn marker_flags(&self) -> Vec<bool> {
        let Some(col) = self.dimensions.iter().position(|d| d == ORIGINAL_X_DIMENSION) else {
            return vec![false; self.source.len()];
        };
        self.source.iter().map(|row| matches!(row.get(col), Some(Some(_)))).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Encode {
    pub x: String,
    pub y: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesEncoding {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub encode: Encode,
    /// Renderer hint only; gaps stay null in the dataset either way.
    pub connect_nulls: bool,
}

impl SeriesEncoding {
    pub fn new(channel: impl Into<String>, kind: SeriesKind) -> Self {
        let channel = channel.into();
        Self {
            encode: Encode { x: X_DIMENSION.to_string(), y: channel.clone() },
            name: channel,
            kind,
            connect_nulls: false,
        }
    }

    pub fn with_connect_nulls(mut self, connect: bool) -> Self {
        self.connect_nulls = connect;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AxisEncoding {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Dataset plus axis and per-channel series encodings, ready to hand to a renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEncoding {
    pub dataset: Dataset,
    pub x_axis: AxisEncoding,
    pub y_axis: AxisEncoding,
    pub series: Vec<SeriesEncoding>,
}

impl ChartEncoding {
    /// One series of `kind` per configured channel.
    pub fn new(series: &ResampledSeries, channels: &ChannelConfig, kind: SeriesKind) -> Self {
        Self {
            dataset: Dataset::from_series(series, channels),
            x_axis: AxisEncoding { kind: CATEGORY_AXIS.to_string() },
            y_axis: AxisEncoding { kind: VALUE_AXIS.to_string() },
            series: channels.names().map(|name| SeriesEncoding::new(name, kind)).collect(),
        }
    }

    pub fn with_connect_nulls(mut self, connect: bool) -> Self {
        self.series = self.series.into_iter().map(|s| s.with_connect_nulls(connect)).collect();
        self
    }

    pub fn to_json(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
