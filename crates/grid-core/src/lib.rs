// File: crates/grid-core/src/lib.rs
// Summary: Core library entry point; exports the resampling API and dataset encoding.

pub mod error;
pub mod types;
pub mod sample;
pub mod channel;
pub mod grid;
pub mod interp;
pub mod resample;
pub mod dataset;
pub mod fixtures;

pub use error::{GridError, InvalidInput};
pub use sample::{decimal_from_f64, parse_decimal, InputSample, OutputSample};
pub use channel::{ChannelConfig, ChannelMode};
pub use grid::{min_interval, validate, GridSpec};
pub use interp::interpolate_linear;
pub use resample::{resample, ResampleOptions, ResampledSeries, Resampler};
pub use dataset::{ChartEncoding, Dataset, SeriesEncoding, SeriesKind};

pub use rust_decimal::Decimal;
