// File: crates/grid-core/src/resample.rs
// Summary: Uniform-grid resampler: walks exact grid positions and real samples in one pass.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, trace, warn};

use crate::channel::{ChannelConfig, ChannelMode};
use crate::error::{GridError, InvalidInput};
use crate::grid::GridSpec;
use crate::interp::interpolate_linear;
use crate::sample::{ChannelValues, InputSample, OutputSample};
use crate::types::{DEFAULT_DISPLAY_SCALE, MAX_DISPLAY_SCALE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResampleOptions {
    /// Fractional digits kept on emitted `x`. Comparisons never see this rounding.
    pub display_scale: u32,
    /// Refuse grids with more rows than this. Unlimited when `None`.
    pub max_rows: Option<usize>,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self { display_scale: DEFAULT_DISPLAY_SCALE, max_rows: None }
    }
}

impl ResampleOptions {
    pub fn with_display_scale(mut self, scale: u32) -> Self {
        self.display_scale = scale.min(MAX_DISPLAY_SCALE);
        self
    }

    pub fn with_max_rows(mut self, limit: usize) -> Self {
        self.max_rows = Some(limit);
        self
    }

    fn display(&self, position: Decimal) -> Decimal {
        position
            .round_dp_with_strategy(self.display_scale, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }
}

/// Result of one resampling call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResampledSeries {
    rows: Vec<OutputSample>,
    step: Option<Decimal>,
}

impl ResampledSeries {
    pub fn rows(&self) -> &[OutputSample] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<OutputSample> {
        self.rows
    }

    /// Grid step; `None` for single-sample input.
    pub fn step(&self) -> Option<Decimal> {
        self.step
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a successful call; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn original_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_original()).count()
    }

    pub fn synthetic_count(&self) -> usize {
        self.len() - self.original_count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputSample> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a ResampledSeries {
    type Item = &'a OutputSample;
    type IntoIter = std::slice::Iter<'a, OutputSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Channel configuration plus options; holds no per-call state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resampler {
    channels: ChannelConfig,
    options: ResampleOptions,
}

impl Resampler {
    pub fn new(channels: ChannelConfig) -> Self {
        Self { channels, options: ResampleOptions::default() }
    }

    pub fn with_options(mut self, options: ResampleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn channels(&self) -> &ChannelConfig {
        &self.channels
    }

    pub fn options(&self) -> &ResampleOptions {
        &self.options
    }

    /// Place `samples` on a grid whose step is their smallest gap.
    ///
    /// Every sample lands on the first grid position at or past its `x`
    /// (`>=`, so exact hits are consumed on the spot). Positions in between
    /// become synthetic rows. The grid stops as soon as the last sample is
    /// placed, at most one step past `max_x`.
    pub fn resample(&self, samples: &[InputSample]) -> Result<ResampledSeries, GridError> {
        let grid = GridSpec::from_samples(samples)?;
        let first = &samples[0];

        let Some(step) = grid.step else {
            trace!(x = %first.x, "single sample, nothing to resample");
            return Ok(ResampledSeries { rows: vec![self.original_row(first.x, first)], step: None });
        };

        let expected = grid.row_count().unwrap_or(u128::MAX);
        if let Some(limit) = self.options.max_rows {
            if expected > limit as u128 {
                return Err(InvalidInput::GridTooDense { rows: expected, limit }.into());
            }
        }

        let mut rows = Vec::with_capacity(usize::try_from(expected).unwrap_or(samples.len()).min(1 << 20));
        // The seed row is the first sample itself, not a grid position.
        rows.push(self.original_row(first.x, first));

        // Each sample sits at least one step after its predecessor, so it is
        // consumed at its own ceiling position and no position ever owes more
        // than one sample.
        let mut data_index = 1;
        for position in grid.positions().skip(1) {
            let Some(next) = samples.get(data_index) else { break };
            if position >= next.x {
                rows.push(self.original_row(self.options.display(position), next));
                data_index += 1;
            } else {
                rows.push(self.synthetic_row(position, &samples[data_index - 1], next));
            }
        }
        debug_assert_eq!(data_index, samples.len(), "every sample is placed before the grid ends");

        let series = ResampledSeries { rows, step: Some(step) };
        debug!(
            samples = samples.len(),
            step = %step,
            rows = series.len(),
            synthetic = series.synthetic_count(),
            "resampled onto uniform grid"
        );
        Ok(series)
    }

    /// Real-sample row emitted at `x`; the caller decides whether `x` is rounded.
    fn original_row(&self, x: Decimal, sample: &InputSample) -> OutputSample {
        let channels: ChannelValues = self
            .channels
            .names()
            .map(|name| (name.to_string(), sample.value(name)))
            .collect();
        OutputSample { x, original_x: Some(sample.x), channels }
    }

    fn synthetic_row(&self, position: Decimal, prev: &InputSample, next: &InputSample) -> OutputSample {
        let channels: ChannelValues = self
            .channels
            .iter()
            .map(|(name, mode)| (name.to_string(), fill(mode, name, position, prev, next)))
            .collect();
        OutputSample { x: self.options.display(position), original_x: None, channels }
    }
}

/// Gap value for one channel. Never bridges a gap already present in the data.
fn fill(mode: ChannelMode, name: &str, position: Decimal, prev: &InputSample, next: &InputSample) -> Option<Decimal> {
    if !mode.interpolates() {
        return None;
    }
    let (y1, y2) = (prev.value(name)?, next.value(name)?);
    let value = interpolate_linear(prev.x, y1, next.x, y2, position);
    if value.is_none() {
        warn!(channel = name, x = %position, "interpolation left the decimal range; emitting a gap");
    }
    value
}

/// Resample with default options.
pub fn resample(samples: &[InputSample], channels: &ChannelConfig) -> Result<Vec<OutputSample>, GridError> {
    Resampler::new(channels.clone()).resample(samples).map(ResampledSeries::into_rows)
}
