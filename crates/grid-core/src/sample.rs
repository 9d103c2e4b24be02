// File: crates/grid-core/src/sample.rs
// Summary: Input/output sample model and exact decimal conversion helpers.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{GridError, InvalidInput};
use crate::types::MAX_DISPLAY_SCALE;

/// Named channel values of one row. A present key with `None` is an explicit gap.
pub type ChannelValues = BTreeMap<String, Option<Decimal>>;

/// One observed data point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSample {
    pub x: Decimal,
    pub channels: ChannelValues,
}

impl InputSample {
    pub fn new(x: Decimal) -> Self {
        Self { x, channels: ChannelValues::new() }
    }

    /// Sample with a single `y` channel.
    pub fn xy(x: Decimal, y: Decimal) -> Self {
        Self::new(x).with_value("y", y)
    }

    pub fn with_value(self, channel: impl Into<String>, value: Decimal) -> Self {
        self.with_channel(channel, Some(value))
    }

    /// Mark `channel` as explicitly absent at this position.
    pub fn with_absent(self, channel: impl Into<String>) -> Self {
        self.with_channel(channel, None)
    }

    pub fn with_channel(mut self, channel: impl Into<String>, value: Option<Decimal>) -> Self {
        self.channels.insert(channel.into(), value);
        self
    }

    /// Value of `channel`; missing and explicitly absent both read as `None`.
    pub fn value(&self, channel: &str) -> Option<Decimal> {
        self.channels.get(channel).copied().flatten()
    }

    /// Build a sample from floats, converting each through its shortest decimal form.
    pub fn try_from_f64(x: f64, channels: &[(&str, Option<f64>)]) -> Result<Self, GridError> {
        let mut sample = Self::new(decimal_from_f64(x)?);
        for &(name, value) in channels {
            let value = value.map(decimal_from_f64).transpose()?;
            sample = sample.with_channel(name, value);
        }
        Ok(sample)
    }
}

/// One row of a resampled grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputSample {
    /// Grid position rounded to the display scale.
    pub x: Decimal,
    /// Exact input position when this row is a real sample.
    pub original_x: Option<Decimal>,
    pub channels: ChannelValues,
}

impl OutputSample {
    pub fn value(&self, channel: &str) -> Option<Decimal> {
        self.channels.get(channel).copied().flatten()
    }

    /// True when the row stands for an observed sample rather than a grid filler.
    pub fn is_original(&self) -> bool {
        self.original_x.is_some()
    }
}

/// Convert a float to the decimal it prints as (`2.1_f64` -> exactly `2.1`).
///
/// Floats needing more than 28 fractional digits are rejected, not rounded.
pub fn decimal_from_f64(value: f64) -> Result<Decimal, GridError> {
    if !value.is_finite() {
        return Err(InvalidInput::NonFinite(value.to_string()).into());
    }
    // f64 Display yields the shortest digits that round-trip, never an exponent.
    let text = value.to_string();
    let fraction_digits = text.split_once('.').map_or(0, |(_, frac)| frac.len());
    if fraction_digits > MAX_DISPLAY_SCALE as usize {
        return Err(InvalidInput::OutOfRange(text).into());
    }
    match Decimal::from_str(&text) {
        Ok(decimal) if value != 0.0 && decimal.is_zero() => Err(InvalidInput::OutOfRange(text).into()),
        Ok(decimal) => Ok(decimal),
        Err(_) => Err(InvalidInput::OutOfRange(text).into()),
    }
}

/// Parse decimal text exactly; accepts plain and scientific notation.
pub fn parse_decimal(input: &str) -> Result<Decimal, GridError> {
    let trimmed = input.trim();
    let parsed = if trimmed.contains(|c: char| c == 'e' || c == 'E') {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };
    parsed.map_err(|e| {
        InvalidInput::Parse { input: input.to_string(), reason: e.to_string() }.into()
    })
}
