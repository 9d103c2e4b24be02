// File: crates/grid-core/src/grid.rs
// Summary: Grid derivation: validation, minimum interval, extent and exact grid positions.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{GridError, InvalidInput};
use crate::sample::InputSample;

/// Reject empty input and any `x` that does not strictly increase.
pub fn validate(samples: &[InputSample]) -> Result<(), GridError> {
    if samples.is_empty() {
        return Err(InvalidInput::Empty.into());
    }
    for (index, pair) in samples.windows(2).enumerate() {
        if pair[1].x <= pair[0].x {
            return Err(InvalidInput::NotAscending {
                index: index + 1,
                previous: pair[0].x,
                current: pair[1].x,
            }
            .into());
        }
    }
    Ok(())
}

/// Smallest absolute gap between adjacent `x` values.
///
/// `Ok(None)` for a single sample. Ordering is not checked here.
pub fn min_interval(samples: &[InputSample]) -> Result<Option<Decimal>, GridError> {
    if samples.is_empty() {
        return Err(InvalidInput::Empty.into());
    }
    let mut min: Option<Decimal> = None;
    for pair in samples.windows(2) {
        let gap = pair[1]
            .x
            .checked_sub(pair[0].x)
            .ok_or_else(|| InvalidInput::OutOfRange(format!("{} - {}", pair[1].x, pair[0].x)))?
            .abs();
        min = Some(match min {
            Some(m) if m <= gap => m,
            _ => gap,
        });
    }
    Ok(min)
}

/// Uniform grid derived from a validated sample list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub min_x: Decimal,
    pub max_x: Decimal,
    /// `None` when the input holds a single sample.
    pub step: Option<Decimal>,
}

impl GridSpec {
    /// Validate `samples` and derive the grid.
    pub fn from_samples(samples: &[InputSample]) -> Result<Self, GridError> {
        validate(samples)?;
        let step = min_interval(samples)?;
        let (min_x, max_x) = samples
            .iter()
            .fold((samples[0].x, samples[0].x), |(lo, hi), s| (lo.min(s.x), hi.max(s.x)));
        let grid = Self { min_x, max_x, step };
        if step.is_some() && grid.upper_bound().is_none() {
            return Err(InvalidInput::OutOfRange(format!("{max_x} + step")).into());
        }
        Ok(grid)
    }

    /// Last admissible position: one step past `max_x`.
    pub fn upper_bound(&self) -> Option<Decimal> {
        self.step.and_then(|s| self.max_x.checked_add(s))
    }

    /// Rows a resample emits: `min_x` up to the first position at or past `max_x`.
    ///
    /// `Some(1)` for a single sample.
    pub fn row_count(&self) -> Option<u128> {
        let Some(step) = self.step else { return Some(1) };
        let span = self.max_x.checked_sub(self.min_x)?;
        let steps = span.checked_div(step)?.ceil().to_u128()?;
        Some(steps + 1)
    }

    /// Exact positions `min_x, min_x + step, ...` up to and including `upper_bound`.
    pub fn positions(&self) -> GridPositions {
        GridPositions {
            next: Some(self.min_x),
            step: self.step,
            bound: self.upper_bound().unwrap_or(self.min_x),
        }
    }
}

/// Iterator over exact grid positions. Each step is a plain decimal add; no drift.
#[derive(Clone, Debug)]
pub struct GridPositions {
    next: Option<Decimal>,
    step: Option<Decimal>,
    bound: Decimal,
}

impl Iterator for GridPositions {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        let current = self.next.filter(|p| *p <= self.bound)?;
        self.next = self.step.and_then(|s| current.checked_add(s));
        Some(current)
    }
}
