// File: crates/grid-core/src/fixtures.rs
// Summary: Small built-in sample sets used by the demo, examples, benches and tests.

use rust_decimal::Decimal;

use crate::sample::InputSample;

/// Nine irregularly spaced `(x, y)` points; smallest gap is 0.1 (2 -> 2.1).
pub fn irregular_xy() -> Vec<InputSample> {
    const POINTS: [(i64, u32, i64); 9] = [
        (10, 1, 1),
        (20, 1, 2),
        (21, 1, 3),
        (25, 1, 4),
        (30, 1, 5),
        (3789, 3, 6),
        (423, 2, 7),
        (50, 1, 8),
        (70, 1, 9),
    ];
    POINTS
        .into_iter()
        .map(|(mantissa, scale, y)| InputSample::xy(Decimal::new(mantissa, scale), Decimal::from(y)))
        .collect()
}

/// `n` points with a drifting, repeating gap pattern and a second channel that
/// goes missing every seventh point.
pub fn jittered_xy2(n: usize) -> Vec<InputSample> {
    const GAPS: [i64; 4] = [100, 130, 250, 170];
    let mut x = Decimal::ZERO;
    (0..n)
        .map(|i| {
            let y = Decimal::new((i as i64 * 37) % 101, 1);
            let y2 = (i % 7 != 3).then(|| Decimal::new(i as i64 * 3, 0));
            let sample = InputSample::new(x).with_value("y", y).with_channel("y2", y2);
            x += Decimal::new(GAPS[i % GAPS.len()], 3);
            sample
        })
        .collect()
}
