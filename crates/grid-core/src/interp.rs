// File: crates/grid-core/src/interp.rs
// Summary: Exact-decimal linear interpolation between two known points.

use rust_decimal::Decimal;

/// Value at `x` on the line through `(x1, y1)` and `(x2, y2)`.
///
/// `None` when `x1 == x2` or the arithmetic leaves the decimal range.
/// The product is taken before the division so representable results stay exact
/// (e.g. 1.5/3 of a unit rise is 0.5, not 0.4999...).
pub fn interpolate_linear(x1: Decimal, y1: Decimal, x2: Decimal, y2: Decimal, x: Decimal) -> Option<Decimal> {
    let run = x2.checked_sub(x1)?;
    if run.is_zero() {
        return None;
    }
    let rise = y2.checked_sub(y1)?;
    let offset = x.checked_sub(x1)?;
    let delta = match rise.checked_mul(offset) {
        Some(product) => product.checked_div(run)?,
        // slope first when the product overflows
        None => rise.checked_div(run)?.checked_mul(offset)?,
    };
    y1.checked_add(delta).map(|v| v.normalize())
}
