// File: crates/grid-core/src/types.rs
// Summary: Shared constants (display precision, dataset dimension names).

/// Fractional digits kept on emitted grid positions.
pub const DEFAULT_DISPLAY_SCALE: u32 = 5;

/// Largest scale a `Decimal` can carry.
pub const MAX_DISPLAY_SCALE: u32 = 28;

/// Dataset dimension holding the (rounded) grid position.
pub const X_DIMENSION: &str = "x";

/// Dataset dimension holding the exact input position of real rows.
pub const ORIGINAL_X_DIMENSION: &str = "originalX";

/// Axis type the encoded dataset is meant for.
pub const CATEGORY_AXIS: &str = "category";

/// Axis type used for channel values.
pub const VALUE_AXIS: &str = "value";
