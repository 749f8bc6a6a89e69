/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. Use these helpers
/// whenever a value crosses between `i64` and `f64`, such as when mixed
/// arithmetic promotes an integer or when a jump target is converted to a
/// statement index.
pub mod num;
