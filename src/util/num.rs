/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use gotolang::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_I64_INT + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` by truncation toward zero, if the value is
/// finite and in range.
///
/// Fractional parts are discarded rather than rejected, matching the
/// truncating index conversion applied to computed jump targets.
///
/// ## Errors
/// Returns `Err(error)` for non-finite values and for values whose truncation
/// falls outside the `i64` range.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if conversion is invalid.
///
/// ## Returns
/// - `Ok(i64)`: The truncated value if conversion is safe.
/// - `Err(error)`: If the value is non-finite or out of range.
///
/// ## Example
/// ```
/// use gotolang::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(4.0, "bad").unwrap(), 4);
/// assert_eq!(f64_to_i64_trunc(4.9, "bad").unwrap(), 4);
/// assert_eq!(f64_to_i64_trunc(-1.5, "bad").unwrap(), -1);
///
/// assert!(f64_to_i64_trunc(f64::NAN, "bad").is_err());
/// assert!(f64_to_i64_trunc(1e20, "bad").is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_trunc<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() {
        return Err(error);
    }
    // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(error);
    }
    Ok(truncated as i64)
}
