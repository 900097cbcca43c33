/// Rounds a value to two decimal places, half away from zero.
///
/// Every displayed series value passes through this before being stored in
/// a report; running aggregates accumulate the unrounded values.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
