//! Yield accumulation from repeated resource returns.

use tracing::{trace, warn};

/// Accumulates the total crafted yield for `initial_amount` units.
///
/// Each wave returns `rate` of the previous wave, starting from
/// `initial_amount * rate`. Waves are added until one falls below a single
/// unit. The result is never less than `initial_amount` and is 0 for a zero
/// start.
///
/// `rate` must lie in (0, 1) and `initial_amount` must be finite; otherwise
/// the loop could not terminate, so `initial_amount` is returned unchanged.
///
/// # Examples
///
/// ```
/// use recraft_core::calculations::accumulate_yield;
///
/// let total = accumulate_yield(100.0, 0.152);
///
/// assert_eq!(total.floor(), 117.0);
/// assert_eq!(accumulate_yield(0.0, 0.152), 0.0);
/// ```
pub fn accumulate_yield(
    initial_amount: f64,
    rate: f64,
) -> f64 {
    if !initial_amount.is_finite() || !(rate > 0.0 && rate < 1.0) {
        warn!(initial_amount, rate, "cannot accumulate yield; returning initial amount");
        return initial_amount;
    }

    let mut total = initial_amount;
    let mut wave = initial_amount * rate;
    let mut wave_number = 0u32;

    while wave >= 1.0 {
        total += wave;
        wave_number += 1;
        trace!(wave_number, wave, total, "resource return wave");
        wave *= rate;
    }

    total
}
