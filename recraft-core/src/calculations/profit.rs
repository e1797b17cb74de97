//! Cost and profit for a recraft batch.
//!
//! | Term | Formula |
//! |------|---------|
//! | Total cost | primary price × qty + secondary price × qty + food + station fee × crafted units |
//! | Gross profit | sale price × crafted units |
//! | Net profit | (gross profit − total cost) × (1 − tax rate) |
//!
//! Net profit is 0 when there is no sale price or nothing was crafted.

use crate::models::CalculationInput;

/// Computes `(total_cost, net_profit_after_tax)`.
///
/// `floored_yield` is the whole number of crafted units. Nothing is rounded
/// here.
///
/// # Examples
///
/// ```
/// use recraft_core::CalculationInput;
/// use recraft_core::calculations::compute_cost_and_profit;
///
/// let input = CalculationInput {
///     secondary_price: 10.0,
///     secondary_qty: 100.0,
///     crafting_price: 50.0,
///     ..CalculationInput::default()
/// };
///
/// assert_eq!(compute_cost_and_profit(&input, 117.0), (1000.0, 4850.0));
/// ```
pub fn compute_cost_and_profit(
    input: &CalculationInput,
    floored_yield: f64,
) -> (f64, f64) {
    let total_cost = batch_cost(input, floored_yield);

    let net_profit = if input.crafting_price > 0.0 && floored_yield > 0.0 {
        let gross_profit = input.crafting_price * floored_yield;
        (gross_profit - total_cost) * (1.0 - input.tax_rate)
    } else {
        0.0
    };

    (total_cost, net_profit)
}

/// Materials, food and the per-unit station fee.
fn batch_cost(
    input: &CalculationInput,
    floored_yield: f64,
) -> f64 {
    let station_total = input.station_cost_per_unit * floored_yield;
    input.primary_price * input.primary_qty
        + input.secondary_price * input.secondary_qty
        + input.food_price
        + station_total
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_input() -> CalculationInput {
        CalculationInput {
            primary_price: 20.0,
            secondary_price: 10.0,
            primary_qty: 50.0,
            secondary_qty: 100.0,
            food_price: 300.0,
            station_cost_per_unit: 2.0,
            crafting_price: 50.0,
            ..CalculationInput::default()
        }
    }

    // =========================================================================
    // batch_cost tests
    // =========================================================================

    #[test]
    fn batch_cost_adds_materials_food_and_station_fee() {
        let result = batch_cost(&test_input(), 117.0);

        // 1000 + 1000 + 300 + 234
        assert_eq!(result, 2534.0);
    }

    #[test]
    fn batch_cost_without_yield_has_no_station_fee() {
        let result = batch_cost(&test_input(), 0.0);

        assert_eq!(result, 2300.0);
    }

    // =========================================================================
    // compute_cost_and_profit tests
    // =========================================================================

    #[test]
    fn net_profit_subtracts_cost_from_gross() {
        let (cost, profit) = compute_cost_and_profit(&test_input(), 117.0);

        assert_eq!(cost, 2534.0);
        assert_eq!(profit, 5850.0 - 2534.0);
    }

    #[test]
    fn net_profit_applies_tax_rate() {
        let input = CalculationInput {
            tax_rate: 0.065,
            ..test_input()
        };

        let (_, profit) = compute_cost_and_profit(&input, 117.0);

        assert!((profit - 3316.0 * (1.0 - 0.065)).abs() < 1e-9);
    }

    #[test]
    fn net_profit_can_be_negative() {
        let input = CalculationInput {
            crafting_price: 1.0,
            ..test_input()
        };

        let (cost, profit) = compute_cost_and_profit(&input, 117.0);

        assert_eq!(profit, 117.0 - cost);
        assert!(profit < 0.0);
    }

    #[test]
    fn zero_crafting_price_gives_zero_profit() {
        let input = CalculationInput {
            crafting_price: 0.0,
            ..test_input()
        };

        let (cost, profit) = compute_cost_and_profit(&input, 117.0);

        assert_eq!(cost, 2534.0);
        assert_eq!(profit, 0.0);
    }

    #[test]
    fn zero_yield_gives_zero_profit() {
        let (cost, profit) = compute_cost_and_profit(&test_input(), 0.0);

        assert_eq!(cost, 2300.0);
        assert_eq!(profit, 0.0);
    }
}
