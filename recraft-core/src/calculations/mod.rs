//! Recraft calculation logic.
//!
//! The pipeline is: special-combination check, return-rate selection,
//! yield accumulation, then cost and profit. [`calculate`] runs all of it for
//! one [`CalculationInput`] snapshot.

pub mod accrual;
pub mod common;
pub mod profit;
pub mod rates;
pub mod special;

pub use accrual::accumulate_yield;
pub use profit::compute_cost_and_profit;
pub use rates::{RETURN_RATES, RateKey, ReturnRateTable, select_return_rate};
pub use special::is_special_combination;

use tracing::debug;

use crate::models::{CalculationInput, CalculationResult};

/// Runs the full recompute for one input snapshot.
///
/// The yield is accumulated from the secondary material quantity. A
/// non-positive quantity yields nothing and skips accumulation.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let is_special = is_special_combination(&input.resource, &input.town);
    let return_rate = select_return_rate(is_special, input.focus_enabled, input.has_bonus);

    let total_yield = if input.secondary_qty > 0.0 {
        accumulate_yield(input.secondary_qty, return_rate)
    } else {
        0.0
    };

    let (total_cost, net_profit_after_tax) =
        compute_cost_and_profit(input, total_yield.floor());

    debug!(
        is_special,
        return_rate, total_yield, total_cost, net_profit_after_tax, "recalculated"
    );

    CalculationResult {
        return_rate,
        total_yield,
        total_cost,
        net_profit_after_tax,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scenario_input() -> CalculationInput {
        CalculationInput {
            secondary_price: 10.0,
            secondary_qty: 100.0,
            crafting_price: 50.0,
            ..CalculationInput::default()
        }
    }

    #[test]
    fn end_to_end_scenario_without_special_combination() {
        let result = calculate(&scenario_input());

        assert_eq!(result.return_rate, 0.152);
        assert!((result.total_yield - 117.5104).abs() < 1e-9);
        assert_eq!(result.crafted_quantity(), 117.0);
        assert_eq!(result.total_cost, 1000.0);
        assert_eq!(result.net_profit_after_tax, 4850.0);

        let shown = result.display();
        assert_eq!(shown.crafted_quantity, "117");
        assert_eq!(shown.total_cost, "1000");
        assert_eq!(shown.net_profit, "4850");
    }

    #[test]
    fn recompute_is_deterministic() {
        let input = CalculationInput {
            primary_price: 35.5,
            primary_qty: 200.0,
            food_price: 120.0,
            station_cost_per_unit: 3.25,
            focus_enabled: true,
            has_bonus: true,
            resource: "Кожа".to_string(),
            town: "Martlock".to_string(),
            tax_rate: 0.065,
            ..scenario_input()
        };

        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn special_combination_selects_special_rate() {
        let input = CalculationInput {
            resource: "Брус".to_string(),
            town: "Fort Sterling".to_string(),
            ..scenario_input()
        };

        let result = calculate(&input);

        assert_eq!(result.return_rate, 0.367);
        assert!(result.crafted_quantity() > 117.0);
    }

    #[test]
    fn zero_secondary_quantity_yields_nothing() {
        let input = CalculationInput {
            secondary_qty: 0.0,
            primary_price: 5.0,
            primary_qty: 10.0,
            ..scenario_input()
        };

        let result = calculate(&input);

        assert_eq!(result.total_yield, 0.0);
        assert_eq!(result.total_cost, 50.0);
        assert_eq!(result.net_profit_after_tax, 0.0);
        assert_eq!(result.display().crafted_quantity, "0");
    }

    #[test]
    fn negative_secondary_quantity_yields_nothing() {
        let input = CalculationInput {
            secondary_qty: -40.0,
            ..scenario_input()
        };

        let result = calculate(&input);

        assert_eq!(result.total_yield, 0.0);
        assert_eq!(result.net_profit_after_tax, 0.0);
    }

    #[test]
    fn tax_is_applied_to_net_profit() {
        let input = CalculationInput {
            tax_rate: 0.15,
            ..scenario_input()
        };

        let result = calculate(&input);

        assert!((result.net_profit_after_tax - 4850.0 * 0.85).abs() < 1e-9);
    }
}
