use serde::{Deserialize, Serialize};

use super::{options::SelectOption, resource::Resource, town::Town};

/// Snapshot of every value the recraft calculation reads.
///
/// Rebuilt by the presentation layer on each input change and passed by
/// reference into [`crate::calculate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Price of one unit of the primary material.
    pub primary_price: f64,
    /// Price of one unit of the secondary material.
    pub secondary_price: f64,
    pub primary_qty: f64,
    /// Quantity of the secondary material. The crafted yield is accumulated
    /// from this amount.
    pub secondary_qty: f64,
    /// Flat food cost for the whole batch.
    pub food_price: f64,
    /// Station fee charged per crafted unit.
    pub station_cost_per_unit: f64,
    /// Sale price of one crafted unit.
    pub crafting_price: f64,
    pub focus_enabled: bool,
    pub has_bonus: bool,
    /// Resource label. May be the unselected sentinel or an unknown label.
    pub resource: String,
    /// Town label. May be the unselected sentinel or an unknown label.
    pub town: String,
    /// One of 0.0, 0.065 or 0.15.
    pub tax_rate: f64,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            primary_price: 0.0,
            secondary_price: 0.0,
            primary_qty: 0.0,
            secondary_qty: 0.0,
            food_price: 0.0,
            station_cost_per_unit: 0.0,
            crafting_price: 0.0,
            focus_enabled: false,
            has_bonus: false,
            resource: Resource::Unselected.label().to_string(),
            town: Town::Unselected.label().to_string(),
            tax_rate: 0.0,
        }
    }
}

/// Outcome of one full recompute. Values keep full precision; rounding is
/// applied only by [`CalculationResult::display`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Return rate selected for this input.
    pub return_rate: f64,
    /// Accumulated yield before flooring.
    pub total_yield: f64,
    pub total_cost: f64,
    pub net_profit_after_tax: f64,
}

/// The three output fields as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayOutputs {
    pub crafted_quantity: String,
    pub total_cost: String,
    pub net_profit: String,
}

impl CalculationResult {
    /// Whole crafted units (the yield rounded down).
    pub fn crafted_quantity(&self) -> f64 {
        self.total_yield.floor()
    }

    pub fn display(&self) -> DisplayOutputs {
        use crate::calculations::common::format_whole;

        DisplayOutputs {
            crafted_quantity: format_whole(self.crafted_quantity()),
            total_cost: format_whole(self.total_cost),
            net_profit: format_whole(self.net_profit_after_tax),
        }
    }
}
