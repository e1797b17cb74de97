//! Form state for the recraft calculator.
//!
//! The form owns the single mutable [`CalculationInput`] record. Each field
//! is set from text the way an input widget would deliver it: numeric text
//! that does not parse is dropped and the previous value stays in effect.

use std::{fmt, str::FromStr};

use recraft_core::{
    BonusOption, CalculationInput, CalculationResult, SelectOption, TaxOption, calculate,
};
use thiserror::Error;
use tracing::debug;

use crate::utils::{parse_flag, parse_optional_number};

/// Error returned when a name matches no [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{name}'")]
pub struct UnknownFieldError {
    pub name: String,
}

/// A settable input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PrimaryPrice,
    SecondaryPrice,
    PrimaryQty,
    SecondaryQty,
    FoodPrice,
    StationCost,
    CraftingPrice,
    Focus,
    Bonus,
    Resource,
    Town,
    Tax,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::PrimaryPrice,
            Field::SecondaryPrice,
            Field::PrimaryQty,
            Field::SecondaryQty,
            Field::FoodPrice,
            Field::StationCost,
            Field::CraftingPrice,
            Field::Focus,
            Field::Bonus,
            Field::Resource,
            Field::Town,
            Field::Tax,
        ]
    }

    /// Command name used by the session.
    pub fn name(&self) -> &'static str {
        match self {
            Field::PrimaryPrice => "primary-price",
            Field::SecondaryPrice => "secondary-price",
            Field::PrimaryQty => "primary-qty",
            Field::SecondaryQty => "secondary-qty",
            Field::FoodPrice => "food-price",
            Field::StationCost => "station-cost",
            Field::CraftingPrice => "crafting-price",
            Field::Focus => "focus",
            Field::Bonus => "bonus",
            Field::Resource => "resource",
            Field::Town => "town",
            Field::Tax => "tax",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == s)
    }

    fn numeric_slot(
        self,
        input: &mut CalculationInput,
    ) -> Option<&mut f64> {
        match self {
            Field::PrimaryPrice => Some(&mut input.primary_price),
            Field::SecondaryPrice => Some(&mut input.secondary_price),
            Field::PrimaryQty => Some(&mut input.primary_qty),
            Field::SecondaryQty => Some(&mut input.secondary_qty),
            Field::FoodPrice => Some(&mut input.food_price),
            Field::StationCost => Some(&mut input.station_cost_per_unit),
            Field::CraftingPrice => Some(&mut input.crafting_price),
            Field::Focus | Field::Bonus | Field::Resource | Field::Town | Field::Tax => None,
        }
    }
}

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFieldError {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The calculator form: current input plus the defaults it resets to.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: CalculationInput,
    defaults: CalculationInput,
}

impl FormState {
    /// Creates a form that starts on, and resets to, `defaults`.
    pub fn new(defaults: CalculationInput) -> Self {
        Self {
            input: defaults.clone(),
            defaults,
        }
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    /// Applies field text. Returns whether the value was accepted; only an
    /// accepted change should trigger a recompute.
    ///
    /// - numeric fields: unparsable text is ignored
    /// - `focus`: `on`/`off` style toggles, anything else is ignored
    /// - `bonus`: only `10%` enables the bonus, every other label disables it
    /// - `resource`/`town`: any label is taken verbatim
    /// - `tax`: unknown labels are ignored
    pub fn apply(
        &mut self,
        field: Field,
        text: &str,
    ) -> bool {
        if let Some(slot) = field.numeric_slot(&mut self.input) {
            return match parse_optional_number(text) {
                Some(value) => {
                    *slot = value;
                    true
                }
                None => false,
            };
        }

        match field {
            Field::Focus => match parse_flag(text) {
                Some(enabled) => {
                    self.input.focus_enabled = enabled;
                    true
                }
                None => {
                    debug!(input = %text, "ignoring focus toggle");
                    false
                }
            },
            Field::Bonus => {
                self.input.has_bonus = text == BonusOption::TenPercent.label();
                true
            }
            Field::Resource => {
                self.input.resource = text.to_string();
                true
            }
            Field::Town => {
                self.input.town = text.to_string();
                true
            }
            Field::Tax => match TaxOption::parse(text) {
                Some(tax) => {
                    self.input.tax_rate = tax.rate();
                    true
                }
                None => {
                    debug!(input = %text, "ignoring unknown tax option");
                    false
                }
            },
            _ => false,
        }
    }

    /// Restores the defaults the form was created with.
    pub fn reset(&mut self) {
        self.input = self.defaults.clone();
    }

    /// Runs the full recompute on the current snapshot.
    pub fn recalculate(&self) -> CalculationResult {
        calculate(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scenario_form() -> FormState {
        let mut form = FormState::default();
        form.apply(Field::SecondaryPrice, "10");
        form.apply(Field::SecondaryQty, "100");
        form.apply(Field::CraftingPrice, "50");
        form
    }

    // =========================================================================
    // Field tests
    // =========================================================================

    #[test]
    fn field_names_parse_back() {
        for field in Field::all() {
            assert_eq!(field.name().parse::<Field>(), Ok(*field));
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "price".parse::<Field>().unwrap_err();

        assert_eq!(
            err,
            UnknownFieldError {
                name: "price".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown field 'price'");
    }

    // =========================================================================
    // FormState::apply tests
    // =========================================================================

    #[test]
    fn numeric_text_sets_the_field() {
        let mut form = FormState::default();

        assert!(form.apply(Field::StationCost, " 4.5 "));
        assert_eq!(form.input().station_cost_per_unit, 4.5);
    }

    #[test]
    fn unparsable_numeric_text_keeps_previous_value() {
        let mut form = scenario_form();

        assert!(!form.apply(Field::SecondaryQty, "10o"));
        assert_eq!(form.input().secondary_qty, 100.0);
    }

    #[test]
    fn non_finite_numeric_text_is_ignored() {
        let mut form = scenario_form();

        assert!(!form.apply(Field::CraftingPrice, "inf"));
        assert_eq!(form.input().crafting_price, 50.0);
    }

    #[test]
    fn focus_toggle_accepts_on_and_off() {
        let mut form = FormState::default();

        assert!(form.apply(Field::Focus, "on"));
        assert!(form.input().focus_enabled);
        assert!(form.apply(Field::Focus, "off"));
        assert!(!form.input().focus_enabled);
        assert!(!form.apply(Field::Focus, "sometimes"));
    }

    #[test]
    fn only_ten_percent_bonus_label_sets_bonus() {
        let mut form = FormState::default();

        form.apply(Field::Bonus, "10%");
        assert!(form.input().has_bonus);

        form.apply(Field::Bonus, "Нэту(");
        assert!(!form.input().has_bonus);

        form.apply(Field::Bonus, "10%");
        form.apply(Field::Bonus, "whatever");
        assert!(!form.input().has_bonus);
    }

    #[test]
    fn tax_labels_set_rate_and_unknown_labels_are_ignored() {
        let mut form = FormState::default();

        assert!(form.apply(Field::Tax, "10.5%"));
        assert_eq!(form.input().tax_rate, 0.15);

        assert!(!form.apply(Field::Tax, "20%"));
        assert_eq!(form.input().tax_rate, 0.15);

        assert!(form.apply(Field::Tax, "Налог"));
        assert_eq!(form.input().tax_rate, 0.0);
    }

    #[test]
    fn town_and_resource_are_taken_verbatim() {
        let mut form = FormState::default();

        assert!(form.apply(Field::Resource, "Камень"));
        assert!(form.apply(Field::Town, "Caerleon"));
        assert_eq!(form.input().resource, "Камень");
        assert_eq!(form.input().town, "Caerleon");
    }

    // =========================================================================
    // FormState::recalculate / reset tests
    // =========================================================================

    #[test]
    fn recalculate_runs_the_end_to_end_scenario() {
        let shown = scenario_form().recalculate().display();

        assert_eq!(shown.crafted_quantity, "117");
        assert_eq!(shown.total_cost, "1000");
        assert_eq!(shown.net_profit, "4850");
    }

    #[test]
    fn recalculate_twice_gives_identical_results() {
        let form = scenario_form();

        assert_eq!(form.recalculate(), form.recalculate());
    }

    #[test]
    fn reset_restores_defaults() {
        let defaults = CalculationInput {
            station_cost_per_unit: 3.0,
            ..CalculationInput::default()
        };
        let mut form = FormState::new(defaults.clone());
        form.apply(Field::StationCost, "9");
        form.apply(Field::Town, "Martlock");

        form.reset();

        assert_eq!(form.input(), &defaults);
    }
}
