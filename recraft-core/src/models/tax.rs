use std::{fmt, str::FromStr};

use super::options::{SelectOption, UnknownOptionError};

/// Market tax bracket applied to the net profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaxOption {
    #[default]
    Unselected,
    Reduced,
    Full,
}

impl TaxOption {
    /// Fraction of net profit taken as tax.
    ///
    /// The `10.5%` entry is wired to 0.15, not 0.105. Kept as-is until the
    /// intended rate is confirmed.
    pub fn rate(&self) -> f64 {
        match self {
            TaxOption::Unselected => 0.0,
            TaxOption::Reduced => 0.065,
            TaxOption::Full => 0.15,
        }
    }
}

impl SelectOption for TaxOption {
    const KIND: &'static str = "tax";

    fn all() -> &'static [Self] {
        &[TaxOption::Unselected, TaxOption::Reduced, TaxOption::Full]
    }

    fn label(&self) -> &'static str {
        match self {
            TaxOption::Unselected => "Налог",
            TaxOption::Reduced => "6.5%",
            TaxOption::Full => "10.5%",
        }
    }
}

impl FromStr for TaxOption {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl fmt::Display for TaxOption {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
