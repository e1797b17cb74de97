use std::{fmt, str::FromStr};

use super::options::{SelectOption, UnknownOptionError};

/// Bonus selector. Only [`BonusOption::TenPercent`] raises the return rate;
/// the sentinel and the explicit "no bonus" entry behave the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BonusOption {
    #[default]
    Unselected,
    TenPercent,
    NoBonus,
}

impl BonusOption {
    pub fn has_bonus(&self) -> bool {
        matches!(self, BonusOption::TenPercent)
    }
}

impl SelectOption for BonusOption {
    const KIND: &'static str = "bonus";

    fn all() -> &'static [Self] {
        &[
            BonusOption::Unselected,
            BonusOption::TenPercent,
            BonusOption::NoBonus,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            BonusOption::Unselected => "Бонус",
            BonusOption::TenPercent => "10%",
            BonusOption::NoBonus => "Нэту(",
        }
    }
}

impl FromStr for BonusOption {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl fmt::Display for BonusOption {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
