//! Resource return rates.
//!
//! The rate depends on three independent flags: a special resource/town
//! combination, focus, and the premium bonus. All eight combinations are
//! listed in [`RETURN_RATES`]; there is no fallback or default entry.

use tracing::debug;

pub const DEFAULT_RETURN_RATE: f64 = 0.152; // 15.2%
pub const DEFAULT_FOCUS_RATE: f64 = 0.435; // 43.5%
pub const SPECIAL_RETURN_RATE: f64 = 0.367; // 36.7%
pub const SPECIAL_FOCUS_RATE: f64 = 0.539; // 53.9%
pub const DEFAULT_BONUS_RETURN_RATE: f64 = 0.167; // 16.72%, rounded
pub const DEFAULT_BONUS_FOCUS_RATE: f64 = 0.479; // 47.85%, rounded
pub const SPECIAL_BONUS_RETURN_RATE: f64 = 0.404; // 40.37%, rounded
pub const SPECIAL_BONUS_FOCUS_RATE: f64 = 0.593; // 59.29%, rounded

/// One cell of the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RateKey {
    pub is_special: bool,
    pub focus_enabled: bool,
    pub has_bonus: bool,
}

impl RateKey {
    pub const fn new(
        is_special: bool,
        focus_enabled: bool,
        has_bonus: bool,
    ) -> Self {
        Self {
            is_special,
            focus_enabled,
            has_bonus,
        }
    }

    /// Position in the table: special is the high bit, bonus the low bit.
    pub const fn index(self) -> usize {
        ((self.is_special as usize) << 2)
            | ((self.focus_enabled as usize) << 1)
            | self.has_bonus as usize
    }

    /// All eight keys in table order.
    pub fn all() -> impl Iterator<Item = RateKey> {
        (0..ReturnRateTable::LEN)
            .map(|i| RateKey::new(i & 0b100 != 0, i & 0b010 != 0, i & 0b001 != 0))
    }
}

/// Total mapping from [`RateKey`] to a return rate in (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnRateTable {
    rates: [f64; ReturnRateTable::LEN],
}

impl ReturnRateTable {
    pub const LEN: usize = 8;

    pub const fn rate(
        &self,
        key: RateKey,
    ) -> f64 {
        self.rates[key.index()]
    }
}

/// The rate table, indexed by [`RateKey::index`].
pub const RETURN_RATES: ReturnRateTable = ReturnRateTable {
    rates: [
        DEFAULT_RETURN_RATE,       // -       -     -
        DEFAULT_BONUS_RETURN_RATE, // -       -     bonus
        DEFAULT_FOCUS_RATE,        // -       focus -
        DEFAULT_BONUS_FOCUS_RATE,  // -       focus bonus
        SPECIAL_RETURN_RATE,       // special -     -
        SPECIAL_BONUS_RETURN_RATE, // special -     bonus
        SPECIAL_FOCUS_RATE,        // special focus -
        SPECIAL_BONUS_FOCUS_RATE,  // special focus bonus
    ],
};

/// Selects the return rate for the given flags.
pub fn select_return_rate(
    is_special: bool,
    focus_enabled: bool,
    has_bonus: bool,
) -> f64 {
    let key = RateKey::new(is_special, focus_enabled, has_bonus);
    let rate = RETURN_RATES.rate(key);
    debug!(is_special, focus_enabled, has_bonus, rate, "selected return rate");
    rate
}
