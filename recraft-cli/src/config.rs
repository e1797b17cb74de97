//! Configuration file support.
//!
//! The file is TOML with two optional tables:
//!
//! ```toml
//! [logging]
//! level = "info"
//! file = "recraft.log"
//!
//! [defaults]
//! station_cost = 12.0
//! focus = true
//! town = "Martlock"
//! tax = "6.5%"
//! ```
//!
//! `[defaults]` sets the values the form starts on and resets to.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use recraft_core::{
    BonusOption, CalculationInput, Resource, SelectOption, TaxOption, Town, UnknownOptionError,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "recraft.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid default: {0}")]
    InvalidOption(#[from] UnknownOptionError),

    #[error("invalid default: {field} must be a finite number")]
    NotFinite { field: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub defaults: InputDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `recraft_core=trace`.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Starting values for the form. Labels use the option list spelling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputDefaults {
    pub primary_price: f64,
    pub secondary_price: f64,
    pub primary_qty: f64,
    pub secondary_qty: f64,
    pub food_price: f64,
    pub station_cost: f64,
    pub crafting_price: f64,
    pub focus: bool,
    pub bonus: Option<String>,
    pub resource: Option<String>,
    pub town: Option<String>,
    pub tax: Option<String>,
}

impl InputDefaults {
    /// Builds the starting input snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] for a bonus or tax label that
    /// is not in its option list, and [`ConfigError::NotFinite`] for a
    /// number written as `inf` or `nan`. Unknown resource or town labels are
    /// kept with a warning, since they only disable the special rate.
    pub fn to_input(&self) -> Result<CalculationInput, ConfigError> {
        let numbers = [
            ("primary_price", self.primary_price),
            ("secondary_price", self.secondary_price),
            ("primary_qty", self.primary_qty),
            ("secondary_qty", self.secondary_qty),
            ("food_price", self.food_price),
            ("station_cost", self.station_cost),
            ("crafting_price", self.crafting_price),
        ];
        if let Some((field, _)) = numbers.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }

        let bonus = match &self.bonus {
            Some(label) => BonusOption::parse_strict(label)?,
            None => BonusOption::default(),
        };
        let tax = match &self.tax {
            Some(label) => TaxOption::parse_strict(label)?,
            None => TaxOption::default(),
        };

        let resource = self
            .resource
            .clone()
            .unwrap_or_else(|| Resource::Unselected.label().to_string());
        if Resource::parse(&resource).is_none() {
            warn!(resource = %resource, "default resource is not in the option list");
        }

        let town = self
            .town
            .clone()
            .unwrap_or_else(|| Town::Unselected.label().to_string());
        if Town::parse(&town).is_none() {
            warn!(town = %town, "default town is not in the option list");
        }

        Ok(CalculationInput {
            primary_price: self.primary_price,
            secondary_price: self.secondary_price,
            primary_qty: self.primary_qty,
            secondary_qty: self.secondary_qty,
            food_price: self.food_price,
            station_cost_per_unit: self.station_cost,
            crafting_price: self.crafting_price,
            focus_enabled: self.focus,
            has_bonus: bonus.has_bonus(),
            resource,
            town,
            tax_rate: tax.rate(),
        })
    }
}

impl AppConfig {
    /// Parses configuration text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is read if present and built-in defaults are
    /// used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
