mod bonus;
mod calculation;
mod options;
mod resource;
mod tax;
mod town;

pub use bonus::BonusOption;
pub use calculation::{CalculationInput, CalculationResult, DisplayOutputs};
pub use options::{SelectOption, UnknownOptionError};
pub use resource::Resource;
pub use tax::TaxOption;
pub use town::Town;
