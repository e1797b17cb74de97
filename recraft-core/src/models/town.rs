use std::{fmt, str::FromStr};

use super::options::{SelectOption, UnknownOptionError};

/// Royal city where the refining station stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Town {
    #[default]
    Unselected,
    Lymhyrst,
    Brightwatch,
    Martlock,
    FortSterling,
    Thetford,
}

impl SelectOption for Town {
    const KIND: &'static str = "town";

    fn all() -> &'static [Self] {
        &[
            Town::Unselected,
            Town::Lymhyrst,
            Town::Brightwatch,
            Town::Martlock,
            Town::FortSterling,
            Town::Thetford,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Town::Unselected => "Город",
            Town::Lymhyrst => "Lymhyrst",
            Town::Brightwatch => "Brightwatch",
            Town::Martlock => "Martlock",
            Town::FortSterling => "Fort Sterling",
            Town::Thetford => "Thetford",
        }
    }
}

impl FromStr for Town {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl fmt::Display for Town {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
