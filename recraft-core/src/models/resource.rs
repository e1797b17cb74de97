use std::{fmt, str::FromStr};

use super::{
    options::{SelectOption, UnknownOptionError},
    town::Town,
};

/// Refined resource being crafted.
///
/// Labels are the in-game Russian names: planks, cloth, leather and metal
/// bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resource {
    #[default]
    Unselected,
    Planks,
    Cloth,
    Leather,
    MetalBar,
}

impl Resource {
    /// The town whose refining station gives this resource the special
    /// return rate. `None` for the sentinel.
    pub fn home_town(&self) -> Option<Town> {
        match self {
            Resource::Unselected => None,
            Resource::Planks => Some(Town::FortSterling),
            Resource::Cloth => Some(Town::Lymhyrst),
            Resource::Leather => Some(Town::Martlock),
            Resource::MetalBar => Some(Town::Thetford),
        }
    }
}

impl SelectOption for Resource {
    const KIND: &'static str = "resource";

    fn all() -> &'static [Self] {
        &[
            Resource::Unselected,
            Resource::Planks,
            Resource::Cloth,
            Resource::Leather,
            Resource::MetalBar,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Resource::Unselected => "Ресурс",
            Resource::Planks => "Брус",
            Resource::Cloth => "Ткань",
            Resource::Leather => "Кожа",
            Resource::MetalBar => "Железо",
        }
    }
}

impl FromStr for Resource {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl fmt::Display for Resource {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_real_resource_has_a_distinct_home_town() {
        let towns: Vec<Town> = Resource::all()
            .iter()
            .filter_map(|r| r.home_town())
            .collect();

        assert_eq!(
            towns,
            vec![
                Town::FortSterling,
                Town::Lymhyrst,
                Town::Martlock,
                Town::Thetford
            ]
        );
    }

    #[test]
    fn sentinel_has_no_home_town() {
        assert_eq!(Resource::Unselected.home_town(), None);
        assert!(Resource::Unselected.is_unselected());
    }

    #[test]
    fn labels_parse_back_to_variants() {
        for resource in Resource::all() {
            assert_eq!(resource.label().parse::<Resource>(), Ok(*resource));
        }
    }
}
