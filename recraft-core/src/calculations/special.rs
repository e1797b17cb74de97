//! Special resource/town combinations.

use crate::models::{Resource, SelectOption, Town};

/// Returns true when `resource` is refined in its home town.
///
/// Either value being empty or the unselected sentinel gives false, and so
/// does any label outside the fixed option lists. Labels are compared
/// exactly.
pub fn is_special_combination(
    resource: &str,
    town: &str,
) -> bool {
    if resource.is_empty()
        || town.is_empty()
        || resource == Resource::Unselected.label()
        || town == Town::Unselected.label()
    {
        return false;
    }

    Resource::parse(resource)
        .and_then(|r| r.home_town())
        .is_some_and(|home| home.label() == town)
}
