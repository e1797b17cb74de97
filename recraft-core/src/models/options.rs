//! Fixed option lists shown by the presentation layer.
//!
//! Every list is ordered the way it is presented, and its first entry is the
//! "nothing selected" sentinel that the list starts out on.

use thiserror::Error;

/// Error returned when a label does not name any entry of an option list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} option '{label}'")]
pub struct UnknownOptionError {
    pub kind: &'static str,
    pub label: String,
}

/// A fixed, ordered list of selectable labels.
pub trait SelectOption: Copy + PartialEq + Sized + 'static {
    /// Human-readable name of the list, used in error messages.
    const KIND: &'static str;

    /// All options in presentation order, sentinel first.
    fn all() -> &'static [Self];

    fn label(&self) -> &'static str;

    /// Whether this is the sentinel entry.
    fn is_unselected(&self) -> bool {
        Self::all().first() == Some(self)
    }

    /// Looks up an option by its exact label.
    fn parse(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.label() == label)
    }

    /// Like [`SelectOption::parse`], but reports the unknown label.
    fn parse_strict(label: &str) -> Result<Self, UnknownOptionError> {
        Self::parse(label).ok_or_else(|| UnknownOptionError {
            kind: Self::KIND,
            label: label.to_string(),
        })
    }

    fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|o| o.label()).collect()
    }
}
