//! Hardware sections that can be queried.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A named hardware category.
///
/// This is a closed set: a name that does not parse into one of these
/// variants is rejected before any collector runs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Cpu,
    Gpu,
    Ram,
    Storage,
    Coolant,
}

impl Section {
    /// Resolve a section name, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not a known section. Surrounding
    /// whitespace is significant.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// All sections in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Lowercase wire name (`"cpu"`, `"storage"`, ...).
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Heading used when presenting a section to people.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Ram => "RAM",
            Self::Storage => "Storage",
            Self::Coolant => "Coolant",
        }
    }
}
