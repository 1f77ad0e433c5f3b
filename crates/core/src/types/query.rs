//! Sort options for the product grid.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product grid ordering, as offered by the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order; no sorting is applied.
    #[default]
    Default,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
}

impl SortKey {
    /// All options in dropdown order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::PriceLow,
        Self::PriceHigh,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// Dropdown value for this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Read a dropdown value. Unrecognised values mean catalog order.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_value(s))
    }
}
