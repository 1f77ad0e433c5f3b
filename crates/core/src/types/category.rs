//! Product category and the category filter applied to the grid.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// The input string is empty or whitespace.
    #[error("category cannot be empty")]
    Empty,
    /// The input is the reserved filter value `all`.
    #[error("\"{}\" is reserved for the unfiltered view", CategoryFilter::ALL)]
    Reserved,
}

/// A catalog category slug (e.g. `electronics`).
///
/// Categories are compared exactly; `Fashion` and `fashion` are different
/// categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Parse a `Category` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or equals the reserved `all`.
    pub fn parse(s: &str) -> Result<Self, CategoryError> {
        if s.trim().is_empty() {
            return Err(CategoryError::Empty);
        }
        if s == CategoryFilter::ALL {
            return Err(CategoryError::Reserved);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the category as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The category filter buttons above the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only products of exactly this category.
    Only(Category),
}

impl CategoryFilter {
    /// Filter value meaning "every category".
    pub const ALL: &'static str = "all";

    /// Parse a filter button value.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    pub fn parse(s: &str) -> Result<Self, CategoryError> {
        if s == Self::ALL {
            return Ok(Self::All);
        }
        Category::parse(s).map(Self::Only)
    }

    /// Whether a product with `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl core::str::FromStr for CategoryFilter {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(CategoryFilter::parse("all").unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("fashion").unwrap(),
            CategoryFilter::Only(Category::parse("fashion").unwrap())
        );
        assert_eq!(CategoryFilter::parse(" "), Err(CategoryError::Empty));
    }

    #[test]
    fn test_category_rejects_reserved() {
        assert_eq!(Category::parse("all"), Err(CategoryError::Reserved));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let filter = CategoryFilter::parse("fashion").unwrap();
        assert!(filter.matches(&Category::parse("fashion").unwrap()));
        assert!(!filter.matches(&Category::parse("Fashion").unwrap()));
        assert!(CategoryFilter::All.matches(&Category::parse("Fashion").unwrap()));
    }
}
