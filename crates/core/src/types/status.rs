//! Status enums for UI feedback and page hand-off.

use serde::{Deserialize, Serialize};

/// Severity of a transient notification toast.
///
/// Serialized as the CSS modifier class the toast is styled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    /// CSS class suffix (`notification success`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Pages the shop hands off to with a full navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Order review; reads `checkoutCart` or `buyNowProduct`.
    Checkout,
    /// Single product page; reads `selectedProduct`.
    ProductDetail,
}

impl Page {
    /// Relative URL of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Checkout => "checkout.html",
            Self::ProductDetail => "product-detail.html",
        }
    }
}
