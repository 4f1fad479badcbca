use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency assumed for newly added buy links.
pub const DEFAULT_CURRENCY: &str = "EGP";

/// One purchasable storefront entry or brand mention attached to a product.
///
/// Whether a link is a storefront or a brand mention is derived from
/// `store_name` at display time (see [`crate::links`]); it is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuyLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub store_name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl BuyLink {
    /// An empty link as appended by the draft editor: no identity yet,
    /// default currency.
    pub fn empty() -> Self {
        Self {
            currency: Some(DEFAULT_CURRENCY.to_string()),
            ..Self::default()
        }
    }
}

/// A curated catalog entry. `buy_links` order is display order only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub influencer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influencer_profile_pic: Option<String>,
    pub product_name: String,
    pub brand: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub buy_links: Vec<BuyLink>,
}

/// Closed category set. Anything the backend sends outside this set
/// deserializes to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Makeup,
    Skincare,
    Haircare,
    Fragrance,
    Fashion,
    Shoes,
    Bags,
    Jewelry,
    Tech,
    Food,
    Lifestyle,
    Home,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// Wire/display name, always lowercase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Makeup => "makeup",
            Category::Skincare => "skincare",
            Category::Haircare => "haircare",
            Category::Fragrance => "fragrance",
            Category::Fashion => "fashion",
            Category::Shoes => "shoes",
            Category::Bags => "bags",
            Category::Jewelry => "jewelry",
            Category::Tech => "tech",
            Category::Food => "food",
            Category::Lifestyle => "lifestyle",
            Category::Home => "home",
            Category::Other => "other",
        }
    }

    /// Maps a free-form name to a category, falling back to `Other`.
    /// The draft editor itself never validates category membership.
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "makeup" => Category::Makeup,
            "skincare" => Category::Skincare,
            "haircare" => Category::Haircare,
            "fragrance" => Category::Fragrance,
            "fashion" => Category::Fashion,
            "shoes" => Category::Shoes,
            "bags" => Category::Bags,
            "jewelry" => Category::Jewelry,
            "tech" => Category::Tech,
            "food" => Category::Food,
            "lifestyle" => Category::Lifestyle,
            "home" => Category::Home,
            _ => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social platform a product was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    Tiktok,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }

    /// Icon shown next to the watch-video link.
    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Instagram => "📸",
            Platform::Tiktok => "🎵",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
