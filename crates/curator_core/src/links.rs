//! Buy-link classification and display merging.
//!
//! Classification is derived from `store_name` on every call; nothing
//! here caches state, so an edit to a store name reclassifies the link
//! on the next view derivation.

use crate::model::BuyLink;

/// Icon used for shops with no entry in the lookup table.
pub const FALLBACK_ICON: &str = "🛍️";

/// How a buy link is routed at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Brand/account reference, `@`-prefixed store name.
    Mention,
    /// Purchasable storefront entry.
    Shop,
}

/// Classifies a link as Mention iff its store name starts with `@`.
/// An empty store name is a Shop (with the fallback icon).
pub fn classify(link: &BuyLink) -> LinkClass {
    if link.store_name.starts_with('@') {
        LinkClass::Mention
    } else {
        LinkClass::Shop
    }
}

/// Resolves the display icon for a shop via exact-match lookup.
pub fn store_icon(store_name: &str) -> &'static str {
    match store_name {
        "Amazon Egypt" | "Amazon.eg" => "🛒",
        "Noon Egypt" => "🌙",
        "Jumia Egypt" => "📦",
        _ => FALLBACK_ICON,
    }
}

/// Partitions a link sequence into (mentions, shops), preserving order.
///
/// Shop rows with a duplicate store name collapse to the first
/// occurrence so a store never renders twice on one card; the indices
/// of the survivors are returned so callers keep stable identity.
pub fn partition_for_display(links: &[BuyLink]) -> (Vec<usize>, Vec<usize>) {
    let mut mentions = Vec::new();
    let mut shops = Vec::new();
    let mut seen_stores: Vec<&str> = Vec::new();

    for (index, link) in links.iter().enumerate() {
        match classify(link) {
            LinkClass::Mention => mentions.push(index),
            LinkClass::Shop => {
                // Unnamed rows are placeholders still being edited; never collapse them.
                if !link.store_name.is_empty() {
                    if seen_stores.contains(&link.store_name.as_str()) {
                        continue;
                    }
                    seen_stores.push(link.store_name.as_str());
                }
                shops.push(index);
            }
        }
    }

    (mentions, shops)
}
