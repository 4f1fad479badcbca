use curator_core::{
    classify, partition_for_display, store_icon, BuyLink, LinkClass, FALLBACK_ICON,
};

fn link(store_name: &str) -> BuyLink {
    BuyLink {
        store_name: store_name.to_string(),
        url: "https://example.com".to_string(),
        ..BuyLink::default()
    }
}

#[test]
fn at_prefix_is_a_mention() {
    assert_eq!(classify(&link("@SomeBrand")), LinkClass::Mention);
    assert_eq!(classify(&link("@charlottetilbury")), LinkClass::Mention);
}

#[test]
fn everything_else_is_a_shop() {
    assert_eq!(classify(&link("Amazon Egypt")), LinkClass::Shop);
    assert_eq!(classify(&link("Some Local Store")), LinkClass::Shop);
}

#[test]
fn empty_store_name_is_a_shop_with_fallback_icon() {
    assert_eq!(classify(&link("")), LinkClass::Shop);
    assert_eq!(store_icon(""), FALLBACK_ICON);
}

#[test]
fn known_stores_resolve_their_icons() {
    assert_eq!(store_icon("Amazon Egypt"), "🛒");
    assert_eq!(store_icon("Amazon.eg"), "🛒");
    assert_eq!(store_icon("Noon Egypt"), "🌙");
    assert_eq!(store_icon("Jumia Egypt"), "📦");
}

#[test]
fn unknown_stores_fall_back() {
    assert_eq!(store_icon("Google Shopping"), FALLBACK_ICON);
    // Lookup is exact-match, not fuzzy.
    assert_eq!(store_icon("amazon egypt"), FALLBACK_ICON);
}

#[test]
fn partition_splits_mentions_from_shops_in_order() {
    let links = vec![
        link("Amazon Egypt"),
        link("@brand"),
        link("Noon Egypt"),
        link("@other"),
    ];
    let (mentions, shops) = partition_for_display(&links);
    assert_eq!(mentions, vec![1, 3]);
    assert_eq!(shops, vec![0, 2]);
}

#[test]
fn duplicate_shop_rows_collapse_to_the_first() {
    let links = vec![
        link("Amazon Egypt"),
        link("Jumia Egypt"),
        link("Amazon Egypt"),
    ];
    let (_, shops) = partition_for_display(&links);
    assert_eq!(shops, vec![0, 1]);
}

#[test]
fn unnamed_placeholder_rows_never_collapse() {
    let links = vec![link(""), link("")];
    let (_, shops) = partition_for_display(&links);
    assert_eq!(shops, vec![0, 1]);
}
