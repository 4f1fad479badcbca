use curator_core::{filter, Category, FacetFilter, Platform, Product};

fn product(name: &str, brand: &str, influencer: &str) -> Product {
    Product {
        id: Some(format!("{name}-{influencer}")),
        influencer_name: influencer.to_string(),
        influencer_profile_pic: None,
        product_name: name.to_string(),
        brand: brand.to_string(),
        category: Category::Other,
        quote: None,
        video_url: None,
        platform: Platform::Instagram,
        buy_links: Vec::new(),
    }
}

fn collection() -> Vec<Product> {
    vec![
        product("Flawless Filter", "Charlotte Tilbury", "Sarah Hany"),
        product("Lip Oil", "Dior", "Sarah Hany"),
        product("Hydrating Serum", "The Ordinary", "Nour Adel"),
    ]
}

#[test]
fn empty_query_and_all_facet_return_everything_in_order() {
    let products = collection();
    let visible = filter(&products, "", &FacetFilter::All);
    let names: Vec<_> = visible.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(names, vec!["Flawless Filter", "Lip Oil", "Hydrating Serum"]);
}

#[test]
fn query_matches_are_case_insensitive_substrings() {
    let products = collection();

    // Against product name.
    let by_name = filter(&products, "flawless", &FacetFilter::All);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].product_name, "Flawless Filter");

    // Against brand.
    let by_brand = filter(&products, "DIOR", &FacetFilter::All);
    assert_eq!(by_brand.len(), 1);
    assert_eq!(by_brand[0].brand, "Dior");

    // Against influencer name.
    let by_influencer = filter(&products, "sarah", &FacetFilter::All);
    assert_eq!(by_influencer.len(), 2);
}

#[test]
fn query_misses_return_nothing() {
    let products = collection();
    assert!(filter(&products, "retinol", &FacetFilter::All).is_empty());
}

#[test]
fn facet_restricts_to_exact_influencer_match() {
    let products = collection();
    let faceted = filter(
        &products,
        "",
        &FacetFilter::Influencer("Nour Adel".to_string()),
    );
    assert_eq!(faceted.len(), 1);
    assert_eq!(faceted[0].influencer_name, "Nour Adel");

    // Facet matching is exact, not substring.
    let none = filter(&products, "", &FacetFilter::Influencer("Nour".to_string()));
    assert!(none.is_empty());
}

#[test]
fn query_and_facet_are_anded() {
    let products = collection();
    let both = filter(
        &products,
        "lip",
        &FacetFilter::Influencer("Sarah Hany".to_string()),
    );
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].product_name, "Lip Oil");

    let conflicting = filter(
        &products,
        "lip",
        &FacetFilter::Influencer("Nour Adel".to_string()),
    );
    assert!(conflicting.is_empty());
}
