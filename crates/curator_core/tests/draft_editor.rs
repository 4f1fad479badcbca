use curator_core::{
    BuyLink, Category, Draft, LinkEdit, Platform, Product, ProductEdit, DEFAULT_CURRENCY,
};

fn sample_product() -> Product {
    Product {
        id: Some("p1".to_string()),
        influencer_name: "Sarah Hany".to_string(),
        influencer_profile_pic: None,
        product_name: "Flawless Filter".to_string(),
        brand: "Charlotte Tilbury".to_string(),
        category: Category::Makeup,
        quote: Some("obsessed with this".to_string()),
        video_url: Some("https://instagram.com/reel/abc".to_string()),
        platform: Platform::Instagram,
        buy_links: vec![
            BuyLink {
                id: Some("l1".to_string()),
                store_name: "Amazon Egypt".to_string(),
                url: "https://www.amazon.eg/s?k=flawless+filter".to_string(),
                price: Some("1200".to_string()),
                currency: Some("EGP".to_string()),
                in_stock: Some(true),
            },
            BuyLink {
                id: Some("l2".to_string()),
                store_name: "@charlottetilbury".to_string(),
                url: "https://instagram.com/charlottetilbury".to_string(),
                price: None,
                currency: None,
                in_stock: None,
            },
        ],
    }
}

#[test]
fn editing_a_draft_never_touches_the_source() {
    let original = sample_product();
    let pristine = original.clone();

    let mut draft = Draft::new(&original);
    draft.set_field(ProductEdit::Brand("Dior".to_string()));
    draft.set_field(ProductEdit::Name("Something Else".to_string()));
    let first_key = draft.links()[0].key;
    draft.set_link_field(first_key, LinkEdit::Url("https://elsewhere.example".to_string()));
    draft.set_link_field(first_key, LinkEdit::StoreName("Noon Egypt".to_string()));
    draft.add_link();

    // The source product is byte-identical to what it was before the
    // edit session started.
    assert_eq!(original, pristine);
    assert_eq!(original.buy_links[0].store_name, "Amazon Egypt");
}

#[test]
fn discard_is_just_drop() {
    let original = sample_product();
    {
        let mut draft = Draft::new(&original);
        draft.set_field(ProductEdit::Quote(String::new()));
        draft.remove_link(draft.links()[0].key);
    }
    assert_eq!(original, sample_product());
}

#[test]
fn add_then_remove_restores_link_count() {
    let original = sample_product();
    let mut draft = Draft::new(&original);
    let before = draft.link_count();

    let key = draft.add_link();
    assert_eq!(draft.link_count(), before + 1);

    draft.remove_link(key);
    assert_eq!(draft.link_count(), before);
}

#[test]
fn added_link_is_empty_with_default_currency() {
    let mut draft = Draft::new(&sample_product());
    let key = draft.add_link();

    let added = draft
        .links()
        .iter()
        .find(|entry| entry.key == key)
        .unwrap();
    assert_eq!(added.link.id, None);
    assert_eq!(added.link.store_name, "");
    assert_eq!(added.link.url, "");
    assert_eq!(added.link.currency.as_deref(), Some(DEFAULT_CURRENCY));
}

#[test]
fn link_keys_survive_removal_of_earlier_links() {
    let mut draft = Draft::new(&sample_product());
    let first = draft.links()[0].key;
    let second = draft.links()[1].key;

    draft.remove_link(first);

    // The surviving link is still addressable by its original key even
    // though its position shifted.
    draft.set_link_field(second, LinkEdit::Price(Some("900".to_string())));
    assert_eq!(draft.links()[0].key, second);
    assert_eq!(draft.links()[0].link.price.as_deref(), Some("900"));
}

#[test]
fn keys_are_never_reused_within_a_draft() {
    let mut draft = Draft::new(&sample_product());
    let removed = draft.links()[1].key;
    draft.remove_link(removed);

    let fresh = draft.add_link();
    assert_ne!(fresh, removed);
}

#[test]
fn commit_reassembles_the_product_shape() {
    let original = sample_product();
    let mut draft = Draft::new(&original);
    draft.set_field(ProductEdit::Brand("Dior".to_string()));
    draft.set_field(ProductEdit::Category(Category::Skincare));

    let committed = draft.commit();
    assert_eq!(committed.id.as_deref(), Some("p1"));
    assert_eq!(committed.brand, "Dior");
    assert_eq!(committed.category, Category::Skincare);
    assert_eq!(committed.buy_links.len(), original.buy_links.len());
    assert_eq!(committed.buy_links[0].id.as_deref(), Some("l1"));
}

#[test]
fn clearing_the_quote_stores_none() {
    let mut draft = Draft::new(&sample_product());
    draft.set_field(ProductEdit::Quote(String::new()));
    assert_eq!(draft.fields().quote, None);

    draft.set_field(ProductEdit::Quote("so good".to_string()));
    assert_eq!(draft.fields().quote.as_deref(), Some("so good"));
}

#[test]
#[should_panic(expected = "unknown draft link key")]
fn unknown_key_is_a_programming_error() {
    let mut draft = Draft::new(&sample_product());
    let key = draft.links()[0].key;
    draft.remove_link(key);
    // Addressing a removed link is an invariant violation, not a
    // recoverable failure.
    draft.set_link_field(key, LinkEdit::Url("x".to_string()));
}
