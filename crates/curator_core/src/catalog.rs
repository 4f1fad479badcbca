//! Catalog view controller state: the committed product collection and
//! its derived, filterable views.

use crate::draft::Draft;
use crate::model::Product;

/// Influencer facet of the catalog search. `All` is the sentinel that
/// passes every product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetFilter {
    #[default]
    All,
    Influencer(String),
}

/// A post-hoc edit session for one committed product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEdit {
    pub id: String,
    pub draft: Draft,
}

/// One entry in the facet dropdown: influencer name plus product count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetEntry {
    pub influencer_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    query: String,
    facet: FacetFilter,
    editing: Option<CatalogEdit>,
    loading: bool,
}

impl CatalogState {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn facet(&self) -> &FacetFilter {
        &self.facet
    }

    pub fn editing(&self) -> Option<&CatalogEdit> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut CatalogEdit> {
        self.editing.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Wholesale replacement after a fresh load. The previous collection
    /// is discarded; concurrent loads are not coalesced, so whichever
    /// response lands last wins.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_facet(&mut self, facet: FacetFilter) {
        self.facet = facet;
    }

    /// Local removal after a confirmed delete. A miss is fine: the
    /// follow-up reload is the source of truth.
    pub fn remove_local(&mut self, id: &str) {
        self.products.retain(|p| p.id.as_deref() != Some(id));
    }

    /// Begins an edit session for the product with `id`. Returns false
    /// (no-op) when the id is absent from the collection.
    pub fn start_edit(&mut self, id: &str) -> bool {
        let source = self
            .products
            .iter()
            .find(|p| p.id.as_deref() == Some(id));
        match source {
            Some(product) => {
                self.editing = Some(CatalogEdit {
                    id: id.to_string(),
                    draft: Draft::new(product),
                });
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn finish_edit(&mut self) {
        self.editing = None;
    }

    /// Products matching the current query and facet, in collection order.
    pub fn visible(&self) -> Vec<&Product> {
        filter(&self.products, &self.query, &self.facet)
    }

    /// Distinct influencer names with counts, in first-appearance order.
    /// Recomputed from the collection on every call.
    pub fn facet_entries(&self) -> Vec<FacetEntry> {
        let mut entries: Vec<FacetEntry> = Vec::new();
        for product in &self.products {
            match entries
                .iter_mut()
                .find(|e| e.influencer_name == product.influencer_name)
            {
                Some(entry) => entry.count += 1,
                None => entries.push(FacetEntry {
                    influencer_name: product.influencer_name.clone(),
                    count: 1,
                }),
            }
        }
        entries
    }
}

/// A product matches when the query is a case-insensitive substring of
/// its name, brand or influencer name (empty query matches everything),
/// AND the facet accepts its influencer.
pub fn filter<'a>(products: &'a [Product], query: &str, facet: &FacetFilter) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| matches_query(p, &needle) && matches_facet(p, facet))
        .collect()
}

fn matches_query(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.product_name.to_lowercase().contains(needle)
        || product.brand.to_lowercase().contains(needle)
        || product.influencer_name.to_lowercase().contains(needle)
}

fn matches_facet(product: &Product, facet: &FacetFilter) -> bool {
    match facet {
        FacetFilter::All => true,
        FacetFilter::Influencer(name) => product.influencer_name == *name,
    }
}
