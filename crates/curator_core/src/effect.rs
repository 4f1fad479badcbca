use crate::model::{Platform, Product};

/// Asynchronous collaborator calls requested by `update`. The platform
/// layer executes these and feeds the completions back as Msgs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the ingestion service for product candidates.
    ParseInfluencer {
        handle: String,
        platform: Platform,
        limit: u32,
    },
    /// Bulk-persist a verified session.
    SaveBatch {
        influencer_name: String,
        profile_pic: Option<String>,
        platform: Platform,
        products: Vec<Product>,
    },
    /// Reload the full catalog collection.
    LoadCatalog,
    /// Ask the catalog store for a server-side search; the response
    /// replaces the collection just like a load.
    SearchCatalog { query: String },
    /// Persist one edited product.
    UpdateProduct { product: Product },
    /// Delete one product by id.
    DeleteProduct { id: String },
}
