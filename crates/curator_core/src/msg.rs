use crate::catalog::FacetFilter;
use crate::draft::{LinkEdit, LinkKey, ProductEdit};
use crate::model::{Platform, Product};
use crate::state::{ParseOutcome, RemoteFailure, SaveReceipt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // ── Ingestion form (Input stage) ──────────────────────────────────
    /// Operator edited the influencer handle.
    HandleChanged(String),
    /// Operator picked a source platform.
    PlatformSelected(Platform),
    /// Operator changed the number of posts to parse.
    LimitChanged(u32),
    /// Operator asked to parse the influencer's posts.
    ParseClicked,
    /// Ingestion collaborator finished.
    ParseCompleted {
        result: Result<ParseOutcome, RemoteFailure>,
    },

    // ── Verify stage ──────────────────────────────────────────────────
    /// Scalar field edit on one candidate draft.
    DraftFieldEdited { index: usize, edit: ProductEdit },
    /// Link field edit on one candidate draft, addressed by stable key.
    DraftLinkEdited {
        index: usize,
        key: LinkKey,
        edit: LinkEdit,
    },
    /// Append an empty buy link to one candidate draft.
    DraftLinkAdded { index: usize },
    /// Remove one buy link from a candidate draft.
    DraftLinkRemoved { index: usize, key: LinkKey },
    /// Drop a whole candidate from the verify list.
    DraftRemoved { index: usize },
    /// Operator abandoned the verify session.
    VerifyCancelled,
    /// Operator asked to persist the verified drafts.
    SaveClicked,
    /// Bulk persistence collaborator finished.
    SaveCompleted {
        result: Result<SaveReceipt, RemoteFailure>,
    },

    // ── Catalog (manage view) ─────────────────────────────────────────
    /// Request a fresh catalog load.
    CatalogRefreshRequested,
    /// Catalog store responded with the full collection.
    CatalogLoaded {
        result: Result<Vec<Product>, RemoteFailure>,
    },
    /// Free-text search query changed (filters the held collection).
    QueryChanged(String),
    /// Submit a query to the catalog store's search endpoint.
    SearchSubmitted(String),
    /// Influencer facet changed.
    FacetSelected(FacetFilter),
    /// Begin a post-hoc edit of one committed product.
    EditRequested { id: String },
    /// Scalar field edit on the open edit session.
    EditFieldChanged(ProductEdit),
    /// Link field edit on the open edit session.
    EditLinkChanged { key: LinkKey, edit: LinkEdit },
    /// Append an empty buy link to the open edit session.
    EditLinkAdded,
    /// Remove one buy link from the open edit session.
    EditLinkRemoved { key: LinkKey },
    /// Abandon the open edit session.
    EditCancelled,
    /// Persist the open edit session.
    EditSubmitted,
    /// Single-product update collaborator finished.
    UpdateCompleted {
        result: Result<(), RemoteFailure>,
    },
    /// Ask the catalog store to delete one product.
    DeleteRequested { id: String },
    /// Delete collaborator finished.
    DeleteCompleted {
        id: String,
        result: Result<(), RemoteFailure>,
    },

    /// Fallback for placeholder wiring.
    NoOp,
}
