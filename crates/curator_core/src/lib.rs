//! Curator core: pure domain model, curation state machine and
//! view-model helpers.
mod catalog;
mod draft;
mod effect;
mod links;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use catalog::{filter, CatalogEdit, CatalogState, FacetEntry, FacetFilter};
pub use draft::{Draft, DraftLink, LinkEdit, LinkKey, ProductEdit};
pub use effect::Effect;
pub use links::{classify, partition_for_display, store_icon, LinkClass, FALLBACK_ICON};
pub use model::{BuyLink, Category, Platform, Product, DEFAULT_CURRENCY};
pub use msg::Msg;
pub use state::{
    AppState, IngestForm, ParseOutcome, RemoteFailure, SaveReceipt, StatusKind, StatusNote,
    VerifySession, WorkflowStage, MAX_PARSE_LIMIT, MIN_PARSE_LIMIT,
};
pub use update::update;
pub use view_model::{
    AppViewModel, CatalogViewModel, DraftRowView, EditViewModel, LinkRowView, ProductCardView,
    StageView,
};
