//! Curator engine: collaborator clients and effect execution.
mod api;
mod engine;
mod types;

pub use api::{ApiSettings, CatalogApi, HttpCatalogApi, CATALOG_PAGE_LIMIT};
pub use engine::EngineHandle;
pub use types::{
    ApiError, EngineEvent, ErrorBody, FailureKind, IngestRequest, IngestResponse, ListResponse,
    SaveRequest, SaveResponse,
};
