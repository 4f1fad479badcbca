use std::fmt;

use curator_core::{Platform, Product};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport-level failure surfaced by a collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The request could not be built (bad base URL, product without id).
    InvalidRequest,
    /// Non-2xx response; the message carries the backend's detail text.
    HttpStatus(u16),
    Timeout,
    /// A 2xx response whose body did not match the expected shape.
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedBody => write!(f, "malformed body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Request body for `POST /admin/parse-influencer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestRequest {
    pub handle: String,
    pub platform: Platform,
    pub limit: u32,
}

/// Response body of a successful ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngestResponse {
    pub influencer_name: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Request body for `POST /admin/save-products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveRequest {
    pub influencer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    pub platform: Platform,
    pub products: Vec<Product>,
}

/// Bulk-save acknowledgement; the backend may accept a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SaveResponse {
    pub saved_count: u32,
    pub total_count: u32,
}

/// Envelope of the catalog listing and search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub results: Vec<Product>,
}

/// Error body of the backend; `detail` is its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Completion events emitted by the engine back to the app loop, in
/// request completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ParseCompleted {
        result: Result<IngestResponse, ApiError>,
    },
    SaveCompleted {
        result: Result<SaveResponse, ApiError>,
    },
    CatalogLoaded {
        result: Result<Vec<Product>, ApiError>,
    },
    UpdateCompleted {
        result: Result<(), ApiError>,
    },
    DeleteCompleted {
        id: String,
        result: Result<(), ApiError>,
    },
}
