use std::time::Duration;

use curator_core::Product;
use curator_logging::curator_debug;

use crate::types::{
    ApiError, ErrorBody, FailureKind, IngestRequest, IngestResponse, ListResponse, SaveRequest,
    SaveResponse,
};

/// Maximum page size requested from the catalog listing endpoint.
pub const CATALOG_PAGE_LIMIT: u32 = 1000;

/// Connection settings for the backend, injected at construction.
/// Nothing below this layer reads ambient configuration.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The collaborator surface the curation core depends on: ingestion,
/// persistence and catalog reads. Implemented over HTTP in production
/// and by fakes in tests.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    async fn parse_influencer(&self, request: &IngestRequest)
        -> Result<IngestResponse, ApiError>;
    async fn save_products(&self, request: &SaveRequest) -> Result<SaveResponse, ApiError>;
    async fn update_product(&self, product: &Product) -> Result<(), ApiError>;
    async fn delete_product(&self, id: &str) -> Result<(), ApiError>;
    async fn list_products(&self, limit: u32) -> Result<Vec<Product>, ApiError>;
    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        // Validate the base URL up front so a bad configuration fails at
        // construction, not on the first call.
        reqwest::Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidRequest, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn parse_influencer(
        &self,
        request: &IngestRequest,
    ) -> Result<IngestResponse, ApiError> {
        curator_debug!(
            "parse_influencer handle={} platform={} limit={}",
            request.handle,
            request.platform,
            request.limit
        );
        let response = self
            .client
            .post(self.endpoint("/admin/parse-influencer"))
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(expect_ok(response).await?).await
    }

    async fn save_products(&self, request: &SaveRequest) -> Result<SaveResponse, ApiError> {
        curator_debug!(
            "save_products influencer={} count={}",
            request.influencer_name,
            request.products.len()
        );
        let response = self
            .client
            .post(self.endpoint("/admin/save-products"))
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(expect_ok(response).await?).await
    }

    async fn update_product(&self, product: &Product) -> Result<(), ApiError> {
        let id = product.id.as_deref().ok_or_else(|| {
            ApiError::new(FailureKind::InvalidRequest, "product has no id")
        })?;
        let response = self
            .client
            .put(self.endpoint(&format!("/admin/update-product/{id}")))
            .json(product)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_ok(response).await.map(|_| ())
    }

    async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/admin/delete-product/{id}")))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_ok(response).await.map(|_| ())
    }

    async fn list_products(&self, limit: u32) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/products"))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let list: ListResponse = decode_json(expect_ok(response).await?).await?;
        Ok(list.results)
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/search"))
            .query(&[("q", query)])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let list: ListResponse = decode_json(expect_ok(response).await?).await?;
        Ok(list.results)
    }
}

/// Turns a non-2xx response into an `ApiError` carrying the backend's
/// `detail` message when one is present.
async fn expect_ok(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| status.to_string());
    Err(ApiError::new(FailureKind::HttpStatus(status.as_u16()), detail))
}

async fn decode_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::new(FailureKind::MalformedBody, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
