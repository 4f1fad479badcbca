use std::sync::Arc;
use std::time::Duration;

use curator_core::{Platform, Product};
use curator_engine::{
    ApiError, CatalogApi, EngineEvent, EngineHandle, FailureKind, IngestRequest, IngestResponse,
    SaveRequest, SaveResponse,
};

/// Canned collaborator: answers every call from fixed data, no network.
struct FakeApi {
    products: Vec<Product>,
    fail_deletes: bool,
}

#[async_trait::async_trait]
impl CatalogApi for FakeApi {
    async fn parse_influencer(
        &self,
        request: &IngestRequest,
    ) -> Result<IngestResponse, ApiError> {
        Ok(IngestResponse {
            influencer_name: request.handle.clone(),
            profile_pic: None,
            products: self.products.clone(),
        })
    }

    async fn save_products(&self, request: &SaveRequest) -> Result<SaveResponse, ApiError> {
        let total = request.products.len() as u32;
        Ok(SaveResponse {
            saved_count: total,
            total_count: total,
        })
    }

    async fn update_product(&self, _product: &Product) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_product(&self, _id: &str) -> Result<(), ApiError> {
        if self.fail_deletes {
            Err(ApiError {
                kind: FailureKind::HttpStatus(500),
                message: "delete failed".to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn list_products(&self, _limit: u32) -> Result<Vec<Product>, ApiError> {
        Ok(self.products.clone())
    }

    async fn search(&self, _query: &str) -> Result<Vec<Product>, ApiError> {
        Ok(Vec::new())
    }
}

fn recv(events: &std::sync::mpsc::Receiver<EngineEvent>) -> EngineEvent {
    events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn parse_command_completes_with_the_ingested_products() {
    let (engine, events) = EngineHandle::with_api(Arc::new(FakeApi {
        products: Vec::new(),
        fail_deletes: false,
    }));

    engine.parse(IngestRequest {
        handle: "sarahhany".to_string(),
        platform: Platform::Instagram,
        limit: 10,
    });

    match recv(&events) {
        EngineEvent::ParseCompleted { result } => {
            let response = result.expect("parse ok");
            assert_eq!(response.influencer_name, "sarahhany");
        }
        other => panic!("expected ParseCompleted, got {other:?}"),
    }
}

#[test]
fn delete_completions_carry_the_product_id() {
    let (engine, events) = EngineHandle::with_api(Arc::new(FakeApi {
        products: Vec::new(),
        fail_deletes: true,
    }));

    engine.delete("p1");

    match recv(&events) {
        EngineEvent::DeleteCompleted { id, result } => {
            assert_eq!(id, "p1");
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));
        }
        other => panic!("expected DeleteCompleted, got {other:?}"),
    }
}

#[test]
fn commands_complete_independently() {
    let (engine, events) = EngineHandle::with_api(Arc::new(FakeApi {
        products: Vec::new(),
        fail_deletes: false,
    }));

    engine.load_catalog();
    engine.save_batch(SaveRequest {
        influencer_name: "Sarah Hany".to_string(),
        profile_pic: None,
        platform: Platform::Instagram,
        products: Vec::new(),
    });

    // Both completions arrive; order is completion order, which for the
    // fake is submission order but is not contractual.
    let mut seen_load = false;
    let mut seen_save = false;
    for _ in 0..2 {
        match recv(&events) {
            EngineEvent::CatalogLoaded { result } => {
                assert!(result.is_ok());
                seen_load = true;
            }
            EngineEvent::SaveCompleted { result } => {
                assert!(result.is_ok());
                seen_save = true;
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert!(seen_load && seen_save);
}
