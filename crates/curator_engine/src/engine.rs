use std::sync::{mpsc, Arc};
use std::thread;

use curator_core::Product;
use curator_logging::curator_warn;

use crate::api::{ApiSettings, CatalogApi, HttpCatalogApi, CATALOG_PAGE_LIMIT};
use crate::types::{ApiError, EngineEvent, IngestRequest, SaveRequest};

enum EngineCommand {
    Parse(IngestRequest),
    SaveBatch(SaveRequest),
    LoadCatalog,
    Search { query: String },
    Update(Product),
    Delete { id: String },
}

/// Bridges the synchronous app loop to the async collaborator clients.
///
/// Commands go into a dedicated thread hosting a tokio runtime; each
/// command runs as an independent task and its completion comes back on
/// the event channel. Nothing is deduplicated or cancelled, so events
/// arrive in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the engine over an HTTP client for `settings`. Fails if
    /// the configured base URL is invalid.
    pub fn new(settings: ApiSettings) -> Result<(Self, mpsc::Receiver<EngineEvent>), ApiError> {
        let api = HttpCatalogApi::new(settings)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    /// Spawns the engine over any collaborator implementation; tests
    /// inject fakes here.
    pub fn with_api(api: Arc<dyn CatalogApi>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn parse(&self, request: IngestRequest) {
        self.submit(EngineCommand::Parse(request));
    }

    pub fn save_batch(&self, request: SaveRequest) {
        self.submit(EngineCommand::SaveBatch(request));
    }

    pub fn load_catalog(&self) {
        self.submit(EngineCommand::LoadCatalog);
    }

    pub fn search(&self, query: impl Into<String>) {
        self.submit(EngineCommand::Search {
            query: query.into(),
        });
    }

    pub fn update(&self, product: Product) {
        self.submit(EngineCommand::Update(product));
    }

    pub fn delete(&self, id: impl Into<String>) {
        self.submit(EngineCommand::Delete { id: id.into() });
    }

    fn submit(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(api: &dyn CatalogApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Parse(request) => {
            let result = api.parse_influencer(&request).await;
            if let Err(err) = &result {
                curator_warn!("parse_influencer failed: {err}");
            }
            EngineEvent::ParseCompleted { result }
        }
        EngineCommand::SaveBatch(request) => {
            let result = api.save_products(&request).await;
            if let Err(err) = &result {
                curator_warn!("save_products failed: {err}");
            }
            EngineEvent::SaveCompleted { result }
        }
        EngineCommand::LoadCatalog => {
            let result = api.list_products(CATALOG_PAGE_LIMIT).await;
            if let Err(err) = &result {
                curator_warn!("list_products failed: {err}");
            }
            EngineEvent::CatalogLoaded { result }
        }
        EngineCommand::Search { query } => {
            let result = api.search(&query).await;
            if let Err(err) = &result {
                curator_warn!("search failed: {err}");
            }
            EngineEvent::CatalogLoaded { result }
        }
        EngineCommand::Update(product) => {
            let result = api.update_product(&product).await;
            if let Err(err) = &result {
                curator_warn!("update_product failed: {err}");
            }
            EngineEvent::UpdateCompleted { result }
        }
        EngineCommand::Delete { id } => {
            let result = api.delete_product(&id).await;
            if let Err(err) = &result {
                curator_warn!("delete_product failed: {err}");
            }
            EngineEvent::DeleteCompleted { id, result }
        }
    }
}
