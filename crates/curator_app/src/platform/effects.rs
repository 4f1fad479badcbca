use std::sync::mpsc;
use std::thread;

use curator_core::{Effect, Msg, ParseOutcome, RemoteFailure, SaveReceipt};
use curator_engine::{
    ApiError, ApiSettings, EngineEvent, EngineHandle, IngestRequest, SaveRequest,
};
use curator_logging::curator_info;

/// Executes core effects against the engine and feeds completions back
/// into the message loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let (engine, event_rx) = EngineHandle::new(settings)?;
        spawn_event_loop(event_rx, msg_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ParseInfluencer {
                    handle,
                    platform,
                    limit,
                } => {
                    curator_info!("ParseInfluencer handle={handle} platform={platform} limit={limit}");
                    self.engine.parse(IngestRequest {
                        handle,
                        platform,
                        limit,
                    });
                }
                Effect::SaveBatch {
                    influencer_name,
                    profile_pic,
                    platform,
                    products,
                } => {
                    curator_info!(
                        "SaveBatch influencer={influencer_name} count={}",
                        products.len()
                    );
                    self.engine.save_batch(SaveRequest {
                        influencer_name,
                        profile_pic,
                        platform,
                        products,
                    });
                }
                Effect::LoadCatalog => {
                    self.engine.load_catalog();
                }
                Effect::SearchCatalog { query } => {
                    self.engine.search(query);
                }
                Effect::UpdateProduct { product } => {
                    self.engine.update(product);
                }
                Effect::DeleteProduct { id } => {
                    self.engine.delete(id);
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = map_event(event);
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ParseCompleted { result } => Msg::ParseCompleted {
            result: result
                .map(|response| ParseOutcome {
                    influencer_name: response.influencer_name,
                    profile_pic: response.profile_pic,
                    products: response.products,
                })
                .map_err(map_failure),
        },
        EngineEvent::SaveCompleted { result } => Msg::SaveCompleted {
            result: result
                .map(|receipt| SaveReceipt {
                    saved_count: receipt.saved_count,
                    total_count: receipt.total_count,
                })
                .map_err(map_failure),
        },
        EngineEvent::CatalogLoaded { result } => Msg::CatalogLoaded {
            result: result.map_err(map_failure),
        },
        EngineEvent::UpdateCompleted { result } => Msg::UpdateCompleted {
            result: result.map_err(map_failure),
        },
        EngineEvent::DeleteCompleted { id, result } => Msg::DeleteCompleted {
            id,
            result: result.map_err(map_failure),
        },
    }
}

/// Reduces a transport error to the operator-facing message; the kind
/// detail has already been logged by the engine.
fn map_failure(err: ApiError) -> RemoteFailure {
    RemoteFailure::new(err.message)
}
