use crate::draft::Draft;
use crate::msg::Msg;
use crate::state::{
    AppState, StatusNote, VerifySession, WorkflowStage, MAX_PARSE_LIMIT, MIN_PARSE_LIMIT,
};
use crate::Effect;

/// Pure update function: applies a message to state and returns any effects.
///
/// This is the only place state transitions happen; the platform calls
/// it from a single logical thread, so no locking is needed anywhere in
/// the core. Completions arriving for a stage that has already moved on
/// are dropped; between same-stage completions, the last response wins.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        // ── Ingestion form ────────────────────────────────────────────
        Msg::HandleChanged(handle) => {
            state.form_mut().handle = handle;
            state.mark_dirty();
            Vec::new()
        }
        Msg::PlatformSelected(platform) => {
            state.form_mut().platform = platform;
            state.mark_dirty();
            Vec::new()
        }
        Msg::LimitChanged(limit) => {
            state.form_mut().limit = limit;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ParseClicked => {
            // Parse is only offered from Input; a live session blocks it.
            if !matches!(state.stage(), WorkflowStage::Input) {
                return (state, Vec::new());
            }
            let handle = state.form().handle.trim().to_string();
            let platform = state.form().platform;
            let limit = state.form().limit;
            if handle.is_empty() {
                state.set_status(StatusNote::error("Enter an influencer handle first."));
                state.mark_dirty();
                return (state, Vec::new());
            }
            if !(MIN_PARSE_LIMIT..=MAX_PARSE_LIMIT).contains(&limit) {
                state.set_status(StatusNote::error(format!(
                    "Post limit must be between {MIN_PARSE_LIMIT} and {MAX_PARSE_LIMIT}."
                )));
                state.mark_dirty();
                return (state, Vec::new());
            }
            state.set_parsing(true);
            state.mark_dirty();
            vec![Effect::ParseInfluencer {
                handle,
                platform,
                limit,
            }]
        }
        Msg::ParseCompleted { result } => {
            // A completion landing after the operator already moved on
            // (e.g. a retry resolved first) is stale; drop it.
            if !matches!(state.stage(), WorkflowStage::Input) {
                return (state, Vec::new());
            }
            state.set_parsing(false);
            match result {
                Ok(outcome) => {
                    let platform = state.form().platform;
                    let drafts: Vec<Draft> = outcome.products.iter().map(Draft::new).collect();
                    state.set_status(StatusNote::info(format!(
                        "Found {} products for {}.",
                        drafts.len(),
                        outcome.influencer_name
                    )));
                    state.set_stage(WorkflowStage::Verify(VerifySession {
                        influencer_name: outcome.influencer_name,
                        profile_pic: outcome.profile_pic,
                        platform,
                        drafts,
                    }));
                }
                Err(failure) => {
                    state.set_status(StatusNote::error(failure.message));
                }
            }
            state.mark_dirty();
            Vec::new()
        }

        // ── Verify stage ──────────────────────────────────────────────
        Msg::DraftFieldEdited { index, edit } => {
            if let Some(session) = state.verify_session_mut() {
                session.drafts[index].set_field(edit);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DraftLinkEdited { index, key, edit } => {
            if let Some(session) = state.verify_session_mut() {
                session.drafts[index].set_link_field(key, edit);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DraftLinkAdded { index } => {
            if let Some(session) = state.verify_session_mut() {
                session.drafts[index].add_link();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DraftLinkRemoved { index, key } => {
            if let Some(session) = state.verify_session_mut() {
                session.drafts[index].remove_link(key);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DraftRemoved { index } => {
            if let Some(session) = state.verify_session_mut() {
                session.drafts.remove(index);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::VerifyCancelled => {
            if matches!(state.stage(), WorkflowStage::Verify(_)) {
                state.set_stage(WorkflowStage::Input);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SaveClicked => {
            let session = match state.take_stage() {
                WorkflowStage::Verify(session) => session,
                other => {
                    state.set_stage(other);
                    return (state, Vec::new());
                }
            };
            if session.drafts.is_empty() {
                state.set_status(StatusNote::error("No products to save."));
                state.set_stage(WorkflowStage::Verify(session));
                state.mark_dirty();
                return (state, Vec::new());
            }
            let products = session.drafts.iter().map(Draft::commit).collect();
            let effect = Effect::SaveBatch {
                influencer_name: session.influencer_name.clone(),
                profile_pic: session.profile_pic.clone(),
                platform: session.platform,
                products,
            };
            state.set_stage(WorkflowStage::Saving(session));
            state.mark_dirty();
            vec![effect]
        }
        Msg::SaveCompleted { result } => {
            let session = match state.take_stage() {
                WorkflowStage::Saving(session) => session,
                other => {
                    // Stale completion; the session is no longer saving.
                    state.set_stage(other);
                    return (state, Vec::new());
                }
            };
            match result {
                Ok(receipt) => {
                    // TODO: confirm with the product owner whether a partial
                    // save (saved_count < total_count) should keep the
                    // unsaved drafts in Verify instead of clearing them.
                    state.set_status(StatusNote::info(format!(
                        "Saved {}/{} products.",
                        receipt.saved_count, receipt.total_count
                    )));
                    state.form_mut().handle.clear();
                    state.set_stage(WorkflowStage::Input);
                }
                Err(failure) => {
                    // Revert to Verify with the drafts intact; a failed
                    // save must never lose the operator's edits.
                    state.set_status(StatusNote::error(failure.message));
                    state.set_stage(WorkflowStage::Verify(session));
                }
            }
            state.mark_dirty();
            Vec::new()
        }

        // ── Catalog ───────────────────────────────────────────────────
        Msg::CatalogRefreshRequested => {
            state.catalog_mut().set_loading(true);
            state.mark_dirty();
            vec![Effect::LoadCatalog]
        }
        Msg::CatalogLoaded { result } => {
            match result {
                Ok(products) => state.catalog_mut().replace(products),
                Err(failure) => {
                    state.catalog_mut().set_loading(false);
                    state.set_status(StatusNote::error(format!(
                        "Failed to load products: {}",
                        failure.message
                    )));
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.catalog_mut().set_query(query);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted(query) => {
            let query = query.trim().to_string();
            if query.is_empty() {
                return (state, Vec::new());
            }
            // Server-side search; the response lands as a CatalogLoaded
            // and replaces the collection wholesale.
            state.catalog_mut().set_loading(true);
            state.mark_dirty();
            vec![Effect::SearchCatalog { query }]
        }
        Msg::FacetSelected(facet) => {
            state.catalog_mut().set_facet(facet);
            state.mark_dirty();
            Vec::new()
        }
        Msg::EditRequested { id } => {
            if state.catalog_mut().start_edit(&id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EditFieldChanged(edit) => {
            if let Some(session) = state.catalog_mut().editing_mut() {
                session.draft.set_field(edit);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EditLinkChanged { key, edit } => {
            if let Some(session) = state.catalog_mut().editing_mut() {
                session.draft.set_link_field(key, edit);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EditLinkAdded => {
            if let Some(session) = state.catalog_mut().editing_mut() {
                session.draft.add_link();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EditLinkRemoved { key } => {
            if let Some(session) = state.catalog_mut().editing_mut() {
                session.draft.remove_link(key);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EditCancelled => {
            if state.catalog().editing().is_some() {
                state.catalog_mut().cancel_edit();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EditSubmitted => match state.catalog().editing() {
            Some(session) => vec![Effect::UpdateProduct {
                product: session.draft.commit(),
            }],
            None => Vec::new(),
        },
        Msg::UpdateCompleted { result } => {
            if state.catalog().editing().is_none() {
                return (state, Vec::new());
            }
            match result {
                Ok(()) => {
                    // Reload rather than patching the local entry, so the
                    // displayed product matches server-accepted state.
                    state.catalog_mut().finish_edit();
                    state.set_status(StatusNote::info("Product updated."));
                    state.mark_dirty();
                    vec![Effect::LoadCatalog]
                }
                Err(failure) => {
                    state.set_status(StatusNote::error(format!(
                        "Failed to update product: {}",
                        failure.message
                    )));
                    state.mark_dirty();
                    Vec::new()
                }
            }
        }
        Msg::DeleteRequested { id } => {
            vec![Effect::DeleteProduct { id }]
        }
        Msg::DeleteCompleted { id, result } => match result {
            Ok(()) => {
                // Local removal keeps the view correct while the reload
                // is in flight; the reload is the source of truth.
                state.catalog_mut().remove_local(&id);
                state.set_status(StatusNote::info("Product deleted."));
                state.mark_dirty();
                vec![Effect::LoadCatalog]
            }
            Err(failure) => {
                state.set_status(StatusNote::error(format!(
                    "Failed to delete product: {}",
                    failure.message
                )));
                state.mark_dirty();
                Vec::new()
            }
        },

        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
