use crate::catalog::CatalogState;
use crate::draft::Draft;
use crate::model::{Platform, Product};

/// Parse limit bounds accepted by the ingestion collaborator.
pub const MIN_PARSE_LIMIT: u32 = 1;
pub const MAX_PARSE_LIMIT: u32 = 50;

const DEFAULT_PARSE_LIMIT: u32 = 10;

/// Failure reported by an external collaborator, reduced to the
/// human-readable message the operator sees. The transport detail stays
/// in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    pub message: String,
}

impl RemoteFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful ingestion result carried into the Verify stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub influencer_name: String,
    pub profile_pic: Option<String>,
    pub products: Vec<Product>,
}

/// Bulk-save acknowledgement; the backend may accept a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReceipt {
    pub saved_count: u32,
    pub total_count: u32,
}

/// Ingestion form values; they persist across workflow rounds so the
/// operator keeps their platform/limit defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestForm {
    pub handle: String,
    pub platform: Platform,
    pub limit: u32,
}

impl Default for IngestForm {
    fn default() -> Self {
        Self {
            handle: String::new(),
            platform: Platform::Instagram,
            limit: DEFAULT_PARSE_LIMIT,
        }
    }
}

/// Everything the Verify stage owns: influencer metadata from ingestion
/// plus one draft per candidate product. The whole session moves into
/// `Saving` on save and moves back intact if the save fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifySession {
    pub influencer_name: String,
    pub profile_pic: Option<String>,
    pub platform: Platform,
    pub drafts: Vec<Draft>,
}

/// Curation workflow stage. Exactly one session is live at a time;
/// `parse` is only offered from `Input`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowStage {
    #[default]
    Input,
    Verify(VerifySession),
    Saving(VerifySession),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line status surfaced to the operator (save counts, failures).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNote {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusNote {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: IngestForm,
    stage: WorkflowStage,
    parsing: bool,
    catalog: CatalogState,
    status: Option<StatusNote>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &IngestForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut IngestForm {
        &mut self.form
    }

    pub fn stage(&self) -> &WorkflowStage {
        &self.stage
    }

    pub fn set_stage(&mut self, stage: WorkflowStage) {
        self.stage = stage;
    }

    /// Takes the stage out, leaving `Input`. Used by transitions that
    /// move the session between stages without cloning the drafts.
    pub fn take_stage(&mut self) -> WorkflowStage {
        std::mem::take(&mut self.stage)
    }

    /// True while an ingestion request is in flight.
    pub fn is_parsing(&self) -> bool {
        self.parsing
    }

    pub fn set_parsing(&mut self, parsing: bool) {
        self.parsing = parsing;
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogState {
        &mut self.catalog
    }

    pub fn status(&self) -> Option<&StatusNote> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: StatusNote) {
        self.status = Some(status);
    }

    /// Mutable access to the Verify session; None in any other stage,
    /// which is how edit messages arriving out of stage get ignored.
    pub fn verify_session_mut(&mut self) -> Option<&mut VerifySession> {
        match &mut self.stage {
            WorkflowStage::Verify(session) => Some(session),
            _ => None,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns and clears the dirty flag; the platform renders only
    /// when this yields true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
