//! Render-ready projections of the app state. Everything here is
//! derived on demand; in particular link classification and icons are
//! recomputed from the current store names on every call, so edits
//! reclassify immediately.

use crate::catalog::{FacetEntry, FacetFilter};
use crate::draft::{Draft, LinkKey};
use crate::links::{self, LinkClass};
use crate::model::{BuyLink, Category, Platform, Product};
use crate::state::{AppState, StatusNote, WorkflowStage};

/// Which workflow screen the platform should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageView {
    Input,
    Verify,
    Saving,
}

/// One buy link as displayed. `key` is set for draft links (edit
/// targets) and absent on committed card rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRowView {
    pub key: Option<LinkKey>,
    pub store_name: String,
    pub url: String,
    pub class: LinkClass,
    /// Shop icon; mentions render as `@name` chips without one.
    pub icon: Option<&'static str>,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub in_stock: Option<bool>,
}

impl LinkRowView {
    fn from_link(key: Option<LinkKey>, link: &BuyLink) -> Self {
        let class = links::classify(link);
        let icon = match class {
            LinkClass::Shop => Some(links::store_icon(&link.store_name)),
            LinkClass::Mention => None,
        };
        Self {
            key,
            store_name: link.store_name.clone(),
            url: link.url.clone(),
            class,
            icon,
            price: link.price.clone(),
            currency: link.currency.clone(),
            in_stock: link.in_stock,
        }
    }
}

/// A committed product as shown on catalog cards: mention chips and
/// deduplicated shop rows are split out for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: Option<String>,
    pub product_name: String,
    pub brand: String,
    pub category: Category,
    pub quote: Option<String>,
    pub influencer_name: String,
    pub platform: Platform,
    pub platform_icon: &'static str,
    pub video_url: Option<String>,
    pub mentions: Vec<LinkRowView>,
    pub shops: Vec<LinkRowView>,
}

impl ProductCardView {
    pub fn from_product(product: &Product) -> Self {
        let (mention_idx, shop_idx) = links::partition_for_display(&product.buy_links);
        let mentions = mention_idx
            .into_iter()
            .map(|i| LinkRowView::from_link(None, &product.buy_links[i]))
            .collect();
        let shops = shop_idx
            .into_iter()
            .map(|i| LinkRowView::from_link(None, &product.buy_links[i]))
            .collect();
        Self {
            id: product.id.clone(),
            product_name: product.product_name.clone(),
            brand: product.brand.clone(),
            category: product.category,
            quote: product.quote.clone(),
            influencer_name: product.influencer_name.clone(),
            platform: product.platform,
            platform_icon: product.platform.icon(),
            video_url: product.video_url.clone(),
            mentions,
            shops,
        }
    }
}

/// One draft in an editing list (verify stage or post-hoc edit). Links
/// keep their stable keys so edits can address them across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRowView {
    pub index: usize,
    pub product_name: String,
    pub brand: String,
    pub category: Category,
    pub quote: Option<String>,
    pub links: Vec<LinkRowView>,
}

impl DraftRowView {
    pub fn from_draft(index: usize, draft: &Draft) -> Self {
        let fields = draft.fields();
        Self {
            index,
            product_name: fields.product_name.clone(),
            brand: fields.brand.clone(),
            category: fields.category,
            quote: fields.quote.clone(),
            links: draft
                .links()
                .iter()
                .map(|entry| LinkRowView::from_link(Some(entry.key), &entry.link))
                .collect(),
        }
    }
}

/// Post-hoc edit session projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditViewModel {
    pub id: String,
    pub row: DraftRowView,
}

/// Catalog screen projection: the filtered collection plus facet data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewModel {
    pub loading: bool,
    pub query: String,
    pub facet: FacetFilter,
    pub total: usize,
    pub visible: Vec<ProductCardView>,
    pub facets: Vec<FacetEntry>,
    pub editing: Option<EditViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub stage: StageView,
    pub handle: String,
    pub platform: Platform,
    pub limit: u32,
    pub parsing: bool,
    /// Influencer of the live verify/saving session.
    pub influencer_name: Option<String>,
    pub drafts: Vec<DraftRowView>,
    pub catalog: CatalogViewModel,
    pub status: Option<StatusNote>,
}

impl AppState {
    /// Derives the full view model for rendering.
    pub fn view(&self) -> AppViewModel {
        let (stage, influencer_name, drafts) = match self.stage() {
            WorkflowStage::Input => (StageView::Input, None, Vec::new()),
            WorkflowStage::Verify(session) => (
                StageView::Verify,
                Some(session.influencer_name.clone()),
                draft_rows(&session.drafts),
            ),
            WorkflowStage::Saving(session) => (
                StageView::Saving,
                Some(session.influencer_name.clone()),
                draft_rows(&session.drafts),
            ),
        };

        let catalog = self.catalog();
        let catalog_view = CatalogViewModel {
            loading: catalog.is_loading(),
            query: catalog.query().to_string(),
            facet: catalog.facet().clone(),
            total: catalog.products().len(),
            visible: catalog
                .visible()
                .into_iter()
                .map(ProductCardView::from_product)
                .collect(),
            facets: catalog.facet_entries(),
            editing: catalog.editing().map(|session| EditViewModel {
                id: session.id.clone(),
                row: DraftRowView::from_draft(0, &session.draft),
            }),
        };

        AppViewModel {
            stage,
            handle: self.form().handle.clone(),
            platform: self.form().platform,
            limit: self.form().limit,
            parsing: self.is_parsing(),
            influencer_name,
            drafts,
            catalog: catalog_view,
            status: self.status().cloned(),
        }
    }
}

fn draft_rows(drafts: &[Draft]) -> Vec<DraftRowView> {
    drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| DraftRowView::from_draft(index, draft))
        .collect()
}
