//! Plain-text rendering of the view model, the terminal stand-in for
//! the browser pages.

use std::fmt::Write;

use curator_core::{
    AppViewModel, CatalogViewModel, DraftRowView, FacetFilter, LinkClass, LinkRowView, StageView,
    StatusKind,
};

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    if let Some(status) = &view.status {
        let marker = match status.kind {
            StatusKind::Info => "✓",
            StatusKind::Error => "!",
        };
        let _ = writeln!(out, "[{marker}] {}", status.text);
    }

    match view.stage {
        StageView::Input => {
            let spinner = if view.parsing { "  ⏳ parsing…" } else { "" };
            let _ = writeln!(
                out,
                "── add influencer ── handle: {:?}  platform: {}  limit: {}{spinner}",
                view.handle, view.platform, view.limit
            );
        }
        StageView::Verify => {
            let _ = writeln!(
                out,
                "── verify {} products — {} ──",
                view.drafts.len(),
                view.influencer_name.as_deref().unwrap_or("?")
            );
            for draft in &view.drafts {
                render_draft(&mut out, draft);
            }
        }
        StageView::Saving => {
            let _ = writeln!(out, "── saving products… ──");
        }
    }

    render_catalog(&mut out, &view.catalog);
    out
}

fn render_draft(out: &mut String, draft: &DraftRowView) {
    let _ = writeln!(
        out,
        "  [{}] {} — {} ({})",
        draft.index, draft.product_name, draft.brand, draft.category
    );
    if let Some(quote) = &draft.quote {
        let _ = writeln!(out, "      “{quote}”");
    }
    for link in &draft.links {
        render_link(out, link);
    }
}

fn render_link(out: &mut String, link: &LinkRowView) {
    let key = link
        .key
        .map(|k| format!("#{}", k.value()))
        .unwrap_or_default();
    match link.class {
        LinkClass::Mention => {
            let _ = writeln!(out, "      {key} {} (mention)", link.store_name);
        }
        LinkClass::Shop => {
            let icon = link.icon.unwrap_or_default();
            let price = match (&link.price, &link.currency) {
                (Some(price), Some(currency)) => format!("  {price} {currency}"),
                (Some(price), None) => format!("  {price}"),
                _ => String::new(),
            };
            let stock = match link.in_stock {
                Some(false) => "  (out of stock)",
                _ => "",
            };
            let _ = writeln!(
                out,
                "      {key} {icon} {} → {}{price}{stock}",
                link.store_name, link.url
            );
        }
    }
}

fn render_catalog(out: &mut String, catalog: &CatalogViewModel) {
    if catalog.loading {
        let _ = writeln!(out, "── catalog: loading… ──");
        return;
    }
    if catalog.total == 0 {
        return;
    }

    let facet = match &catalog.facet {
        FacetFilter::All => "all".to_string(),
        FacetFilter::Influencer(name) => name.clone(),
    };
    let _ = writeln!(
        out,
        "── catalog: {} of {} shown  query: {:?}  facet: {facet} ──",
        catalog.visible.len(),
        catalog.total,
        catalog.query
    );

    let facets = catalog
        .facets
        .iter()
        .map(|f| format!("{} ({})", f.influencer_name, f.count))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "  influencers: {facets}");

    for product in &catalog.visible {
        let id = product.id.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "  [{id}] {} — {} ({}, {} by {})",
            product.product_name,
            product.brand,
            product.category,
            product.platform_icon,
            product.influencer_name
        );
        for link in product.mentions.iter().chain(&product.shops) {
            render_link(out, link);
        }
    }

    if let Some(editing) = &catalog.editing {
        let _ = writeln!(out, "── editing {} ──", editing.id);
        render_draft(out, &editing.row);
    }
}
