//! Line-oriented command parsing for the terminal front-end.
//!
//! The browser UI's buttons and inputs map onto short commands. Parsing
//! is context-sensitive: `set`/`link`/`addlink`/`rmlink` address the
//! open catalog edit session when there is one, otherwise the verify
//! list by product index. Link arguments use the stable key numbers
//! printed next to each link row.

use curator_core::{
    AppViewModel, Category, FacetFilter, LinkEdit, LinkKey, Msg, Platform, ProductEdit, StageView,
};

/// What the app loop should do with one input line.
pub enum Directive {
    Dispatch(Msg),
    Help,
    Quit,
    Noop,
}

pub const HELP: &str = "\
commands:
  input stage:   handle <text> | platform <instagram|tiktok> | limit <n> | parse
  verify stage:  set <i> <name|brand|category|quote> <value>
                 link <i> <key> <store|url|price> <value>
                 addlink <i> | rmlink <i> <key> | drop <i> | save | back
  catalog:       load | search [text] | find <text> | facet <all|name>
                 edit <id> | delete <id>
  while editing: set <field> <value> | link <key> <field> <value>
                 addlink | rmlink <key> | commit | cancel
  general:       help | quit";

pub fn parse(line: &str, view: &AppViewModel) -> Result<Directive, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = tokens.split_first() else {
        return Ok(Directive::Noop);
    };

    let msg = match verb {
        "help" => return Ok(Directive::Help),
        "quit" | "exit" => return Ok(Directive::Quit),

        // ── Ingestion form ────────────────────────────────────────────
        "handle" => Msg::HandleChanged(join(args)),
        "platform" => Msg::PlatformSelected(parse_platform(args)?),
        "limit" => Msg::LimitChanged(parse_number(args.first().copied())?),
        "parse" => Msg::ParseClicked,

        // ── Verify / edit session ─────────────────────────────────────
        "set" => parse_set(args, view)?,
        "link" => parse_link(args, view)?,
        "addlink" => {
            if view.catalog.editing.is_some() {
                Msg::EditLinkAdded
            } else {
                Msg::DraftLinkAdded {
                    index: parse_draft_index(args.first().copied(), view)?,
                }
            }
        }
        "rmlink" => parse_rmlink(args, view)?,
        "drop" => Msg::DraftRemoved {
            index: parse_draft_index(args.first().copied(), view)?,
        },
        "save" => Msg::SaveClicked,
        "back" => Msg::VerifyCancelled,

        // ── Catalog ───────────────────────────────────────────────────
        "load" => Msg::CatalogRefreshRequested,
        "search" => Msg::QueryChanged(join(args)),
        "find" => Msg::SearchSubmitted(join(args)),
        "facet" => {
            let value = join(args);
            if value == "all" || value.is_empty() {
                Msg::FacetSelected(FacetFilter::All)
            } else {
                Msg::FacetSelected(FacetFilter::Influencer(value))
            }
        }
        "edit" => Msg::EditRequested {
            id: required(args.first().copied(), "edit needs a product id")?.to_string(),
        },
        "delete" => Msg::DeleteRequested {
            id: required(args.first().copied(), "delete needs a product id")?.to_string(),
        },
        "commit" => Msg::EditSubmitted,
        "cancel" => Msg::EditCancelled,

        other => return Err(format!("unknown command: {other} (try `help`)")),
    };

    Ok(Directive::Dispatch(msg))
}

fn parse_set(args: &[&str], view: &AppViewModel) -> Result<Msg, String> {
    if view.catalog.editing.is_some() {
        let field = required(args.first().copied(), "set needs a field")?;
        let edit = product_edit(field, &join(&args[1..]))?;
        Ok(Msg::EditFieldChanged(edit))
    } else {
        let index = parse_draft_index(args.first().copied(), view)?;
        let field = required(args.get(1).copied(), "set needs a field")?;
        let edit = product_edit(field, &join(&args[2..]))?;
        Ok(Msg::DraftFieldEdited { index, edit })
    }
}

fn parse_link(args: &[&str], view: &AppViewModel) -> Result<Msg, String> {
    if view.catalog.editing.is_some() {
        let key = resolve_edit_key(args.first().copied(), view)?;
        let field = required(args.get(1).copied(), "link needs a field")?;
        let edit = link_edit(field, &join(&args[2..]))?;
        Ok(Msg::EditLinkChanged { key, edit })
    } else {
        let index = parse_draft_index(args.first().copied(), view)?;
        let key = resolve_draft_key(args.get(1).copied(), view, index)?;
        let field = required(args.get(2).copied(), "link needs a field")?;
        let edit = link_edit(field, &join(&args[3..]))?;
        Ok(Msg::DraftLinkEdited { index, key, edit })
    }
}

fn parse_rmlink(args: &[&str], view: &AppViewModel) -> Result<Msg, String> {
    if view.catalog.editing.is_some() {
        let key = resolve_edit_key(args.first().copied(), view)?;
        Ok(Msg::EditLinkRemoved { key })
    } else {
        let index = parse_draft_index(args.first().copied(), view)?;
        let key = resolve_draft_key(args.get(1).copied(), view, index)?;
        Ok(Msg::DraftLinkRemoved { index, key })
    }
}

fn product_edit(field: &str, value: &str) -> Result<ProductEdit, String> {
    match field {
        "name" => Ok(ProductEdit::Name(value.to_string())),
        "brand" => Ok(ProductEdit::Brand(value.to_string())),
        // Unknown category names become Other; the editor itself never
        // validates membership.
        "category" => Ok(ProductEdit::Category(Category::parse_lossy(value))),
        "quote" => Ok(ProductEdit::Quote(value.to_string())),
        other => Err(format!("unknown product field: {other}")),
    }
}

fn link_edit(field: &str, value: &str) -> Result<LinkEdit, String> {
    match field {
        "store" => Ok(LinkEdit::StoreName(value.to_string())),
        "url" => Ok(LinkEdit::Url(value.to_string())),
        "price" => Ok(LinkEdit::Price(if value.is_empty() || value == "-" {
            None
        } else {
            Some(value.to_string())
        })),
        other => Err(format!("unknown link field: {other}")),
    }
}

fn parse_platform(args: &[&str]) -> Result<Platform, String> {
    match args.first().copied() {
        Some("instagram") => Ok(Platform::Instagram),
        Some("tiktok") => Ok(Platform::Tiktok),
        other => Err(format!("platform must be instagram or tiktok, got {other:?}")),
    }
}

fn parse_draft_index(arg: Option<&str>, view: &AppViewModel) -> Result<usize, String> {
    if view.stage != StageView::Verify {
        return Err("no verify session is open".to_string());
    }
    let index = parse_number(arg)? as usize;
    if index >= view.drafts.len() {
        return Err(format!(
            "product index {index} out of range (have {})",
            view.drafts.len()
        ));
    }
    Ok(index)
}

/// Resolves a typed key number against the draft's current link rows.
/// A typo here is a user error reported back, never a panic.
fn resolve_draft_key(
    arg: Option<&str>,
    view: &AppViewModel,
    index: usize,
) -> Result<LinkKey, String> {
    let wanted = parse_number(arg)? as u64;
    view.drafts[index]
        .links
        .iter()
        .filter_map(|row| row.key)
        .find(|key| key.value() == wanted)
        .ok_or_else(|| format!("unknown link key {wanted}"))
}

fn resolve_edit_key(arg: Option<&str>, view: &AppViewModel) -> Result<LinkKey, String> {
    let wanted = parse_number(arg)? as u64;
    let editing = view
        .catalog
        .editing
        .as_ref()
        .ok_or_else(|| "no edit session is open".to_string())?;
    editing
        .row
        .links
        .iter()
        .filter_map(|row| row.key)
        .find(|key| key.value() == wanted)
        .ok_or_else(|| format!("unknown link key {wanted}"))
}

fn parse_number(arg: Option<&str>) -> Result<u32, String> {
    let text = required(arg, "expected a number")?;
    text.parse::<u32>()
        .map_err(|_| format!("not a number: {text}"))
}

fn required<'a>(arg: Option<&'a str>, message: &str) -> Result<&'a str, String> {
    arg.ok_or_else(|| message.to_string())
}

fn join(args: &[&str]) -> String {
    args.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::{update, AppState, BuyLink, ParseOutcome, Product};

    fn verify_view() -> AppViewModel {
        let state = AppState::new();
        let (state, _) = update(state, Msg::HandleChanged("sarahhany".to_string()));
        let (state, _) = update(state, Msg::ParseClicked);
        let (state, _) = update(
            state,
            Msg::ParseCompleted {
                result: Ok(ParseOutcome {
                    influencer_name: "Sarah Hany".to_string(),
                    profile_pic: None,
                    products: vec![Product {
                        id: None,
                        influencer_name: "Sarah Hany".to_string(),
                        influencer_profile_pic: None,
                        product_name: "Flawless Filter".to_string(),
                        brand: "Charlotte Tilbury".to_string(),
                        category: Category::Makeup,
                        quote: None,
                        video_url: None,
                        platform: Platform::Instagram,
                        buy_links: vec![BuyLink {
                            store_name: "Amazon Egypt".to_string(),
                            ..BuyLink::default()
                        }],
                    }],
                }),
            },
        );
        state.view()
    }

    fn dispatched(line: &str, view: &AppViewModel) -> Msg {
        match parse(line, view) {
            Ok(Directive::Dispatch(msg)) => msg,
            other => panic!("expected a dispatch for {line:?}, got {:?}", discriminant(&other)),
        }
    }

    fn discriminant(result: &Result<Directive, String>) -> &'static str {
        match result {
            Ok(Directive::Dispatch(_)) => "dispatch",
            Ok(Directive::Help) => "help",
            Ok(Directive::Quit) => "quit",
            Ok(Directive::Noop) => "noop",
            Err(_) => "error",
        }
    }

    #[test]
    fn multi_word_values_are_joined() {
        let view = AppState::new().view();
        assert_eq!(
            dispatched("handle sarah hany official", &view),
            Msg::HandleChanged("sarah hany official".to_string())
        );
    }

    #[test]
    fn set_addresses_the_verify_list_by_index() {
        let view = verify_view();
        assert_eq!(
            dispatched("set 0 brand Dior", &view),
            Msg::DraftFieldEdited {
                index: 0,
                edit: ProductEdit::Brand("Dior".to_string()),
            }
        );
    }

    #[test]
    fn link_commands_resolve_printed_key_numbers() {
        let view = verify_view();
        let key = view.drafts[0].links[0].key.unwrap();
        assert_eq!(
            dispatched(&format!("link 0 {} url https://x", key.value()), &view),
            Msg::DraftLinkEdited {
                index: 0,
                key,
                edit: LinkEdit::Url("https://x".to_string()),
            }
        );
    }

    #[test]
    fn stale_key_numbers_are_user_errors_not_panics() {
        let view = verify_view();
        assert!(parse("link 0 99 url https://x", &view).is_err());
        assert!(parse("set 5 brand Dior", &view).is_err());
    }

    #[test]
    fn unknown_category_names_fall_back_to_other() {
        let view = verify_view();
        assert_eq!(
            dispatched("set 0 category beauty", &view),
            Msg::DraftFieldEdited {
                index: 0,
                edit: ProductEdit::Category(Category::Other),
            }
        );
    }

    #[test]
    fn verify_commands_require_a_session() {
        let view = AppState::new().view();
        assert!(parse("set 0 brand Dior", &view).is_err());
        assert!(parse("addlink 0", &view).is_err());
    }
}
