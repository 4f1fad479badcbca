//! Draft editor: an exclusively-owned working copy of a product.
//!
//! A `Draft` is created from a committed `Product` by deep copy and is
//! only ever reachable through one owner, so editing it cannot alias or
//! mutate the original. Dropping a draft is a discard; there is no
//! rollback log because the source was never touched.

use crate::model::{BuyLink, Category, Product};

/// Stable, draft-local identity for one buy link.
///
/// Keys are handed out when the draft is created and by [`Draft::add_link`];
/// they survive removals of other links, unlike positional indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkKey(u64);

impl LinkKey {
    /// Raw key value, for display in link rows.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// One keyed link inside a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLink {
    pub key: LinkKey,
    pub link: BuyLink,
}

/// Edit to one scalar product field. The editor applies these without
/// domain validation; completeness is the persistence layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductEdit {
    Name(String),
    Brand(String),
    Category(Category),
    Quote(String),
}

/// Edit to one field of a keyed link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEdit {
    StoreName(String),
    Url(String),
    Price(Option<String>),
    Currency(Option<String>),
    InStock(Option<bool>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    // Scalar fields live here; `fields.buy_links` stays empty and the
    // keyed `links` vector is authoritative until commit.
    fields: Product,
    links: Vec<DraftLink>,
    next_key: u64,
}

impl Draft {
    /// Deep-clones `source`, including an independent clone of every
    /// buy link, and assigns each link a stable key.
    pub fn new(source: &Product) -> Self {
        let mut fields = source.clone();
        let raw_links = std::mem::take(&mut fields.buy_links);

        let mut next_key = 0;
        let links = raw_links
            .into_iter()
            .map(|link| {
                let key = LinkKey(next_key);
                next_key += 1;
                DraftLink { key, link }
            })
            .collect();

        Self {
            fields,
            links,
            next_key,
        }
    }

    /// Scalar fields of the working copy (buy links excluded).
    pub fn fields(&self) -> &Product {
        &self.fields
    }

    /// Keyed links in display order.
    pub fn links(&self) -> &[DraftLink] {
        &self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn set_field(&mut self, edit: ProductEdit) {
        match edit {
            ProductEdit::Name(value) => self.fields.product_name = value,
            ProductEdit::Brand(value) => self.fields.brand = value,
            ProductEdit::Category(value) => self.fields.category = value,
            ProductEdit::Quote(value) => {
                self.fields.quote = if value.is_empty() { None } else { Some(value) };
            }
        }
    }

    /// Applies `edit` to the link identified by `key`.
    ///
    /// Panics on an unknown key: keys are only ever produced by
    /// enumerating this draft's own link list, so a miss is a
    /// programming error, not a recoverable failure.
    pub fn set_link_field(&mut self, key: LinkKey, edit: LinkEdit) {
        let entry = self.link_mut(key);
        match edit {
            LinkEdit::StoreName(value) => entry.link.store_name = value,
            LinkEdit::Url(value) => entry.link.url = value,
            LinkEdit::Price(value) => entry.link.price = value,
            LinkEdit::Currency(value) => entry.link.currency = value,
            LinkEdit::InStock(value) => entry.link.in_stock = value,
        }
    }

    /// Appends an empty link (no identity, default currency) and
    /// returns its key.
    pub fn add_link(&mut self) -> LinkKey {
        let key = LinkKey(self.next_key);
        self.next_key += 1;
        self.links.push(DraftLink {
            key,
            link: BuyLink::empty(),
        });
        key
    }

    /// Removes the link identified by `key`. Panics on an unknown key,
    /// same invariant as [`Draft::set_link_field`].
    pub fn remove_link(&mut self, key: LinkKey) {
        let position = self
            .links
            .iter()
            .position(|entry| entry.key == key)
            .unwrap_or_else(|| panic!("unknown draft link key {key:?}"));
        self.links.remove(position);
    }

    /// Reassembles a `Product` from the working copy. No completeness
    /// check happens here; the operator is trusted and the persistence
    /// collaborator is the validator of record.
    pub fn commit(&self) -> Product {
        let mut product = self.fields.clone();
        product.buy_links = self.links.iter().map(|entry| entry.link.clone()).collect();
        product
    }

    fn link_mut(&mut self, key: LinkKey) -> &mut DraftLink {
        self.links
            .iter_mut()
            .find(|entry| entry.key == key)
            .unwrap_or_else(|| panic!("unknown draft link key {key:?}"))
    }
}
