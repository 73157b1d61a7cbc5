use std::collections::BTreeSet;

use crate::item::Item;

/// Outcome of an id lookup. A miss is an ordinary result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Item),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn item(self) -> Option<&'a Item> {
        match self {
            Lookup::Found(item) => Some(item),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

impl<'a> From<Option<&'a Item>> for Lookup<'a> {
    fn from(value: Option<&'a Item>) -> Self {
        value.map_or(Lookup::NotFound, Lookup::Found)
    }
}

pub fn find_by_id<'a>(items: &'a [Item], id: &str) -> Lookup<'a> {
    items.iter().find(|item| item.id == id).into()
}

/// Parses a comma-separated id list. Blank segments are dropped and duplicates
/// collapse; ids are not checked against the catalog.
pub fn highlight_set(ids_param: &str) -> BTreeSet<String> {
    ids_param
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Up to `limit` items sharing `subject`'s category, in source order, without
/// `subject` itself.
pub fn related_items<'a>(items: &'a [Item], subject: &Item, limit: usize) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item.category == subject.category && item.id != subject.id)
        .take(limit)
        .collect()
}
