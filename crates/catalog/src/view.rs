//! View state driven by the presentation layer: the filtered card list and the
//! detail page lifecycle.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::index::{CategoryIndex, ALL_CATEGORY};
use crate::item::Item;
use crate::locator::{find_by_id, highlight_set, related_items, Lookup};
use crate::search::search;
use crate::taxonomy::CategoryStyle;

pub const DEFAULT_RELATED_LIMIT: usize = 3;
pub const INDEX_ROUTE: &str = "/";

/// One card in the visible list.
#[derive(Debug, Clone, Serialize)]
pub struct CardEntry<'a> {
    #[serde(flatten)]
    pub item: &'a Item,
    pub is_highlighted: bool,
}

/// Filtered card list with a memo that is dropped whenever the selected category
/// or the search text changes.
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
    index: CategoryIndex<'a>,
    category: String,
    search_text: String,
    highlighted: BTreeSet<String>,
    visible: Option<Vec<&'a Item>>,
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            index: catalog.index(),
            category: ALL_CATEGORY.to_string(),
            search_text: String::new(),
            highlighted: BTreeSet::new(),
            visible: None,
        }
    }

    pub fn index(&self) -> &CategoryIndex<'a> {
        &self.index
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn highlighted(&self) -> &BTreeSet<String> {
        &self.highlighted
    }

    pub fn select_category(&mut self, category: &str) {
        if self.category != category {
            log::debug!("category changed: {} -> {}", self.category, category);
            self.category = category.to_string();
            self.visible = None;
        }
    }

    pub fn set_search_text(&mut self, text: &str) {
        if self.search_text != text {
            self.search_text = text.to_string();
            self.visible = None;
        }
    }

    /// Highlighting only flags cards, it never changes which cards are visible.
    pub fn set_highlight_param(&mut self, ids_param: &str) {
        self.highlighted = highlight_set(ids_param);
    }

    pub fn is_highlighted(&self, item: &Item) -> bool {
        self.highlighted.contains(&item.id)
    }

    pub fn visible(&mut self) -> &[&'a Item] {
        if self.visible.is_none() {
            let by_category = self.index.query(self.catalog.items(), &self.category);
            self.visible = Some(search(by_category, &self.search_text));
        }
        self.visible.as_deref().unwrap_or_default()
    }

    pub fn entries(&mut self) -> Vec<CardEntry<'a>> {
        let visible = self.visible().to_vec();
        visible
            .into_iter()
            .map(|item| CardEntry {
                item,
                is_highlighted: self.is_highlighted(item),
            })
            .collect()
    }

    #[cfg(test)]
    fn is_memoized(&self) -> bool {
        self.visible.is_some()
    }
}

/// Detail page with every optional field resolved to its display value.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetail<'a> {
    pub item: &'a Item,
    pub category_label: String,
    pub style: &'a CategoryStyle,
    pub long_description: String,
    pub completion_date: &'a str,
    pub image: &'a str,
    pub process: &'a str,
    pub features: Vec<String>,
    pub related: Vec<&'a Item>,
}

impl<'a> ItemDetail<'a> {
    pub fn new(catalog: &'a Catalog, item: &'a Item, related_limit: usize) -> Self {
        let taxonomy = catalog.taxonomy();
        Self {
            item,
            category_label: taxonomy.label_for(&item.category),
            style: taxonomy.style_for(&item.category),
            long_description: item.long_description_or_default(),
            completion_date: item.completion_date_or_default(),
            image: item.image_or_default(),
            process: item.process_or_default(),
            features: item.feature_list(),
            related: related_items(catalog.items(), item, related_limit),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DetailState<'a> {
    Loading,
    Found(Box<ItemDetail<'a>>),
    NotFound,
}

/// Detail page lifecycle: `Loading` until [`DetailView::resolve`] runs, then
/// `Found` or `NotFound` for good.
#[derive(Debug, Clone)]
pub struct DetailView<'a> {
    id: String,
    related_limit: usize,
    state: DetailState<'a>,
}

impl<'a> DetailView<'a> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            related_limit: DEFAULT_RELATED_LIMIT,
            state: DetailState::Loading,
        }
    }

    #[must_use]
    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_limit = limit;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState<'a> {
        &self.state
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.state, DetailState::Loading)
    }

    /// Runs the lookup once. Terminal states are left untouched.
    pub fn resolve(&mut self, catalog: &'a Catalog) -> &DetailState<'a> {
        if !self.is_terminal() {
            self.state = match find_by_id(catalog.items(), &self.id) {
                Lookup::Found(item) => {
                    DetailState::Found(Box::new(ItemDetail::new(catalog, item, self.related_limit)))
                }
                Lookup::NotFound => {
                    log::info!("no item with id '{}', redirecting to index", self.id);
                    DetailState::NotFound
                }
            };
        }
        &self.state
    }

    /// Where the presentation layer should navigate after a miss.
    pub fn redirect_target(&self) -> Option<&'static str> {
        matches!(self.state, DetailState::NotFound).then_some(INDEX_ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{CategoryInfo, Taxonomy};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Item::new("ml-1", "Forecaster", "ml").technologies(["PyTorch"]),
                Item::new("cv-1", "Detector", "cv").technologies(["OpenCV"]),
                Item::new("ml-2", "Recommender", "ml").technologies(["Spark"]),
            ],
            Taxonomy::new(vec![CategoryInfo {
                id: "ml".to_string(),
                label: Some("Machine Learning".to_string()),
                description: None,
                style: Some(CategoryStyle::new(
                    "from-emerald-500 via-teal-500 to-cyan-600",
                    "emerald",
                )),
            }]),
        )
        .unwrap()
    }

    fn visible_ids(view: &mut CatalogView<'_>) -> Vec<String> {
        view.visible().iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn category_and_search_compose() {
        let catalog = catalog();
        let mut view = CatalogView::new(&catalog);
        assert_eq!(visible_ids(&mut view), vec!["ml-1", "cv-1", "ml-2"]);

        view.select_category("ml");
        assert_eq!(visible_ids(&mut view), vec!["ml-1", "ml-2"]);

        view.set_search_text("spark");
        assert_eq!(visible_ids(&mut view), vec!["ml-2"]);

        view.select_category("missing");
        assert!(visible_ids(&mut view).is_empty());
    }

    #[test]
    fn memo_invalidated_only_on_change() {
        let catalog = catalog();
        let mut view = CatalogView::new(&catalog);
        view.visible();
        assert!(view.is_memoized());

        view.select_category("all");
        view.set_search_text("");
        view.set_highlight_param("cv-1");
        assert!(view.is_memoized());

        view.select_category("cv");
        assert!(!view.is_memoized());
    }

    #[test]
    fn entries_flag_highlighted_cards() {
        let catalog = catalog();
        let mut view = CatalogView::new(&catalog);
        view.set_highlight_param("cv-1,unknown");
        let flags: Vec<(String, bool)> = view
            .entries()
            .into_iter()
            .map(|e| (e.item.id.clone(), e.is_highlighted))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("ml-1".to_string(), false),
                ("cv-1".to_string(), true),
                ("ml-2".to_string(), false),
            ]
        );
    }

    #[test]
    fn detail_found_resolves_defaults_and_related() {
        let catalog = catalog();
        let mut detail = DetailView::new("ml-1");
        assert!(matches!(detail.state(), DetailState::Loading));

        match detail.resolve(&catalog) {
            DetailState::Found(found) => {
                assert_eq!(found.item.id, "ml-1");
                assert_eq!(found.category_label, "Machine Learning");
                assert_eq!(found.style.accent, "emerald");
                assert_eq!(found.completion_date, "2023");
                let related: Vec<&str> = found.related.iter().map(|i| i.id.as_str()).collect();
                assert_eq!(related, vec!["ml-2"]);
            }
            other => panic!("expected Found, got {other:?}"),
        }
        assert_eq!(detail.redirect_target(), None);
    }

    #[test]
    fn detail_miss_redirects_to_index() {
        let catalog = catalog();
        let mut detail = DetailView::new("zz");
        assert!(matches!(detail.resolve(&catalog), DetailState::NotFound));
        assert!(detail.is_terminal());
        assert_eq!(detail.redirect_target(), Some("/"));
    }

    #[test]
    fn resolve_never_stays_loading() {
        let catalog = catalog();
        for id in ["ml-1", "zz", ""] {
            let mut detail = DetailView::new(id);
            assert!(!matches!(detail.resolve(&catalog), DetailState::Loading));
            assert!(detail.is_terminal());
        }
    }

    #[test]
    fn unknown_category_gets_fallback_style() {
        let catalog = catalog();
        let item = &catalog.items()[1];
        let detail = ItemDetail::new(&catalog, item, 3);
        assert_eq!(detail.style, &CategoryStyle::fallback());
        assert_eq!(detail.category_label, "Cv");
    }
}
