//! Portfolio catalog core: category grouping, id lookup, search and the view
//! state that a front end drives.

mod catalog;
mod error;
mod index;
mod item;
mod locator;
mod search;
mod taxonomy;
mod view;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use index::{CategoryIndex, ALL_CATEGORY};
pub use item::{Item, DEFAULT_COMPLETION_DATE, PLACEHOLDER_IMAGE};
pub use locator::{find_by_id, highlight_set, related_items, Lookup};
pub use search::{search, FuzzySearch};
pub use taxonomy::{CategoryInfo, CategoryStyle, Taxonomy, FALLBACK_STYLE};
pub use view::{
    CardEntry, CatalogView, DetailState, DetailView, ItemDetail, DEFAULT_RELATED_LIMIT,
    INDEX_ROUTE,
};
