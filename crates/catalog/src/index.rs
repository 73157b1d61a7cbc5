use std::collections::HashMap;

use crate::item::Item;

/// Pseudo-category meaning "no filter".
pub const ALL_CATEGORY: &str = "all";

/// Items grouped by category. Keys keep first-seen order and every bucket is
/// non-empty; within a bucket items keep their source order.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex<'a> {
    groups: Vec<(&'a str, Vec<&'a Item>)>,
    by_key: HashMap<&'a str, usize>,
}

impl<'a> CategoryIndex<'a> {
    pub fn build(items: &'a [Item]) -> Self {
        let mut index = Self::default();
        for item in items {
            let key = item.category.as_str();
            match index.by_key.get(key) {
                Some(&slot) => index.groups[slot].1.push(item),
                None => {
                    index.by_key.insert(key, index.groups.len());
                    index.groups.push((key, vec![item]));
                }
            }
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&'a str> {
        self.groups.iter().map(|(key, _)| *key).collect()
    }

    /// Like [`Self::categories`], prefixed with [`ALL_CATEGORY`].
    pub fn categories_with_all(&self) -> Vec<&'a str> {
        std::iter::once(ALL_CATEGORY)
            .chain(self.groups.iter().map(|(key, _)| *key))
            .collect()
    }

    pub fn group(&self, category: &str) -> Option<&[&'a Item]> {
        self.by_key
            .get(category)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn count(&self, category: &str) -> usize {
        self.group(category).map_or(0, <[_]>::len)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&'a str, &[&'a Item])> + '_ {
        self.groups.iter().map(|(key, items)| (*key, items.as_slice()))
    }

    /// `items` for [`ALL_CATEGORY`], the category's bucket otherwise, empty for
    /// unknown categories.
    pub fn query(&self, items: &'a [Item], category: &str) -> Vec<&'a Item> {
        if category == ALL_CATEGORY {
            return items.iter().collect();
        }
        self.group(category).map(<[_]>::to_vec).unwrap_or_default()
    }
}
