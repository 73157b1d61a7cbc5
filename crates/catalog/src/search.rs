use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32String};

use crate::item::Item;

/// Case-insensitive substring filter over title, description, category,
/// technologies and highlight keyword. Blank text keeps everything.
pub fn search<'a, I>(items: I, text: &str) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let needle = text.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| needle.is_empty() || matches_needle(item, &needle))
        .collect()
}

fn matches_needle(item: &Item, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&item.title)
        || contains(&item.description)
        || contains(&item.category)
        || item.technologies.iter().any(|t| contains(t))
        || item.highlight_keyword.as_deref().is_some_and(contains)
}

/// Ranked fuzzy search using nucleo-matcher
pub struct FuzzySearch {
    matcher: Matcher,
}

impl FuzzySearch {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Returns (item_index, score) sorted by score descending, scores normalized
    /// to 0-1 against the best hit.
    pub fn search(&mut self, query: &str, items: &[Item], limit: usize) -> Vec<(usize, f32)> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);

        let mut scored: Vec<(usize, u32)> = items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| {
                let best = haystacks(item)
                    .filter_map(|text| {
                        let haystack = Utf32String::from(text);
                        pattern.score(haystack.slice(..), &mut self.matcher)
                    })
                    .max()?;
                Some((idx, best))
            })
            .collect();

        // stable: ties keep catalog order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(limit);

        let max_score = scored.first().map(|(_, s)| *s as f32).unwrap_or(1.0);
        scored
            .into_iter()
            .map(|(idx, score)| {
                let normalized = if max_score > 0.0 {
                    score as f32 / max_score
                } else {
                    0.0
                };
                (idx, normalized)
            })
            .collect()
    }
}

impl Default for FuzzySearch {
    fn default() -> Self {
        Self::new()
    }
}

fn haystacks(item: &Item) -> impl Iterator<Item = &str> {
    [
        item.title.as_str(),
        item.description.as_str(),
        item.category.as_str(),
    ]
    .into_iter()
    .chain(item.technologies.iter().map(String::as_str))
    .chain(item.highlight_keyword.as_deref())
}
