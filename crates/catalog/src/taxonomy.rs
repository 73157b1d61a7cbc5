use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub const FALLBACK_GRADIENT: &str = "from-gray-600 to-gray-800";
pub const FALLBACK_ACCENT: &str = "gray";

/// Presentation token attached to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryStyle {
    pub gradient: Cow<'static, str>,
    #[serde(default = "default_accent")]
    pub accent: Cow<'static, str>,
}

/// Style for categories without a configured one.
pub static FALLBACK_STYLE: CategoryStyle = CategoryStyle {
    gradient: Cow::Borrowed(FALLBACK_GRADIENT),
    accent: Cow::Borrowed(FALLBACK_ACCENT),
};

fn default_accent() -> Cow<'static, str> {
    Cow::Borrowed(FALLBACK_ACCENT)
}

impl CategoryStyle {
    pub fn new(gradient: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            gradient: Cow::Owned(gradient.into()),
            accent: Cow::Owned(accent.into()),
        }
    }

    pub fn fallback() -> Self {
        FALLBACK_STYLE.clone()
    }
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Section metadata for one category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CategoryStyle>,
}

/// Configured category taxonomy. Categories used by items but missing here are
/// still valid; they just get derived labels and the fallback style.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: Vec<CategoryInfo>,
}

impl Taxonomy {
    pub fn new(categories: Vec<CategoryInfo>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn section_info(&self, category: &str) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id == category)
    }

    /// Human label; unknown tags are title-cased from their kebab-case id.
    pub fn label_for(&self, category: &str) -> String {
        if let Some(label) = self.section_info(category).and_then(|c| c.label.as_deref()) {
            return label.to_string();
        }
        humanize(category)
    }

    pub fn style_for(&self, category: &str) -> &CategoryStyle {
        self.section_info(category)
            .and_then(|c| c.style.as_ref())
            .unwrap_or(&FALLBACK_STYLE)
    }
}

fn humanize(tag: &str) -> String {
    tag.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
