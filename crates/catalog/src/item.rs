use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const DEFAULT_COMPLETION_DATE: &str = "2023";

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            technologies: Vec::new(),
            highlight_keyword: None,
            image: None,
            demo_url: None,
            github_url: None,
            completion_date: None,
            long_description: None,
            features: None,
            process: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn completion_date(mut self, date: impl Into<String>) -> Self {
        self.completion_date = Some(date.into());
        self
    }

    /// Long description, or a sentence generated from the title.
    pub fn long_description_or_default(&self) -> String {
        match self.long_description.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => format!(
                "The {} was designed to provide a robust solution that meets modern development standards and user expectations.",
                self.title
            ),
        }
    }

    pub fn completion_date_or_default(&self) -> &str {
        self.completion_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_COMPLETION_DATE)
    }

    pub fn image_or_default(&self) -> &str {
        self.image
            .as_deref()
            .filter(|i| !i.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn process_or_default(&self) -> &str {
        self.process.as_deref().unwrap_or("")
    }

    /// Generated highlights followed by the item's own feature list.
    pub fn feature_list(&self) -> Vec<String> {
        let mut list = vec![
            format!("Feature-rich {} implementation", self.category),
            format!(
                "Built with {}",
                self.technologies
                    .iter()
                    .take(2)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" and ")
            ),
            "Responsive and user-friendly design".to_string(),
            "Optimized for performance and scalability".to_string(),
        ];
        if let Some(features) = &self.features {
            list.extend(features.iter().cloned());
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_optionals_resolve_to_placeholders() {
        let item = Item::new("dl-1", "Dashboard", "deep-learning");
        assert_eq!(item.completion_date_or_default(), "2023");
        assert_eq!(item.image_or_default(), "/placeholder.svg");
        assert_eq!(item.process_or_default(), "");
        assert!(item
            .long_description_or_default()
            .starts_with("The Dashboard was designed"));
    }

    #[test]
    fn feature_list_prefixes_generated_lines() {
        let item = Item::new("dl-1", "Dashboard", "deep-learning")
            .technologies(["Node.js", "Socket.io", "PostgreSQL"])
            .features(["Real-time message delivery"]);
        let features = item.feature_list();
        assert_eq!(features[0], "Feature-rich deep-learning implementation");
        assert_eq!(features[1], "Built with Node.js and Socket.io");
        assert_eq!(features.len(), 5);
        assert_eq!(features[4], "Real-time message delivery");
    }

    #[test]
    fn blank_completion_date_is_treated_as_missing() {
        let item = Item::new("x", "X", "api").completion_date("  ");
        assert_eq!(item.completion_date_or_default(), DEFAULT_COMPLETION_DATE);
    }
}
