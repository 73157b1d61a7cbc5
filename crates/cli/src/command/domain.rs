use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use showcase_catalog::{CategoryStyle, Item, ItemDetail};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Deserialize, Serialize)]
pub struct CommandRequest {
    pub action: CommandAction,
    #[serde(default = "empty_payload")]
    pub payload: Value,
}

fn empty_payload() -> Value {
    Value::Object(Default::default())
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    List,
    Categories,
    Show,
    Related,
    Search,
}

impl CommandAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            CommandAction::List => "list",
            CommandAction::Categories => "categories",
            CommandAction::Show => "show",
            CommandAction::Related => "related",
            CommandAction::Search => "search",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub status: CommandStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
    #[serde(default)]
    pub data: Value,
}

impl CommandResponse {
    pub fn is_error(&self) -> bool {
        matches!(self.status, CommandStatus::Error)
    }

    pub fn error(message: String) -> Self {
        Self {
            status: CommandStatus::Error,
            message: Some(message),
            hints: Vec::new(),
            data: Value::Null,
        }
    }

    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data.clone()).map_err(Into::into)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Hint {
    #[serde(rename = "type")]
    pub kind: HintKind,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    Info,
    Action,
}

pub struct CommandOutcome {
    pub data: Value,
    pub hints: Vec<Hint>,
}

impl CommandOutcome {
    pub fn from_value<T: Serialize>(value: T) -> Result<Self> {
        Ok(Self {
            data: serde_json::to_value(value)?,
            hints: Vec::new(),
        })
    }

    pub fn with_hint(mut self, kind: HintKind, text: impl Into<String>) -> Self {
        self.hints.push(Hint {
            kind,
            text: text.into(),
        });
        self
    }
}

pub fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|err| anyhow::anyhow!("Invalid payload: {err}"))
}

// Payloads

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Comma-separated ids to highlight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoriesPayload {}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowPayload {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelatedPayload {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchPayload {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

// Outputs

#[derive(Debug, Serialize, Deserialize)]
pub struct Card {
    pub item: Item,
    pub is_highlighted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListOutput {
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    pub highlighted: Vec<String>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub count: usize,
    pub style: CategoryStyle,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesOutput {
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LookupState {
    Found,
    NotFound,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetailOutput {
    pub item: Item,
    pub category_label: String,
    pub style: CategoryStyle,
    pub long_description: String,
    pub completion_date: String,
    pub image: String,
    pub process: String,
    pub features: Vec<String>,
    pub related: Vec<Item>,
}

impl From<&ItemDetail<'_>> for DetailOutput {
    fn from(detail: &ItemDetail<'_>) -> Self {
        Self {
            item: detail.item.clone(),
            category_label: detail.category_label.clone(),
            style: detail.style.clone(),
            long_description: detail.long_description.clone(),
            completion_date: detail.completion_date.to_string(),
            image: detail.image.to_string(),
            process: detail.process.to_string(),
            features: detail.features.clone(),
            related: detail.related.iter().map(|&item| item.clone()).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShowOutput {
    pub id: String,
    pub state: LookupState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailOutput>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedOutput {
    pub id: String,
    pub state: LookupState,
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub category: String,
    pub score: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub query: String,
    pub results: Vec<SearchHit>,
}
