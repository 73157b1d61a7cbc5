pub mod domain;

pub use domain::{
    CategoriesOutput, CommandAction, CommandRequest, CommandResponse, CommandStatus, HintKind,
    ListOutput, ListPayload, LookupState, RelatedOutput, RelatedPayload, SearchOutput,
    SearchPayload, ShowOutput, ShowPayload,
};

use anyhow::Result;
use domain::{
    parse_payload, CategoriesPayload, CategorySummary, CommandOutcome, DetailOutput, SearchHit,
    DEFAULT_SEARCH_LIMIT,
};
use showcase_catalog::{
    find_by_id, related_items, Catalog, CatalogView, DetailState, DetailView, FuzzySearch, Lookup,
    ALL_CATEGORY, DEFAULT_RELATED_LIMIT, INDEX_ROUTE,
};

/// Executes Command API requests against one loaded catalog.
pub struct CommandHandler<'a> {
    catalog: &'a Catalog,
}

impl<'a> CommandHandler<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, request: CommandRequest) -> CommandResponse {
        let CommandRequest { action, payload } = request;
        log::debug!("executing action={}", action.as_str());

        let outcome = match action {
            CommandAction::List => parse_payload(payload).and_then(|p| self.list(p)),
            CommandAction::Categories => {
                parse_payload::<CategoriesPayload>(payload).and_then(|_| self.categories())
            }
            CommandAction::Show => parse_payload(payload).and_then(|p| self.show(p)),
            CommandAction::Related => parse_payload(payload).and_then(|p| self.related(p)),
            CommandAction::Search => parse_payload(payload).and_then(|p| self.search(p)),
        };

        match outcome {
            Ok(outcome) => CommandResponse {
                status: CommandStatus::Ok,
                message: None,
                hints: outcome.hints,
                data: outcome.data,
            },
            Err(err) => {
                log::warn!("action={} failed: {err:#}", action.as_str());
                CommandResponse::error(format!("{err:#}"))
            }
        }
    }

    fn list(&self, payload: ListPayload) -> Result<CommandOutcome> {
        let mut view = CatalogView::new(self.catalog);
        let category = payload.category.as_deref().unwrap_or(ALL_CATEGORY);
        view.select_category(category);
        if let Some(text) = payload.search.as_deref() {
            view.set_search_text(text);
        }
        if let Some(ids) = payload.highlight.as_deref() {
            view.set_highlight_param(ids);
        }

        let cards = view
            .entries()
            .into_iter()
            .map(|entry| domain::Card {
                item: entry.item.clone(),
                is_highlighted: entry.is_highlighted,
            })
            .collect::<Vec<_>>();
        let empty = cards.is_empty();
        let output = ListOutput {
            category: view.category().to_string(),
            search: view.search_text().to_string(),
            highlighted: view.highlighted().iter().cloned().collect(),
            cards,
        };

        let mut outcome = CommandOutcome::from_value(output)?;
        if empty && category != ALL_CATEGORY && view.index().group(category).is_none() {
            outcome = outcome.with_hint(
                HintKind::Info,
                format!("No items in category '{category}'"),
            );
        }
        Ok(outcome)
    }

    fn categories(&self) -> Result<CommandOutcome> {
        let index = self.catalog.index();
        let taxonomy = self.catalog.taxonomy();

        let all = CategorySummary {
            id: ALL_CATEGORY.to_string(),
            label: "All".to_string(),
            description: None,
            count: self.catalog.len(),
            style: taxonomy.style_for(ALL_CATEGORY).clone(),
        };
        let categories = std::iter::once(all)
            .chain(index.categories().into_iter().map(|id| CategorySummary {
                id: id.to_string(),
                label: taxonomy.label_for(id),
                description: taxonomy
                    .section_info(id)
                    .and_then(|info| info.description.clone()),
                count: index.count(id),
                style: taxonomy.style_for(id).clone(),
            }))
            .collect();

        CommandOutcome::from_value(CategoriesOutput { categories })
    }

    fn show(&self, payload: ShowPayload) -> Result<CommandOutcome> {
        let mut view = DetailView::new(payload.id.clone())
            .with_related_limit(payload.related_limit.unwrap_or(DEFAULT_RELATED_LIMIT));

        view.resolve(self.catalog);
        let output = match view.state() {
            DetailState::Found(detail) => ShowOutput {
                id: payload.id,
                state: LookupState::Found,
                redirect: None,
                detail: Some(DetailOutput::from(&**detail)),
            },
            DetailState::NotFound => ShowOutput {
                id: payload.id,
                state: LookupState::NotFound,
                redirect: view.redirect_target().map(str::to_string),
                detail: None,
            },
            DetailState::Loading => anyhow::bail!("lookup for '{}' did not run", payload.id),
        };

        let not_found = output.state == LookupState::NotFound;
        let message = format!("Item '{}' not found; redirect to {INDEX_ROUTE}", output.id);
        let outcome = CommandOutcome::from_value(output)?;
        Ok(if not_found {
            outcome.with_hint(HintKind::Action, message)
        } else {
            outcome
        })
    }

    fn related(&self, payload: RelatedPayload) -> Result<CommandOutcome> {
        let items = self.catalog.items();
        let limit = payload.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
        let output = match find_by_id(items, &payload.id) {
            Lookup::Found(subject) => RelatedOutput {
                id: payload.id,
                state: LookupState::Found,
                items: related_items(items, subject, limit)
                    .into_iter()
                    .cloned()
                    .collect(),
            },
            Lookup::NotFound => RelatedOutput {
                id: payload.id,
                state: LookupState::NotFound,
                items: Vec::new(),
            },
        };
        CommandOutcome::from_value(output)
    }

    fn search(&self, payload: SearchPayload) -> Result<CommandOutcome> {
        if payload.query.trim().is_empty() {
            anyhow::bail!("Empty query");
        }
        let items = self.catalog.items();
        let mut fuzzy = FuzzySearch::new();
        let results = fuzzy
            .search(
                &payload.query,
                items,
                payload.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            )
            .into_iter()
            .map(|(idx, score)| {
                let item = &items[idx];
                SearchHit {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    category: item.category.clone(),
                    score,
                }
            })
            .collect();

        CommandOutcome::from_value(SearchOutput {
            query: payload.query,
            results,
        })
    }
}
