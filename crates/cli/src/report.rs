//! Plain-text rendering of Command API outputs.

use crate::command::domain::{
    CategoriesOutput, DetailOutput, ListOutput, RelatedOutput, SearchOutput,
};
use showcase_catalog::Item;

pub fn render_list(out: &ListOutput) -> String {
    let mut lines = Vec::new();
    if out.cards.is_empty() {
        lines.push(format!("No items (category: {})", out.category));
        return lines.join("\n");
    }
    for card in &out.cards {
        let marker = if card.is_highlighted { "*" } else { " " };
        lines.push(format!("{marker} {}", item_line(&card.item)));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} item(s), category: {}{}",
        out.cards.len(),
        out.category,
        if out.search.is_empty() {
            String::new()
        } else {
            format!(", search: \"{}\"", out.search)
        }
    ));
    lines.join("\n")
}

pub fn render_categories(out: &CategoriesOutput) -> String {
    let width = out
        .categories
        .iter()
        .map(|c| c.id.len())
        .max()
        .unwrap_or(0);
    out.categories
        .iter()
        .map(|c| format!("{:<width$}  {:>3}  {}", c.id, c.count, c.label))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_detail(detail: &DetailOutput) -> String {
    let item = &detail.item;
    let mut lines = vec![
        item.title.clone(),
        format!("Category:   {}", detail.category_label),
        format!("Completed:  {}", detail.completion_date),
    ];
    if !item.technologies.is_empty() {
        lines.push(format!("Stack:      {}", item.technologies.join(", ")));
    }
    if let Some(url) = &item.demo_url {
        lines.push(format!("Demo:       {url}"));
    }
    if let Some(url) = &item.github_url {
        lines.push(format!("Source:     {url}"));
    }
    lines.push(String::new());
    if !item.description.is_empty() {
        lines.push(item.description.clone());
        lines.push(String::new());
    }
    lines.push(detail.long_description.clone());
    lines.push(String::new());
    lines.push("Key features:".to_string());
    lines.extend(detail.features.iter().map(|f| format!("  - {f}")));
    if !detail.process.is_empty() {
        lines.push(String::new());
        lines.push("Process:".to_string());
        lines.push(format!("  {}", detail.process));
    }
    if !detail.related.is_empty() {
        lines.push(String::new());
        lines.push("Related:".to_string());
        lines.extend(detail.related.iter().map(|r| format!("  {}", item_line(r))));
    }
    lines.join("\n")
}

pub fn render_related(out: &RelatedOutput) -> String {
    if out.items.is_empty() {
        return format!("No related items for {}", out.id);
    }
    out.items
        .iter()
        .map(item_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_search(out: &SearchOutput) -> String {
    if out.results.is_empty() {
        return format!("No matches for \"{}\"", out.query);
    }
    out.results
        .iter()
        .enumerate()
        .map(|(i, hit)| {
            format!(
                "{}. [{}] {} ({}, score: {:.3})",
                i + 1,
                hit.id,
                hit.title,
                hit.category,
                hit.score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn item_line(item: &Item) -> String {
    if item.description.is_empty() {
        format!("[{}] {} ({})", item.id, item.title, item.category)
    } else {
        format!(
            "[{}] {} ({}): {}",
            item.id, item.title, item.category, item.description
        )
    }
}
