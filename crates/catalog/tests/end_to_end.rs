use pretty_assertions::assert_eq;
use showcase_catalog::{
    find_by_id, highlight_set, related_items, Catalog, CategoryIndex, Item, Lookup,
};

fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

fn catalog() -> Catalog {
    Catalog::from_items(vec![
        Item::new("ml-1", "Churn model", "ml"),
        Item::new("cv-1", "Segmenter", "cv"),
        Item::new("ml-2", "Ranker", "ml"),
    ])
    .unwrap()
}

#[test]
fn grouping_lookup_and_related_agree() {
    let catalog = catalog();
    let items = catalog.items();
    let index = CategoryIndex::build(items);

    let groups: Vec<(&str, Vec<String>)> = index
        .groups()
        .map(|(key, bucket)| (key, ids(bucket)))
        .collect();
    assert_eq!(
        groups,
        vec![
            ("ml", vec!["ml-1".to_string(), "ml-2".to_string()]),
            ("cv", vec!["cv-1".to_string()]),
        ]
    );

    assert_eq!(ids(&index.query(items, "ml")), vec!["ml-1", "ml-2"]);
    assert!(index.query(items, "nonexistent-category").is_empty());

    match find_by_id(items, "cv-1") {
        Lookup::Found(item) => assert_eq!(item.title, "Segmenter"),
        Lookup::NotFound => panic!("cv-1 should exist"),
    }
    assert_eq!(find_by_id(items, "zz"), Lookup::NotFound);

    let subject = find_by_id(items, "ml-1").item().unwrap();
    assert_eq!(ids(&related_items(items, subject, 3)), vec!["ml-2"]);
}

#[test]
fn highlight_ids_are_inert_when_unknown() {
    let catalog = catalog();
    let highlighted = highlight_set("cv-1,ghost,cv-1");
    let flagged: Vec<&str> = catalog
        .items()
        .iter()
        .filter(|i| highlighted.contains(&i.id))
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(flagged, vec!["cv-1"]);
    assert_eq!(highlighted.len(), 2);
}
