// file: tests/presenter.rs
// description: end-to-end grouping, ordering and disclosure behaviour
// reference: integration tests against the public api

use pretty_assertions::assert_eq;
use salonta_docs::{
    Config, DisclosureKey, Document, DocumentStore, DocumentTree, DocumentsView, GroupingMode,
    Labels, OrderingRules, infer_type,
};
use std::fs;
use tempfile::tempdir;

fn doc(id: &str) -> Document {
    Document::new(id, format!("Document {id}"), format!("{id}.pdf"), format!("/docs/{id}.pdf"))
}

fn buckets(keys: &[&str]) -> Vec<(String, Vec<Document>)> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| (key.to_string(), vec![doc(&i.to_string())]))
        .collect()
}

fn mount(keys: &[&str], mode: GroupingMode) -> DocumentsView {
    let config = Config::default_config();
    DocumentsView::mount(buckets(keys), mode, Labels::default(), config.ordering_rules())
}

#[test]
fn years_sort_descending() {
    let view = mount(&["2021|a", "2023|a", "2022|a"], GroupingMode::YearCategory);
    assert_eq!(view.tree().group_labels(), vec!["2023", "2022", "2021"]);
}

#[test]
fn other_years_sort_last() {
    let view = mount(&["2023|a", "Alte ani|a", "2020|a"], GroupingMode::YearCategory);
    assert_eq!(view.tree().group_labels(), vec!["2023", "2020", "Alte ani"]);
}

#[test]
fn categories_sit_between_anchors() {
    let view = mount(
        &[
            "2024|formulare",
            "2024|rezultate",
            "2024|altele",
            "2024|Alte categorii",
        ],
        GroupingMode::YearCategory,
    );
    let DocumentTree::YearCategory(years) = view.tree() else {
        panic!("expected year/category tree");
    };
    let categories: Vec<&str> = years[0]
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(
        categories,
        vec!["rezultate", "altele", "formulare", "Alte categorii"]
    );
}

#[test]
fn flat_default_sorts_last() {
    let view = mount(&["2024", "default", "2022"], GroupingMode::Flat);
    assert_eq!(view.tree().group_labels(), vec!["2024", "2022", "default"]);

    let rendered = view.render();
    assert_eq!(rendered.panels[2].label, "Alte documente");
}

#[test]
fn flat_uses_last_year_run() {
    let view = mount(
        &["Raport 2020", "Raport activitate 2019 (rev. 2021)"],
        GroupingMode::Flat,
    );
    assert_eq!(
        view.tree().group_labels(),
        vec!["Raport activitate 2019 (rev. 2021)", "Raport 2020"]
    );
}

#[test]
fn unknown_mode_is_flat() {
    let view = mount(&["2024|rezultate"], GroupingMode::from("by_month"));
    assert_eq!(view.mode(), GroupingMode::Flat);
    assert_eq!(view.tree().group_labels(), vec!["2024|rezultate"]);
}

#[test]
fn malformed_key_goes_to_fallback_bucket() {
    let view = mount(&["2024|rezultate", "2023"], GroupingMode::YearCategory);
    let DocumentTree::YearCategory(years) = view.tree() else {
        panic!("expected year/category tree");
    };
    assert_eq!(years.len(), 2);
    assert_eq!(years[1].year, "Alte ani");
    assert_eq!(years[1].categories[0].category, "Alte categorii");
    assert_eq!(view.tree().total_documents(), 2);
}

#[test]
fn default_open_with_results_category() {
    let view = mount(
        &["2024|rezultate", "2024|altele", "2023|rezultate", "2023|anexe"],
        GroupingMode::YearCategory,
    );

    assert!(view.is_open(&DisclosureKey::group("2024")));
    assert!(view.is_open(&DisclosureKey::category("2024", "rezultate")));
    assert!(!view.is_open(&DisclosureKey::category("2024", "altele")));
    assert!(!view.is_open(&DisclosureKey::group("2023")));
    assert!(!view.is_open(&DisclosureKey::category("2023", "rezultate")));
    assert!(!view.is_open(&DisclosureKey::category("2023", "anexe")));
}

#[test]
fn default_open_without_results_category() {
    let view = mount(&["2024|anexe", "2024|formulare"], GroupingMode::YearCategory);
    assert!(view.is_open(&DisclosureKey::category("2024", "anexe")));
    assert!(view.is_open(&DisclosureKey::category("2024", "formulare")));
}

#[test]
fn toggles_are_independent() {
    let mut view = mount(
        &["2024|rezultate", "2024|altele", "2023|anexe"],
        GroupingMode::YearCategory,
    );
    let before = view.state().clone();

    assert!(view.toggle(&DisclosureKey::group("2023")));
    assert!(!view.is_open(&DisclosureKey::category("2024", "altele")));
    assert!(view.is_open(&DisclosureKey::category("2024", "rezultate")));
    assert!(view.is_open(&DisclosureKey::group("2024")));
    assert!(!view.is_open(&DisclosureKey::category("2023", "anexe")));

    assert!(!view.toggle(&DisclosureKey::group("2023")));
    assert_eq!(view.state(), &before);
}

#[test]
fn category_state_survives_collapsing_its_year() {
    let mut view = mount(&["2024|rezultate", "2023|anexe"], GroupingMode::YearCategory);
    let anexe = view.key("2023|anexe");

    view.toggle(&DisclosureKey::group("2023"));
    view.toggle(&anexe);
    view.toggle(&DisclosureKey::group("2023"));
    assert!(view.is_open(&anexe));

    let rendered = view.render();
    let year = rendered.panel("2023").unwrap();
    assert!(!year.open);
    assert!(year.find("2023|anexe").unwrap().open);
}

#[test]
fn empty_input_renders_nothing() {
    let view = mount(&[], GroupingMode::YearCategory);
    assert!(view.tree().is_empty());
    assert!(view.render().is_empty());
    assert!(view.state().open_keys().is_empty());
}

#[test]
fn refresh_rebuilds_order_and_keeps_toggles() {
    let mut view = mount(&["2023|anexe"], GroupingMode::YearCategory);
    view.toggle(&DisclosureKey::category("2023", "anexe"));
    let toggled = view.is_open(&DisclosureKey::category("2023", "anexe"));

    view.refresh(buckets(&["2023|anexe", "2025|rezultate"]));
    assert_eq!(view.tree().group_labels(), vec!["2025", "2023"]);
    assert_eq!(
        view.is_open(&DisclosureKey::category("2023", "anexe")),
        toggled
    );
}

#[test]
fn badges_are_total() {
    assert_eq!(infer_type("a.docx"), "DOC");
    assert_eq!(infer_type("a"), "PDF");
    assert_eq!(infer_type(""), "PDF");
    assert_eq!(infer_type("a.ZIP"), "PDF");
    assert_eq!(infer_type("buget.XLSX"), "XLS");
    assert_eq!(infer_type("prezentare.ppt"), "PPT");
}

#[test]
fn loads_records_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("documents.json");
    fs::write(
        &path,
        r#"[
            {"id": "1", "title": "Anexa", "fileName": "anexa.docx", "fileUrl": "/a.docx", "year": "2023", "category": "anexe"},
            {"id": "2", "title": "Rezultat", "fileName": "rez.pdf", "fileUrl": "/r.pdf", "groupKey": "2024|rezultate"},
            {"id": "3", "title": "Fara an", "fileName": "x.pdf", "fileUrl": "/x.pdf"}
        ]"#,
    )
    .unwrap();

    let rules = OrderingRules::default();
    let bucketed = DocumentStore::new(GroupingMode::YearCategory, rules.clone())
        .load(&path)
        .unwrap();
    assert_eq!(bucketed.document_count(), 3);

    let view = DocumentsView::mount(
        bucketed,
        GroupingMode::YearCategory,
        Labels::default(),
        rules,
    );
    assert_eq!(
        view.tree().group_labels(),
        vec!["2024", "2023", "Alte ani"]
    );

    let rendered = view.render();
    let links = rendered.links();
    let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Rezultat", "Anexa", "Fara an"]);
    assert_eq!(links[1].badge.as_str(), "DOC");
}
