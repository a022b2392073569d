//! Integration test: drive the catalog, filter, and modal together the
//! way the page does — build card state from catalog categories, filter,
//! then open and close project dialogs against the same catalog.

use folio_core::catalog::{Catalog, Category};
use folio_core::filter::{FILTER_ALL, FilterController};
use folio_core::modal::{ModalController, ModalState};
use folio_core::views::project_detail;
use folio_protocol::CardPhase;

fn card_slugs(catalog: &Catalog) -> Vec<String> {
    let mut entries: Vec<_> = catalog.entries().collect();
    entries.sort_by_key(|e| e.id);
    entries.iter().map(|e| e.category.slug().to_string()).collect()
}

#[test]
fn filter_then_open_each_visible_card() {
    let catalog = Catalog::builtin();
    let slugs = card_slugs(&catalog);
    let mut filter = FilterController::new(slugs.clone());
    let mut modal = ModalController::new(catalog.clone());

    for category in Category::ALL {
        let transition = filter.select(category.slug());

        // Exactly the matching cards survive the commit.
        let expected: Vec<bool> = slugs.iter().map(|s| s == category.slug()).collect();
        assert_eq!(transition.visible, expected, "filter {}", category.slug());
        assert!(expected.iter().any(|&v| v), "category {category} matches no card");

        // Every visible card's trigger opens a dialog whose content
        // matches its catalog entry.
        for (idx, visible) in transition.visible.iter().enumerate() {
            let id = idx as u32 + 1;
            if !visible {
                continue;
            }
            let entry = modal.open(id).cloned().unwrap();
            assert_eq!(modal.state(), ModalState::Open(id));
            assert_eq!(entry.category, category);

            let body = project_detail::render(&entry);
            let title = body.find_by_class("modal__project-title").unwrap();
            assert_eq!(title.text_content(), entry.title);

            assert!(modal.close());
            assert_eq!(modal.state(), ModalState::Closed);
        }
    }

    // Back to "all": everything visible again regardless of prior state.
    let transition = filter.select(FILTER_ALL);
    assert!(transition.visible.iter().all(|&v| v));
    assert_eq!(
        transition.settled_phases(),
        vec![CardPhase::Settled { visible: true }; 6]
    );
}

#[test]
fn missing_project_trigger_never_opens_a_dialog() {
    let mut modal = ModalController::new(Catalog::builtin());
    assert!(modal.open(999).is_none());
    assert_eq!(modal.state(), ModalState::Closed);
    // Closing a closed dialog stays a no-op.
    assert!(!modal.close());
}

#[test]
fn dialog_content_matches_catalog_for_all_six_projects() {
    let catalog = Catalog::builtin();
    let mut modal = ModalController::new(catalog.clone());
    for id in 1..=6 {
        let entry = modal.open(id).cloned().unwrap();
        let body = project_detail::render(&entry);

        let category = body.find_by_class("modal__project-category").unwrap();
        assert_eq!(category.text_content(), entry.category.label());

        let mut tags = Vec::new();
        body.find_all_by_class("tag", &mut tags);
        assert_eq!(tags.len(), entry.tags.len());
    }
}
