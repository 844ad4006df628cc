//! Store integration tests.

#[cfg(test)]
mod store_tests {
    use super::super::*;
    use crate::assets::ResolveImage;
    use crate::models::ManifestCard;
    use tempfile::TempDir;

    struct AlwaysResolves;

    impl ResolveImage for AlwaysResolves {
        fn resolve(&self, filename: &str) -> Result<String, AppError> {
            Ok(format!("images/{filename}"))
        }
    }

    struct NeverResolves;

    impl ResolveImage for NeverResolves {
        fn resolve(&self, filename: &str) -> Result<String, AppError> {
            Err(AppError::ResourceUnavailable(format!("{filename} missing")))
        }
    }

    fn setup_store() -> (BoardStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).unwrap();
        let store = BoardStore::open(db).unwrap();
        (store, temp_dir)
    }

    fn manifest_entry(id: &str, category: Category, filename: &str) -> ManifestCard {
        ManifestCard {
            id: id.to_string(),
            category,
            image_filename: filename.to_string(),
            text_en: format!("{id} en"),
            text_vi: format!("{id} vi"),
        }
    }

    fn sample_manifest() -> DefaultCardManifest {
        DefaultCardManifest {
            cards: vec![
                manifest_entry("default-wants-iwant", Category::Wants, "i_want.png"),
                manifest_entry("default-people-papa", Category::People, "papa.png"),
                manifest_entry("default-food-rice", Category::Food, "rice.png"),
            ],
        }
    }

    #[test]
    fn test_open_fresh_database_is_empty() {
        let (store, _temp) = setup_store();
        assert!(store.cards().is_empty());
        assert!(store.presets().is_empty());
    }

    #[test]
    fn test_create_card_appears_in_category() {
        let (mut store, _temp) = setup_store();

        let card = store
            .create_card(Category::Food, vec![1, 2, 3], "Apple", "Táo")
            .unwrap();

        let food = store.cards_by_category(Category::Food);
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].id, card.id);
        assert_eq!(food[0].text_en, "Apple");
        assert_eq!(food[0].text_vi, "Táo");
        assert!(!food[0].is_default);

        assert!(store.cards_by_category(Category::Animals).is_empty());
    }

    #[test]
    fn test_create_card_requires_text_and_image() {
        let (mut store, _temp) = setup_store();

        assert!(matches!(
            store.create_card(Category::Food, vec![1], "   ", ""),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.create_card(Category::Food, Vec::new(), "Apple", ""),
            Err(AppError::Validation(_))
        ));
        assert!(store.cards().is_empty());
    }

    #[test]
    fn test_create_card_ids_are_unique_within_a_millisecond() {
        let (mut store, _temp) = setup_store();

        let a = store
            .create_card(Category::Things, vec![1], "Door", "Cửa")
            .unwrap();
        let b = store
            .create_card(Category::Things, vec![1], "Window", "Cửa sổ")
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_card_changes_text_and_keeps_image_without_new_bytes() {
        let (mut store, _temp) = setup_store();

        let card = store
            .create_card(Category::Things, vec![9, 9], "Lamp", "")
            .unwrap();

        let updated = store
            .update_card(&card.id, "Light", "Đèn", None)
            .unwrap();
        assert_eq!(updated.text_en, "Light");
        assert_eq!(updated.text_vi, "Đèn");
        assert_eq!(updated.image, CardImage::Embedded(vec![9, 9]));

        let updated = store
            .update_card(&card.id, "Light", "", Some(vec![7]))
            .unwrap();
        assert_eq!(updated.image, CardImage::Embedded(vec![7]));
        // Empty translation falls back to the English label.
        assert_eq!(updated.text_vi, "Light");
    }

    #[test]
    fn test_update_default_card_is_permission_denied() {
        let (mut store, _temp) = setup_store();
        store
            .bootstrap_defaults(&sample_manifest(), &AlwaysResolves)
            .unwrap();

        let snapshot = store.cards().to_vec();
        let result = store.update_card("default-people-papa", "Dad", "Bố", None);

        assert!(matches!(result, Err(AppError::PermissionDenied(_))));
        assert_eq!(store.cards(), snapshot.as_slice());
    }

    #[test]
    fn test_update_unknown_card_is_not_found() {
        let (mut store, _temp) = setup_store();
        assert!(matches!(
            store.update_card("ghost", "Text", "", None),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let (mut store, _temp) = setup_store();
        let manifest = sample_manifest();

        let added = store.bootstrap_defaults(&manifest, &AlwaysResolves).unwrap();
        assert_eq!(added, 3);

        let snapshot = store.cards().to_vec();
        let added = store.bootstrap_defaults(&manifest, &AlwaysResolves).unwrap();
        assert_eq!(added, 0);
        assert_eq!(store.cards(), snapshot.as_slice());
    }

    #[test]
    fn test_bootstrap_marks_cards_default_with_file_images() {
        let (mut store, _temp) = setup_store();
        store
            .bootstrap_defaults(&sample_manifest(), &AlwaysResolves)
            .unwrap();

        let card = store.card("default-food-rice").unwrap();
        assert!(card.is_default);
        assert_eq!(card.image, CardImage::File("rice.png".to_string()));
    }

    #[test]
    fn test_bootstrap_skips_unresolvable_images_and_retries_later() {
        let (mut store, _temp) = setup_store();
        let manifest = sample_manifest();

        let added = store.bootstrap_defaults(&manifest, &NeverResolves).unwrap();
        assert_eq!(added, 0);
        assert!(store.cards().is_empty());

        // The images appeared; the same entries now load.
        let added = store.bootstrap_defaults(&manifest, &AlwaysResolves).unwrap();
        assert_eq!(added, 3);
    }

    #[test]
    fn test_bootstrap_skips_entries_present_under_legacy_id() {
        let (mut store, _temp) = setup_store();

        // A card bootstrapped under the old id scheme.
        store
            .bootstrap_defaults(
                &DefaultCardManifest {
                    cards: vec![manifest_entry("default-iwant", Category::Wants, "i_want.png")],
                },
                &AlwaysResolves,
            )
            .unwrap();

        let added = store
            .bootstrap_defaults(&sample_manifest(), &AlwaysResolves)
            .unwrap();

        // The canonical i-want entry matched the legacy card; only the two
        // genuinely new entries were added.
        assert_eq!(added, 2);
        assert!(store.card("default-wants-iwant").is_none());
        assert!(store.card("default-iwant").is_some());
    }

    #[test]
    fn test_i_want_lookup_prefers_canonical_then_legacy() {
        let (mut store, _temp) = setup_store();
        store
            .bootstrap_defaults(
                &DefaultCardManifest {
                    cards: vec![manifest_entry("default-iwant", Category::Wants, "i_want.png")],
                },
                &AlwaysResolves,
            )
            .unwrap();

        assert_eq!(store.i_want_card().id, "default-iwant");

        store
            .bootstrap_defaults(
                &DefaultCardManifest {
                    cards: vec![manifest_entry(
                        "default-wants-iwant",
                        Category::Wants,
                        "i_want.png",
                    )],
                },
                &AlwaysResolves,
            )
            .unwrap();
        // Both exist now; canonical wins.
        assert_eq!(store.i_want_card().id, "default-iwant");
    }

    #[test]
    fn test_i_want_lookup_synthesizes_fallback() {
        let (store, _temp) = setup_store();

        let card = store.i_want_card();
        assert_eq!(card.text_en, "I want");
        assert_eq!(card.text_vi, "Tôi muốn");
        assert!(card.is_default);
    }

    #[test]
    fn test_save_preset_requires_name_and_cards() {
        let (mut store, _temp) = setup_store();

        assert!(matches!(
            store.save_preset("  ", vec!["c1".to_string()]),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.save_preset("Lunch", Vec::new()),
            Err(AppError::Validation(_))
        ));
        assert!(store.presets().is_empty());
    }

    #[test]
    fn test_resolve_preset_drops_stale_references() {
        let (mut store, _temp) = setup_store();

        let kept = store
            .create_card(Category::Food, vec![1], "Rice", "Cơm")
            .unwrap();
        let preset = store
            .save_preset("Lunch", vec![kept.id.clone(), "ghost".to_string()])
            .unwrap();

        let resolved = store.resolve_preset(&preset);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, kept.id);
    }

    #[test]
    fn test_suggested_preset_name_counts_up() {
        let (mut store, _temp) = setup_store();
        assert_eq!(store.suggested_preset_name(), "Sentence 1");

        store
            .save_preset("First", vec!["c1".to_string()])
            .unwrap();
        assert_eq!(store.suggested_preset_name(), "Sentence 2");
    }

    #[test]
    fn test_collections_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let card_id = {
            let db = Database::open(db_path.to_str().unwrap()).unwrap();
            let mut store = BoardStore::open(db).unwrap();
            let card = store
                .create_card(Category::Animals, vec![5], "Cat", "Mèo")
                .unwrap();
            store
                .save_preset("Pets", vec![card.id.clone()])
                .unwrap();
            card.id
        };

        let db = Database::open(db_path.to_str().unwrap()).unwrap();
        let store = BoardStore::open(db).unwrap();

        let card = store.card(&card_id).unwrap();
        assert_eq!(card.text_en, "Cat");
        assert_eq!(card.text_vi, "Mèo");

        assert_eq!(store.presets().len(), 1);
        let preset = store.presets()[0].clone();
        let resolved = store.resolve_preset(&preset);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, card_id);
    }
}
