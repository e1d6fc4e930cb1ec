use foodie_core::{
    CatalogQuery, DraftError, KeyValueStore, MemoryKeyValueStore, RecipeDraft, RecipeService,
    ServiceError, FAVORITES_KEY, RECIPES_KEY,
};

fn draft(title: &str, category: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        category: category.to_string(),
        ingredients: "rice\nbeans".to_string(),
        servings: "2".to_string(),
        ..RecipeDraft::default()
    }
}

#[test]
fn open_on_empty_backend_seeds_without_writing() {
    let store = MemoryKeyValueStore::new();
    let service = RecipeService::open(&store);
    assert_eq!(service.state().recipes().len(), 3);
    assert!(store.is_empty());
}

#[test]
fn create_prepends_and_persists() {
    let store = MemoryKeyValueStore::new();
    let mut service = RecipeService::open(&store);

    let created = service.create_recipe(&draft("Rice Bowl", "Lunch")).unwrap();
    assert_eq!(service.state().recipes()[0], created);
    assert!(store.get_item(RECIPES_KEY).unwrap().is_some());
    assert!(store.get_item(FAVORITES_KEY).unwrap().is_some());

    let reopened = RecipeService::open(&store);
    assert_eq!(reopened.state(), service.state());
}

#[test]
fn blank_title_never_reaches_the_store() {
    let store = MemoryKeyValueStore::new();
    let mut service = RecipeService::open(&store);

    let err = service.create_recipe(&draft("   ", "Lunch")).unwrap_err();
    assert_eq!(err, ServiceError::InvalidDraft(DraftError::EmptyTitle));
    assert_eq!(service.state().recipes().len(), 3);
    assert!(store.is_empty());
}

#[test]
fn update_keeps_id_and_position() {
    let mut service = RecipeService::open(MemoryKeyValueStore::new());
    let first = service.create_recipe(&draft("Rice Bowl", "Lunch")).unwrap();
    service.create_recipe(&draft("Tacos", "Dinner")).unwrap();

    let mut edit = RecipeDraft::from_recipe(&first);
    edit.title = "Rice & Beans".to_string();
    let updated = service.update_recipe(&first.id, &edit).unwrap().unwrap();

    assert_eq!(updated.id, first.id);
    assert_eq!(service.state().recipes()[1], updated);
}

#[test]
fn update_and_delete_of_unknown_ids_are_silent_noops() {
    let store = MemoryKeyValueStore::new();
    let mut service = RecipeService::open(&store);
    let before = service.state().clone();

    assert_eq!(
        service.update_recipe("missing", &draft("Ghost", "Lunch")),
        Ok(None)
    );
    assert_eq!(service.delete_recipe("missing"), Ok(false));
    assert_eq!(service.state(), &before);
    assert!(store.is_empty());
}

#[test]
fn sample_records_are_read_only_through_the_service() {
    let mut service = RecipeService::open(MemoryKeyValueStore::new());
    assert_eq!(
        service.delete_recipe("sample-1"),
        Err(ServiceError::SampleReadOnly("sample-1".to_string()))
    );
    assert!(matches!(
        service.update_recipe("sample-2", &draft("Mine now", "Dinner")),
        Err(ServiceError::SampleReadOnly(_))
    ));
    assert_eq!(service.state().recipes().len(), 3);
}

#[test]
fn favorite_then_delete_clears_marker() {
    let store = MemoryKeyValueStore::new();
    let mut service = RecipeService::open(&store);
    let created = service.create_recipe(&draft("Rice Bowl", "Lunch")).unwrap();

    assert!(service.toggle_favorite(&created.id));
    assert_eq!(service.list(&CatalogQuery::favorites()).len(), 1);

    assert_eq!(service.delete_recipe(&created.id), Ok(true));
    assert!(!service.is_favorite(&created.id));
    assert!(service.list(&CatalogQuery::favorites()).is_empty());

    let reopened = RecipeService::open(&store);
    assert!(reopened.get(&created.id).is_none());
    assert!(reopened.favorites().is_empty());
}

#[test]
fn toggle_twice_restores_membership() {
    let mut service = RecipeService::open(MemoryKeyValueStore::new());
    assert!(service.toggle_favorite("sample-3"));
    assert!(!service.toggle_favorite("sample-3"));
    assert!(service.favorites().is_empty());
}

#[test]
fn restored_favorites_merge_over_seed() {
    let store = MemoryKeyValueStore::new();
    store
        .set_item(FAVORITES_KEY, r#"{"sample-1": true, "gone": true}"#)
        .unwrap();

    let service = RecipeService::open(&store);
    assert_eq!(service.state().recipes().len(), 3);
    assert!(service.is_favorite("sample-1"));
    let favorites = service.list(&CatalogQuery::favorites());
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, "sample-1");
}

#[test]
fn category_listing_includes_user_recipes_first() {
    let mut service = RecipeService::open(MemoryKeyValueStore::new());
    let created = service.create_recipe(&draft("Omelette", "Breakfast")).unwrap();

    let breakfast = service.list(&CatalogQuery::category("Breakfast"));
    let ids = breakfast.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec![created.id.as_str(), "sample-1"]);
}

#[test]
fn write_after_restoring_partial_records_keeps_them() {
    let store = MemoryKeyValueStore::new();
    store
        .set_item(
            RECIPES_KEY,
            r#"[{"id":"u-1","title":"Soup","category":"Lunch","image":"x",
                "ingredients":["water"],"instructions":"boil","prepTime":"5 min",
                "servings":1,"calories":10,"difficulty":"Easy","owner":"user"},
               {"id":"u-2","title":"Dal","category":"Dinner"}]"#,
        )
        .unwrap();

    let mut service = RecipeService::open(&store);
    let created = service.create_recipe(&draft("Omelette", "Breakfast")).unwrap();

    let reopened = RecipeService::open(&store);
    let ids = reopened
        .state()
        .recipes()
        .iter()
        .map(|r| r.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![created.id.as_str(), "u-1", "u-2"]);
}
