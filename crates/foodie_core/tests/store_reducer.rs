use foodie_core::{apply, AppState, FavoriteSet, Intent, Owner, Recipe, StatePatch};

fn user_recipe(id: &str, title: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        category: "Lunch".to_string(),
        image: "file:///photo.jpg".to_string(),
        ingredients: vec!["bread".to_string(), "cheese".to_string()],
        instructions: "Grill it.".to_string(),
        prep_time: "10 min".to_string(),
        servings: 2,
        calories: 400,
        difficulty: "Easy".to_string(),
        owner: Owner::User,
    }
}

fn ids(state: &AppState) -> Vec<&str> {
    state.recipes().iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn seeded_state_has_samples_and_no_favorites() {
    let seeded = AppState::seeded();
    assert_eq!(ids(&seeded), vec!["sample-1", "sample-2", "sample-3"]);
    assert!(seeded.favorites().is_empty());
}

#[test]
fn add_prepends_new_recipe() {
    let seeded = AppState::seeded();
    let next = apply(&seeded, Intent::Add(user_recipe("u-1", "Toastie")));
    assert_eq!(next.recipes().len(), 4);
    assert_eq!(next.recipes()[0].id, "u-1");
    assert_eq!(&next.recipes()[1..], seeded.recipes());
    assert_ne!(next, seeded);
}

#[test]
fn update_replaces_in_place_and_keeps_order() {
    let state = apply(&AppState::seeded(), Intent::Add(user_recipe("u-1", "Toastie")));
    let state = apply(&state, Intent::Add(user_recipe("u-2", "Salad")));

    let mut edited = user_recipe("u-1", "Cheese Toastie");
    edited.servings = 3;
    let next = apply(&state, Intent::Update(edited.clone()));

    assert_eq!(ids(&next), ids(&state));
    assert_eq!(next.find("u-1"), Some(&edited));
    assert_eq!(next.find("u-2"), state.find("u-2"));
}

#[test]
fn update_with_unknown_id_is_value_equal() {
    let seeded = AppState::seeded();
    let next = apply(&seeded, Intent::Update(user_recipe("missing", "Ghost")));
    assert_eq!(next, seeded);
}

#[test]
fn delete_twice_equals_delete_once() {
    let state = apply(&AppState::seeded(), Intent::Add(user_recipe("u-1", "Toastie")));
    let state = apply(&state, Intent::ToggleFavorite("u-1".to_string()));

    let once = apply(&state, Intent::Delete("u-1".to_string()));
    let twice = apply(&once, Intent::Delete("u-1".to_string()));
    assert_eq!(once, twice);
    assert!(once.find("u-1").is_none());
    assert!(!once.is_favorite("u-1"));
}

#[test]
fn toggle_favorite_is_an_involution() {
    let state = apply(
        &AppState::seeded(),
        Intent::ToggleFavorite("sample-1".to_string()),
    );
    for id in ["sample-1", "sample-2", "not-a-recipe"] {
        let twice = apply(
            &apply(&state, Intent::ToggleFavorite(id.to_string())),
            Intent::ToggleFavorite(id.to_string()),
        );
        assert_eq!(twice.is_favorite(id), state.is_favorite(id));
        assert_eq!(twice, state);
    }
}

#[test]
fn favorite_then_delete_scenario() {
    let seeded = AppState::seeded();
    let recipe2 = seeded.recipes()[1].id.clone();

    let favorited = apply(&seeded, Intent::ToggleFavorite(recipe2.clone()));
    assert_eq!(
        favorited.favorites(),
        &[recipe2.as_str()].into_iter().collect::<FavoriteSet>()
    );

    let deleted = apply(&favorited, Intent::Delete(recipe2.clone()));
    assert_eq!(deleted.recipes().len(), 2);
    assert!(deleted.favorites().is_empty());
}

#[test]
fn load_replaces_only_present_fields() {
    let seeded = AppState::seeded();
    let restored = vec![user_recipe("u-9", "Restored")];
    let next = apply(
        &seeded,
        Intent::Load(StatePatch {
            recipes: Some(restored.clone()),
            favorites: None,
        }),
    );
    assert_eq!(next.recipes(), restored.as_slice());
    assert_eq!(next.favorites(), seeded.favorites());
}

#[test]
fn reducer_does_not_guard_sample_records() {
    let seeded = AppState::seeded();
    let next = apply(&seeded, Intent::Delete("sample-1".to_string()));
    assert_eq!(ids(&next), vec!["sample-2", "sample-3"]);
}
