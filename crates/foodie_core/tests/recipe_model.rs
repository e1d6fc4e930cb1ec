use foodie_core::{categories, AppState, Owner, Recipe, ALL_CATEGORIES, CATEGORIES};

#[test]
fn recipe_serialization_uses_expected_wire_fields() {
    let recipe = AppState::seeded().recipes()[2].clone();
    let json = serde_json::to_value(&recipe).unwrap();

    assert_eq!(json["id"], "sample-3");
    assert_eq!(json["category"], "Dessert");
    assert_eq!(json["prepTime"], "30 min");
    assert_eq!(json["servings"], 4);
    assert_eq!(json["owner"], "sample");
    assert!(json.get("prep_time").is_none());

    let decoded: Recipe = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, recipe);
}

#[test]
fn unknown_owner_tag_decodes_as_user() {
    let mut json = serde_json::to_value(&AppState::seeded().recipes()[0]).unwrap();
    json["owner"] = serde_json::json!("someone-else");
    let decoded: Recipe = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.owner, Owner::User);
}

#[test]
fn categories_are_offered_in_display_order() {
    assert_eq!(categories().len(), CATEGORIES.len());
    assert_eq!(categories()[0], "Breakfast");
    assert!(!CATEGORIES.contains(&ALL_CATEGORIES));
}
