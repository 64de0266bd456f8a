use wasm_bindgen_test::*;

use citysuggest_wasm::{catalog_size, display_name, suggest, CitySearch};

#[wasm_bindgen_test]
fn catalog_is_embedded() {
    let count = catalog_size();
    assert!(count > 0, "expected at least one city, got {count}");
}

#[wasm_bindgen_test]
fn suggest_ranks_prefix_first() {
    let found = suggest("mad", 8);
    assert_eq!(found.get(0).as_string().as_deref(), Some("Madrid, España"));
    assert_eq!(suggest("   ", 8).length(), 0);
}

#[wasm_bindgen_test]
fn display_name_strips_region() {
    assert_eq!(display_name("Madrid, España"), "Madrid");
}

#[wasm_bindgen_test]
fn session_select_flow() {
    let mut search = CitySearch::new();
    search.clear_recent();

    search.input("lis");
    assert!(search.visible());
    search.navigate_down();
    assert_eq!(search.highlighted(), Some(0));

    assert_eq!(search.commit_highlighted().as_deref(), Some("Lisboa"));
    assert_eq!(search.query(), "");
    assert_eq!(search.recent().get(0).as_string().as_deref(), Some("Lisboa, Portugal"));
    assert_eq!(search.commit_text(), None);
}
