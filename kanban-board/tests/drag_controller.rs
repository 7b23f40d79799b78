//! Drops reported by a drag library, applied to a live store

use kanban_board::{BoardStore, CardId, ColumnId, DraggableLocation, DropResult};

fn setup() -> (BoardStore, ColumnId, ColumnId, Vec<CardId>) {
    let mut store = BoardStore::new();
    store.create_board("Drag");
    let board = store.active_board().unwrap().clone();
    let todo = board.columns[0].id.clone();
    let doing = board.columns[1].id.clone();

    let cards = ["one", "two", "three"]
        .into_iter()
        .map(|title| store.create_card(&todo, title, None).unwrap())
        .collect();
    (store, todo, doing, cards)
}

fn titles(store: &BoardStore, column: &ColumnId) -> Vec<String> {
    store
        .state()
        .find_column(column)
        .unwrap()
        .cards_in_display_order()
        .into_iter()
        .map(|c| c.title.clone())
        .collect()
}

#[test]
fn test_drop_into_other_column_moves_once() {
    let (mut store, todo, doing, cards) = setup();
    let before = store.activity().len();

    let drop = DropResult::new(
        &cards[2],
        DraggableLocation::new(&todo, 2),
        Some(DraggableLocation::new(&doing, 0)),
    );
    assert!(store.handle_drag_end(&drop));

    assert_eq!(titles(&store, &doing), vec!["three"]);
    assert_eq!(titles(&store, &todo), vec!["one", "two"]);
    assert_eq!(store.activity().len(), before + 1);
    assert_eq!(store.activity().latest().unwrap().op, "move card");
}

#[test]
fn test_reorder_within_column() {
    let (mut store, todo, _, cards) = setup();

    let drop = DropResult::new(
        &cards[0],
        DraggableLocation::new(&todo, 0),
        Some(DraggableLocation::new(&todo, 2)),
    );
    assert!(store.handle_drag_end(&drop));
    assert_eq!(titles(&store, &todo), vec!["two", "three", "one"]);
}

#[test]
fn test_drop_outside_any_column_is_ignored() {
    let (mut store, todo, _, cards) = setup();
    let before = store.snapshot();

    let drop = DropResult::new(&cards[1], DraggableLocation::new(&todo, 1), None);
    assert!(!store.handle_drag_end(&drop));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_drop_in_place_is_ignored() {
    let (mut store, todo, _, cards) = setup();
    let activity = store.activity().len();

    let drop = DropResult::new(
        &cards[1],
        DraggableLocation::new(&todo, 1),
        Some(DraggableLocation::new(&todo, 1)),
    );
    assert!(!store.handle_drag_end(&drop));
    assert_eq!(store.activity().len(), activity);
}
