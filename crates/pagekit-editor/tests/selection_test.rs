use pagekit_core::{EventFilter, SelectionEvent, SelectionEventKind};
use pagekit_editor::{SelectionError, SelectionModel};
use parking_lot::Mutex;
use std::sync::Arc;

type Events = Arc<Mutex<Vec<SelectionEvent<&'static str>>>>;

fn model(items: &[&'static str]) -> (SelectionModel<&'static str>, Events) {
    let model = SelectionModel::with_order(items.iter().copied()).expect("distinct items");
    let seen: Events = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    model.events().subscribe_all(move |event| sink.lock().push(event));
    (model, seen)
}

fn drain(seen: &Events) -> Vec<SelectionEvent<&'static str>> {
    std::mem::take(&mut *seen.lock())
}

#[test]
fn test_click_selects_single_item() {
    let (mut model, seen) = model(&["a", "b", "c"]);
    model.click(&"a").unwrap();
    model.click(&"b").unwrap();

    assert_eq!(model.selected().copied().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(model.latest_selected(), Some(&"b"));
    assert_eq!(
        drain(&seen),
        vec![
            SelectionEvent::FirstSelected,
            SelectionEvent::PanelSelected("a"),
            SelectionEvent::PanelSelected("b"),
        ]
    );
}

#[test]
fn test_boundary_events_fire_once_per_crossing() {
    let (mut model, seen) = model(&["a", "b", "c"]);

    model.click(&"a").unwrap();
    assert_eq!(
        drain(&seen),
        vec![SelectionEvent::FirstSelected, SelectionEvent::PanelSelected("a")]
    );

    model.ctrl_click(&"b").unwrap();
    assert_eq!(
        drain(&seen),
        vec![SelectionEvent::PenultSelected, SelectionEvent::PanelSelected("b")]
    );

    model.ctrl_click(&"c").unwrap();
    assert_eq!(
        drain(&seen),
        vec![SelectionEvent::AllSelected, SelectionEvent::PanelSelected("c")]
    );
    assert!(model.is_all_selected());

    // Already fully selected: nothing crosses a boundary.
    model.select_all();
    model.shift_click(&"c").unwrap();
    assert!(drain(&seen).is_empty());
}

#[test]
fn test_ctrl_click_toggles_and_moves_latest() {
    let (mut model, seen) = model(&["a", "b", "c"]);
    model.click(&"a").unwrap();
    model.ctrl_click(&"c").unwrap();
    drain(&seen);

    model.ctrl_click(&"c").unwrap();
    assert!(!model.is_selected(&"c"));
    assert_eq!(model.latest_selected(), Some(&"a"));
    assert_eq!(drain(&seen), vec![SelectionEvent::PanelSelected("a")]);

    model.ctrl_click(&"a").unwrap();
    assert_eq!(model.selected_count(), 0);
    assert_eq!(model.latest_selected(), None);
    assert_eq!(drain(&seen), vec![SelectionEvent::AllUnselected]);
}

#[test]
fn test_shift_click_walks_backwards_inclusive() {
    let (mut model, _seen) = model(&["a", "b", "c"]);
    model.click(&"c").unwrap();
    model.shift_click(&"a").unwrap();

    assert!(model.is_all_selected());
    assert_eq!(model.selected_in_order(), vec!["a", "b", "c"]);
    assert_eq!(model.latest_selected(), Some(&"a"));
}

#[test]
fn test_shift_click_forward_never_deselects() {
    let (mut model, _seen) = model(&["a", "b", "c", "d", "e"]);
    model.click(&"a").unwrap();
    model.ctrl_click(&"e").unwrap();
    model.shift_click(&"c").unwrap();

    assert_eq!(model.selected_in_order(), vec!["a", "c", "d", "e"]);
    assert_eq!(model.latest_selected(), Some(&"c"));

    model.shift_click(&"c").unwrap();
    assert_eq!(model.selected_count(), 4);
}

#[test]
fn test_shift_click_keeps_existing_selection_order() {
    let (mut model, _seen) = model(&["a", "b", "c", "d"]);
    model.click(&"b").unwrap();
    model.ctrl_click(&"a").unwrap();
    model.shift_click(&"c").unwrap();

    assert_eq!(model.selected().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(model.latest_selected(), Some(&"c"));

    // Deselecting the range end falls back to the latest remaining addition.
    model.ctrl_click(&"c").unwrap();
    assert_eq!(model.latest_selected(), Some(&"a"));
}

#[test]
fn test_shift_click_without_selection_acts_as_click() {
    let (mut model, seen) = model(&["a", "b"]);
    model.shift_click(&"b").unwrap();
    assert_eq!(model.selected().copied().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(
        drain(&seen),
        vec![
            SelectionEvent::FirstSelected,
            SelectionEvent::PenultSelected,
            SelectionEvent::PanelSelected("b"),
        ]
    );
}

#[test]
fn test_select_to_first_and_last() {
    let (mut model, _seen) = model(&["a", "b", "c", "d"]);
    model.click(&"b").unwrap();
    model.select_to_last();
    assert_eq!(model.selected_in_order(), vec!["b", "c", "d"]);
    assert_eq!(model.latest_selected(), Some(&"d"));

    model.select_to_first();
    assert!(model.is_all_selected());
    assert_eq!(model.latest_selected(), Some(&"a"));
}

#[test]
fn test_clear_emits_all_unselected() {
    let (mut model, seen) = model(&["a", "b"]);
    model.clear();
    assert!(drain(&seen).is_empty());

    model.select_all();
    assert_eq!(
        drain(&seen),
        vec![
            SelectionEvent::FirstSelected,
            SelectionEvent::AllSelected,
            SelectionEvent::PanelSelected("b"),
        ]
    );

    model.clear();
    assert_eq!(drain(&seen), vec![SelectionEvent::AllUnselected]);
    assert_eq!(model.latest_selected(), None);
}

#[test]
fn test_unknown_item_leaves_model_untouched() {
    let (mut model, seen) = model(&["a", "b"]);
    model.click(&"a").unwrap();
    drain(&seen);

    assert_eq!(
        model.click(&"z"),
        Err(SelectionError::UnknownItem("\"z\"".to_string()))
    );
    assert!(model.ctrl_click(&"z").is_err());
    assert!(model.shift_click(&"z").is_err());

    assert_eq!(model.selected().copied().collect::<Vec<_>>(), vec!["a"]);
    assert!(drain(&seen).is_empty());
}

#[test]
fn test_set_order_preserves_selection() {
    let (mut model, seen) = model(&["a", "b", "c"]);
    model.click(&"c").unwrap();
    model.ctrl_click(&"a").unwrap();
    drain(&seen);

    model.set_order(["c", "b", "a"], true).unwrap();
    assert_eq!(model.order().copied().collect::<Vec<_>>(), vec!["c", "b", "a"]);
    assert_eq!(model.selected().copied().collect::<Vec<_>>(), vec!["c", "a"]);
    assert_eq!(model.latest_selected(), Some(&"a"));
    assert!(drain(&seen).is_empty());
}

#[test]
fn test_set_order_clears_when_selected_item_missing() {
    let (mut model, seen) = model(&["a", "b", "c"]);
    model.click(&"b").unwrap();
    drain(&seen);

    model.set_order(["a", "c"], true).unwrap();
    assert_eq!(model.selected_count(), 0);
    assert_eq!(model.latest_selected(), None);
    assert_eq!(drain(&seen), vec![SelectionEvent::AllUnselected]);
}

#[test]
fn test_set_order_without_preserve_clears() {
    let (mut model, seen) = model(&["a", "b"]);
    model.select_all();
    drain(&seen);

    model.set_order(["b", "a"], false).unwrap();
    assert_eq!(model.selected_count(), 0);
    assert_eq!(drain(&seen), vec![SelectionEvent::AllUnselected]);
}

#[test]
fn test_set_order_rejects_duplicates() {
    let (mut model, _seen) = model(&["a", "b"]);
    model.click(&"a").unwrap();
    let result = model.set_order(["a", "a"], true);
    assert_eq!(result, Err(SelectionError::DuplicateItem("\"a\"".to_string())));
    assert_eq!(model.order().count(), 2);
    assert!(model.is_selected(&"a"));
}

#[test]
fn test_set_order_growing_list_crosses_penult() {
    let (mut model, seen) = model(&["a", "b"]);
    model.select_all();
    drain(&seen);

    model.set_order(["a", "b", "c"], true).unwrap();
    assert_eq!(drain(&seen), vec![SelectionEvent::PenultSelected]);
}

#[test]
fn test_filtered_subscription() {
    let (mut model, _seen) = model(&["a", "b", "c"]);
    let focused = Arc::new(Mutex::new(Vec::new()));
    let sink = focused.clone();
    let id = model.events().subscribe(
        EventFilter::Kinds(vec![SelectionEventKind::PanelSelected]),
        move |event| sink.lock().push(event),
    );

    model.click(&"a").unwrap();
    model.shift_click(&"c").unwrap();
    assert!(model.events().unsubscribe(id));
    model.click(&"b").unwrap();

    assert_eq!(
        *focused.lock(),
        vec![SelectionEvent::PanelSelected("a"), SelectionEvent::PanelSelected("c")]
    );
}
