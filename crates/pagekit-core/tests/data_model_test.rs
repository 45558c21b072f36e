use pagekit_core::{
    DocumentEditState, DocumentId, ExportInput, PageIndex, Rotation, RotationDirection,
};
use std::path::Path;

#[test]
fn test_rotation_serde_names() {
    assert_eq!(serde_json::to_string(&Rotation::East).unwrap(), "\"east\"");
    assert_eq!(
        serde_json::from_str::<RotationDirection>("\"counter_clockwise\"").unwrap(),
        RotationDirection::CounterClockwise
    );
}

#[test]
fn test_page_index_is_transparent() {
    assert_eq!(serde_json::to_string(&PageIndex::new(3)).unwrap(), "3");
    let pages: Vec<PageIndex> = serde_json::from_str("[0, 2]").unwrap();
    assert_eq!(pages, vec![PageIndex::new(0), PageIndex::new(2)]);
}

#[test]
fn test_document_id_display() {
    let id = DocumentId::new();
    let shown = id.to_string();
    assert!(shown.starts_with("Doc("));
    assert_eq!(shown.len(), "Doc(".len() + 8 + 1);
    assert_ne!(id, DocumentId::new());
}

#[test]
fn test_export_input_borrows_state() {
    let state = DocumentEditState::initial(2).rotated_all(RotationDirection::Clockwise);
    let id = DocumentId::new();
    let input = ExportInput::new(id, Path::new("a.pdf"), &state);
    assert_eq!(input.id, id);
    assert_eq!(input.state.first(), Some((PageIndex::new(0), Rotation::East)));
}

#[test]
fn test_from_angle_normalises() {
    assert_eq!(Rotation::from_angle(-90).unwrap(), Rotation::West);
    assert_eq!(Rotation::from_angle(450).unwrap(), Rotation::East);
    assert!(Rotation::from_angle(45).is_err());
}
