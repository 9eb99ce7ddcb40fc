use memspec::{PlainVariant as _, Variant as _, plain_variant};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

#[plain_variant(Count = u64)]
#[plain_variant(Name = String)]
#[plain_variant(Point)]
#[plain_variant(derive(Debug, Clone, PartialEq))]
pub struct Entry;

// Point accepts every Point3 document, so it must come last to be reachable
#[plain_variant(Point3)]
#[plain_variant(Point)]
#[plain_variant(derive(Debug))]
pub struct Coordinates;

#[plain_variant(Point)]
#[plain_variant(Point3)]
#[plain_variant(derive(Debug))]
pub struct Shadowed;

#[test]
fn first_success_wins() {
    let value = Entry::from_document(&json!(12));
    assert_eq!(value, Entry::from(12u64));

    let value = Entry::from_document(&json!("twelve"));
    assert!(matches!(value.get_variant(), Some(EntryKind::Name(name)) if name == "twelve"));

    let value = Entry::from_document(&json!({ "x": 1, "y": 2 }));
    assert!(matches!(value.get_variant(), Some(EntryKind::Point(Point { x: 1, y: 2 }))));
}

#[test]
fn declaration_order_decides() {
    let document = json!({ "x": 1, "y": 2, "z": 3 });

    let coordinates = Coordinates::from_document(&document);
    assert!(matches!(coordinates.get_variant(), Some(CoordinatesKind::Point3(_))));

    // Unknown fields are ignored, so the earlier member wins
    let shadowed = Shadowed::from_document(&document);
    assert!(matches!(shadowed.get_variant(), Some(ShadowedKind::Point(_))));
}

#[test]
fn no_match_is_empty() {
    assert!(Entry::from_document(&json!(true)).is_empty());
    assert!(Entry::from_document(&json!(-1)).is_empty());
    assert!(Entry::from_document(&json!(null)).is_empty());
}

#[test]
fn written_untagged() -> anyhow::Result<()> {
    let value: Entry = Point { x: 4, y: 5 }.into();
    assert_eq!(value.to_document()?, json!({ "x": 4, "y": 5 }));
    assert_eq!(serde_json::to_string(&value)?, r#"{"x":4,"y":5}"#);

    assert_eq!(Entry::default().to_document()?, json!(null));

    let parsed: Entry = serde_json::from_str("\"name\"")?;
    assert_eq!(parsed, Entry::from("name".to_string()));

    // A derived struct also reads its fields from an array, in declaration order
    let parsed: Entry = serde_json::from_str("[1, 2]")?;
    assert_eq!(parsed, Entry::from(Point { x: 1, y: 2 }));

    // Deserialization itself never fails on a valid document
    let parsed: Entry = serde_json::from_str(r#"["x", "y"]"#)?;
    assert!(parsed.is_empty());
    Ok(())
}
