//! Build → lower → merge, checked against the host object shape the patch engine expects.

use domattr::{Attribute, ClassSet, Css, HostValue, merge};

#[test]
fn later_same_name_property_wins_and_attribute_is_nested() {
    let host = merge([
        Attribute::string_property("a", "1"),
        Attribute::raw("b", "2"),
        Attribute::string_property("a", "3"),
    ]);
    assert_eq!(host.property("a"), Some(&HostValue::text("3")));
    assert_eq!(host.attribute("b"), Some(&HostValue::text("2")));
    assert!(host.property("b").is_none());
}

#[test]
fn no_attribute_entries_means_no_attributes_key() {
    let host = merge([
        Attribute::string_property("title", "t"),
        Attribute::style(Css::new().with("color", "red")),
        Attribute::value("v"),
    ]);
    assert!(!host.has_attributes());
    let json = serde_json::to_value(&host).unwrap();
    assert!(json.get("attributes").is_none());
}

#[test]
fn duplicate_classes_appear_once() {
    let host = merge([Attribute::classes(["btn", "primary", "btn", "primary", "wide"]).unwrap()]);
    let class = host.attribute("class").and_then(HostValue::as_text).unwrap();
    let mut tokens: Vec<&str> = class.split(' ').collect();
    assert_eq!(tokens.len(), 3);
    tokens.dedup();
    assert_eq!(tokens, vec!["btn", "primary", "wide"]);
}

#[test]
fn class_attribute_is_overwritten_not_accumulated() {
    let first = ClassSet::from_list(["a", "b"]).unwrap();
    let second = ClassSet::singleton("c").unwrap();
    let host = merge([
        Attribute::classes_from_set(first),
        Attribute::classes_from_set(second),
    ]);
    assert_eq!(host.attribute("class").and_then(HostValue::as_text), Some("c"));
}

#[test]
fn only_value_property_is_soft_set() {
    let host = merge([
        Attribute::value("draft"),
        Attribute::string_property("title", "draft"),
        Attribute::raw("value", "markup"),
    ]);
    assert!(host.property("value").unwrap().is_soft_set());
    assert!(!host.property("title").unwrap().is_soft_set());
    assert_eq!(host.attribute("value").and_then(HostValue::as_text), Some("markup"));
}

#[test]
fn wire_shape_matches_patch_engine_contract() {
    let host = merge([
        Attribute::id("field"),
        Attribute::style(Css::new().with("width", "10px")),
        Attribute::value("abc"),
        Attribute::checked(),
        Attribute::tabindex(3),
    ]);
    let json = serde_json::to_value(&host).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "style": { "width": "10px" },
            "value": { "soft_set": "abc" },
            "attributes": { "id": "field", "checked": "", "tabindex": "3" }
        })
    );
}

#[test]
fn merges_are_independent() {
    let attributes = vec![Attribute::id("one"), Attribute::string_property("p", "x")];
    let first = merge(attributes.clone());
    let second = merge(attributes);
    assert_eq!(first, second);
}
