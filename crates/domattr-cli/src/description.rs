//! JSON descriptions of attribute lists, as read by `domattr merge`.

use domattr::{Attribute, ClassNameError, Css, DomEvent, Event, EventAttrs};
use serde::Deserialize;

/// One entry of the input array, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttrDescription {
    Attribute { name: String, value: String },
    Property { name: String, value: String },
    Float { name: String, value: f64 },
    Class { names: Vec<String> },
    Style { declarations: Vec<(String, String)> },
    Event { name: String },
}

impl AttrDescription {
    /// Builds the attribute; event subscriptions dispatch through `events`.
    pub fn build(self, events: &EventAttrs<String>) -> Result<Attribute, ClassNameError> {
        let attribute = match self {
            AttrDescription::Attribute { name, value } => Attribute::raw(name, value),
            AttrDescription::Property { name, value } => Attribute::string_property(name, &value),
            AttrDescription::Float { name, value } => Attribute::float_attribute(name, value),
            AttrDescription::Class { names } => Attribute::classes(names)?,
            AttrDescription::Style { declarations } => Attribute::style(Css::from_pairs(declarations)),
            AttrDescription::Event { name } => {
                let label = name.clone();
                events.on(&name, move |event| {
                    Event::Action(format!("{label}: {}", event.event_type()))
                })
            }
        };
        Ok(attribute)
    }
}

pub fn parse(json: &str) -> serde_json::Result<Vec<AttrDescription>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domattr::{HostValue, merge};

    fn logging_events() -> EventAttrs<String> {
        EventAttrs::new(|event: Event<String>| {
            for action in event.into_actions() {
                log::info!("{action}");
            }
        })
    }

    #[test]
    fn parses_every_kind() {
        let parsed = parse(
            r#"[
                {"kind": "attribute", "name": "id", "value": "main"},
                {"kind": "property", "name": "value", "value": "hi"},
                {"kind": "float", "name": "opacity", "value": 0.25},
                {"kind": "class", "names": ["a", "b"]},
                {"kind": "style", "declarations": [["color", "red"]]},
                {"kind": "event", "name": "click"}
            ]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 6);
        assert_eq!(
            parsed[2],
            AttrDescription::Float {
                name: "opacity".into(),
                value: 0.25
            }
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(parse(r#"[{"kind": "bogus"}]"#).is_err());
    }

    #[test]
    fn builds_and_merges() {
        let events = logging_events();
        let attributes = parse(
            r#"[
                {"kind": "class", "names": ["b", "a", "b"]},
                {"kind": "property", "name": "value", "value": "hi"},
                {"kind": "event", "name": "input"}
            ]"#,
        )
        .unwrap()
        .into_iter()
        .map(|description| description.build(&events))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
        let host = merge(attributes);
        assert_eq!(host.attribute("class").and_then(HostValue::as_text), Some("a b"));
        assert!(host.property("value").unwrap().is_soft_set());
        assert!(host.property("oninput").and_then(HostValue::as_handler).is_some());
    }

    #[test]
    fn invalid_class_surfaces_error() {
        let events = logging_events();
        let description = AttrDescription::Class {
            names: vec!["ok".into(), "not ok".into()],
        };
        let error = description.build(&events).unwrap_err();
        assert_eq!(error.invalid_names(), &["not ok".to_string()]);
    }
}
