//! Lowered entries and the merge that folds them into one host object.

use crate::attribute::Attribute;
use crate::host::{HostAttributeObject, HostValue, SoftSetHook};

/// The one property whose writes go through [`SoftSetHook`].
pub const VALUE_PROPERTY: &str = "value";

/// A single lowered write.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEntry {
    /// Assigned onto the element itself (a live DOM property).
    Property { name: String, value: HostValue },
    /// Assigned into the element's markup attributes.
    Attribute { name: String, value: HostValue },
}

impl RawEntry {
    pub fn property(name: impl Into<String>, value: impl Into<HostValue>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "property name must not be empty");
        RawEntry::Property {
            name,
            value: value.into(),
        }
    }

    pub fn attribute(name: impl Into<String>, value: impl Into<HostValue>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "attribute name must not be empty");
        RawEntry::Attribute {
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            RawEntry::Property { name, .. } | RawEntry::Attribute { name, .. } => name,
        }
    }

    pub fn value(&self) -> &HostValue {
        match self {
            RawEntry::Property { value, .. } | RawEntry::Attribute { value, .. } => value,
        }
    }

    pub fn is_property(&self) -> bool {
        matches!(self, RawEntry::Property { .. })
    }
}

impl HostAttributeObject {
    /// Folds lowered entries in order; a later write to the same name wins.
    pub fn from_entries(entries: impl IntoIterator<Item = RawEntry>) -> Self {
        let mut host = HostAttributeObject::new();
        for entry in entries {
            host.write(entry);
        }
        host
    }

    fn write(&mut self, entry: RawEntry) {
        match entry {
            RawEntry::Property { name, value } if name == VALUE_PROPERTY => {
                self.insert_property(name, HostValue::SoftSet(SoftSetHook::new(value)));
            }
            RawEntry::Property { name, value } => self.insert_property(name, value),
            RawEntry::Attribute { name, value } => self.insert_attribute(name, value),
        }
    }
}

/// Lowers every attribute and merges them into a fresh host object.
pub fn merge(attributes: impl IntoIterator<Item = Attribute>) -> HostAttributeObject {
    let host = HostAttributeObject::from_entries(
        attributes.into_iter().map(Attribute::into_raw_entry),
    );
    log::trace!(
        "merged host object: {} properties, {} attributes",
        host.properties().len(),
        host.attributes().map_or(0, |attributes| attributes.len())
    );
    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_property_overwrites_earlier() {
        let host = HostAttributeObject::from_entries([
            RawEntry::property("a", "1"),
            RawEntry::attribute("b", "2"),
            RawEntry::property("a", "3"),
        ]);
        assert_eq!(host.property("a"), Some(&HostValue::text("3")));
        assert_eq!(host.attribute("b"), Some(&HostValue::text("2")));
        assert_eq!(host.properties().len(), 1);
    }

    #[test]
    fn later_attribute_overwrites_earlier() {
        let host = HostAttributeObject::from_entries([
            RawEntry::attribute("id", "first"),
            RawEntry::attribute("id", "second"),
        ]);
        assert_eq!(host.attribute("id").and_then(HostValue::as_text), Some("second"));
        assert!(host.properties().is_empty());
    }

    #[test]
    fn properties_only_leave_attributes_absent() {
        let host = HostAttributeObject::from_entries([
            RawEntry::property("title", "x"),
            RawEntry::property("hidden", "true"),
        ]);
        assert!(!host.has_attributes());
        assert!(host.attributes().is_none());
    }

    #[test]
    fn property_and_attribute_with_same_name_stay_separate() {
        let host = HostAttributeObject::from_entries([
            RawEntry::property("title", "prop"),
            RawEntry::attribute("title", "attr"),
        ]);
        assert_eq!(host.property("title").and_then(HostValue::as_text), Some("prop"));
        assert_eq!(host.attribute("title").and_then(HostValue::as_text), Some("attr"));
    }

    #[test]
    fn value_property_goes_through_soft_set() {
        let host = HostAttributeObject::from_entries([RawEntry::property("value", "typed")]);
        let hook = host.property("value").and_then(HostValue::as_soft_set).unwrap();
        assert_eq!(hook.candidate(), &HostValue::text("typed"));
    }

    #[test]
    fn only_exact_value_name_is_special() {
        let host = HostAttributeObject::from_entries([
            RawEntry::property("Value", "a"),
            RawEntry::property("valueAsNumber", "1"),
            RawEntry::property("defaultValue", "b"),
            RawEntry::attribute("value", "c"),
        ]);
        for name in ["Value", "valueAsNumber", "defaultValue"] {
            assert!(!host.property(name).unwrap().is_soft_set(), "{name}");
        }
        assert_eq!(host.attribute("value"), Some(&HostValue::text("c")));
    }

    #[test]
    fn first_write_order_is_kept_on_overwrite() {
        let host = HostAttributeObject::from_entries([
            RawEntry::property("a", "1"),
            RawEntry::property("b", "2"),
            RawEntry::property("a", "3"),
        ]);
        let names: Vec<&str> = host.properties().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_gives_empty_object() {
        let host = merge(Vec::<Attribute>::new());
        assert!(host.is_empty());
    }
}
