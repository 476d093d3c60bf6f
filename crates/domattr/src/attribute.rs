//! The public attribute vocabulary and its lowering to [`RawEntry`].

use indexmap::IndexMap;

use crate::class_set::{ClassNameError, ClassSet};
use crate::host::HostValue;
use crate::raw::RawEntry;
use crate::style::{Css, StyleModel};

/// One piece of desired element state.
///
/// Exactly one of [`Attribute::as_style`], [`Attribute::as_class`] and
/// [`Attribute::as_raw`] returns `Some` for any value.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Style(Css),
    Class(ClassSet),
    Raw(RawEntry),
}

impl Attribute {
    // --- Style and class ---

    pub fn style(css: Css) -> Self {
        Attribute::Style(css)
    }

    /// Style from any [`StyleModel`], snapshotted at construction.
    pub fn style_from(model: &dyn StyleModel) -> Self {
        Attribute::Style(Css::from_model(model))
    }

    pub fn class(name: impl Into<String>) -> Result<Self, ClassNameError> {
        ClassSet::singleton(name).map(Attribute::Class)
    }

    pub fn classes<I, S>(names: I) -> Result<Self, ClassNameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassSet::from_list(names).map(Attribute::Class)
    }

    pub fn classes_from_set(set: ClassSet) -> Self {
        Attribute::Class(set)
    }

    // --- Raw entries ---

    /// A markup attribute with a string value.
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value: String = value.into();
        Attribute::Raw(RawEntry::attribute(name, value))
    }

    /// A DOM property with an already host-representable value.
    pub fn property(name: impl Into<String>, value: HostValue) -> Self {
        Attribute::Raw(RawEntry::property(name, value))
    }

    pub fn string_property(name: impl Into<String>, value: &str) -> Self {
        Self::property(name, HostValue::text(value))
    }

    /// A markup attribute holding the decimal form of `value`.
    pub fn float_attribute(name: impl Into<String>, value: f64) -> Self {
        Self::raw(name, value.to_string())
    }

    // --- Common HTML attributes ---

    pub fn id(id: impl Into<String>) -> Self {
        Self::raw("id", id)
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::raw("name", name)
    }

    pub fn href(url: impl Into<String>) -> Self {
        Self::raw("href", url)
    }

    /// Boolean attributes are present with an empty value.
    pub fn checked() -> Self {
        Self::raw("checked", "")
    }

    pub fn selected() -> Self {
        Self::raw("selected", "")
    }

    pub fn disabled() -> Self {
        Self::raw("disabled", "")
    }

    pub fn autofocus() -> Self {
        Self::raw("autofocus", "")
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self::raw("placeholder", text)
    }

    /// The `for` attribute of a label.
    pub fn html_for(id: impl Into<String>) -> Self {
        Self::raw("for", id)
    }

    pub fn type_(kind: impl Into<String>) -> Self {
        Self::raw("type", kind)
    }

    pub fn tabindex(index: i32) -> Self {
        Self::raw("tabindex", index.to_string())
    }

    /// The live `value` property; merged through the soft-set hook.
    pub fn value(value: impl Into<String>) -> Self {
        Self::property("value", HostValue::Text(value.into()))
    }

    // --- Down-projections ---

    pub fn as_style(&self) -> Option<&Css> {
        match self {
            Attribute::Style(css) => Some(css),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassSet> {
        match self {
            Attribute::Class(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawEntry> {
        match self {
            Attribute::Raw(entry) => Some(entry),
            _ => None,
        }
    }

    // --- Lowering ---

    pub fn to_raw_entry(&self) -> RawEntry {
        self.clone().into_raw_entry()
    }

    pub fn into_raw_entry(self) -> RawEntry {
        match self {
            Attribute::Style(css) => {
                let mut style = IndexMap::with_capacity(css.len());
                for (property, value) in css.declarations() {
                    style.insert(property, value);
                }
                RawEntry::property("style", HostValue::Style(style))
            }
            Attribute::Class(set) => RawEntry::attribute("class", set.joined()),
            Attribute::Raw(entry) => entry,
        }
    }
}

impl From<RawEntry> for Attribute {
    fn from(entry: RawEntry) -> Self {
        Attribute::Raw(entry)
    }
}

impl From<ClassSet> for Attribute {
    fn from(set: ClassSet) -> Self {
        Attribute::Class(set)
    }
}

impl From<Css> for Attribute {
    fn from(css: Css) -> Self {
        Attribute::Style(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::merge;

    fn projections(attribute: &Attribute) -> usize {
        usize::from(attribute.as_style().is_some())
            + usize::from(attribute.as_class().is_some())
            + usize::from(attribute.as_raw().is_some())
    }

    #[test]
    fn exactly_one_projection_succeeds() {
        let all = [
            Attribute::style(Css::new().with("color", "red")),
            Attribute::class("a").unwrap(),
            Attribute::id("x"),
            Attribute::value("v"),
        ];
        for attribute in &all {
            assert_eq!(projections(attribute), 1, "{attribute:?}");
        }
    }

    #[test]
    fn style_lowers_to_style_property() {
        let entry = Attribute::style(Css::new().with("color", "red").with("width", "10px"))
            .into_raw_entry();
        let RawEntry::Property { name, value } = entry else {
            panic!("style must lower to a property");
        };
        assert_eq!(name, "style");
        let style = value.as_style().unwrap();
        assert_eq!(style.get("color").map(String::as_str), Some("red"));
        assert_eq!(style.get_index(1).map(|(k, _)| k.as_str()), Some("width"));
    }

    #[test]
    fn class_lowers_to_joined_attribute() {
        let entry = Attribute::classes(["b", "a", "b"]).unwrap().to_raw_entry();
        assert_eq!(entry, RawEntry::attribute("class", "a b"));
    }

    #[test]
    fn class_singleton_lowers_to_itself() {
        for name in ["x", "card--wide", "2col"] {
            let entry = Attribute::class(name).unwrap().into_raw_entry();
            assert_eq!(entry.value().as_text(), Some(name));
        }
    }

    #[test]
    fn invalid_class_fails_construction() {
        assert!(Attribute::class("").is_err());
        assert!(Attribute::class("two words").is_err());
        assert!(Attribute::classes(["fine", "bad\t"]).is_err());
    }

    #[test]
    fn raw_lowering_is_identity() {
        let entry = RawEntry::attribute("data-x", "1");
        assert_eq!(Attribute::from(entry.clone()).into_raw_entry(), entry);
    }

    #[test]
    fn common_attributes_use_fixed_names() {
        let cases = [
            (Attribute::id("i"), "id", "i"),
            (Attribute::name("n"), "name", "n"),
            (Attribute::href("/h"), "href", "/h"),
            (Attribute::checked(), "checked", ""),
            (Attribute::selected(), "selected", ""),
            (Attribute::disabled(), "disabled", ""),
            (Attribute::autofocus(), "autofocus", ""),
            (Attribute::placeholder("p"), "placeholder", "p"),
            (Attribute::html_for("f"), "for", "f"),
            (Attribute::type_("text"), "type", "text"),
            (Attribute::tabindex(-1), "tabindex", "-1"),
        ];
        for (attribute, name, value) in cases {
            let entry = attribute.into_raw_entry();
            assert!(!entry.is_property(), "{name} should be an attribute");
            assert_eq!(entry.name(), name);
            assert_eq!(entry.value().as_text(), Some(value));
        }
    }

    #[test]
    fn value_is_a_property() {
        let entry = Attribute::value("x").into_raw_entry();
        assert!(entry.is_property());
        assert_eq!(entry.name(), "value");
    }

    #[test]
    fn float_attribute_formats_decimal() {
        assert_eq!(
            Attribute::float_attribute("opacity", 0.5).into_raw_entry(),
            RawEntry::attribute("opacity", "0.5")
        );
        assert_eq!(
            Attribute::float_attribute("width", 2.0).into_raw_entry(),
            RawEntry::attribute("width", "2")
        );
    }

    #[test]
    fn merges_mixed_list() {
        let host = merge([
            Attribute::string_property("a", "1"),
            Attribute::raw("b", "2"),
            Attribute::string_property("a", "3"),
            Attribute::classes(["x", "y"]).unwrap(),
            Attribute::style(Css::new().with("display", "none")),
        ]);
        assert_eq!(host.property("a").and_then(HostValue::as_text), Some("3"));
        assert_eq!(host.attribute("b").and_then(HostValue::as_text), Some("2"));
        assert_eq!(host.attribute("class").and_then(HostValue::as_text), Some("x y"));
        assert!(host.property("style").and_then(HostValue::as_style).is_some());
    }
}
