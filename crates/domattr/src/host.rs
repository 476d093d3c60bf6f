//! The host-side vocabulary: opaque values, the merged host object, and the
//! minimal DOM capabilities the event adapter and soft-set hook rely on.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Reserved key of the nested attribute map in the host object's wire form.
pub const ATTRIBUTES_KEY: &str = "attributes";

// --- DOM capabilities ---

/// A raw event as delivered by the host environment.
pub trait DomEvent {
    /// DOM event type, e.g. `"input"`.
    fn event_type(&self) -> String;

    /// The element the event was dispatched to, if any.
    fn target(&self) -> Option<Box<dyn DomElement + '_>>;
}

/// A generic DOM element with optional capability checks.
///
/// Each check either confirms the element is of that kind and hands out a
/// view of its `value`, or returns `None`.
pub trait DomElement {
    fn tag_name(&self) -> String;

    fn as_input(&self) -> Option<Box<dyn ValueElement + '_>> {
        None
    }

    fn as_select(&self) -> Option<Box<dyn ValueElement + '_>> {
        None
    }

    fn as_textarea(&self) -> Option<Box<dyn ValueElement + '_>> {
        None
    }
}

/// An element exposing a string `value` property.
pub trait ValueElement {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

impl<T: DomElement + ?Sized> DomElement for &T {
    fn tag_name(&self) -> String {
        (**self).tag_name()
    }

    fn as_input(&self) -> Option<Box<dyn ValueElement + '_>> {
        (**self).as_input()
    }

    fn as_select(&self) -> Option<Box<dyn ValueElement + '_>> {
        (**self).as_select()
    }

    fn as_textarea(&self) -> Option<Box<dyn ValueElement + '_>> {
        (**self).as_textarea()
    }
}

impl<T: ValueElement + ?Sized> ValueElement for &T {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value)
    }
}

// --- Opaque values ---

/// A host-callable event listener.
///
/// Cloning shares the same callable; equality is identity.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&dyn DomEvent) -> bool>);

impl EventHandler {
    pub fn new(handler: impl Fn(&dyn DomEvent) -> bool + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Invokes the listener the way the host's event dispatch would.
    pub fn call(&self, event: &dyn DomEvent) -> bool {
        (self.0)(event)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler(..)")
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

/// Conditional assignment for the `value` property.
///
/// Re-assigning an input's `value` to what it already holds moves the caret to
/// the end of the field, so the write only happens when the live value differs.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftSetHook {
    candidate: Box<HostValue>,
}

impl SoftSetHook {
    pub fn new(candidate: HostValue) -> Self {
        Self {
            candidate: Box::new(candidate),
        }
    }

    pub fn candidate(&self) -> &HostValue {
        &self.candidate
    }

    /// Whether a write is needed given the element's current value.
    ///
    /// Only text candidates can be compared with and written through a
    /// [`ValueElement`]; anything else never needs (or gets) a write here.
    pub fn should_assign(&self, current: Option<&str>) -> bool {
        self.text_to_write(current).is_some()
    }

    /// Compares and assigns. Returns `true` if the element was written.
    pub fn apply(&self, target: &dyn ValueElement) -> bool {
        let current = target.value();
        let Some(candidate) = self.text_to_write(Some(&current)) else {
            return false;
        };
        target.set_value(candidate);
        true
    }

    fn text_to_write(&self, current: Option<&str>) -> Option<&str> {
        let Some(candidate) = self.candidate.as_text() else {
            log::warn!(
                "soft-set candidate for `value` is not text ({:?}), skipping write",
                self.candidate
            );
            return None;
        };
        (current != Some(candidate)).then_some(candidate)
    }
}

/// A value already in host-representable form. Merging never transforms it.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Text(String),
    /// Inline style object, property name to value.
    Style(IndexMap<String, String>),
    Handler(EventHandler),
    /// The `value` property routed through [`SoftSetHook`].
    SoftSet(SoftSetHook),
}

impl HostValue {
    pub fn text(text: impl Into<String>) -> Self {
        HostValue::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            HostValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_style(&self) -> Option<&IndexMap<String, String>> {
        match self {
            HostValue::Style(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            HostValue::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    pub fn as_soft_set(&self) -> Option<&SoftSetHook> {
        match self {
            HostValue::SoftSet(hook) => Some(hook),
            _ => None,
        }
    }

    pub fn is_soft_set(&self) -> bool {
        matches!(self, HostValue::SoftSet(_))
    }
}

impl From<String> for HostValue {
    fn from(text: String) -> Self {
        HostValue::Text(text)
    }
}

impl From<&str> for HostValue {
    fn from(text: &str) -> Self {
        HostValue::Text(text.to_string())
    }
}

impl From<EventHandler> for HostValue {
    fn from(handler: EventHandler) -> Self {
        HostValue::Handler(handler)
    }
}

impl Serialize for HostValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HostValue::Text(text) => serializer.serialize_str(text),
            HostValue::Style(style) => style.serialize(serializer),
            HostValue::Handler(_) => serializer.serialize_str("<event handler>"),
            HostValue::SoftSet(hook) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("soft_set", hook.candidate())?;
                map.end()
            }
        }
    }
}

// --- Host object ---

/// The merged description handed to the patch engine.
///
/// Properties go straight onto the element; attributes live in a separate map
/// that only exists once an attribute has been written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostAttributeObject {
    properties: IndexMap<String, HostValue>,
    attributes: Option<IndexMap<String, HostValue>>,
}

impl HostAttributeObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&HostValue> {
        self.properties.get(name)
    }

    pub fn attribute(&self, name: &str) -> Option<&HostValue> {
        self.attributes.as_ref()?.get(name)
    }

    /// Properties in first-write order.
    pub fn properties(&self) -> &IndexMap<String, HostValue> {
        &self.properties
    }

    pub fn attributes(&self) -> Option<&IndexMap<String, HostValue>> {
        self.attributes.as_ref()
    }

    pub fn has_attributes(&self) -> bool {
        self.attributes.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.attributes.is_none()
    }

    pub(crate) fn insert_property(&mut self, name: String, value: HostValue) {
        self.properties.insert(name, value);
    }

    pub(crate) fn insert_attribute(&mut self, name: String, value: HostValue) {
        self.attributes
            .get_or_insert_with(IndexMap::new)
            .insert(name, value);
    }
}

impl Serialize for HostAttributeObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // A property literally named "attributes" is shadowed by the nested map,
        // same as on the host where the nested map is assigned last.
        let shadowed = self.attributes.is_some() && self.properties.contains_key(ATTRIBUTES_KEY);
        if shadowed {
            log::warn!(
                "property {ATTRIBUTES_KEY:?} is shadowed by the nested attribute map and left out"
            );
        }
        let len = self.properties.len() - usize::from(shadowed) + usize::from(self.attributes.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (name, value) in &self.properties {
            if shadowed && name == ATTRIBUTES_KEY {
                continue;
            }
            map.serialize_entry(name, value)?;
        }
        if let Some(attributes) = &self.attributes {
            map.serialize_entry(ATTRIBUTES_KEY, attributes)?;
        }
        map.end()
    }
}
