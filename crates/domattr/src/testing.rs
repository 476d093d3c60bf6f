//! In-memory DOM doubles for driving handlers without a browser.
//! Provides fake elements and events plus a dispatcher that records what it receives.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::attribute::Attribute;
use crate::event::{Dispatcher, Event};
use crate::host::{DomElement, DomEvent, EventHandler, ValueElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FakeKind {
    Input,
    Select,
    TextArea,
    Other,
}

/// An element with a tag name and, for form controls, a mutable value.
#[derive(Debug)]
pub struct FakeElement {
    tag: String,
    kind: FakeKind,
    value: RefCell<String>,
    writes: Cell<usize>,
}

impl FakeElement {
    fn with_kind(tag: &str, kind: FakeKind, value: &str) -> Self {
        Self {
            tag: tag.to_string(),
            kind,
            value: RefCell::new(value.to_string()),
            writes: Cell::new(0),
        }
    }

    pub fn input(value: &str) -> Self {
        Self::with_kind("input", FakeKind::Input, value)
    }

    pub fn select(value: &str) -> Self {
        Self::with_kind("select", FakeKind::Select, value)
    }

    pub fn textarea(value: &str) -> Self {
        Self::with_kind("textarea", FakeKind::TextArea, value)
    }

    /// An element without a `value` capability, e.g. `div` or `button`.
    pub fn other(tag: &str) -> Self {
        Self::with_kind(tag, FakeKind::Other, "")
    }

    /// How many times `set_value` ran.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn value_view(&self, kind: FakeKind) -> Option<Box<dyn ValueElement + '_>> {
        (self.kind == kind).then(|| Box::new(self) as Box<dyn ValueElement + '_>)
    }
}

impl ValueElement for FakeElement {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
        self.writes.set(self.writes.get() + 1);
    }
}

impl DomElement for FakeElement {
    fn tag_name(&self) -> String {
        self.tag.to_uppercase()
    }

    fn as_input(&self) -> Option<Box<dyn ValueElement + '_>> {
        self.value_view(FakeKind::Input)
    }

    fn as_select(&self) -> Option<Box<dyn ValueElement + '_>> {
        self.value_view(FakeKind::Select)
    }

    fn as_textarea(&self) -> Option<Box<dyn ValueElement + '_>> {
        self.value_view(FakeKind::TextArea)
    }
}

/// A dispatched event, optionally carrying a target element.
#[derive(Debug)]
pub struct FakeEvent {
    event_type: String,
    target: Option<FakeElement>,
}

impl FakeEvent {
    pub fn new(event_type: &str, target: FakeElement) -> Self {
        Self {
            event_type: event_type.to_string(),
            target: Some(target),
        }
    }

    pub fn without_target(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            target: None,
        }
    }

    pub fn target_element(&self) -> Option<&FakeElement> {
        self.target.as_ref()
    }
}

impl DomEvent for FakeEvent {
    fn event_type(&self) -> String {
        self.event_type.clone()
    }

    fn target(&self) -> Option<Box<dyn DomElement + '_>> {
        self.target
            .as_ref()
            .map(|element| Box::new(element) as Box<dyn DomElement + '_>)
    }
}

/// Collects every event it is asked to handle. Clones share the log.
pub struct RecordingDispatcher<A> {
    events: Rc<RefCell<Vec<Event<A>>>>,
}

impl<A> RecordingDispatcher<A> {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Drains the recorded events.
    pub fn take(&self) -> Vec<Event<A>> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl<A> Default for RecordingDispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for RecordingDispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<A> Dispatcher<A> for RecordingDispatcher<A> {
    fn handle(&self, event: Event<A>) {
        self.events.borrow_mut().push(event);
    }
}

/// The handler installed by an event subscription attribute.
pub fn handler_of(attribute: &Attribute) -> Option<&EventHandler> {
    attribute.as_raw()?.value().as_handler()
}
