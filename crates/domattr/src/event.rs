//! Event subscriptions as attribute-shaped properties.
//!
//! An event subscription is a property named `"on" + <event>` whose value is a
//! host-callable [`EventHandler`]. When the host invokes it, the raw event is
//! converted into a domain [`Event`] and handed to the injected [`Dispatcher`],
//! which performs the actual side effect. The handler itself only decides what
//! value a raw event produces.

use std::rc::Rc;

use futures_channel::mpsc;

use crate::attribute::Attribute;
use crate::host::{DomElement, DomEvent, EventHandler, HostValue, ValueElement};

/// What every handler returns to the host: the event was handled.
///
/// Returned even when the conversion produced [`Event::Ignore`].
pub const HANDLED: bool = true;

/// A domain-level event produced from a raw DOM event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<A> {
    /// Nothing to do.
    Ignore,
    Action(A),
    /// Several events, handled in order.
    Many(Vec<Event<A>>),
}

impl<A> Event<A> {
    pub fn action(action: A) -> Self {
        Event::Action(action)
    }

    pub fn many(events: impl IntoIterator<Item = Event<A>>) -> Self {
        Event::Many(events.into_iter().collect())
    }

    pub fn is_ignore(&self) -> bool {
        matches!(self, Event::Ignore)
    }

    /// Flattens into actions, depth first, dropping ignores.
    pub fn into_actions(self) -> Vec<A> {
        let mut actions = Vec::new();
        self.collect_actions(&mut actions);
        actions
    }

    fn collect_actions(self, actions: &mut Vec<A>) {
        match self {
            Event::Ignore => {}
            Event::Action(action) => actions.push(action),
            Event::Many(events) => {
                for event in events {
                    event.collect_actions(actions);
                }
            }
        }
    }
}

/// Fallback conversion that produces nothing.
pub fn const_ignore<A>(_: &dyn DomEvent) -> Event<A> {
    Event::Ignore
}

// --- Dispatch ---

/// Performs the side effect of a domain event.
pub trait Dispatcher<A> {
    fn handle(&self, event: Event<A>);
}

impl<A, F> Dispatcher<A> for F
where
    F: Fn(Event<A>),
{
    fn handle(&self, event: Event<A>) {
        self(event)
    }
}

/// Forwards actions into an unbounded channel.
///
/// Once the receiver is gone, events are dropped with a warning.
pub struct ChannelDispatcher<A> {
    sender: mpsc::UnboundedSender<A>,
    name: &'static str,
}

impl<A> ChannelDispatcher<A> {
    /// Creates a named dispatcher and the receiving end of its channel.
    pub fn new(name: &'static str) -> (Self, mpsc::UnboundedReceiver<A>) {
        let (sender, receiver) = mpsc::unbounded();
        (Self { sender, name }, receiver)
    }

    pub fn from_sender(name: &'static str, sender: mpsc::UnboundedSender<A>) -> Self {
        Self { sender, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<A> Clone for ChannelDispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            name: self.name,
        }
    }
}

impl<A> Dispatcher<A> for ChannelDispatcher<A> {
    fn handle(&self, event: Event<A>) {
        for action in event.into_actions() {
            if self.sender.unbounded_send(action).is_err() {
                log::warn!("[{}] receiver dropped, discarding event", self.name);
                return;
            }
        }
    }
}

// --- Value coercion ---

/// Capability check: a refined view of the element's `value`, or `None`.
pub type ValueCoercion = for<'a> fn(&'a dyn DomElement) -> Option<Box<dyn ValueElement + 'a>>;

fn coerce_input<'a>(element: &'a dyn DomElement) -> Option<Box<dyn ValueElement + 'a>> {
    element.as_input()
}

fn coerce_select<'a>(element: &'a dyn DomElement) -> Option<Box<dyn ValueElement + 'a>> {
    element.as_select()
}

fn coerce_textarea<'a>(element: &'a dyn DomElement) -> Option<Box<dyn ValueElement + 'a>> {
    element.as_textarea()
}

/// Coercions tried by [`coerce_value_element`], in order.
pub const VALUE_COERCIONS: [ValueCoercion; 3] = [coerce_input, coerce_select, coerce_textarea];

/// Input, then select, then textarea. First match wins.
pub fn coerce_value_element<'a>(element: &'a dyn DomElement) -> Option<Box<dyn ValueElement + 'a>> {
    first_coercion(element, &VALUE_COERCIONS)
}

/// Runs `coercions` in order and stops at the first success.
pub fn first_coercion<'a>(
    element: &'a dyn DomElement,
    coercions: &[ValueCoercion],
) -> Option<Box<dyn ValueElement + 'a>> {
    coercions.iter().find_map(|coerce| coerce(element))
}

/// Reads the string value of the event's target and passes it to `handler`.
///
/// Returns [`Event::Ignore`] without calling `handler` when the event has no
/// target or the target is not an input, select or textarea.
pub fn input_event_value<A>(
    event: &dyn DomEvent,
    handler: impl Fn(&dyn DomEvent, String) -> Event<A>,
) -> Event<A> {
    let Some(target) = event.target() else {
        log::debug!("'{}' event has no target, ignoring", event.event_type());
        return Event::Ignore;
    };
    let Some(element) = coerce_value_element(&*target) else {
        log::debug!(
            "'{}' event target <{}> carries no value, ignoring",
            event.event_type(),
            target.tag_name().to_lowercase()
        );
        return Event::Ignore;
    };
    let value = element.value();
    handler(event, value)
}

// --- Subscriptions ---

/// Builds event subscription attributes that all dispatch into one [`Dispatcher`].
pub struct EventAttrs<A> {
    dispatcher: Rc<dyn Dispatcher<A>>,
}

impl<A> Clone for EventAttrs<A> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Rc::clone(&self.dispatcher),
        }
    }
}

impl<A: 'static> EventAttrs<A> {
    pub fn new(dispatcher: impl Dispatcher<A> + 'static) -> Self {
        Self {
            dispatcher: Rc::new(dispatcher),
        }
    }

    pub fn from_shared(dispatcher: Rc<dyn Dispatcher<A>>) -> Self {
        Self { dispatcher }
    }

    /// Subscribes to the DOM event `event_name` (lowercase, without the `on` prefix).
    pub fn on<F>(&self, event_name: &str, convert: F) -> Attribute
    where
        F: Fn(&dyn DomEvent) -> Event<A> + 'static,
    {
        let dispatcher = Rc::clone(&self.dispatcher);
        let handler = EventHandler::new(move |event| {
            log::trace!("dispatching '{}' event", event.event_type());
            dispatcher.handle(convert(event));
            HANDLED
        });
        Attribute::property(format!("on{event_name}"), HostValue::Handler(handler))
    }

    pub fn on_focus(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("focus", convert)
    }

    pub fn on_blur(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("blur", convert)
    }

    pub fn on_click(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("click", convert)
    }

    pub fn on_context_menu(
        &self,
        convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static,
    ) -> Attribute {
        self.on("contextmenu", convert)
    }

    pub fn on_double_click(
        &self,
        convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static,
    ) -> Attribute {
        self.on("dblclick", convert)
    }

    pub fn on_mouse_move(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("mousemove", convert)
    }

    pub fn on_mouse_up(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("mouseup", convert)
    }

    pub fn on_mouse_down(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("mousedown", convert)
    }

    pub fn on_mouse_enter(
        &self,
        convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static,
    ) -> Attribute {
        self.on("mouseenter", convert)
    }

    pub fn on_mouse_leave(
        &self,
        convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static,
    ) -> Attribute {
        self.on("mouseleave", convert)
    }

    pub fn on_mouse_over(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("mouseover", convert)
    }

    pub fn on_mouse_out(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("mouseout", convert)
    }

    pub fn on_key_up(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("keyup", convert)
    }

    pub fn on_key_press(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("keypress", convert)
    }

    pub fn on_key_down(&self, convert: impl Fn(&dyn DomEvent) -> Event<A> + 'static) -> Attribute {
        self.on("keydown", convert)
    }

    /// Subscribes to an input-like event and passes the target's current value to `handler`.
    ///
    /// See [`input_event_value`] for when `handler` is skipped.
    pub fn on_input_event<F>(&self, event_name: &str, handler: F) -> Attribute
    where
        F: Fn(&dyn DomEvent, String) -> Event<A> + 'static,
    {
        self.on(event_name, move |event| input_event_value(event, &handler))
    }

    pub fn on_change(
        &self,
        handler: impl Fn(&dyn DomEvent, String) -> Event<A> + 'static,
    ) -> Attribute {
        self.on_input_event("change", handler)
    }

    pub fn on_input(
        &self,
        handler: impl Fn(&dyn DomEvent, String) -> Event<A> + 'static,
    ) -> Attribute {
        self.on_input_event("input", handler)
    }
}
