//! Attribute, property, style, class and event descriptions for virtual DOM nodes.
//!
//! Callers describe the desired state of an element with [`Attribute`] values,
//! then fold the whole list into one [`HostAttributeObject`] with [`merge`].
//! The host object is what a diff/patch engine installs on a live element:
//! DOM properties at the top level, DOM attributes in a nested map.
//!
//! ```
//! use domattr::{Attribute, merge};
//!
//! let host = merge([
//!     Attribute::id("greeting"),
//!     Attribute::class("banner").unwrap(),
//!     Attribute::value("hello"),
//! ]);
//! assert_eq!(host.attribute("id").and_then(|v| v.as_text()), Some("greeting"));
//! assert!(host.property("value").is_some_and(|v| v.is_soft_set()));
//! ```

pub mod attribute;
pub mod class_set;
pub mod event;
pub mod host;
pub mod platform;
pub mod raw;
pub mod style;
pub mod testing;

pub use attribute::Attribute;
pub use class_set::{ClassNameError, ClassSet};
pub use event::{
    ChannelDispatcher, Dispatcher, Event, EventAttrs, HANDLED, VALUE_COERCIONS, ValueCoercion,
    coerce_value_element, const_ignore, input_event_value,
};
pub use host::{
    DomElement, DomEvent, EventHandler, HostAttributeObject, HostValue, SoftSetHook, ValueElement,
};
pub use raw::{RawEntry, merge};
pub use style::{Css, StyleModel};
