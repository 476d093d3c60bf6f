//! Browser host: `web_sys` adapters and conversion of a merged
//! [`HostAttributeObject`] into the plain JS object a patch engine consumes.
//!
//! The `value` property is emitted as a virtual-dom style hook: an object whose
//! *inherited* `hook(node, propertyName, previous)` method the engine calls
//! instead of assigning. The method lives on the object's prototype, since
//! engines only treat an object as a hook when `hook` is not an own property.
//! A non-text `value` cannot be compared and is emitted as a plain value.

use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::host::{
    ATTRIBUTES_KEY, DomElement, DomEvent, EventHandler, HostAttributeObject, HostValue,
    SoftSetHook, ValueElement,
};

/// A browser event.
pub struct WebEvent(pub web_sys::Event);

impl DomEvent for WebEvent {
    fn event_type(&self) -> String {
        self.0.type_()
    }

    /// Targets that are not elements (window, document) count as absent.
    fn target(&self) -> Option<Box<dyn DomElement + '_>> {
        let element = self.0.target()?.dyn_into::<Element>().ok()?;
        Some(Box::new(WebElement(element)))
    }
}

/// A browser element.
pub struct WebElement(pub Element);

impl DomElement for WebElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn as_input(&self) -> Option<Box<dyn ValueElement + '_>> {
        let input = self.0.dyn_ref::<HtmlInputElement>()?.clone();
        Some(Box::new(input))
    }

    fn as_select(&self) -> Option<Box<dyn ValueElement + '_>> {
        let select = self.0.dyn_ref::<HtmlSelectElement>()?.clone();
        Some(Box::new(select))
    }

    fn as_textarea(&self) -> Option<Box<dyn ValueElement + '_>> {
        let textarea = self.0.dyn_ref::<HtmlTextAreaElement>()?.clone();
        Some(Box::new(textarea))
    }
}

impl ValueElement for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value)
    }
}

impl ValueElement for HtmlSelectElement {
    fn value(&self) -> String {
        HtmlSelectElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlSelectElement::set_value(self, value)
    }
}

impl ValueElement for HtmlTextAreaElement {
    fn value(&self) -> String {
        HtmlTextAreaElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlTextAreaElement::set_value(self, value)
    }
}

/// Builds `{ ...properties, attributes?: { ... } }` for the patch engine.
pub fn to_js_object(host: &HostAttributeObject) -> Result<Object, JsValue> {
    let object = Object::new();
    for (name, value) in host.properties() {
        Reflect::set(&object, &JsValue::from_str(name), &to_js_value(value)?)?;
    }
    if let Some(attributes) = host.attributes() {
        let nested = Object::new();
        for (name, value) in attributes {
            Reflect::set(&nested, &JsValue::from_str(name), &to_js_value(value)?)?;
        }
        Reflect::set(&object, &JsValue::from_str(ATTRIBUTES_KEY), &nested)?;
    }
    Ok(object)
}

fn to_js_value(value: &HostValue) -> Result<JsValue, JsValue> {
    match value {
        HostValue::Text(text) => Ok(JsValue::from_str(text)),
        HostValue::Style(style) => {
            let object = Object::new();
            for (property, value) in style {
                Reflect::set(&object, &JsValue::from_str(property), &JsValue::from_str(value))?;
            }
            Ok(object.into())
        }
        HostValue::Handler(handler) => Ok(handler_function(handler.clone())),
        HostValue::SoftSet(hook) => soft_set_hook_object(hook.clone()),
    }
}

/// Wraps the handler in a JS function; the function is owned by the JS side from here on.
fn handler_function(handler: EventHandler) -> JsValue {
    let closure = Closure::<dyn Fn(web_sys::Event) -> bool>::new(move |event: web_sys::Event| {
        handler.call(&WebEvent(event))
    });
    closure.into_js_value()
}

/// An object inheriting `hook(node, propertyName)`; the patch engine calls it instead of assigning.
fn soft_set_hook_object(hook: SoftSetHook) -> Result<JsValue, JsValue> {
    if hook.candidate().as_text().is_none() {
        return to_js_value(hook.candidate());
    }
    let candidate = to_js_value(hook.candidate())?;
    let apply = Closure::<dyn Fn(JsValue, JsValue)>::new(move |node: JsValue, property: JsValue| {
        let current = Reflect::get(&node, &property).ok().and_then(|value| value.as_string());
        if hook.should_assign(current.as_deref()) {
            if let Err(error) = Reflect::set(&node, &property, &candidate) {
                log::warn!("soft-set of {:?} failed: {:?}", property.as_string(), error);
            }
        }
    });
    let prototype = Object::new();
    Reflect::set(&prototype, &JsValue::from_str("hook"), &apply.into_js_value())?;
    Ok(Object::create(&prototype).into())
}
