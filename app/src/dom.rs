//! `web-sys` implementations of the controller's host traits.

use lively_core::{AnimationTarget, PageHost};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Event, HtmlElement, HtmlInputElement};

const ANIMATION_END: &str = "animationend";

/// A page element addressed by its id.
#[derive(Clone)]
pub struct WebElement {
    id: String,
    element: HtmlElement,
}

impl AnimationTarget for WebElement {
    type Key = String;
    type Subscription = AnimationEndListener;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().remove_1(class) {
            tracing::warn!(id = %self.id, class, ?err, "classList.remove failed");
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().add_1(class) {
            tracing::warn!(id = %self.id, class, ?err, "classList.add failed");
        }
    }

    fn force_reflow(&self) {
        // Reading a layout property flushes pending style changes
        let _ = self.element.offset_width();
    }

    fn on_animation_end(&self, handler: Box<dyn FnOnce()>) -> AnimationEndListener {
        let callback = Closure::once(move |_event: Event| handler());

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(err) = self
            .element
            .add_event_listener_with_callback_and_add_event_listener_options(
                ANIMATION_END,
                callback.as_ref().unchecked_ref(),
                &options,
            )
        {
            tracing::warn!(id = %self.id, ?err, "failed to listen for animationend");
        }

        AnimationEndListener {
            element: self.element.clone(),
            callback,
        }
    }
}

/// Registered `animationend` listener. Dropping it unregisters the listener
/// and frees the closure, whether or not it has fired.
pub struct AnimationEndListener {
    element: HtmlElement,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for AnimationEndListener {
    fn drop(&mut self) {
        // May run inside the callback itself; wasm-bindgen frees the closure
        // once that call returns.
        let _ = self.element.remove_event_listener_with_callback(
            ANIMATION_END,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// The live document.
pub struct WebHost {
    document: Document,
}

impl WebHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }
}

impl PageHost for WebHost {
    type Element = WebElement;

    fn element(&self, id: &str) -> Option<WebElement> {
        self.html_element(id).map(|element| WebElement {
            id: id.to_string(),
            element,
        })
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.html_element(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => tracing::debug!(id, "text target not found"),
        }
    }

    fn show_message(&self, id: &str, text: &str, color: &str) {
        let Some(el) = self.html_element(id) else {
            tracing::warn!(id, "message element not found");
            return;
        };
        el.set_text_content(Some(text));
        if let Err(err) = el.style().set_property("color", color) {
            tracing::warn!(id, ?err, "failed to set message color");
        }
    }
}
