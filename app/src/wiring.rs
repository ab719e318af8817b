//! Binds DOM events to the page controller.

use std::cell::RefCell;
use std::rc::Rc;

use lively_core::PageController;
use lively_types::PageConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use crate::dom::WebHost;

type SharedPage = Rc<RefCell<PageController<WebHost>>>;

/// Wire the page once its markup is parsed.
pub fn start(config: PageConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    if document.ready_state() != "loading" {
        return wire(document, config).map(drop);
    }

    let doc = document.clone();
    let on_ready = Closure::once_into_js(move |_event: Event| {
        if let Err(err) = wire(doc, config) {
            tracing::error!(?err, "failed to wire page");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

fn wire(document: Document, config: PageConfig) -> Result<SharedPage, JsValue> {
    let page: SharedPage = Rc::new(RefCell::new(PageController::new(
        WebHost::new(document.clone()),
        config.clone(),
    )));

    page.borrow().on_ready();

    for (index, binding) in config.buttons.iter().enumerate() {
        let Some(button) = document.get_element_by_id(&binding.button) else {
            tracing::warn!(button = %binding.button, "button not found, skipping");
            continue;
        };
        let page = Rc::clone(&page);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            match page.try_borrow_mut() {
                Ok(mut page) => {
                    page.on_button(index);
                }
                Err(_) => tracing::warn!(index, "page busy, click dropped"),
            }
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // Handlers live as long as the page
        on_click.forget();
    }

    listen_teardown(&page)?;

    let Some(form) = document.get_element_by_id(&config.form.form) else {
        tracing::warn!(form = %config.form.form, "form not found, validation disabled");
        return Ok(page);
    };
    let submit_page = Rc::clone(&page);
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        match submit_page.try_borrow_mut() {
            Ok(mut page) => {
                page.on_submit();
            }
            Err(_) => tracing::warn!("page busy, submit dropped"),
        }
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    tracing::info!(buttons = config.buttons.len(), "page wired");
    Ok(page)
}

/// Drop pending completion listeners when the page is hidden or unloaded.
fn listen_teardown(page: &SharedPage) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let page = Rc::clone(page);
    let on_pagehide = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Ok(page) = page.try_borrow() {
            page.animator().cancel_all();
        }
    });
    window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())?;
    on_pagehide.forget();
    Ok(())
}
