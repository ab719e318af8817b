//! In-memory page host for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::animation::AnimationTarget;
use crate::page::PageHost;

#[derive(Default)]
struct ElementState {
    classes: Vec<String>,
    mutations: Vec<String>,
    listeners: Vec<(u64, Box<dyn FnOnce()>)>,
    next_listener: u64,
}

#[derive(Clone)]
pub struct FakeElement {
    id: String,
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            state: Rc::default(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    /// Class-list operations and reflows, in call order.
    pub fn mutations(&self) -> Vec<String> {
        self.state.borrow().mutations.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Deliver an `animationend` notification to every registered listener.
    pub fn finish_animation(&self) {
        let listeners = std::mem::take(&mut self.state.borrow_mut().listeners);
        for (_, handler) in listeners {
            handler();
        }
    }
}

pub struct FakeSubscription {
    state: Weak<RefCell<ElementState>>,
    id: u64,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl AnimationTarget for FakeElement {
    type Key = String;
    type Subscription = FakeSubscription;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn remove_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        state.classes.retain(|c| c != class);
        state.mutations.push(format!("-{class}"));
    }

    fn add_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
        state.mutations.push(format!("+{class}"));
    }

    fn force_reflow(&self) {
        self.state.borrow_mut().mutations.push("reflow".to_string());
    }

    fn on_animation_end(&self, handler: Box<dyn FnOnce()>) -> FakeSubscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener;
        state.next_listener += 1;
        state.listeners.push((id, handler));
        FakeSubscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }
}

/// A rendered message: text and inline color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub color: Option<String>,
}

#[derive(Default)]
pub struct FakeHost {
    elements: HashMap<String, FakeElement>,
    inputs: RefCell<HashMap<String, String>>,
    rendered: RefCell<HashMap<String, Vec<Rendered>>>,
}

impl FakeHost {
    /// A host with every element of the default page.
    pub fn stock_page() -> Self {
        let mut host = Self::default();
        for id in ["hero", "card", "logo", "form-message", "click-count"] {
            host.add_element(id);
        }
        host.set_input("name", "");
        host.set_input("age", "");
        host
    }

    pub fn add_element(&mut self, id: &str) {
        self.elements.insert(id.to_string(), FakeElement::new(id));
    }

    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
    }

    pub fn set_input(&self, id: &str, value: &str) {
        self.inputs
            .borrow_mut()
            .insert(id.to_string(), value.to_string());
    }

    pub fn remove_input(&self, id: &str) {
        self.inputs.borrow_mut().remove(id);
    }

    pub fn get(&self, id: &str) -> &FakeElement {
        &self.elements[id]
    }

    /// Everything rendered into `id`, oldest first.
    pub fn rendered(&self, id: &str) -> Vec<Rendered> {
        self.rendered.borrow().get(id).cloned().unwrap_or_default()
    }

    fn render(&self, id: &str, text: &str, color: Option<&str>) {
        if !self.elements.contains_key(id) {
            return;
        }
        self.rendered
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .push(Rendered {
                text: text.to_string(),
                color: color.map(str::to_string),
            });
    }
}

impl PageHost for FakeHost {
    type Element = FakeElement;

    fn element(&self, id: &str) -> Option<FakeElement> {
        self.elements.get(id).cloned()
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.borrow().get(id).cloned()
    }

    fn set_text(&self, id: &str, text: &str) {
        self.render(id, text, None);
    }

    fn show_message(&self, id: &str, text: &str, color: &str) {
        self.render(id, text, Some(color));
    }
}
