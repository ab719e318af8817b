//! CSS animation retriggering.
//!
//! A trigger cycle removes the class, forces a layout pass so the browser sees
//! the following add as a fresh state change, adds the class back and
//! subscribes to the completion notification. When the animation finishes
//! the class is removed again, returning the element to its resting state.
//!
//! The [`Animator`] keeps at most one outstanding completion subscription per
//! (element, class) pair. Retriggering before the previous animation finished
//! drops the old subscription first, so listeners never pile up.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::{Rc, Weak};

/// An element whose class list can be toggled to play a CSS animation.
///
/// Implementations are cheap handles (`Clone` shares the same element).
pub trait AnimationTarget: Clone + 'static {
    /// Identity of the underlying element.
    type Key: Eq + Hash + Clone + fmt::Debug + 'static;

    /// Registration handle for a completion listener. Dropping it must
    /// unregister the listener if it has not fired yet.
    type Subscription: 'static;

    fn key(&self) -> Self::Key;

    fn remove_class(&self, class: &str);

    fn add_class(&self, class: &str);

    /// Force a synchronous style/layout recomputation.
    fn force_reflow(&self);

    /// Run `handler` once, the next time an animation on this element ends.
    fn on_animation_end(&self, handler: Box<dyn FnOnce()>) -> Self::Subscription;
}

type CycleKey<T> = (<T as AnimationTarget>::Key, String);
type Registry<T> = HashMap<CycleKey<T>, <T as AnimationTarget>::Subscription>;

pub struct Animator<T: AnimationTarget> {
    pending: Rc<RefCell<Registry<T>>>,
}

impl<T: AnimationTarget> Animator<T> {
    pub fn new() -> Self {
        Self {
            pending: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Start (or restart) `class` on `target`.
    ///
    /// Returns `false` without touching anything when the target is absent or
    /// the class name is absent, blank or contains inner whitespace. Returns
    /// `true` as soon as the class is applied and the completion listener
    /// registered.
    pub fn trigger(&self, target: Option<&T>, class: Option<&str>) -> bool {
        let Some(target) = target else {
            tracing::debug!(?class, "animation skipped: no target");
            return false;
        };
        let Some(class) = class.map(str::trim).filter(|c| !c.is_empty()) else {
            tracing::debug!(key = ?target.key(), "animation skipped: no class");
            return false;
        };
        if class.contains(char::is_whitespace) {
            tracing::warn!(key = ?target.key(), class, "animation skipped: not a single class");
            return false;
        }

        let key: CycleKey<T> = (target.key(), class.to_string());

        // Dropping the previous subscription unregisters its listener
        let previous = self.pending.borrow_mut().remove(&key);
        if previous.is_some() {
            tracing::trace!(?key, "restarting unfinished animation");
        }
        drop(previous);

        target.remove_class(class);
        target.force_reflow();
        target.add_class(class);

        let subscription = target.on_animation_end(finish_cycle::<T>(
            target.clone(),
            key.clone(),
            Rc::downgrade(&self.pending),
        ));
        self.pending.borrow_mut().insert(key, subscription);
        true
    }

    /// Number of animations still waiting for their completion notification.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_pending(&self, target: &T, class: &str) -> bool {
        self.pending
            .borrow()
            .contains_key(&(target.key(), class.trim().to_string()))
    }

    /// Unregister every outstanding completion listener. Classes already
    /// applied stay on their elements.
    pub fn cancel_all(&self) {
        let drained: Vec<_> = self.pending.borrow_mut().drain().collect();
        tracing::debug!(count = drained.len(), "cancelling pending animations");
    }
}

impl<T: AnimationTarget> Default for Animator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Completion handler: clear the class, then forget the subscription.
fn finish_cycle<T: AnimationTarget>(
    element: T,
    key: CycleKey<T>,
    registry: Weak<RefCell<Registry<T>>>,
) -> Box<dyn FnOnce()> {
    Box::new(move || {
        element.remove_class(&key.1);
        if let Some(registry) = registry.upgrade() {
            let finished = registry.borrow_mut().remove(&key);
            drop(finished);
        }
        tracing::trace!(?key, "animation finished");
    })
}
