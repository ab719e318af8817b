//! Page controller: what happens on page-ready, button clicks and form submit.
//!
//! The controller is host-agnostic. The browser frontend supplies a
//! [`PageHost`] backed by the real document and forwards DOM events to the
//! `on_*` methods. All handlers complete synchronously.

use lively_types::{ButtonBinding, PageConfig};

use crate::animation::{AnimationTarget, Animator};
use crate::counter::Counter;
use crate::validation::{FormInput, Submission, ValidationErrors, validate};

/// Access to the document the controller drives.
pub trait PageHost {
    type Element: AnimationTarget;

    fn element(&self, id: &str) -> Option<Self::Element>;

    /// Current value of a text input, `None` if there is no such input.
    fn input_value(&self, id: &str) -> Option<String>;

    /// Replace the text content of an element.
    fn set_text(&self, id: &str, text: &str);

    /// Replace the text content of an element and set its inline color.
    fn show_message(&self, id: &str, text: &str, color: &str);
}

/// Form state for a single submit event.
///
/// `Idle -> Validating -> {Invalid | Valid} -> Idle`, all within one
/// [`PageController::on_submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Invalid,
    Valid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationErrors),
    Valid {
        submission: Submission,
        /// Whether the confirmation animation was started
        animated: bool,
    },
}

impl SubmitOutcome {
    /// The user-visible text for this outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Invalid(errors) => errors.to_string(),
            Self::Valid { submission, .. } => submission.confirmation(),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Invalid(_) => Tone::Error,
            Self::Valid { .. } => Tone::Success,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

pub struct PageController<H: PageHost> {
    host: H,
    config: PageConfig,
    counter: Counter,
    animator: Animator<H::Element>,
    phase: FormPhase,
}

impl<H: PageHost> PageController<H> {
    pub fn new(host: H, config: PageConfig) -> Self {
        Self {
            host,
            config,
            counter: Counter::new(),
            animator: Animator::new(),
            phase: FormPhase::Idle,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn animator(&self) -> &Animator<H::Element> {
        &self.animator
    }

    /// Play `class` on the element with `id`.
    pub fn animate(&self, id: &str, class: &str) -> bool {
        let target = self.host.element(id);
        if target.is_none() {
            tracing::warn!(id, "animation target not found");
        }
        self.animator.trigger(target.as_ref(), Some(class))
    }

    /// Entrance animation on the banner.
    pub fn on_ready(&self) -> bool {
        let banner = &self.config.banner;
        tracing::info!(banner = %banner.id, "page ready");
        self.animate(&banner.id, &banner.animation)
    }

    /// Handle a click on the button bound at `index` in the config.
    ///
    /// Returns the new counter total, or `None` if the animation could not
    /// be started (the counter is left alone in that case).
    pub fn on_button(&mut self, index: usize) -> Option<i64> {
        let Some(binding) = self.config.buttons.get(index) else {
            tracing::warn!(index, "no button binding");
            return None;
        };
        let ButtonBinding {
            button,
            target,
            animation,
            delta,
        } = binding;
        tracing::debug!(%button, %target, %animation, "button clicked");

        if !self.animate(target, animation) {
            return None;
        }

        let total = self.counter.increment(*delta);
        tracing::info!(%button, total, "click counted");
        if let Some(display) = &self.config.counter_display {
            self.host.set_text(display, &total.to_string());
        }
        Some(total)
    }

    /// Validate the form and render the result.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.set_phase(FormPhase::Validating);

        let form = &self.config.form;
        let input = FormInput {
            name: self.host.input_value(&form.name_input).unwrap_or_default(),
            age: self.host.input_value(&form.age_input).unwrap_or_default(),
        };

        let outcome = match validate(&input) {
            Ok(submission) => {
                let confirmation = &form.confirmation;
                let animated = self.animate(&confirmation.id, &confirmation.animation);
                SubmitOutcome::Valid {
                    submission,
                    animated,
                }
            }
            Err(errors) => SubmitOutcome::Invalid(errors),
        };

        let color = match outcome.tone() {
            Tone::Error => &form.colors.error,
            Tone::Success => &form.colors.success,
        };
        self.host.show_message(&form.message, &outcome.message(), color);

        match &outcome {
            SubmitOutcome::Invalid(errors) => {
                tracing::info!(failures = errors.len(), "form rejected");
                self.set_phase(FormPhase::Invalid);
            }
            SubmitOutcome::Valid { submission, .. } => {
                tracing::info!(age = submission.age, "form accepted");
                self.set_phase(FormPhase::Valid);
            }
        }

        self.set_phase(FormPhase::Idle);
        outcome
    }

    fn set_phase(&mut self, phase: FormPhase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "form phase");
        self.phase = phase;
    }
}
