//! Page configuration shared between the core controller and the web frontend.
//!
//! Every field has a default matching the stock page markup, so an empty
//! TOML document or an empty JS object yields a working configuration.

use serde::{Deserialize, Serialize};

/// Element ids and animation classes for the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Tracing level name for the browser console (`trace` .. `error`)
    pub log_level: String,
    pub banner: AnimatedElement,
    pub buttons: Vec<ButtonBinding>,
    pub form: FormConfig,
    /// Element that receives the running click total, if present on the page
    pub counter_display: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            banner: AnimatedElement {
                id: "hero".to_string(),
                animation: "fade-in".to_string(),
            },
            buttons: vec![
                ButtonBinding::new("btn-bounce", "hero", "bounce", 1),
                ButtonBinding::new("btn-pulse", "hero", "pulse", 5),
                ButtonBinding::new("btn-shake", "card", "shake", 1),
            ],
            form: FormConfig::default(),
            counter_display: Some("click-count".to_string()),
        }
    }
}

/// An element together with the animation class played on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimatedElement {
    pub id: String,
    pub animation: String,
}

/// A button that plays `animation` on `target` and advances the counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonBinding {
    pub button: String,
    pub target: String,
    pub animation: String,
    #[serde(default = "default_delta")]
    pub delta: i64,
}

fn default_delta() -> i64 {
    1
}

impl ButtonBinding {
    pub fn new(button: &str, target: &str, animation: &str, delta: i64) -> Self {
        Self {
            button: button.to_string(),
            target: target.to_string(),
            animation: animation.to_string(),
            delta,
        }
    }
}

/// The two-field signup form and where its result is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form: String,
    pub name_input: String,
    pub age_input: String,
    pub message: String,
    /// Played on successful submission
    pub confirmation: AnimatedElement,
    pub colors: MessageColors,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form: "signup-form".to_string(),
            name_input: "name".to_string(),
            age_input: "age".to_string(),
            message: "form-message".to_string(),
            confirmation: AnimatedElement {
                id: "logo".to_string(),
                animation: "spin".to_string(),
            },
            colors: MessageColors::default(),
        }
    }
}

/// Inline CSS colors applied to the message element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageColors {
    pub error: String,
    pub success: String,
}

impl Default for MessageColors {
    fn default() -> Self {
        Self {
            error: "crimson".to_string(),
            success: "seagreen".to_string(),
        }
    }
}
