//! Loading and checking [`PageConfig`].

use std::collections::HashSet;

use lively_types::PageConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse page config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must not be empty")]
    Empty { field: String },

    #[error("{field} `{value}` is not a single class name")]
    ClassName { field: String, value: String },

    #[error("button `{0}` is bound more than once")]
    DuplicateButton(String),

    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Parse a TOML document and check it. Missing fields keep their defaults.
pub fn load_toml(source: &str) -> Result<PageConfig, ConfigError> {
    let config: PageConfig = toml::from_str(source)?;
    validate(&config)?;
    Ok(config)
}

/// Reject configs that would leave the page half-wired.
pub fn validate(config: &PageConfig) -> Result<(), ConfigError> {
    log_level(config)?;

    let form = &config.form;
    let mut required = vec![
        ("banner.id", config.banner.id.as_str()),
        ("banner.animation", config.banner.animation.as_str()),
        ("form.form", form.form.as_str()),
        ("form.name_input", form.name_input.as_str()),
        ("form.age_input", form.age_input.as_str()),
        ("form.message", form.message.as_str()),
        ("form.confirmation.id", form.confirmation.id.as_str()),
        ("form.confirmation.animation", form.confirmation.animation.as_str()),
    ];
    for binding in &config.buttons {
        required.push(("buttons.button", binding.button.as_str()));
        required.push(("buttons.target", binding.target.as_str()));
        required.push(("buttons.animation", binding.animation.as_str()));
    }
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ConfigError::Empty {
            field: field.to_string(),
        });
    }

    let mut classes = vec![
        ("banner.animation", config.banner.animation.as_str()),
        ("form.confirmation.animation", form.confirmation.animation.as_str()),
    ];
    for binding in &config.buttons {
        classes.push(("buttons.animation", binding.animation.as_str()));
    }
    // classList.add rejects tokens containing whitespace
    if let Some((field, value)) = classes
        .iter()
        .find(|(_, value)| value.trim().contains(char::is_whitespace))
    {
        return Err(ConfigError::ClassName {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for binding in &config.buttons {
        if !seen.insert(binding.button.as_str()) {
            return Err(ConfigError::DuplicateButton(binding.button.clone()));
        }
    }

    Ok(())
}

/// The configured log level, normalised to lowercase.
pub fn log_level(config: &PageConfig) -> Result<String, ConfigError> {
    let level = config.log_level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(level),
        _ => Err(ConfigError::LogLevel(config.log_level.clone())),
    }
}
