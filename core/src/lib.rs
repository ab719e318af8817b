pub mod animation;
pub mod config;
pub mod counter;
pub mod page;
pub mod validation;

#[cfg(test)]
mod fake_host;

// Re-exports for convenience
pub use animation::{AnimationTarget, Animator};
pub use config::ConfigError;
pub use counter::{Counter, IntoDelta};
pub use page::{FormPhase, PageController, PageHost, SubmitOutcome, Tone};
pub use validation::{FormInput, Submission, ValidationError, ValidationErrors, validate};
