//! Signup form validation.
//!
//! Every rule is checked on each submission so the user sees all problems
//! at once, name rule first.

use std::fmt;

use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

/// Raw field values captured at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub age: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }
}

/// A submission that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Trimmed name
    pub name: String,
    pub age: u8,
}

impl Submission {
    pub fn confirmation(&self) -> String {
        format!("Thanks, {}! You are {} years old.", self.name, self.age)
    }
}

/// One failed rule. Messages mirror [`MIN_NAME_CHARS`], [`MIN_AGE`] and [`MAX_AGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long.")]
    NameTooShort,

    #[error("Age must be a whole number between 1 and 120.")]
    AgeOutOfRange,
}

/// All rule failures for one submission. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate(input: &FormInput) -> Result<Submission, ValidationErrors> {
    let mut errors = Vec::new();

    let name = input.name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        errors.push(ValidationError::NameTooShort);
    }

    let age = parse_age(&input.age);
    if age.is_none() {
        errors.push(ValidationError::AgeOutOfRange);
    }

    match age {
        Some(age) if errors.is_empty() => Ok(Submission {
            name: name.to_string(),
            age,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

fn parse_age(raw: &str) -> Option<u8> {
    let age = raw.trim().parse::<i64>().ok()?;
    (i64::from(MIN_AGE)..=i64::from(MAX_AGE))
        .contains(&age)
        .then(|| age as u8)
}
