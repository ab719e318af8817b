//! Click counter owned by the page controller.
//!
//! The value changes only through [`Counter::increment`]. Deltas go through
//! numeric coercion; anything that does not coerce to a finite number counts
//! as a delta of 1.

/// Delta used when a value does not coerce to a number.
pub const FALLBACK_DELTA: i64 = 1;

/// Values accepted as a counter delta.
pub trait IntoDelta {
    /// Coerce to an integer delta, `None` when the value is not a number.
    fn into_delta(self) -> Option<i64>;
}

impl IntoDelta for i64 {
    fn into_delta(self) -> Option<i64> {
        Some(self)
    }
}

impl IntoDelta for i32 {
    fn into_delta(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl IntoDelta for u32 {
    fn into_delta(self) -> Option<i64> {
        Some(i64::from(self))
    }
}

impl IntoDelta for f64 {
    fn into_delta(self) -> Option<i64> {
        // `as` saturates, but infinities are not a meaningful step
        self.is_finite().then(|| self.trunc() as i64)
    }
}

impl IntoDelta for &str {
    fn into_delta(self) -> Option<i64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Some(0);
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(n);
        }
        if let Some(n) = parse_radix_literal(trimmed) {
            return Some(n);
        }
        trimmed.parse::<f64>().ok().and_then(IntoDelta::into_delta)
    }
}

/// Unsigned `0x`/`0o`/`0b` literals, as accepted by numeric coercion.
fn parse_radix_literal(s: &str) -> Option<i64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    // from_str_radix would also take a sign, which the literal form does not
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Too large for i64: saturate like float-to-int truncation
    Some(i64::from_str_radix(digits, radix).unwrap_or(i64::MAX))
}

impl IntoDelta for &String {
    fn into_delta(self) -> Option<i64> {
        self.as_str().into_delta()
    }
}

impl<T: IntoDelta> IntoDelta for Option<T> {
    fn into_delta(self) -> Option<i64> {
        self.and_then(IntoDelta::into_delta)
    }
}

#[derive(Debug, Default)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` and return the new total.
    pub fn increment(&mut self, delta: impl IntoDelta) -> i64 {
        let delta = delta.into_delta().unwrap_or(FALLBACK_DELTA);
        let old_value = self.value;
        self.value = old_value.saturating_add(delta);
        tracing::debug!(old_value, new_value = self.value, "counter incremented");
        self.value
    }

    pub fn increment_one(&mut self) -> i64 {
        self.increment(1)
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment_one(), 1);
        assert_eq!(counter.increment_one(), 2);
    }

    #[test]
    fn numeric_delta_is_added() {
        let mut counter = Counter::new();
        counter.increment_one();
        assert_eq!(counter.increment(5), 6);
        assert_eq!(counter.increment(-2), 4);
    }

    #[test]
    fn non_numeric_delta_falls_back_to_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment("abc"), 1);
        assert_eq!(counter.increment(f64::NAN), 2);
        assert_eq!(counter.increment(None::<i64>), 3);
        assert_eq!(counter.increment(f64::INFINITY), 4);
    }

    #[test]
    fn strings_coerce_like_numbers() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment(" 7 "), 7);
        assert_eq!(counter.increment("2.9"), 9);
        assert_eq!(counter.increment(""), 9);
    }

    #[test]
    fn radix_prefixed_strings_are_numbers() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment("0x10"), 16);
        assert_eq!(counter.increment("0b11"), 19);
        assert_eq!(counter.increment(" 0o7 "), 26);
    }

    #[test]
    fn malformed_or_infinite_strings_fall_back_to_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment("0x"), 1);
        assert_eq!(counter.increment("-0x10"), 2);
        assert_eq!(counter.increment("0b12"), 3);
        assert_eq!(counter.increment("Infinity"), 4);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut counter = Counter::new();
        counter.increment(i64::MAX);
        assert_eq!(counter.increment(10), i64::MAX);
    }
}
