//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift when
//! summing. On disk an amount is a plain JSON number (`12.5`), so files stay
//! readable by anything that consumed the original float-based format.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Largest magnitude an amount may have, in cents (10 trillion units)
///
/// Amounts within this bound convert to and from the on-disk float exactly.
pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

/// A currency-agnostic amount stored as cents (hundredths of the unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1250); // 12.50
    /// assert_eq!(amount.to_string(), "$12.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Convert a float amount, rounding to the nearest cent
    ///
    /// Returns `None` for non-finite values and magnitudes above [`MAX_CENTS`].
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Divide evenly, rounding half away from zero to the nearest cent
    ///
    /// Returns `None` when `count` is zero.
    pub fn divide(&self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let count = count as i64;
        let quotient = self.0 / count;
        let remainder = self.0 % count;
        let adjust = if remainder.abs() * 2 >= count {
            self.0.signum()
        } else {
            0
        };
        Some(Self(quotient + adjust))
    }

    /// Parse a money amount from user text
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5", ".75"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();

        let (negative, rest) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let too_large = || MoneyParseError::OutOfRange(original.to_string());

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };

        // Pad or round the fraction to 2 digits
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => {
                let base: i64 = fraction[..2].parse().map_err(|_| invalid())?;
                let round_up = fraction.as_bytes()[2..].first().is_some_and(|d| *d >= b'5');
                base + i64::from(round_up)
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .filter(|total| *total <= MAX_CENTS)
            .ok_or_else(too_large)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.dollars().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format without a currency symbol, always two decimals
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

// Totals saturate instead of wrapping
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            MoneyParseError::OutOfRange(s) => write!(f, "'{}' is too large", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

impl From<MoneyParseError> for crate::error::ExpenseError {
    fn from(err: MoneyParseError) -> Self {
        Self::InvalidNumericInput(err.to_string())
    }
}
