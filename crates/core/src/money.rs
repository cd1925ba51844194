use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use thiserror::Error;

/// A non-negative, whole-đồng spending amount.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),
    #[error("Amount out of range: {0}")]
    Overflow(Decimal),
}

impl Amount {
    pub fn new(dong: u64) -> Self {
        Amount(dong)
    }

    pub fn zero() -> Self {
        Amount(0)
    }

    /// Rounds to the nearest whole đồng; fractional input such as `1.5tr`
    /// scaled to 1500000.0 carries no residue.
    pub fn from_decimal(decimal: Decimal) -> Result<Self, AmountError> {
        if decimal.is_sign_negative() && !decimal.is_zero() {
            return Err(AmountError::Negative(decimal));
        }
        decimal
            .round()
            .to_u64()
            .map(Amount)
            .ok_or(AmountError::Overflow(decimal))
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// vi-VN grouping: `1234567` renders as `1.234.567 ₫`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        write!(f, "{grouped} ₫")
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Amount(self.0.saturating_add(rhs.0))
    }
}
