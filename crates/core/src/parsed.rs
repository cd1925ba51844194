use serde::Serialize;

use crate::category::{registry, Category};
use crate::money::Amount;

/// Description used when nothing but the amount was typed.
pub const PLACEHOLDER_DESCRIPTION: &str = "Chi tiêu";

/// Structured reading of one free-form spending phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub amount: Amount,
    pub description: String,
    pub category: &'static Category,
    /// Strength of the category match (0.0 = none, 1.0 = certain).
    pub confidence: f32,
}

impl ParseResult {
    /// An empty description becomes [`PLACEHOLDER_DESCRIPTION`] and the
    /// confidence is clamped to `[0, 1]`.
    pub fn new(
        amount: Amount,
        description: impl Into<String>,
        category: &'static Category,
        confidence: f32,
    ) -> Self {
        let mut description = description.into();
        if description.trim().is_empty() {
            description = PLACEHOLDER_DESCRIPTION.to_string();
        }
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            amount,
            description,
            category,
            confidence,
        }
    }

    /// Result for a phrase with no category evidence.
    pub fn unmatched(amount: Amount, description: impl Into<String>) -> Self {
        Self::new(amount, description, registry::other(), 0.0)
    }

    pub fn category_id(&self) -> &'static str {
        self.category.id
    }

    /// A zero amount is not worth recording yet.
    pub fn is_submittable(&self) -> bool {
        !self.amount.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::OTHER_ID;

    #[test]
    fn empty_description_uses_placeholder() {
        let r = ParseResult::unmatched(Amount::zero(), "");
        assert_eq!(r.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(r.category_id(), OTHER_ID);
        assert_eq!(r.confidence, 0.0);

        let r = ParseResult::unmatched(Amount::zero(), "   ");
        assert_eq!(r.description, PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn confidence_is_clamped() {
        let food = registry::resolve("food");
        assert_eq!(ParseResult::new(Amount::zero(), "x", food, 1.7).confidence, 1.0);
        assert_eq!(ParseResult::new(Amount::zero(), "x", food, -0.2).confidence, 0.0);
        assert_eq!(ParseResult::new(Amount::zero(), "x", food, f32::NAN).confidence, 0.0);
    }

    #[test]
    fn submittable_only_with_amount() {
        assert!(!ParseResult::unmatched(Amount::zero(), "cafe").is_submittable());
        assert!(ParseResult::unmatched(Amount::new(30_000), "cafe").is_submittable());
    }

    #[test]
    fn serializes_embedded_category() {
        let r = ParseResult::new(Amount::new(20_000), "grab", registry::resolve("transport"), 1.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["amount"], 20_000);
        assert_eq!(json["description"], "grab");
        assert_eq!(json["category"]["id"], "transport");
        assert_eq!(json["category"]["emoji"], "🚗");
        assert_eq!(json["confidence"], 1.0);
    }
}
