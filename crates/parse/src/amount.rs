use std::str::FromStr;
use std::sync::OnceLock;

use chitieu_core::Amount;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, trace};

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// Longest units first so `nghìn` is never read as `n`.
re!(re_amount_token,
    r"([0-9]+(?:[.,][0-9]+)?)(?:\s*(nghìn|ngàn|triệu|tr|lít|củ|k|n|đ|m))?");

// ── Units ─────────────────────────────────────────────────────────────────────

/// Colloquial magnitude suffix typed after a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// `k`, `n`, `ngàn`, `nghìn`
    Thousand,
    /// `tr`, `triệu`, `m`, `củ`
    Million,
    /// `lít`, slang for a hundred thousand
    Lit,
    /// `đ` names the currency but does not scale the number.
    Dong,
}

impl Unit {
    /// Multiplier applied to the number, `None` when the bare-number rule applies.
    pub fn multiplier(self) -> Option<Decimal> {
        match self {
            Unit::Thousand => Some(Decimal::from(1_000)),
            Unit::Million => Some(Decimal::from(1_000_000)),
            Unit::Lit => Some(Decimal::from(100_000)),
            Unit::Dong => None,
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "k" | "n" | "ngàn" | "nghìn" => Ok(Unit::Thousand),
            "tr" | "triệu" | "m" | "củ" => Ok(Unit::Million),
            "lít" => Ok(Unit::Lit),
            "đ" => Ok(Unit::Dong),
            other => Err(format!("Unknown amount unit: '{other}'")),
        }
    }
}

// ── Tokens ────────────────────────────────────────────────────────────────────

/// One `<number><unit?>` occurrence found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountToken {
    /// The exact substring matched, removed later from the description.
    pub matched: String,
    /// Digits with at most one `.` or `,` separator.
    pub number: String,
    pub unit: Option<Unit>,
}

impl AmountToken {
    /// Scaled, whole-đồng value of this token.
    ///
    /// `,` and `.` are both read as the fractional separator, so `50.000`
    /// is fifty (and then fifty thousand by the bare-number rule) rather than
    /// a grouped fifty thousand. Grouping dots are not recognised.
    pub fn amount(&self) -> Amount {
        let Ok(value) = Decimal::from_str(&self.number.replacen(',', ".", 1)) else {
            debug!(number = %self.number, "amount token out of decimal range");
            return Amount::zero();
        };

        let scaled = match self.unit.and_then(Unit::multiplier) {
            Some(multiplier) => value.checked_mul(multiplier),
            None => scale_bare(value),
        };

        scaled
            .and_then(|v| Amount::from_decimal(v).ok())
            .unwrap_or_else(|| {
                debug!(number = %self.number, "amount token overflowed");
                Amount::zero()
            })
    }
}

/// People rarely log amounts below 1000 đồng, so a small bare number means thousands.
fn scale_bare(value: Decimal) -> Option<Decimal> {
    if value > Decimal::ZERO && value < Decimal::from(1_000) {
        value.checked_mul(Decimal::from(1_000))
    } else {
        Some(value)
    }
}

/// All amount tokens in `text`, in order of appearance.
pub fn scan_tokens(text: &str) -> Vec<AmountToken> {
    re_amount_token()
        .captures_iter(text)
        .filter_map(|c| {
            let number = c.get(1)?;
            // A unit glued to a following letter is the start of a word
            // (`50 nước`), not a unit. A following digit is fine (`1tr5`).
            let unit = c.get(2).filter(|u| {
                !text[u.end()..].chars().next().is_some_and(char::is_alphabetic)
            });
            let matched = match unit {
                Some(_) => c.get(0)?.as_str(),
                None => number.as_str(),
            };
            Some(AmountToken {
                matched: matched.to_string(),
                number: number.as_str().to_string(),
                unit: unit.and_then(|u| u.as_str().parse().ok()),
            })
        })
        .collect()
}

/// The first token carrying a unit, else the first token. Later unit-bearing
/// tokens are ignored.
pub fn select_token(tokens: &[AmountToken]) -> Option<&AmountToken> {
    tokens
        .iter()
        .find(|t| t.unit.is_some())
        .or_else(|| tokens.first())
}

// ── Public extraction API ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub amount: Amount,
    /// The chosen token, if any number was found.
    pub token: Option<AmountToken>,
}

pub struct AmountExtractor;

impl AmountExtractor {
    /// Extract the spending amount from trimmed, lower-cased text.
    pub fn extract(text: &str) -> Extraction {
        let tokens = scan_tokens(text);
        trace!(count = tokens.len(), "scanned amount tokens");

        match select_token(&tokens) {
            Some(token) => {
                let amount = token.amount();
                debug!(matched = %token.matched, unit = ?token.unit, amount = amount.value(), "selected amount token");
                Extraction {
                    amount,
                    token: Some(token.clone()),
                }
            }
            None => Extraction {
                amount: Amount::zero(),
                token: None,
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
