//! Turns a free-form spending phrase such as `cafe 30k` into an amount, a
//! cleaned description and a best-guess category.

pub mod amount;
pub mod classify;
pub mod config;
pub mod normalize;
pub(crate) mod util;

use std::sync::OnceLock;

use chitieu_core::ParseResult;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

pub use amount::{AmountExtractor, AmountToken, Extraction, Unit};
pub use classify::{CategoryMatcher, Classification, MatchKind, DEFAULT_FUZZY_THRESHOLD};
pub use config::{ClassifierConfig, ConfigError, ParserConfig};
pub use normalize::clean_description;

/// Stateless parse pipeline: extract amount → strip it → classify the rest.
#[derive(Default)]
pub struct ExpenseParser {
    matcher: CategoryMatcher,
}

impl ExpenseParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            matcher: CategoryMatcher::new(config.classifier.threshold),
        }
    }

    /// Never fails: a phrase without a number has a zero amount, and one
    /// without category evidence lands in the sentinel with zero confidence.
    pub fn parse(&self, input: &str) -> ParseResult {
        let text = input.nfc().collect::<String>().trim().to_lowercase();

        let extraction = AmountExtractor::extract(&text);
        let description = clean_description(
            &text,
            extraction.token.as_ref().map(|t| t.matched.as_str()),
        );

        if description.is_empty() {
            debug!(amount = extraction.amount.value(), "no description left to classify");
            return ParseResult::unmatched(extraction.amount, description);
        }

        let classification = self.matcher.classify(&description);
        ParseResult::new(
            extraction.amount,
            description,
            classification.category,
            classification.confidence,
        )
    }
}

/// Parses with the default configuration, sharing one parser per process.
pub fn parse_expense(input: &str) -> ParseResult {
    static PARSER: OnceLock<ExpenseParser> = OnceLock::new();
    PARSER.get_or_init(ExpenseParser::default).parse(input)
}
