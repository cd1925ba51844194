use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chitieu_core::{registry, Amount, ParseResult};
use chitieu_parse::ExpenseParser;
use serde::Serialize;

/// One line of `preview` output: the parse plus what a caller would show.
#[derive(Debug, Serialize)]
pub struct Preview<'a> {
    pub input: &'a str,
    #[serde(flatten)]
    pub result: ParseResult,
    pub display_amount: String,
    pub submittable: bool,
}

impl<'a> Preview<'a> {
    pub fn new(input: &'a str, result: ParseResult) -> Self {
        Self {
            input,
            display_amount: result.amount.to_string(),
            submittable: result.is_submittable(),
            result,
        }
    }
}

pub fn parse_phrase(
    parser: &ExpenseParser,
    phrase: &str,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let result = parser.parse(phrase);
    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn list_categories(out: &mut impl Write) -> Result<()> {
    for c in registry::all() {
        writeln!(out, "{} {:<14} {}", c.emoji, c.id, c.name)?;
    }
    Ok(())
}

/// Blank lines are skipped; returns how many phrases were previewed.
pub fn preview(parser: &ExpenseParser, input: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    let mut total = Amount::zero();
    for line in input.lines() {
        let line = line.context("Failed to read phrase from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let preview = Preview::new(&line, parser.parse(&line));
        if preview.submittable {
            total = total + preview.result.amount;
        }
        writeln!(out, "{}", serde_json::to_string(&preview)?)?;
        count += 1;
    }
    tracing::debug!(count, total = total.value(), "preview finished");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output_lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn parse_phrase_writes_json() {
        let mut buf = Vec::new();
        parse_phrase(&ExpenseParser::default(), "cafe 30k", false, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["amount"], 30_000);
        assert_eq!(value["category"]["id"], "food");
    }

    #[test]
    fn categories_listed_in_order() {
        let mut buf = Vec::new();
        list_categories(&mut buf).unwrap();
        let lines = output_lines(buf);
        assert_eq!(lines.len(), registry::all().len());
        assert!(lines[0].contains("food"));
        assert!(lines.last().unwrap().contains("other"));
    }

    #[test]
    fn preview_skips_blank_lines() {
        let input = Cursor::new("cafe 30k\n\n   \ngrab\n");
        let mut buf = Vec::new();
        let count = preview(&ExpenseParser::default(), input, &mut buf).unwrap();
        assert_eq!(count, 2);

        let lines = output_lines(buf);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["input"], "cafe 30k");
        assert_eq!(first["display_amount"], "30.000 ₫");
        assert_eq!(first["submittable"], true);

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["amount"], 0);
        assert_eq!(second["submittable"], false);
        assert_eq!(second["category"]["id"], "transport");
    }
}
