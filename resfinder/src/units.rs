//! Resistance text parsing and formatting.
//!
//! Accepted input forms (see `grammar/resistance.pest`):
//!
//! - plain numbers: `1000`, `15.5`, `1e3`
//! - multiplier suffix: `4.7k`, `2.2M`, `100R`, `1G`
//! - RKM notation, multiplier as decimal point: `4k7`, `1R5`, `2M2`
//! - optional unit: `10 kΩ`, `470ohm`, `1k ohms`
//!
//! Lowercase `m` means mega, not milli: sub-ohm parts are outside the range
//! of the value tables.

use pest::iterators::Pair;
use pest::Parser;

use crate::core::ResFinderError;

mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "grammar/resistance.pest"]
    pub(super) struct ResistanceParser;
}

use grammar::{ResistanceParser, Rule};

fn invalid(text: &str) -> ResFinderError {
    ResFinderError::Parse(format!("invalid resistance value '{}'", text))
}

fn multiplier(prefix: Pair<Rule>) -> Option<f64> {
    match prefix.into_inner().next()?.as_rule() {
        Rule::r => Some(1.0),
        Rule::kilo => Some(1e3),
        Rule::mega => Some(1e6),
        Rule::giga => Some(1e9),
        _ => None,
    }
}

// 4.7k, 1e3, 100R
fn decimal_value(pair: Pair<Rule>) -> Option<f64> {
    let mut inner = pair.into_inner();
    let number: f64 = inner.next()?.as_str().parse().ok()?;
    let mul = match inner.next() {
        Some(prefix) => multiplier(prefix)?,
        None => 1.0,
    };
    Some(number * mul)
}

// 4k7, 1R5, R47
fn rkm_value(pair: Pair<Rule>) -> Option<f64> {
    let mut whole = 0.0;
    let mut mul = None;
    let mut digits = None;
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::integer => whole = part.as_str().parse().ok()?,
            Rule::prefix => mul = multiplier(part),
            Rule::fraction => digits = Some(part.as_str()),
            _ => {}
        }
    }
    let digits = digits?;
    let fraction: f64 = digits.parse().ok()?;
    let scale = 10f64.powi(i32::try_from(digits.len()).ok()?);
    Some((whole * scale + fraction) / scale * mul?)
}

/// Parse a resistance such as `"4.7k"` or `"4k7"` into ohms.
pub fn parse_resistance(text: &str) -> Result<f64, ResFinderError> {
    let mut pairs = ResistanceParser::parse(Rule::resistance, text).map_err(|e| {
        ResFinderError::Parse(format!(
            "invalid resistance value '{}': {}",
            text,
            e.variant.message()
        ))
    })?;
    let value = pairs
        .next()
        .and_then(|resistance| resistance.into_inner().next())
        .ok_or_else(|| invalid(text))?;

    let ohms = match value.as_rule() {
        Rule::rkm => rkm_value(value),
        Rule::decimal => decimal_value(value),
        _ => None,
    }
    .ok_or_else(|| invalid(text))?;

    if ohms.is_finite() {
        Ok(ohms)
    } else {
        Err(invalid(text))
    }
}

/// Format `value` with `sig` significant figures, trailing zeros removed.
pub fn format_significant(value: f64, sig: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let order = value.abs().log10().floor() as i64;
    let decimals = (sig as i64 - 1 - order).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Format a resistance with an engineering suffix: `4700.0` → `"4.7k"`.
pub fn format_resistance(value: f64) -> String {
    if value >= 1e6 {
        format!("{}M", format_significant(value / 1e6, 3))
    } else if value >= 1e3 {
        format!("{}k", format_significant(value / 1e3, 3))
    } else {
        format_significant(value, 3)
    }
}
