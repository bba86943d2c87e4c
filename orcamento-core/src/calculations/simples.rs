//! Simples Nacional bracket resolution.
//!
//! The bracket table is a small static reference table ordered by index
//! with strictly increasing revenue ceilings and rates. Resolution never
//! fails on a miss: a selection that is not in the table falls back to the
//! documented default bracket, and only an empty table yields `None`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use orcamento_core::calculations::simples::{next_bracket, resolve_bracket};
//! use orcamento_core::models::defaults::default_simples_table;
//!
//! let table = default_simples_table();
//!
//! let selected = resolve_bracket(&table, 4).unwrap();
//! assert_eq!(selected.rate, dec!(11.2));
//!
//! let next = next_bracket(&table, 4).unwrap();
//! assert_eq!(next.rate, dec!(14.7));
//! assert!(next_bracket(&table, 6).is_none());
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::models::SimplesBracket;

/// Bracket used whenever a selection or inference finds no exact match.
pub const DEFAULT_BRACKET_INDEX: u8 = 4;

/// Absolute tolerance, in percentage points, used when re-inferring a
/// bracket from a persisted (possibly rounded) rate.
pub fn default_rate_tolerance() -> Decimal {
    Decimal::new(5, 1)
}

/// Errors found while validating a bracket table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table is empty")]
    Empty,

    /// Indices must be 1-based, ascending, and gapless.
    #[error("expected bracket index {expected} at position {position}, found {found}")]
    IndexOrder {
        position: usize,
        expected: u8,
        found: u8,
    },

    #[error("revenue ceiling must strictly increase at bracket {0}")]
    CeilingOrder(u8),

    #[error("rate must strictly increase at bracket {0}")]
    RateOrder(u8),
}

/// Returns the bracket whose `index` matches the selection.
///
/// On a miss the documented default bracket ([`DEFAULT_BRACKET_INDEX`]) is
/// returned instead, then the first bracket when the table lacks the
/// default too. `None` only for an empty table.
pub fn resolve_bracket(
    brackets: &[SimplesBracket],
    selected_index: u8,
) -> Option<&SimplesBracket> {
    let exact = brackets.iter().find(|b| b.index == selected_index);
    if exact.is_some() {
        return exact;
    }

    if !brackets.is_empty() {
        warn!(
            selected_index,
            fallback_index = DEFAULT_BRACKET_INDEX,
            "Selected Simples bracket not in table; using fallback"
        );
    }

    brackets
        .iter()
        .find(|b| b.index == DEFAULT_BRACKET_INDEX)
        .or_else(|| brackets.first())
}

/// Finds the first bracket whose rate is within `tolerance` percentage
/// points of an observed rate.
///
/// Used once per quote, to seed the bracket selection from a previously
/// persisted rate that may have been rounded. Falls back exactly like
/// [`resolve_bracket`] when nothing is close enough.
pub fn infer_bracket_from_rate(
    brackets: &[SimplesBracket],
    rate: Decimal,
    tolerance: Decimal,
) -> Option<&SimplesBracket> {
    let matched = brackets
        .iter()
        .find(|b| (b.rate - rate).abs() <= tolerance);
    if matched.is_some() {
        return matched;
    }

    if !brackets.is_empty() {
        warn!(
            rate = %rate,
            tolerance = %tolerance,
            "No Simples bracket within tolerance of stored rate; using fallback"
        );
    }

    resolve_bracket(brackets, DEFAULT_BRACKET_INDEX)
}

/// Returns the bracket following the selected one, or `None` when the
/// selection is already the last bracket.
///
/// Purely advisory: callers surface it as a "quote may cross into a higher
/// bracket on conversion" warning and nothing else.
pub fn next_bracket(
    brackets: &[SimplesBracket],
    selected_index: u8,
) -> Option<&SimplesBracket> {
    let next_index = selected_index.checked_add(1)?;
    brackets.iter().find(|b| b.index == next_index)
}

/// Checks the bracket-table invariants: 1-based gapless ascending indices,
/// strictly increasing revenue ceilings and rates.
pub fn validate_table(brackets: &[SimplesBracket]) -> Result<(), BracketTableError> {
    if brackets.is_empty() {
        return Err(BracketTableError::Empty);
    }

    for (position, bracket) in brackets.iter().enumerate() {
        let expected = position as u8 + 1;
        if bracket.index != expected {
            return Err(BracketTableError::IndexOrder {
                position,
                expected,
                found: bracket.index,
            });
        }
    }

    for pair in brackets.windows(2) {
        if pair[1].revenue_ceiling <= pair[0].revenue_ceiling {
            return Err(BracketTableError::CeilingOrder(pair[1].index));
        }
        if pair[1].rate <= pair[0].rate {
            return Err(BracketTableError::RateOrder(pair[1].index));
        }
    }

    Ok(())
}
