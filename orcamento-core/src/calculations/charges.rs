//! Charge-group evaluation for BDI and encargos sociais percentages.
//!
//! Groups are snapshots: summation never mutates them, and the edit
//! operations go through [`ChargeAction`] values applied by
//! [`apply_action`], which returns a new catalog instead of mutating in
//! place. Disabling an item zeroes its contribution but keeps the stored
//! percentage, so re-enabling restores the exact previous subtotal.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use orcamento_core::calculations::charges::{ChargeAction, apply_action, sum_group};
//! use orcamento_core::models::defaults::default_bdi_groups;
//!
//! let groups = default_bdi_groups();
//! let before = sum_group(&groups[0]);
//!
//! let toggled = apply_action(
//!     &groups,
//!     &ChargeAction::Toggle {
//!         group_key: "bdi".to_string(),
//!         item_key: "lucro".to_string(),
//!     },
//! );
//! assert_eq!(sum_group(&toggled[0]), before - dec!(20.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{ChargeGroup, ChargeIncidence};

/// Sums the percentages of every enabled item in a group.
///
/// Disabled items contribute zero regardless of their stored percentage.
/// An empty group sums to zero.
pub fn sum_group(group: &ChargeGroup) -> Decimal {
    group
        .items
        .iter()
        .filter(|item| item.enabled)
        .map(|item| item.percentage)
        .sum()
}

/// Sums [`sum_group`] across a slice of groups. Empty input yields zero.
pub fn sum_groups(groups: &[ChargeGroup]) -> Decimal {
    groups.iter().map(sum_group).sum()
}

/// Sums only the groups carrying the given incidence classification.
pub fn sum_groups_with_incidence(
    groups: &[ChargeGroup],
    incidence: ChargeIncidence,
) -> Decimal {
    groups
        .iter()
        .filter(|group| group.incidence == incidence)
        .map(sum_group)
        .sum()
}

/// An edit requested by the presentation layer against a charge catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeAction {
    /// Flips `enabled` on one item, leaving its percentage untouched.
    Toggle { group_key: String, item_key: String },

    /// Replaces the stored percentage of one item.
    SetPercentage {
        group_key: String,
        item_key: String,
        percentage: Decimal,
    },
}

/// Applies a single action and returns the resulting catalog.
///
/// Exactly one field of exactly one item changes; every other item is
/// carried over unchanged. Unknown group or item keys leave the catalog
/// as-is (with a warning), and a negative percentage is refused the same
/// way, since percentages are non-negative by upstream contract.
pub fn apply_action(
    groups: &[ChargeGroup],
    action: &ChargeAction,
) -> Vec<ChargeGroup> {
    let (group_key, item_key) = match action {
        ChargeAction::Toggle {
            group_key,
            item_key,
        } => (group_key, item_key),
        ChargeAction::SetPercentage {
            group_key,
            item_key,
            percentage,
        } => {
            if *percentage < Decimal::ZERO {
                warn!(
                    group_key = %group_key,
                    item_key = %item_key,
                    percentage = %percentage,
                    "Refusing negative charge percentage; catalog unchanged"
                );
                return groups.to_vec();
            }
            (group_key, item_key)
        }
    };

    if !groups
        .iter()
        .any(|g| &g.key == group_key && g.item(item_key).is_some())
    {
        warn!(
            group_key = %group_key,
            item_key = %item_key,
            "Charge action targets an unknown item; catalog unchanged"
        );
        return groups.to_vec();
    }

    groups
        .iter()
        .map(|group| {
            if &group.key != group_key {
                return group.clone();
            }
            let items = group
                .items
                .iter()
                .map(|item| {
                    if &item.key != item_key {
                        return item.clone();
                    }
                    let mut updated = item.clone();
                    match action {
                        ChargeAction::Toggle { .. } => updated.enabled = !updated.enabled,
                        ChargeAction::SetPercentage { percentage, .. } => {
                            updated.percentage = *percentage;
                        }
                    }
                    updated
                })
                .collect();
            ChargeGroup {
                key: group.key.clone(),
                label: group.label.clone(),
                incidence: group.incidence,
                items,
            }
        })
        .collect()
}
