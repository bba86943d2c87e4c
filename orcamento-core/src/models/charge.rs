use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a charge group for labor-charge roll-ups.
///
/// Direct groups compound on top of the base labor charges (encargos that
/// reflect incidence); indirect groups do not. The classification is fixed
/// when the catalog is built and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeIncidence {
    Direct,
    Indirect,
}

impl ChargeIncidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "D",
            Self::Indirect => "I",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "D" => Some(Self::Direct),
            "I" => Some(Self::Indirect),
            _ => None,
        }
    }
}

/// A single toggleable percentage line in a charge group.
///
/// The stored `percentage` survives disabling: toggling `enabled` off and
/// on again restores the exact same contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeItem {
    /// Stable identity of the item within its group.
    pub key: String,

    /// Display label (e.g., "Administração central").
    pub label: String,

    /// Percentage over direct cost. Non-negative by upstream contract.
    pub percentage: Decimal,

    /// Whether the item currently contributes to the group subtotal.
    pub enabled: bool,
}

/// An ordered, named collection of charge items.
///
/// Group membership is fixed after creation; only `enabled` and
/// `percentage` of individual items change, and only through
/// [`crate::calculations::charges::apply_action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeGroup {
    /// Stable identity of the group within its catalog.
    pub key: String,

    /// Display label (e.g., "Grupo A - Encargos básicos").
    pub label: String,

    /// Direct/indirect classification for labor-charge subtotals.
    /// BDI groups carry `Direct` by convention; the composer sums every
    /// BDI group regardless of incidence.
    pub incidence: ChargeIncidence,

    pub items: Vec<ChargeItem>,
}

impl ChargeGroup {
    /// Looks up an item by key.
    pub fn item(&self, key: &str) -> Option<&ChargeItem> {
        self.items.iter().find(|item| item.key == key)
    }
}
