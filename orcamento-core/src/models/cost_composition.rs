use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ChargeGroup;

/// Persisted fiscal/cost breakdown attached to a quote.
///
/// Besides the roll-up totals, the snapshot keeps the full charge-group
/// maps and the selected bracket index so the breakdown can be reopened
/// and re-edited exactly as the user left it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostComposition {
    pub id: i64,
    pub quote_id: i64,

    /// Base direct cost (materials + labor) supplied by the quote.
    pub direct_cost: Decimal,

    // Roll-up totals, all in percentage points over direct cost
    pub bdi_total: Decimal,
    pub iss_rate: Decimal,
    pub simples_rate: Decimal,
    pub tax_total: Decimal,
    pub direct_charge_total: Decimal,
    pub indirect_charge_total: Decimal,
    pub labor_charge_total: Decimal,

    /// Final sale price in R$.
    pub sale_total: Decimal,

    // Detail needed to reconstruct and re-edit the breakdown
    pub bdi_groups: Vec<ChargeGroup>,
    pub labor_charge_groups: Vec<ChargeGroup>,
    pub selected_bracket_index: u8,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new compositions (no id or timestamps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCostComposition {
    pub quote_id: i64,
    pub direct_cost: Decimal,
    pub bdi_total: Decimal,
    pub iss_rate: Decimal,
    pub simples_rate: Decimal,
    pub tax_total: Decimal,
    pub direct_charge_total: Decimal,
    pub indirect_charge_total: Decimal,
    pub labor_charge_total: Decimal,
    pub sale_total: Decimal,
    pub bdi_groups: Vec<ChargeGroup>,
    pub labor_charge_groups: Vec<ChargeGroup>,
    pub selected_bracket_index: u8,
}
