use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the Simples Nacional revenue-bracket reference table.
///
/// The table is ordered by `index` ascending with strictly increasing
/// `revenue_ceiling` and `rate`; exactly one bracket is selected per quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplesBracket {
    /// 1-based position in the table.
    pub index: u8,

    /// Accumulated gross revenue ceiling (R$) for this bracket.
    pub revenue_ceiling: Decimal,

    /// Nominal tax rate in percentage points (e.g., 11.2).
    pub rate: Decimal,

    /// Display label (e.g., "Até R$ 1.800.000,00").
    pub description: String,
}
