//! Cost composition roll-up for the quote "general data" tab.
//!
//! Combines the BDI markup, the tax rates (ISS plus the selected Simples
//! Nacional bracket), and the payroll social charges into the sale-price
//! breakdown shown to the user and persisted with the quote.
//!
//! # Breakdown structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | BDI total: sum of enabled BDI group percentages |
//! | 2    | Simples rate: resolved from the selected bracket |
//! | 3    | Tax total: ISS rate + Simples rate (plain addition) |
//! | 4    | Labor charges: direct subtotal + indirect subtotal |
//! | 5    | Combined markup: BDI + tax + labor charges |
//! | 6    | Sale total: combined markup applied to direct cost |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use orcamento_core::calculations::{CompositionInput, CostComposer, MarkupMode};
//! use orcamento_core::models::defaults::{
//!     default_bdi_groups, default_labor_charge_groups, default_simples_table,
//! };
//!
//! let table = default_simples_table();
//! let input = CompositionInput {
//!     direct_cost: dec!(10000.00),
//!     bdi_groups: default_bdi_groups(),
//!     iss_rate: dec!(5.00),
//!     selected_bracket_index: 4,
//!     labor_charge_groups: default_labor_charge_groups(),
//!     markup_mode: MarkupMode::Additive,
//! };
//!
//! let result = CostComposer::new(&table).calculate(&input).unwrap();
//!
//! assert_eq!(result.bdi_total, dec!(25.00));
//! assert_eq!(result.tax_total, dec!(16.2));
//! assert_eq!(result.sale_total, dec!(21149.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::charges::{sum_groups, sum_groups_with_incidence};
use crate::calculations::common::{percent_of, round_half_up};
use crate::calculations::simples::resolve_bracket;
use crate::models::{ChargeGroup, ChargeIncidence, NewCostComposition, SimplesBracket};

/// Errors that can occur while composing a sale price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompositionError {
    /// No Simples Nacional brackets were provided.
    #[error("no Simples Nacional brackets provided")]
    NoBrackets,
}

/// How the combined markup is applied to direct cost.
///
/// The two interpretations observed in the field disagree; additive is the
/// conservative default, and compounded stays selectable so switching the
/// authoritative formula is a one-field change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupMode {
    /// `sale = direct_cost × (1 + (bdi + tax + labor) / 100)`
    #[default]
    Additive,

    /// `sale = direct_cost × (1 + bdi/100) × (1 + tax/100) × (1 + labor/100)`
    Compounded,
}

/// Input snapshot for a composition run.
///
/// Built by the presentation layer from the current toggle/edit state;
/// the composer never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionInput {
    /// Base direct cost (materials + labor) in R$. Negative or zero values
    /// are accepted and propagate; upstream validation owns rejection.
    pub direct_cost: Decimal,

    /// BDI charge groups. Every group is summed regardless of incidence.
    pub bdi_groups: Vec<ChargeGroup>,

    /// Municipal service tax rate in percentage points.
    pub iss_rate: Decimal,

    /// Selected Simples Nacional bracket (1-based table index).
    pub selected_bracket_index: u8,

    /// Encargos sociais groups; their incidence splits the subtotals.
    pub labor_charge_groups: Vec<ChargeGroup>,

    pub markup_mode: MarkupMode,
}

/// Result of a composition run.
///
/// Percentages are in points over direct cost; amounts are in R$. The
/// direct/indirect labor subtotals are reported separately as well as
/// combined because the UI surfaces both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionResult {
    pub bdi_total: Decimal,
    pub simples_rate: Decimal,
    pub tax_total: Decimal,
    pub direct_charge_total: Decimal,
    pub indirect_charge_total: Decimal,
    pub labor_charge_total: Decimal,

    /// Sum of the three markup components, in percentage points.
    pub combined_markup: Decimal,

    // Monetary equivalents of the three components over direct cost
    pub bdi_amount: Decimal,
    pub tax_amount: Decimal,
    pub labor_charge_amount: Decimal,

    /// Final sale price in R$.
    pub sale_total: Decimal,
}

impl CompositionResult {
    /// Builds the persistable snapshot for this breakdown.
    pub fn to_snapshot(
        &self,
        input: &CompositionInput,
        quote_id: i64,
    ) -> NewCostComposition {
        NewCostComposition {
            quote_id,
            direct_cost: input.direct_cost,
            bdi_total: self.bdi_total,
            iss_rate: input.iss_rate,
            simples_rate: self.simples_rate,
            tax_total: self.tax_total,
            direct_charge_total: self.direct_charge_total,
            indirect_charge_total: self.indirect_charge_total,
            labor_charge_total: self.labor_charge_total,
            sale_total: self.sale_total,
            bdi_groups: input.bdi_groups.clone(),
            labor_charge_groups: input.labor_charge_groups.clone(),
            selected_bracket_index: input.selected_bracket_index,
        }
    }
}

/// Calculator for the quote cost composition.
///
/// Holds the Simples bracket table and derives everything else from the
/// caller-supplied input snapshot.
#[derive(Debug, Clone)]
pub struct CostComposer<'a> {
    brackets: &'a [SimplesBracket],
}

impl<'a> CostComposer<'a> {
    /// Creates a composer over the given bracket table.
    ///
    /// The table should be ordered by index ascending; see
    /// [`crate::calculations::simples::validate_table`].
    pub fn new(brackets: &'a [SimplesBracket]) -> Self {
        Self { brackets }
    }

    /// Runs the full composition.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::NoBrackets`] when the bracket table is
    /// empty. Everything else is total: a negative direct cost merely
    /// propagates into a negative sale total, with a warning.
    pub fn calculate(
        &self,
        input: &CompositionInput,
    ) -> Result<CompositionResult, CompositionError> {
        let bracket = resolve_bracket(self.brackets, input.selected_bracket_index)
            .ok_or(CompositionError::NoBrackets)?;

        if input.direct_cost <= Decimal::ZERO {
            warn!(
                direct_cost = %input.direct_cost,
                "Direct cost is zero or negative; sale total will not be meaningful"
            );
        }

        let bdi_total = sum_groups(&input.bdi_groups);
        let tax_total = self.tax_total(input.iss_rate, bracket.rate);

        let direct_charge_total =
            sum_groups_with_incidence(&input.labor_charge_groups, ChargeIncidence::Direct);
        let indirect_charge_total =
            sum_groups_with_incidence(&input.labor_charge_groups, ChargeIncidence::Indirect);
        let labor_charge_total = direct_charge_total + indirect_charge_total;

        let combined_markup = bdi_total + tax_total + labor_charge_total;
        let sale_total = self.sale_total(
            input.direct_cost,
            bdi_total,
            tax_total,
            labor_charge_total,
            input.markup_mode,
        );

        Ok(CompositionResult {
            bdi_total,
            simples_rate: bracket.rate,
            tax_total,
            direct_charge_total,
            indirect_charge_total,
            labor_charge_total,
            combined_markup,
            bdi_amount: percent_of(input.direct_cost, bdi_total),
            tax_amount: percent_of(input.direct_cost, tax_total),
            labor_charge_amount: percent_of(input.direct_cost, labor_charge_total),
            sale_total,
        })
    }

    /// Tax rate total: ISS plus the bracket rate, no compounding.
    fn tax_total(
        &self,
        iss_rate: Decimal,
        simples_rate: Decimal,
    ) -> Decimal {
        iss_rate + simples_rate
    }

    /// Applies the combined markup to direct cost under the chosen mode.
    fn sale_total(
        &self,
        direct_cost: Decimal,
        bdi_total: Decimal,
        tax_total: Decimal,
        labor_charge_total: Decimal,
        mode: MarkupMode,
    ) -> Decimal {
        let factor = |percentage: Decimal| {
            (Decimal::ONE_HUNDRED + percentage) / Decimal::ONE_HUNDRED
        };

        let sale = match mode {
            MarkupMode::Additive => {
                direct_cost * factor(bdi_total + tax_total + labor_charge_total)
            }
            MarkupMode::Compounded => {
                direct_cost * factor(bdi_total) * factor(tax_total) * factor(labor_charge_total)
            }
        };

        round_half_up(sale)
    }
}
