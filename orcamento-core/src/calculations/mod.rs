//! Calculation modules for the quote fiscal/cost composition tab.
//!
//! This module provides the pure roll-up logic behind the quote "general
//! data" tab (BDI, Simples Nacional, encargos sociais) and the paint
//! surface estimator for structural materials.

pub mod charges;
pub mod common;
pub mod composition;
pub mod paint;
pub mod simples;

pub use charges::{ChargeAction, apply_action, sum_group, sum_groups, sum_groups_with_incidence};
pub use composition::{
    CompositionError, CompositionInput, CompositionResult, CostComposer, MarkupMode,
};
pub use paint::estimate_paint_surface;
pub use simples::{
    BracketTableError, DEFAULT_BRACKET_INDEX, default_rate_tolerance, infer_bracket_from_rate,
    next_bracket, resolve_bracket, validate_table,
};
