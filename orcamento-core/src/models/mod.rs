mod charge;
mod cost_composition;
mod material;
mod simples_bracket;

pub mod defaults;

pub use charge::{ChargeGroup, ChargeIncidence, ChargeItem};
pub use cost_composition::{CostComposition, NewCostComposition};
pub use material::{MaterialDimensions, PaintEstimate, ShapeCategory};
pub use simples_bracket::SimplesBracket;
