//! Paint-surface estimation for structural steel shapes.
//!
//! Each [`ShapeCategory`] maps to exactly one geometric formula family
//! over the material's sparse millimeter dimensions. The result is
//! advisory: when the required dimensions are missing or non-positive the
//! estimate is `None`, never zero or NaN, so the caller can suppress the
//! advisory panel instead of showing a bogus figure.
//!
//! Inputs are millimeters; outputs are meters (÷ 1000) and m²
//! (÷ 1 000 000 for products of two millimeter dimensions).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use orcamento_core::calculations::paint::estimate_paint_surface;
//! use orcamento_core::models::{MaterialDimensions, ShapeCategory};
//!
//! let plate = MaterialDimensions {
//!     width: Some(dec!(1200)),
//!     length: Some(dec!(3000)),
//!     ..MaterialDimensions::default()
//! };
//!
//! let estimate = estimate_paint_surface(ShapeCategory::FlatPlate, &plate).unwrap();
//! assert_eq!(estimate.area_m2_per_linear_meter, Some(dec!(7.2)));
//! ```

use rust_decimal::Decimal;

use crate::models::{MaterialDimensions, PaintEstimate, ShapeCategory};

/// Estimates the paintable surface for a shape from its dimensions.
///
/// Returns `None` when the category has no formula (`Other`) or when the
/// formula's required dimensions are absent or non-positive.
pub fn estimate_paint_surface(
    category: ShapeCategory,
    dims: &MaterialDimensions,
) -> Option<PaintEstimate> {
    match category {
        ShapeCategory::IBeam | ShapeCategory::UChannel => open_profile(dims),
        ShapeCategory::Angle => angle(dims),
        ShapeCategory::RoundBar | ShapeCategory::RoundTube => round_section(dims),
        ShapeCategory::SquareBar | ShapeCategory::SquareTube => square_section(dims),
        ShapeCategory::RectangularTube => rectangular_tube(dims),
        ShapeCategory::FlatBar => flat_bar(dims),
        ShapeCategory::FlatPlate => flat_plate(dims),
        ShapeCategory::Other => None,
    }
}

/// Filters a sparse dimension down to strictly positive values.
fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| *v > Decimal::ZERO)
}

fn mm_to_m(value: Decimal) -> Decimal {
    value / Decimal::from(1000)
}

fn mm2_to_m2(value: Decimal) -> Decimal {
    value / Decimal::from(1_000_000)
}

fn round_geom(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Wraps a cross-section perimeter (mm) as a profile estimate.
///
/// For profiles, the paintable area per linear meter equals the perimeter
/// in meters times one meter of length.
fn profile_estimate(perimeter_mm: Decimal) -> Option<PaintEstimate> {
    if perimeter_mm <= Decimal::ZERO {
        return None;
    }
    let perimeter_m = round_geom(mm_to_m(perimeter_mm));
    Some(PaintEstimate {
        perimeter_m: Some(perimeter_m),
        area_m2_per_linear_meter: Some(perimeter_m),
    })
}

/// I-beams and U-channels: exposed perimeter `2h + 4b − 2tw`.
///
/// Height and flange width are required; web thickness only trims the
/// flange overlap and defaults to zero when absent.
fn open_profile(dims: &MaterialDimensions) -> Option<PaintEstimate> {
    let height = positive(dims.height)?;
    let flange = positive(dims.flange_width)?;
    let web = positive(dims.web_thickness).unwrap_or(Decimal::ZERO);

    let two = Decimal::from(2);
    let four = Decimal::from(4);
    profile_estimate(two * height + four * flange - two * web)
}

/// Angles: `2(a + b)`, the second leg defaulting to the first.
fn angle(dims: &MaterialDimensions) -> Option<PaintEstimate> {
    let leg_a = positive(dims.leg_a).or(positive(dims.leg_b))?;
    let leg_b = positive(dims.leg_b).unwrap_or(leg_a);

    profile_estimate(Decimal::from(2) * (leg_a + leg_b))
}

/// Round bars and tubes: outer circumference `π·d`. Tube interiors are
/// not coated.
fn round_section(dims: &MaterialDimensions) -> Option<PaintEstimate> {
    let diameter = positive(dims.diameter)?;

    profile_estimate(Decimal::PI * diameter)
}

/// Square bars and tubes: `4s`.
fn square_section(dims: &MaterialDimensions) -> Option<PaintEstimate> {
    let side = positive(dims.side)?;

    profile_estimate(Decimal::from(4) * side)
}

/// Rectangular tubes: `2(w + h)`.
fn rectangular_tube(dims: &MaterialDimensions) -> Option<PaintEstimate> {
    let width = positive(dims.width)?;
    let height = positive(dims.height)?;

    profile_estimate(Decimal::from(2) * (width + height))
}

/// Flat bars: `2(w + t)`.
fn flat_bar(dims: &MaterialDimensions) -> Option<PaintEstimate> {
    let width = positive(dims.width)?;
    let thickness = positive(dims.thickness)?;

    profile_estimate(Decimal::from(2) * (width + thickness))
}

/// Flat plates: two-face area `2·w·l` in m², no perimeter. Edges are
/// ignored.
fn flat_plate(dims: &MaterialDimensions) -> Option<PaintEstimate> {
    let width = positive(dims.width)?;
    let length = positive(dims.length)?;

    let area = round_geom(mm2_to_m2(Decimal::from(2) * width * length));
    Some(PaintEstimate {
        perimeter_m: None,
        area_m2_per_linear_meter: Some(area),
    })
}
