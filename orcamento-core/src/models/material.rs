use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structural-steel shape categories recognized by the paint estimator.
///
/// The set is closed: each variant maps to exactly one geometric formula
/// family, and `Other` covers catalog entries (bolts, consumables) for
/// which no surface estimate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeCategory {
    IBeam,
    UChannel,
    Angle,
    RoundBar,
    SquareBar,
    FlatBar,
    RoundTube,
    SquareTube,
    RectangularTube,
    FlatPlate,
    Other,
}

impl ShapeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IBeam => "I",
            Self::UChannel => "U",
            Self::Angle => "L",
            Self::RoundBar => "BR",
            Self::SquareBar => "BQ",
            Self::FlatBar => "BC",
            Self::RoundTube => "TR",
            Self::SquareTube => "TQ",
            Self::RectangularTube => "TRET",
            Self::FlatPlate => "CH",
            Self::Other => "OUTRO",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "I" => Some(Self::IBeam),
            "U" => Some(Self::UChannel),
            "L" => Some(Self::Angle),
            "BR" => Some(Self::RoundBar),
            "BQ" => Some(Self::SquareBar),
            "BC" => Some(Self::FlatBar),
            "TR" => Some(Self::RoundTube),
            "TQ" => Some(Self::SquareTube),
            "TRET" => Some(Self::RectangularTube),
            "CH" => Some(Self::FlatPlate),
            "OUTRO" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Sparse dimensional fields of a structural material, all in millimeters.
///
/// Each shape category consumes its own subset; unused fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDimensions {
    /// Section height (I-beams, channels, rectangular tubes).
    pub height: Option<Decimal>,

    /// Flange width (I-beams, channels).
    pub flange_width: Option<Decimal>,

    /// Web thickness (I-beams, channels).
    pub web_thickness: Option<Decimal>,

    /// Angle leg lengths. A single supplied leg stands in for both.
    pub leg_a: Option<Decimal>,
    pub leg_b: Option<Decimal>,

    /// Outer diameter (round bars and tubes).
    pub diameter: Option<Decimal>,

    /// Side length (square bars and tubes).
    pub side: Option<Decimal>,

    /// Width (flat bars, rectangular tubes, plates).
    pub width: Option<Decimal>,

    /// Length (plates only).
    pub length: Option<Decimal>,

    /// Thickness (flat bars).
    pub thickness: Option<Decimal>,
}

/// Advisory paint-surface figures derived from a shape and its dimensions.
///
/// Profile shapes report the exposed perimeter and the equivalent paintable
/// area per linear meter; flat plates report only the two-face area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintEstimate {
    /// Exposed cross-section perimeter in meters, when the shape has one.
    pub perimeter_m: Option<Decimal>,

    /// Paintable area in m² per linear meter of material (or total two-face
    /// area for plates).
    pub area_m2_per_linear_meter: Option<Decimal>,
}
