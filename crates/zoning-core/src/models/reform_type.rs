use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical label for a zoning policy change.
///
/// Source data carries free-form strings. Recognized labels are matched
/// case-insensitively; anything else is kept verbatim as [`ReformType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReformType {
    AduLotSplit,
    ComprehensiveReform,
    ZoningUpzones,
    HeightDensityIncrease,
    ParkingReduction,
    AffordabilityRequirements,
    MixedUseZoning,
    TransitOrientedDevelopment,
    SingleFamilyElimination,
    Other(String),
}

impl ReformType {
    /// Every recognized reform type, in display order.
    pub const RECOGNIZED: [ReformType; 9] = [
        ReformType::AduLotSplit,
        ReformType::ComprehensiveReform,
        ReformType::ZoningUpzones,
        ReformType::HeightDensityIncrease,
        ReformType::ParkingReduction,
        ReformType::AffordabilityRequirements,
        ReformType::MixedUseZoning,
        ReformType::TransitOrientedDevelopment,
        ReformType::SingleFamilyElimination,
    ];

    /// Parse a free-form label. Never fails.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "adu/lot split" => Self::AduLotSplit,
            "comprehensive reform" => Self::ComprehensiveReform,
            "zoning upzones" => Self::ZoningUpzones,
            "height/density increase" => Self::HeightDensityIncrease,
            "parking reduction" => Self::ParkingReduction,
            "affordability requirements" => Self::AffordabilityRequirements,
            "mixed-use zoning" => Self::MixedUseZoning,
            "transit-oriented development" | "transit-oriented development (tod)" => {
                Self::TransitOrientedDevelopment
            }
            "single-family elimination" => Self::SingleFamilyElimination,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Canonical display label.
    pub fn label(&self) -> &str {
        match self {
            Self::AduLotSplit => "ADU/Lot Split",
            Self::ComprehensiveReform => "Comprehensive Reform",
            Self::ZoningUpzones => "Zoning Upzones",
            Self::HeightDensityIncrease => "Height/Density Increase",
            Self::ParkingReduction => "Parking Reduction",
            Self::AffordabilityRequirements => "Affordability Requirements",
            Self::MixedUseZoning => "Mixed-Use Zoning",
            Self::TransitOrientedDevelopment => "Transit-Oriented Development",
            Self::SingleFamilyElimination => "Single-Family Elimination",
            Self::Other(label) => label,
        }
    }

    /// Case-insensitive identity. Two requested types with the same key are
    /// the same reform, even when unrecognized labels differ in case.
    pub fn match_key(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Reforms that rewrite the zoning code broadly rather than one rule.
    pub fn is_comprehensive(&self) -> bool {
        matches!(
            self,
            Self::ComprehensiveReform | Self::ZoningUpzones | Self::HeightDensityIncrease
        )
    }
}

impl fmt::Display for ReformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for ReformType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for ReformType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<ReformType> for String {
    fn from(value: ReformType) -> Self {
        value.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_for_recognized_types() {
        for rt in ReformType::RECOGNIZED.iter() {
            assert_eq!(&ReformType::parse(rt.label()), rt);
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(ReformType::parse("  adu/lot SPLIT "), ReformType::AduLotSplit);
        assert_eq!(
            ReformType::parse("Transit-Oriented Development (TOD)"),
            ReformType::TransitOrientedDevelopment
        );
    }

    #[test]
    fn unknown_label_is_kept_verbatim() {
        let rt = ReformType::parse("Bogus Type");
        assert_eq!(rt, ReformType::Other("Bogus Type".to_string()));
        assert!(!rt.is_recognized());
        assert_eq!(rt.label(), "Bogus Type");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&ReformType::ParkingReduction).unwrap();
        assert_eq!(json, "\"Parking Reduction\"");
        let back: ReformType = serde_json::from_str("\"mixed-use zoning\"").unwrap();
        assert_eq!(back, ReformType::MixedUseZoning);
    }
}
