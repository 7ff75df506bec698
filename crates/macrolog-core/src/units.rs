//! Energy unit conversion.
//!
//! Storage is always whole kilocalories; kilojoules exist only at the input
//! and display boundaries. Rounding happens at those boundaries and never
//! feeds back into stored values, so toggling the display unit repeatedly
//! cannot drift the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// 1 kcal = 4.184 kJ.
pub const KJ_PER_KCAL: f64 = 4.184;

/// Energy unit selector for input and display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    #[default]
    #[serde(rename = "kcal")]
    Kcal,
    #[serde(rename = "kj")]
    Kj,
}

impl EnergyUnit {
    /// Display label: "kcal" or "kJ".
    pub fn label(self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnergyUnit {
    type Err = ValidationError;

    // "cal" is accepted for kcal; the input selector historically used it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kcal" | "cal" => Ok(EnergyUnit::Kcal),
            "kj" => Ok(EnergyUnit::Kj),
            _ => Err(ValidationError::BadUnit(s.to_string())),
        }
    }
}

/// Convert a magnitude in `unit` to canonical kilocalories, unrounded.
pub fn to_canonical(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kcal => value,
        EnergyUnit::Kj => value / KJ_PER_KCAL,
    }
}

/// Convert stored kilocalories to `unit`, rounded to the nearest whole unit
/// for display.
pub fn to_display(kcal: u32, unit: EnergyUnit) -> u32 {
    match unit {
        EnergyUnit::Kcal => kcal,
        EnergyUnit::Kj => (f64::from(kcal) * KJ_PER_KCAL).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kcal_is_identity() {
        assert_eq!(to_canonical(250.0, EnergyUnit::Kcal), 250.0);
        assert_eq!(to_display(250, EnergyUnit::Kcal), 250);
    }

    #[test]
    fn kj_converts_with_fixed_factor() {
        let kcal = to_canonical(418.4, EnergyUnit::Kj);
        assert!((kcal - 100.0).abs() < 1e-9);
        assert_eq!(to_display(100, EnergyUnit::Kj), 418);
    }

    #[test]
    fn display_roundtrip_within_rounding_tolerance() {
        for kcal in [0u32, 1, 140, 2000, 9999] {
            let shown = to_display(kcal, EnergyUnit::Kj);
            let back = to_canonical(f64::from(shown), EnergyUnit::Kj);
            assert!((back - f64::from(kcal)).abs() <= 0.5 / KJ_PER_KCAL + 0.5);
        }
    }

    #[test]
    fn parses_unit_selectors() {
        assert_eq!("kcal".parse::<EnergyUnit>().unwrap(), EnergyUnit::Kcal);
        assert_eq!("cal".parse::<EnergyUnit>().unwrap(), EnergyUnit::Kcal);
        assert_eq!("kJ".parse::<EnergyUnit>().unwrap(), EnergyUnit::Kj);
        assert!("joule".parse::<EnergyUnit>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&EnergyUnit::Kcal).unwrap(), "\"kcal\"");
        assert_eq!(serde_json::to_string(&EnergyUnit::Kj).unwrap(), "\"kj\"");
        let unit: EnergyUnit = serde_json::from_str("\"kj\"").unwrap();
        assert_eq!(unit, EnergyUnit::Kj);
    }
}
