//! Everyday-quantity equivalents of a CO2 total.
//!
//! An equivalent definition states how many kg of CO2e one unit of a
//! familiar activity stands for (one hour of a light bulb, one kilometre by
//! car). Dividing a product's CO2 total by the factor turns an abstract
//! number into an amount of that activity.

use serde::{Deserialize, Serialize};

use crate::aggregate::round2;
use crate::errors::{PLCAError, PLCAResult};

/// An eco-equivalent definition, optionally carrying a computed value.
///
/// `conversion_factor` is kg CO2e per unit of the activity and must be a
/// positive finite number; [`new`](EcoEquivalent::new) and
/// [`validate`](EcoEquivalent::validate) enforce this so that conversion can
/// never divide by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcoEquivalent {
    pub id: String,
    pub name: String,
    /// Free-form icon tag consumed by UIs.
    #[serde(default)]
    pub icon: String,
    /// Unit the computed value is expressed in (e.g. "hours", "km").
    pub unit: String,
    /// kg CO2e represented by one unit of the activity.
    pub conversion_factor: f64,
    /// Activity amount for the CO2 total this was last computed against.
    #[serde(default)]
    pub value: f64,
}

impl EcoEquivalent {
    /// Create a definition with a zero computed value.
    ///
    /// # Errors
    ///
    /// Returns [`PLCAError::InvalidConversionFactor`] when the factor is
    /// zero, negative or not finite.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        unit: impl Into<String>,
        conversion_factor: f64,
    ) -> PLCAResult<Self> {
        let equivalent = Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            unit: unit.into(),
            conversion_factor,
            value: 0.0,
        };
        equivalent.validate()?;
        Ok(equivalent)
    }

    /// Check the conversion factor, for definitions built through
    /// deserialization or struct literals.
    ///
    /// # Errors
    ///
    /// Returns [`PLCAError::InvalidConversionFactor`] when the factor is
    /// zero, negative or not finite.
    pub fn validate(&self) -> PLCAResult<()> {
        if !self.conversion_factor.is_finite() || self.conversion_factor <= 0.0 {
            return Err(PLCAError::InvalidConversionFactor {
                id: self.id.clone(),
                factor: self.conversion_factor,
            });
        }
        Ok(())
    }
}

/// Express a CO2 total in each of the given equivalents.
///
/// Returns the definitions in order with `value` set to the rounded activity
/// amount. Callers conventionally pass the already-rounded reported CO2
/// total, so displayed equivalents match the displayed total. A definition
/// with an invalid factor yields zero rather than dividing by it.
pub fn compute_equivalents(co2_total: f64, definitions: &[EcoEquivalent]) -> Vec<EcoEquivalent> {
    definitions
        .iter()
        .map(|definition| {
            let mut equivalent = definition.clone();
            equivalent.value =
                if definition.conversion_factor.is_finite() && definition.conversion_factor > 0.0 {
                    round2(co2_total / definition.conversion_factor)
                } else {
                    0.0
                };
            equivalent
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_factor() {
        for factor in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let result = EcoEquivalent::new("car", "Car Travel", "car", "km", factor);
            assert!(
                matches!(result, Err(PLCAError::InvalidConversionFactor { ref id, .. }) if id == "car"),
                "factor {} should be rejected",
                factor
            );
        }
    }

    #[test]
    fn test_new_accepts_positive_factor() {
        let equivalent =
            EcoEquivalent::new("shower", "Shower Time", "droplets", "minutes", 0.25).unwrap();
        assert_eq!(equivalent.conversion_factor, 0.25);
        assert_eq!(equivalent.value, 0.0);
        equivalent.validate().unwrap();
    }

    #[test]
    fn test_compute_divides_and_rounds() {
        let definitions = vec![
            EcoEquivalent::new("lightbulb", "Light Bulb Hours", "lightbulb", "hours", 0.06)
                .unwrap(),
            EcoEquivalent::new("car", "Car Travel", "car", "km", 0.5).unwrap(),
        ];

        let computed = compute_equivalents(0.95, &definitions);
        assert_eq!(computed[0].value, 15.83);
        assert_eq!(computed[1].value, 1.9);

        let larger = compute_equivalents(100.0, &definitions);
        assert_eq!(larger[1].value, 200.0);
    }

    #[test]
    fn test_compute_zero_total() {
        let definitions =
            vec![EcoEquivalent::new("trash", "Trash Bags", "trash", "bags", 0.5).unwrap()];
        assert_eq!(compute_equivalents(0.0, &definitions)[0].value, 0.0);
    }

    #[test]
    fn test_compute_preserves_definition_fields_and_order() {
        let definitions = vec![
            EcoEquivalent::new("car", "Car Travel", "car", "km", 0.12).unwrap(),
            EcoEquivalent::new("shower", "Shower Time", "droplets", "minutes", 0.25).unwrap(),
        ];

        let computed = compute_equivalents(3.0, &definitions);
        assert_eq!(computed.len(), 2);
        assert_eq!(computed[0].id, "car");
        assert_eq!(computed[0].unit, "km");
        assert_eq!(computed[1].id, "shower");
        assert_eq!(computed[1].name, "Shower Time");
    }

    #[test]
    fn test_compute_guards_invalid_factor() {
        // Reachable only for definitions that bypassed validation.
        let definition = EcoEquivalent {
            id: "broken".to_string(),
            name: "Broken".to_string(),
            icon: String::new(),
            unit: "units".to_string(),
            conversion_factor: 0.0,
            value: 0.0,
        };
        assert_eq!(compute_equivalents(10.0, &[definition])[0].value, 0.0);
    }
}
