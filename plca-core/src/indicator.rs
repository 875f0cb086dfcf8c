//! Impact indicators and per-indicator totals.
//!
//! Every quantity in the engine is tracked along five independent
//! environmental dimensions. [`Indicator`] selects one of them;
//! [`ImpactTotals`] carries one scalar per dimension and is the shape returned
//! by whole-product queries.

use serde::{Deserialize, Serialize};

/// One of the five environmental impact dimensions tracked by the engine.
///
/// Indicators are independent: each has its own per-kilogram coefficient on a
/// material and its own multiplier on a lifecycle stage. There is no
/// cross-indicator arithmetic anywhere in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Indicator {
    /// Global warming potential, reported in kg CO2e.
    Co2,
    /// Primary energy demand, reported in MJ.
    Energy,
    /// Freshwater consumption, reported in litres.
    Water,
    /// Solid waste generation, reported in kg.
    Waste,
    /// Fossil resource use, reported in MJ.
    FossilFuel,
}

impl Indicator {
    /// All indicators, in reporting order.
    pub const ALL: [Indicator; 5] = [
        Indicator::Co2,
        Indicator::Energy,
        Indicator::Water,
        Indicator::Waste,
        Indicator::FossilFuel,
    ];

    /// The unit each indicator is reported in.
    pub fn unit(&self) -> &'static str {
        match self {
            Indicator::Co2 => "kg CO2e",
            Indicator::Energy => "MJ",
            Indicator::Water => "L",
            Indicator::Waste => "kg",
            Indicator::FossilFuel => "MJ",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indicator::Co2 => write!(f, "co2"),
            Indicator::Energy => write!(f, "energy"),
            Indicator::Water => write!(f, "water"),
            Indicator::Waste => write!(f, "waste"),
            Indicator::FossilFuel => write!(f, "fossil-fuel"),
        }
    }
}

/// One scalar per indicator.
///
/// Used both for a product's cached totals and as the return shape of
/// whole-product queries. The fields are plain data; derived totals held by a
/// [`Product`](crate::product::Product) are recomputed by the engine rather
/// than written directly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactTotals {
    pub co2: f64,
    pub energy: f64,
    pub water: f64,
    pub waste: f64,
    pub fossil_fuel: f64,
}

impl ImpactTotals {
    /// Get the scalar for a single indicator.
    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Co2 => self.co2,
            Indicator::Energy => self.energy,
            Indicator::Water => self.water,
            Indicator::Waste => self.waste,
            Indicator::FossilFuel => self.fossil_fuel,
        }
    }

    /// Add `amount` to a single indicator's scalar.
    pub fn add(&mut self, indicator: Indicator, amount: f64) {
        match indicator {
            Indicator::Co2 => self.co2 += amount,
            Indicator::Energy => self.energy += amount,
            Indicator::Water => self.water += amount,
            Indicator::Waste => self.waste += amount,
            Indicator::FossilFuel => self.fossil_fuel += amount,
        }
    }
}
