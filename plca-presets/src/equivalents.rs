//! Built-in eco-equivalent definitions.

use plca_core::EcoEquivalent;

fn equivalent(id: &str, name: &str, icon: &str, unit: &str, factor: f64) -> EcoEquivalent {
    EcoEquivalent::new(id, name, icon, unit, factor)
        .expect("builtin conversion factors are positive")
}

/// The built-in equivalents: everyday activities a CO2 total can be
/// expressed in. Factors are kg CO2e per unit of the activity.
pub fn builtin_equivalents() -> Vec<EcoEquivalent> {
    vec![
        equivalent("lightbulb", "Light Bulb Hours", "lightbulb", "hours", 0.06),
        equivalent("car", "Car Travel", "car", "km", 0.12),
        equivalent("shower", "Shower Time", "shower", "minutes", 0.25),
        equivalent("trash", "Trash Bags", "trash", "bags", 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_equivalents() {
        let equivalents = builtin_equivalents();
        assert_eq!(equivalents.len(), 4);
        for equivalent in &equivalents {
            equivalent.validate().unwrap();
            assert_eq!(equivalent.value, 0.0);
        }
        assert_eq!(equivalents[0].id, "lightbulb");
        assert_eq!(equivalents[0].unit, "hours");
        assert_eq!(equivalents[0].conversion_factor, 0.06);
    }
}
