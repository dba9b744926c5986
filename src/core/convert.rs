use itertools::Itertools;

use crate::{error::ValidationError, journal::Journal, quantity::energy::Joules};

/// Mapping from unit name to the factor that converts joules into that unit.
///
/// Built once at startup and only ever read afterwards. The entry order is
/// the order the units are enumerated in for the user.
pub struct ConversionTable {
    factors: [(&'static str, f64); 5],
}

impl ConversionTable {
    pub const fn new() -> Self {
        Self {
            factors: [
                ("kWh", 1.0 / 3.6e6),
                ("MJ", 1.0 / 1e6),
                ("Wh", 1.0 / 3600.0),
                ("cal", 1.0 / 4.184),
                ("kcal", 1.0 / 4184.0),
            ],
        }
    }

    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors.iter().find(|(name, _)| *name == unit).map(|(_, factor)| *factor)
    }

    /// Unit names in definition order.
    pub fn units(&self) -> impl Iterator<Item = &'static str> {
        self.factors.iter().map(|(name, _)| *name)
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert the energy from joules into the target unit.
pub fn convert_energy(
    table: &ConversionTable,
    energy: Joules,
    target_unit: &str,
    journal: &dyn Journal,
) -> Result<f64, ValidationError> {
    let factor = table.factor(target_unit).ok_or_else(|| ValidationError::UnknownUnit {
        unit: target_unit.to_string(),
        known: table.units().join(", "),
    })?;
    let converted = energy.0 * factor;
    journal.info(format!("converted {energy} into {converted:.4} {target_unit}"));
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::{journal::testing::BufferJournal, prelude::*};

    #[test]
    fn test_kilowatt_hours() {
        let journal = BufferJournal::default();
        let converted =
            convert_energy(&ConversionTable::new(), Joules(360_000.0), "kWh", &journal).unwrap();
        assert_abs_diff_eq!(converted, 0.1);
    }

    #[test]
    fn test_megajoules() {
        let journal = BufferJournal::default();
        let converted =
            convert_energy(&ConversionTable::new(), Joules(2_500_000.0), "MJ", &journal).unwrap();
        assert_abs_diff_eq!(converted, 2.5);
    }

    #[test]
    fn test_watt_hours() {
        let journal = BufferJournal::default();
        let converted =
            convert_energy(&ConversionTable::new(), Joules(7200.0), "Wh", &journal).unwrap();
        assert_abs_diff_eq!(converted, 2.0);
    }

    #[test]
    fn test_calories() {
        let journal = BufferJournal::default();
        let converted =
            convert_energy(&ConversionTable::new(), Joules(4.184), "cal", &journal).unwrap();
        assert_abs_diff_eq!(converted, 1.0);
    }

    #[test]
    fn test_kilocalories() {
        let journal = BufferJournal::default();
        let converted =
            convert_energy(&ConversionTable::new(), Joules(4184.0), "kcal", &journal).unwrap();
        assert_abs_diff_eq!(converted, 1.0);
    }

    #[test]
    fn test_unknown_unit_enumerates_the_table() {
        let journal = BufferJournal::default();
        let error =
            convert_energy(&ConversionTable::new(), Joules(100.0), "BTU", &journal).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unknown conversion unit: BTU. Available units: kWh, MJ, Wh, cal, kcal",
        );
    }

    #[test]
    fn test_round_trip() {
        let journal = BufferJournal::default();
        let table = ConversionTable::new();
        for unit in table.units() {
            let converted = convert_energy(&table, Joules(360_000.0), unit, &journal).unwrap();
            assert_relative_eq!(converted / table.factor(unit).unwrap(), 360_000.0);
        }
    }

    #[test]
    fn test_journals_the_conversion() {
        let journal = BufferJournal::default();
        convert_energy(&ConversionTable::new(), Joules(360_000.0), "kWh", &journal).unwrap();
        assert_eq!(
            journal.0.borrow()[0],
            (Level::INFO, "converted 360000.00 J into 0.1000 kWh".to_string()),
        );
    }
}
