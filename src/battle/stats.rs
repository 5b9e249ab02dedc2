use crate::errors::LookupMiss;
use schema::PokemonType;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The chart used by every battle.
pub static TYPE_CHART: LazyLock<TypeChart> = LazyLock::new(TypeChart::standard);

/// Damage multipliers keyed by (attacking move type, defending Pokémon type).
///
/// The chart is deliberately sparse. Only Normal, Fire and Water have rows and
/// columns; anything else falls through to a neutral 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    rows: HashMap<PokemonType, HashMap<PokemonType, f64>>,
}

impl TypeChart {
    /// Build a chart from explicit (attacking, defending, multiplier) entries.
    pub fn from_entries(entries: &[(PokemonType, PokemonType, f64)]) -> Self {
        let mut rows: HashMap<PokemonType, HashMap<PokemonType, f64>> = HashMap::new();
        for &(attacking, defending, multiplier) in entries {
            rows.entry(attacking).or_default().insert(defending, multiplier);
        }
        Self { rows }
    }

    pub fn standard() -> Self {
        use PokemonType::*;

        Self::from_entries(&[
            (Normal, Normal, 1.0),
            (Normal, Fire, 1.0),
            (Normal, Water, 1.0),
            (Fire, Normal, 1.0),
            (Fire, Fire, 0.5),
            (Fire, Water, 2.0),
            (Water, Normal, 1.0),
            (Water, Fire, 0.5),
            (Water, Water, 0.5),
        ])
    }

    /// Look up a multiplier, reporting which axis missed if the pair is absent.
    pub fn lookup(&self, move_type: PokemonType, defender_type: PokemonType) -> Result<f64, LookupMiss> {
        let row = self
            .rows
            .get(&move_type)
            .ok_or(LookupMiss::MoveType(move_type))?;

        row.get(&defender_type)
            .copied()
            .ok_or(LookupMiss::DefenderType {
                move_type,
                defender_type,
            })
    }

    /// Multiplier for an attack, falling back to 1.0 on a miss.
    ///
    /// A miss never aborts the attack; it is only reported as a warning.
    pub fn effectiveness(&self, move_type: PokemonType, defender_type: PokemonType) -> f64 {
        self.lookup(move_type, defender_type).unwrap_or_else(|miss| {
            log::warn!("{}", miss);
            1.0
        })
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use PokemonType::*;

    #[rstest]
    #[case(Normal, Normal, 1.0)]
    #[case(Normal, Fire, 1.0)]
    #[case(Normal, Water, 1.0)]
    #[case(Fire, Normal, 1.0)]
    #[case(Fire, Fire, 0.5)]
    #[case(Fire, Water, 2.0)]
    #[case(Water, Normal, 1.0)]
    #[case(Water, Fire, 0.5)]
    #[case(Water, Water, 0.5)]
    fn test_configured_pairs(
        #[case] move_type: PokemonType,
        #[case] defender: PokemonType,
        #[case] expected: f64,
    ) {
        let chart = TypeChart::standard();
        assert_eq!(chart.lookup(move_type, defender), Ok(expected));
        assert_eq!(chart.effectiveness(move_type, defender), expected);
    }

    #[rstest]
    #[case(Grass, Normal)]
    #[case(Electric, Water)]
    #[case(Fire, Flying)]
    #[case(Water, Rock)]
    #[case(Normal, Grass)]
    #[case(Dragon, Dragon)]
    fn test_missing_pairs_are_neutral(#[case] move_type: PokemonType, #[case] defender: PokemonType) {
        let chart = TypeChart::standard();
        assert!(chart.lookup(move_type, defender).is_err());
        assert_eq!(chart.effectiveness(move_type, defender), 1.0);
    }

    #[test]
    fn test_miss_reports_axis() {
        let chart = TypeChart::standard();
        assert_eq!(chart.lookup(Grass, Fire), Err(LookupMiss::MoveType(Grass)));
        assert_eq!(
            chart.lookup(Fire, Rock),
            Err(LookupMiss::DefenderType {
                move_type: Fire,
                defender_type: Rock
            })
        );
    }

    #[test]
    fn test_custom_chart() {
        let chart = TypeChart::from_entries(&[(Grass, Water, 2.0)]);
        assert_eq!(chart.effectiveness(Grass, Water), 2.0);
        assert_eq!(chart.effectiveness(Fire, Water), 1.0);
    }
}
