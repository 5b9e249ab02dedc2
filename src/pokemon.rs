use crate::battle::stats::TypeChart;
use crate::move_data::{get_move_data, standard_move_set};
use schema::{Move, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// HP granted per level. Max HP is always `level * HP_PER_LEVEL`.
pub const HP_PER_LEVEL: f64 = 5.0;

/// Level at which a move deals exactly its base power.
const LEVEL_SCALE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    pub name: String,
    pub level: u8,
    pub pokemon_type: PokemonType,
    /// Current HP. Never clamped; anything at or below zero means fainted.
    pub hp: f64,
    pub moves: Vec<Move>,
}

/// What happened when one Pokémon attacked another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    /// The attacker does not know the move. Nothing changed.
    UnknownMove,
    Hit {
        damage: f64,
        effectiveness: f64,
        target_fainted: bool,
    },
}

impl AttackOutcome {
    pub fn is_super_effective(&self) -> bool {
        matches!(self, AttackOutcome::Hit { effectiveness, .. } if *effectiveness > 1.0)
    }
}

impl PokemonInst {
    /// Create a new Pokémon at full HP knowing the standard move set.
    pub fn new(name: impl Into<String>, level: u8, pokemon_type: PokemonType) -> Self {
        Self {
            name: name.into(),
            level,
            pokemon_type,
            hp: Self::hp_for_level(level),
            moves: standard_move_set(),
        }
    }

    /// HP formula shared by creation and healing.
    pub fn hp_for_level(level: u8) -> f64 {
        level as f64 * HP_PER_LEVEL
    }

    pub fn max_hp(&self) -> f64 {
        Self::hp_for_level(self.level)
    }

    pub fn current_hp(&self) -> f64 {
        self.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn knows_move(&self, move_: Move) -> bool {
        self.moves.contains(&move_)
    }

    /// Reset HP to the level formula.
    pub fn heal(&mut self) {
        self.hp = self.max_hp();
    }

    /// Damage is not clamped, so HP can end up negative.
    pub fn take_damage(&mut self, damage: f64) {
        self.hp -= damage;
    }

    /// Base damage before type effectiveness: `power * (level / 5)`.
    pub fn raw_damage(&self, power: u16) -> f64 {
        power as f64 * (self.level as f64 / LEVEL_SCALE)
    }

    /// Use `move_` against `target`, applying damage in place.
    pub fn attack(&self, move_: Move, target: &mut PokemonInst, chart: &TypeChart) -> AttackOutcome {
        if !self.knows_move(move_) {
            log::debug!("{} doesn't know {}", self.name, move_);
            return AttackOutcome::UnknownMove;
        }
        let Some(move_data) = get_move_data(move_) else {
            log::debug!("{} has no catalog entry", move_);
            return AttackOutcome::UnknownMove;
        };

        let effectiveness = chart.effectiveness(move_data.move_type, target.pokemon_type);
        let damage = self.raw_damage(move_data.power) * effectiveness;
        target.take_damage(damage);

        log::debug!(
            "{} used {} on {}: {} damage (x{}), {} HP left",
            self.name,
            move_,
            target.name,
            damage,
            effectiveness,
            target.hp
        );

        AttackOutcome::Hit {
            damage,
            effectiveness,
            target_fainted: target.is_fainted(),
        }
    }
}

impl fmt::Display for PokemonInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level {}), Type: {}",
            self.name, self.level, self.pokemon_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::stats::TYPE_CHART;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_new_pokemon_has_formula_hp_and_catalog_moves() {
        let pidgey = PokemonInst::new("Pidgey", 3, PokemonType::Flying);
        assert_eq!(pidgey.hp, 15.0);
        assert_eq!(pidgey.max_hp(), 15.0);
        assert_eq!(pidgey.moves, vec![Move::Tackle, Move::Ember, Move::WaterGun]);
        assert!(!pidgey.is_fainted());
    }

    #[rstest]
    #[case(10, 20, 40.0)]
    #[case(5, 20, 20.0)]
    #[case(5, 10, 10.0)]
    #[case(3, 10, 6.0)]
    #[case(7, 20, 28.0)]
    #[case(1, 10, 2.0)]
    fn test_raw_damage_scales_with_level(#[case] level: u8, #[case] power: u16, #[case] expected: f64) {
        let pokemon = PokemonInst::new("Tester", level, PokemonType::Normal);
        assert_eq!(pokemon.raw_damage(power), expected);
    }

    #[test]
    fn test_neutral_hit_damage() {
        // Level 10 Water Gun (20) into a Normal type: 20 * (10/5) * 1 = 40
        let attacker = PokemonInst::new("Squirtle", 10, PokemonType::Water);
        let mut target = PokemonInst::new("Rattata", 10, PokemonType::Normal);

        let outcome = attacker.attack(Move::WaterGun, &mut target, &TYPE_CHART);

        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                damage: 40.0,
                effectiveness: 1.0,
                target_fainted: false
            }
        );
        assert_eq!(target.hp, 50.0 - 40.0);
    }

    #[test]
    fn test_super_effective_hit() {
        let attacker = PokemonInst::new("Charmander", 5, PokemonType::Fire);
        let mut target = PokemonInst::new("Squirtle", 10, PokemonType::Water);

        let outcome = attacker.attack(Move::Ember, &mut target, &TYPE_CHART);

        assert!(outcome.is_super_effective());
        assert_eq!(target.hp, 50.0 - 40.0);
        assert!(!target.is_fainted());
    }

    #[test]
    fn test_resisted_hit_is_not_super_effective() {
        let attacker = PokemonInst::new("Squirtle", 5, PokemonType::Water);
        let mut target = PokemonInst::new("Squirtle", 5, PokemonType::Water);

        let outcome = attacker.attack(Move::WaterGun, &mut target, &TYPE_CHART);

        assert!(!outcome.is_super_effective());
        assert_eq!(target.hp, 25.0 - 10.0);
    }

    #[test]
    fn test_unknown_type_falls_back_to_neutral() {
        let attacker = PokemonInst::new("Charmander", 5, PokemonType::Fire);
        let mut target = PokemonInst::new("Geodude", 10, PokemonType::Rock);

        attacker.attack(Move::Ember, &mut target, &TYPE_CHART);

        assert_eq!(target.hp, 50.0 - 20.0);
    }

    #[test]
    fn test_unknown_move_changes_nothing() {
        let mut attacker = PokemonInst::new("Magikarp", 5, PokemonType::Water);
        attacker.moves = vec![Move::Tackle];
        let mut target = PokemonInst::new("Pidgey", 3, PokemonType::Flying);

        let outcome = attacker.attack(Move::Ember, &mut target, &TYPE_CHART);

        assert_eq!(outcome, AttackOutcome::UnknownMove);
        assert_eq!(target.hp, 15.0);
    }

    #[test]
    fn test_hp_goes_negative_without_clamping() {
        let attacker = PokemonInst::new("Onix", 20, PokemonType::Rock);
        let mut target = PokemonInst::new("Pidgey", 1, PokemonType::Flying);

        attacker.attack(Move::Ember, &mut target, &TYPE_CHART);

        assert_eq!(target.hp, 5.0 - 80.0);
        assert!(target.is_fainted());
    }

    #[test]
    fn test_heal_is_idempotent() {
        let mut pokemon = PokemonInst::new("Bulbasaur", 5, PokemonType::Grass);
        pokemon.take_damage(30.0);
        assert!(pokemon.is_fainted());

        pokemon.heal();
        assert_eq!(pokemon.hp, 25.0);
        pokemon.heal();
        assert_eq!(pokemon.hp, 25.0);
    }

    #[test]
    fn test_display() {
        let pokemon = PokemonInst::new("Geodude", 10, PokemonType::Rock);
        assert_eq!(pokemon.to_string(), "Geodude (Level 10), Type: Rock");
    }
}
