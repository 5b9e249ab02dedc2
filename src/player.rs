use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STARTING_MONEY: u32 = 100;

/// Distinguishes the human player from scripted trainers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerKind {
    Player,
    GymLeader,
}

/// A trainer: the human player or a gym leader.
///
/// Both share one struct. A gym leader only differs in being created with
/// a single pre-seeded Pokémon.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trainer {
    pub name: String,
    pub kind: TrainerKind,
    pub money: u32,
    pub current_location: String,
    pub badges: Vec<String>,

    // Insertion order is capture order. Battles always send out index 0.
    pub roster: Vec<PokemonInst>,
}

impl Trainer {
    /// Create a new player with an empty roster at the given location
    pub fn new(name: impl Into<String>, start_location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TrainerKind::Player,
            money: STARTING_MONEY,
            current_location: start_location.into(),
            badges: Vec::new(),
            roster: Vec::new(),
        }
    }

    /// Create a gym leader whose roster holds exactly `pokemon`
    pub fn gym_leader(
        name: impl Into<String>,
        location: impl Into<String>,
        pokemon: PokemonInst,
    ) -> Self {
        Self {
            kind: TrainerKind::GymLeader,
            roster: vec![pokemon],
            ..Self::new(name, location)
        }
    }

    pub fn with_money(mut self, money: u32) -> Self {
        self.money = money;
        self
    }

    /// The Pokémon sent out first in battle
    pub fn lead_pokemon(&self) -> Option<&PokemonInst> {
        self.roster.first()
    }

    pub fn lead_pokemon_mut(&mut self) -> Option<&mut PokemonInst> {
        self.roster.first_mut()
    }

    pub fn has_pokemon(&self) -> bool {
        !self.roster.is_empty()
    }

    pub fn add_to_roster(&mut self, pokemon: PokemonInst) {
        log::info!("{} added {} to their roster", self.name, pokemon.name);
        self.roster.push(pokemon);
    }

    /// Restore every roster Pokémon to its level formula HP
    pub fn heal_roster(&mut self) {
        for pokemon in &mut self.roster {
            pokemon.heal();
        }
    }
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TrainerKind::GymLeader => {
                let lead = self
                    .lead_pokemon()
                    .map(|p| p.name.as_str())
                    .unwrap_or("no Pokémon");
                write!(
                    f,
                    "Gym Leader {} ({}): {}",
                    self.name, self.current_location, lead
                )
            }
            TrainerKind::Player => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::PokemonType;

    #[test]
    fn test_new_player_defaults() {
        let player = Trainer::new("Ash", "Pallet Town");
        assert_eq!(player.kind, TrainerKind::Player);
        assert_eq!(player.money, 100);
        assert_eq!(player.current_location, "Pallet Town");
        assert!(player.badges.is_empty());
        assert!(!player.has_pokemon());
        assert!(player.lead_pokemon().is_none());
    }

    #[test]
    fn test_gym_leader_has_one_pokemon() {
        let brock = Trainer::gym_leader(
            "Brock",
            "Pewter City Gym",
            PokemonInst::new("Geodude", 10, PokemonType::Rock),
        );
        assert_eq!(brock.kind, TrainerKind::GymLeader);
        assert_eq!(brock.roster.len(), 1);
        assert_eq!(brock.money, 100);
        assert_eq!(brock.to_string(), "Gym Leader Brock (Pewter City Gym): Geodude");
    }

    #[test]
    fn test_roster_keeps_capture_order() {
        let mut player = Trainer::new("Ash", "Pallet Town");
        player.add_to_roster(PokemonInst::new("Charmander", 5, PokemonType::Fire));
        player.add_to_roster(PokemonInst::new("Pidgey", 3, PokemonType::Flying));

        let names: Vec<&str> = player.roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Charmander", "Pidgey"]);
        assert_eq!(player.lead_pokemon().map(|p| p.name.as_str()), Some("Charmander"));
    }

    #[test]
    fn test_heal_roster_twice_gives_same_hp() {
        let mut player = Trainer::new("Ash", "Pallet Town");
        player.add_to_roster(PokemonInst::new("Charmander", 5, PokemonType::Fire));
        player.add_to_roster(PokemonInst::new("Pidgey", 3, PokemonType::Flying));
        player.roster[0].take_damage(40.0);
        player.roster[1].take_damage(2.0);

        player.heal_roster();
        let first: Vec<f64> = player.roster.iter().map(|p| p.hp).collect();
        player.heal_roster();
        let second: Vec<f64> = player.roster.iter().map(|p| p.hp).collect();

        assert_eq!(first, vec![25.0, 15.0]);
        assert_eq!(first, second);
    }
}
