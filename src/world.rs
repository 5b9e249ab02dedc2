//! The location graph and the live state of every wild Pokémon in it.

use crate::config::GameConfig;
use crate::player::Trainer;
use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub exits: BTreeMap<String, String>,
    /// Present in the data but never challenged.
    pub gym_leader: Option<Trainer>,
}

impl Location {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            gym_leader: None,
        }
    }

    pub fn with_exit(mut self, direction: impl Into<String>, to: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), to.into());
        self
    }

    pub fn with_gym_leader(mut self, leader: Trainer) -> Self {
        self.gym_leader = Some(leader);
        self
    }
}

/// Live state of the wild Pokémon bound to a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Encounter {
    /// Still out there, carrying whatever damage earlier battles left.
    Roaming(PokemonInst),
    /// Moved into the player's roster.
    Caught { name: String },
}

/// Locations keyed by name, plus the encounter store.
///
/// Wild Pokémon are created once when the world is built. Battles mutate the
/// stored instance in place, so damage and capture outlive the encounter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    locations: BTreeMap<String, Location>,
    encounters: HashMap<String, Encounter>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut world = Self::new();
        for (name, location_config) in &config.locations {
            let mut location = Location::new(name.clone(), location_config.description.clone());
            location.exits = location_config.exits.clone();
            location.gym_leader = location_config
                .gym_leader
                .as_ref()
                .map(|leader| leader.create(name));
            world.insert_location(location);

            if let Some(template) = &location_config.wild_pokemon {
                world.place_wild_pokemon(name, template.create());
            }
        }
        world
    }

    pub fn insert_location(&mut self, location: Location) {
        self.locations.insert(location.name.clone(), location);
    }

    /// Bind a wild Pokémon to a location, replacing any previous encounter.
    pub fn place_wild_pokemon(&mut self, location: &str, pokemon: PokemonInst) {
        self.encounters
            .insert(location.to_string(), Encounter::Roaming(pokemon));
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Destination reached by leaving `from` towards `direction`.
    pub fn exit(&self, from: &str, direction: &str) -> Option<&str> {
        self.locations
            .get(from)
            .and_then(|location| location.exits.get(direction))
            .map(String::as_str)
    }

    pub fn encounter(&self, location: &str) -> Option<&Encounter> {
        self.encounters.get(location)
    }

    /// The wild Pokémon still roaming at `location`, if any.
    pub fn wild_pokemon(&self, location: &str) -> Option<&PokemonInst> {
        match self.encounters.get(location) {
            Some(Encounter::Roaming(pokemon)) => Some(pokemon),
            _ => None,
        }
    }

    pub fn wild_pokemon_mut(&mut self, location: &str) -> Option<&mut PokemonInst> {
        match self.encounters.get_mut(location) {
            Some(Encounter::Roaming(pokemon)) => Some(pokemon),
            _ => None,
        }
    }

    /// Remove the roaming Pokémon from `location`, leaving a `Caught` marker.
    pub fn take_wild_pokemon(&mut self, location: &str) -> Option<PokemonInst> {
        let name = self.wild_pokemon(location)?.name.clone();
        match self
            .encounters
            .insert(location.to_string(), Encounter::Caught { name })
        {
            Some(Encounter::Roaming(pokemon)) => Some(pokemon),
            _ => None,
        }
    }
}
