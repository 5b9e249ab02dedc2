//! World and rules data.
//!
//! The shipped world is a RON document compiled into the binary. It is parsed
//! and validated once at startup; nothing is read from disk at runtime.

use crate::errors::{ConfigError, ConfigResult};
use crate::player::Trainer;
use crate::pokemon::PokemonInst;
use schema::PokemonType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_WORLD: &str = include_str!("../data/world.ron");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonTemplate {
    pub name: String,
    pub level: u8,
    pub pokemon_type: PokemonType,
}

impl PokemonTemplate {
    pub fn create(&self) -> PokemonInst {
        PokemonInst::new(self.name.clone(), self.level, self.pokemon_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarterTemplate {
    pub name: String,
    pub pokemon_type: PokemonType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymLeaderTemplate {
    pub name: String,
    pub pokemon: PokemonTemplate,
}

impl GymLeaderTemplate {
    pub fn create(&self, location: &str) -> Trainer {
        Trainer::gym_leader(self.name.clone(), location, self.pokemon.create())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub description: String,
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    #[serde(default)]
    pub wild_pokemon: Option<PokemonTemplate>,
    #[serde(default)]
    pub gym_leader: Option<GymLeaderTemplate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub start_location: String,
    pub starting_money: u32,
    pub starter_level: u8,
    pub starters: Vec<StarterTemplate>,
    pub locations: BTreeMap<String, LocationConfig>,
}

impl GameConfig {
    /// Load the world compiled into the binary
    pub fn load_default() -> ConfigResult<Self> {
        Self::from_ron_str(DEFAULT_WORLD)
    }

    /// Parse and validate a world document
    pub fn from_ron_str(source: &str) -> ConfigResult<Self> {
        let config: GameConfig =
            ron::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.locations.contains_key(&self.start_location) {
            return Err(ConfigError::UnknownStartLocation(
                self.start_location.clone(),
            ));
        }
        if self.starters.is_empty() {
            return Err(ConfigError::NoStarters);
        }
        if self.starter_level == 0 {
            return Err(ConfigError::InvalidLevel {
                name: self.starters[0].name.clone(),
            });
        }

        for (name, location) in &self.locations {
            for (direction, target) in &location.exits {
                if !self.locations.contains_key(target) {
                    return Err(ConfigError::UnknownExit {
                        from: name.clone(),
                        direction: direction.clone(),
                        to: target.clone(),
                    });
                }
            }

            let templates = location
                .wild_pokemon
                .iter()
                .chain(location.gym_leader.iter().map(|leader| &leader.pokemon));
            for template in templates {
                if template.level == 0 {
                    return Err(ConfigError::InvalidLevel {
                        name: template.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Create the starter Pokémon the player picked
    pub fn create_starter(&self, starter: &StarterTemplate) -> PokemonInst {
        PokemonInst::new(starter.name.clone(), self.starter_level, starter.pokemon_type)
    }

    pub fn starter_names(&self) -> Vec<&str> {
        self.starters.iter().map(|s| s.name.as_str()).collect()
    }
}
