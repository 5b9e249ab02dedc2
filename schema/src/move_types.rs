use crate::{Move, PokemonType};
use serde::{Deserialize, Serialize};

/// Static data for a single move: its element and base power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: Move,
    pub move_type: PokemonType,
    pub power: u16,
}

impl MoveData {
    pub const fn new(name: Move, move_type: PokemonType, power: u16) -> Self {
        Self {
            name,
            move_type,
            power,
        }
    }
}
