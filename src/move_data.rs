use schema::{Move, MoveData, PokemonType};
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

// Global move catalog - every move the game knows about, built once
static MOVE_DATA: LazyLock<HashMap<Move, MoveData>> = LazyLock::new(|| {
    [
        MoveData::new(Move::Tackle, PokemonType::Normal, 10),
        MoveData::new(Move::Ember, PokemonType::Fire, 20),
        MoveData::new(Move::WaterGun, PokemonType::Water, 20),
    ]
    .into_iter()
    .map(|data| (data.name, data))
    .collect()
});

/// Get move data for a specific move from the catalog
pub fn get_move_data(move_: Move) -> Option<MoveData> {
    MOVE_DATA.get(&move_).copied()
}

/// The move set handed to every new Pokémon.
///
/// All creatures currently share the full catalog regardless of species.
pub fn standard_move_set() -> Vec<Move> {
    Move::iter().filter(|m| MOVE_DATA.contains_key(m)).collect()
}

/// Display names of every catalog move, in declaration order.
pub fn move_names() -> Vec<&'static str> {
    standard_move_set()
        .into_iter()
        .map(|move_| -> &'static str { move_.into() })
        .collect()
}
