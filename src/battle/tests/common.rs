use crate::battle::state::TurnRng;
use crate::errors::GameResult;
use crate::game::Game;
use crate::player::Trainer;
use crate::pokemon::PokemonInst;
use crate::world::{Location, World};
use schema::{Move, PokemonType};

/// Location used by every test world.
pub const TEST_LOCATION: &str = "Tall Grass";

/// A builder for creating test Pokemon instances with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new("Charmander", 5, PokemonType::Fire)
///     .with_moves(vec![Move::Ember])
///     .with_hp(3.0)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    name: String,
    level: u8,
    pokemon_type: PokemonType,
    moves: Option<Vec<Move>>,
    current_hp: Option<f64>,
}

impl TestPokemonBuilder {
    pub fn new(name: &str, level: u8, pokemon_type: PokemonType) -> Self {
        Self {
            name: name.to_string(),
            level,
            pokemon_type,
            moves: None,
            current_hp: None,
        }
    }

    /// Sets the moves for the test Pokemon. If not set, the full catalog is known.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets the current HP for the test Pokemon. If not set, HP will be max.
    pub fn with_hp(mut self, hp: f64) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> PokemonInst {
        let mut pokemon = PokemonInst::new(self.name, self.level, self.pokemon_type);
        if let Some(moves) = self.moves {
            pokemon.moves = moves;
        }
        if let Some(hp) = self.current_hp {
            pokemon.hp = hp;
        }
        pokemon
    }
}

/// A game where the player stands in `TEST_LOCATION` next to `wild_pokemon`.
pub fn create_test_game(player_pokemon: PokemonInst, wild_pokemon: PokemonInst, rng: TurnRng) -> Game {
    let mut player = Trainer::new("Ash", TEST_LOCATION);
    player.add_to_roster(player_pokemon);

    let mut world = World::new();
    world.insert_location(Location::new(TEST_LOCATION, "Grass up to your knees."));
    world.place_wild_pokemon(TEST_LOCATION, wild_pokemon);

    Game::new(player, world, rng)
}

/// Creates a `TurnRng` with a long list of default values (50).
/// Every wiggle succeeds and a wild Pokémon with three moves always picks the
/// third.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![50; 100])
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: GameResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
