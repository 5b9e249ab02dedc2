use crate::battle::calculators::execute_attack;
use crate::battle::state::{BattleEvent, BattleStatus, EventBus, TurnRng};
use crate::battle::stats::TypeChart;
use crate::pokemon::PokemonInst;
use schema::Move;

/// A wild encounter, driven one player move at a time.
///
/// The runner does not own either Pokémon. Each call borrows the player's
/// lead and the wild Pokémon from wherever they live, so damage lands on the
/// real instances and persists after the battle.
#[derive(Debug, Clone, PartialEq)]
pub struct WildBattle {
    location: String,
    status: BattleStatus,
    turn_number: u32,
}

/// Result of executing one battle turn
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub events: Vec<BattleEvent>,
    pub status: BattleStatus,
    pub battle_ended: bool,
}

/// Errors that can occur when using the battle runner
#[derive(Debug, Clone, PartialEq)]
pub enum BattleRunnerError {
    /// The battle already finished
    GameNotAcceptingActions,
    /// The player's Pokémon does not know the chosen move. The turn is not used.
    UnknownMove { pokemon: String, move_used: Move },
    NoActivePokemon,
    NoWildPokemon { location: String },
    /// One side is already fainted, so the battle cannot start.
    CombatantFainted { name: String },
}

impl WildBattle {
    /// Start a battle at `location`.
    ///
    /// Emits the opening events. Fails without touching anything if either
    /// side is already fainted, since no turn could be played.
    pub fn start(
        location: impl Into<String>,
        player_pokemon: &PokemonInst,
        wild_pokemon: &PokemonInst,
    ) -> Result<(Self, Vec<BattleEvent>), BattleRunnerError> {
        for pokemon in [player_pokemon, wild_pokemon] {
            if pokemon.is_fainted() {
                return Err(BattleRunnerError::CombatantFainted {
                    name: pokemon.name.clone(),
                });
            }
        }

        let battle = Self {
            location: location.into(),
            status: BattleStatus::Ongoing,
            turn_number: 1,
        };
        log::info!(
            "Battle at {}: {} vs wild {}",
            battle.location,
            player_pokemon.name,
            wild_pokemon.name
        );

        let events = vec![BattleEvent::BattleStarted {
            wild_pokemon: wild_pokemon.name.clone(),
            player_pokemon: player_pokemon.name.clone(),
        }];
        Ok((battle, events))
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn is_ongoing(&self) -> bool {
        !self.status.is_over()
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Play one turn: the player's move, then (if the wild Pokémon is still
    /// standing) a uniformly random move from the wild Pokémon.
    pub fn submit_move(
        &mut self,
        player_pokemon: &mut PokemonInst,
        wild_pokemon: &mut PokemonInst,
        player_move: Move,
        chart: &TypeChart,
        rng: &mut TurnRng,
    ) -> Result<ExecutionResult, BattleRunnerError> {
        if self.status.is_over() {
            return Err(BattleRunnerError::GameNotAcceptingActions);
        }
        if !player_pokemon.knows_move(player_move) {
            return Err(BattleRunnerError::UnknownMove {
                pokemon: player_pokemon.name.clone(),
                move_used: player_move,
            });
        }

        let mut bus = EventBus::new();
        bus.push(BattleEvent::TurnStarted {
            turn_number: self.turn_number,
        });

        execute_attack(player_pokemon, wild_pokemon, player_move, chart, &mut bus);

        if wild_pokemon.is_fainted() {
            self.status = BattleStatus::PlayerWon;
            bus.push(BattleEvent::WildDefeated {
                pokemon: wild_pokemon.name.clone(),
            });
        } else {
            let wild_move = choose_wild_move(wild_pokemon, rng);
            execute_attack(wild_pokemon, player_pokemon, wild_move, chart, &mut bus);

            if player_pokemon.is_fainted() {
                self.status = BattleStatus::PlayerLost;
                bus.push(BattleEvent::PlayerPokemonFainted);
            }
        }

        bus.push(BattleEvent::TurnEnded);
        log::debug!("Turn {} resolved: {:?}", self.turn_number, self.status);
        self.turn_number += 1;

        if self.status.is_over() {
            log::info!("Battle at {} ended: {:?}", self.location, self.status);
        }

        Ok(ExecutionResult {
            events: bus.into_events(),
            status: self.status,
            battle_ended: self.status.is_over(),
        })
    }
}

/// Uniform pick from the wild Pokémon's own move list.
fn choose_wild_move(wild_pokemon: &PokemonInst, rng: &mut TurnRng) -> Move {
    let index = rng.choose_index(wild_pokemon.moves.len(), "wild move choice");
    // Falls back to Tackle for a Pokémon with no moves; its attack is then a no-op.
    wild_pokemon.moves.get(index).copied().unwrap_or(Move::Tackle)
}

impl std::fmt::Display for BattleRunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleRunnerError::GameNotAcceptingActions => {
                write!(f, "The battle is over and is not accepting moves")
            }
            BattleRunnerError::UnknownMove { pokemon, move_used } => {
                write!(f, "{} doesn't know {}!", pokemon, move_used)
            }
            BattleRunnerError::NoActivePokemon => write!(f, "You have no Pokémon to battle with!"),
            BattleRunnerError::NoWildPokemon { location } => {
                write!(f, "There is no wild Pokémon to battle in {}", location)
            }
            BattleRunnerError::CombatantFainted { name } => {
                write!(f, "{} is in no condition to battle.", name)
            }
        }
    }
}

impl std::error::Error for BattleRunnerError {}
