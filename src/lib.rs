//! Pokémon Text Adventure
//!
//! A small turn-based adventure: walk a graph of locations, fight the wild
//! Pokémon bound to them, throw Pokéballs and keep a roster. The core is
//! independent of the console so whole sessions can be replayed in tests.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod game;
pub mod input;
pub mod move_data;
pub mod player;
pub mod pokemon;
pub mod session;
pub mod terminal;
pub mod world;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Move, MoveData, PokemonType};

// --- From this crate's modules (`src/`) ---

// Battle engine.
pub use battle::runner::{BattleRunnerError, ExecutionResult, WildBattle};
pub use battle::state::{BattleEvent, BattleStatus, EventBus, TurnRng};
pub use battle::stats::{TypeChart, TYPE_CHART};

// Core runtime types.
pub use game::{Game, GameEvent};
pub use player::{Trainer, TrainerKind};
pub use pokemon::PokemonInst;
pub use world::{Encounter, Location, World};

// Data access and configuration.
pub use config::GameConfig;
pub use move_data::get_move_data;

// Session driving.
pub use session::{run, run_default};
pub use terminal::{ScriptedTerminal, StdioTerminal, Terminal};

// Crate-specific error and result types.
pub use errors::{ConfigError, ConfigResult, GameError, GameResult, LookupMiss};
