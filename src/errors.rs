use crate::battle::runner::BattleRunnerError;
use schema::PokemonType;
use std::fmt;

/// Main error type for the text adventure.
///
/// Every variant except `Config` and `InputClosed` is recoverable at the
/// point where it is raised: the caller prints the message and either
/// re-prompts or drops back to the main menu.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Input did not match any of the offered choices. Carries the corrective
    /// message shown before re-prompting.
    InvalidSelection(String),
    /// A battle was requested but the player has no Pokémon.
    EmptyRoster,
    /// A battle was requested but one side has already fainted.
    CombatantFainted { name: String },
    /// The current location has no roaming wild Pokémon to battle.
    NoWildPokemon { location: String },
    /// Error raised by the battle runner while resolving a turn.
    Battle(BattleRunnerError),
    /// The embedded world document is malformed.
    Config(ConfigError),
    /// The input stream was closed before a choice could be read.
    InputClosed,
}

/// A type chart miss, naming the axis that was not found.
///
/// Never fatal: the chart reports it and the attack goes ahead at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMiss {
    /// The attacking move's type has no row in the chart.
    MoveType(PokemonType),
    /// The row exists but has no entry for the defender's type.
    DefenderType {
        move_type: PokemonType,
        defender_type: PokemonType,
    },
}

/// Errors raised while loading or validating the world document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The RON document could not be parsed
    Parse(String),
    /// The configured start location is not a known location
    UnknownStartLocation(String),
    /// An exit points at a location that does not exist
    UnknownExit {
        from: String,
        direction: String,
        to: String,
    },
    /// A creature template has level 0
    InvalidLevel { name: String },
    /// No starter Pokémon were configured
    NoStarters,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSelection(message) => write!(f, "{}", message),
            GameError::EmptyRoster => write!(f, "You have no Pokémon to battle with!"),
            GameError::CombatantFainted { name } => {
                write!(f, "{} is in no condition to battle.", name)
            }
            GameError::NoWildPokemon { location } => {
                write!(f, "There are no wild Pokémon in {}.", location)
            }
            GameError::Battle(err) => write!(f, "{}", err),
            GameError::Config(err) => write!(f, "World data error: {}", err),
            GameError::InputClosed => write!(f, "Input stream closed"),
        }
    }
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMiss::MoveType(move_type) => write!(
                f,
                "Warning: Move type '{}' not found in effectiveness chart.",
                move_type
            ),
            LookupMiss::DefenderType {
                move_type,
                defender_type,
            } => write!(
                f,
                "Warning: Opponent type '{}' not found in effectiveness chart for move type '{}'.",
                defender_type, move_type
            ),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(details) => write!(f, "Malformed world data: {}", details),
            ConfigError::UnknownStartLocation(name) => {
                write!(f, "Start location '{}' does not exist", name)
            }
            ConfigError::UnknownExit {
                from,
                direction,
                to,
            } => write!(
                f,
                "Exit '{}' from '{}' leads to unknown location '{}'",
                direction, from, to
            ),
            ConfigError::InvalidLevel { name } => {
                write!(f, "Pokémon '{}' must have a level of at least 1", name)
            }
            ConfigError::NoStarters => write!(f, "No starter Pokémon configured"),
        }
    }
}

impl std::error::Error for GameError {}
impl std::error::Error for LookupMiss {}
impl std::error::Error for ConfigError {}

impl From<BattleRunnerError> for GameError {
    fn from(err: BattleRunnerError) -> Self {
        GameError::Battle(err)
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
