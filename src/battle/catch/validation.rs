use crate::battle::state::BattleStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatchError {
    /// Only a won battle ends with a Pokéball throw
    BattleNotWon { status: BattleStatus },
}

/// Validate that a battle in `status` may end in a catch attempt
pub fn can_attempt_catch(status: BattleStatus) -> Result<(), CatchError> {
    match status {
        BattleStatus::PlayerWon => Ok(()),
        other => Err(CatchError::BattleNotWon { status: other }),
    }
}

impl std::fmt::Display for CatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatchError::BattleNotWon { status } => {
                write!(f, "Cannot throw a Pokéball unless the battle was won (status: {:?})", status)
            }
        }
    }
}

impl std::error::Error for CatchError {}
