// Pokemon Text Adventure Schema - Shared type definitions
// This crate holds the static enums and value types shared by the game core
// and its world data documents.

// Re-export the main types
pub use move_types::*;
pub use moves::*;
pub use pokemon_types::*;

pub mod move_types;
pub mod moves;
pub mod pokemon_types;
