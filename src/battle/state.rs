use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::Move;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
pub enum BattleStatus {
    Ongoing,
    PlayerWon,
    PlayerLost,
}

impl BattleStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, BattleStatus::Ongoing)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Battle Start
    BattleStarted {
        wild_pokemon: String,
        player_pokemon: String,
    },
    HpReport {
        player_hp: f64,
        opponent_hp: f64,
    },

    // Turn Management
    TurnStarted {
        turn_number: u32,
    },
    TurnEnded,

    // Pokemon Actions
    MoveUsed {
        attacker: String,
        move_used: Move,
        super_effective: bool,
    },
    DamageDealt {
        attacker: String,
        target: String,
        damage: f64,
        remaining_hp: f64,
    },
    MoveUnknown {
        attacker: String,
        move_used: Move,
    },
    PokemonFainted {
        pokemon: String,
    },

    // Battle End
    WildDefeated {
        pokemon: String,
    },
    PlayerPokemonFainted,

    // Capture
    PokeballThrown,
    PokeballWiggled {
        wiggle: u8,
    },
    PokemonBrokeFree,
    PokemonCaught {
        pokemon: String,
    },
    PokemonEscaped,
}

impl BattleEvent {
    /// Formats the event into human-readable text.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::BattleStarted {
                wild_pokemon,
                player_pokemon,
            } => Some(format!(
                "\n---\nBattle begins!\nWild Pokémon {} appears!\nGo, {}!",
                wild_pokemon, player_pokemon
            )),
            BattleEvent::HpReport {
                player_hp,
                opponent_hp,
            } => Some(format!(
                "\n---\nYour Pokémon's HP: {}\nOpponent's Pokémon's HP: {}",
                player_hp, opponent_hp
            )),

            // === Turn Management Events ===
            BattleEvent::TurnStarted { .. } => None,
            BattleEvent::TurnEnded => None,

            // === Move Events ===
            BattleEvent::MoveUsed {
                attacker,
                move_used,
                super_effective,
            } => {
                if *super_effective {
                    Some(format!("{} used {}! It's super effective!", attacker, move_used))
                } else {
                    Some(format!("{} used {}!", attacker, move_used))
                }
            }
            BattleEvent::DamageDealt {
                attacker,
                target,
                damage,
                ..
            } => Some(format!("{} dealt {} damage to {}.", attacker, damage, target)),
            BattleEvent::MoveUnknown {
                attacker,
                move_used,
            } => Some(format!("{} doesn't know {}!", attacker, move_used)),
            BattleEvent::PokemonFainted { pokemon } => Some(format!("{} fainted!", pokemon)),

            // === Battle End Events ===
            BattleEvent::WildDefeated { pokemon } => Some(format!("You defeated {}!", pokemon)),
            BattleEvent::PlayerPokemonFainted => {
                Some("Your Pokémon fainted.\nGame Over.".to_string())
            }

            // === Capture Events ===
            BattleEvent::PokeballThrown => Some("You threw a Pokéball!".to_string()),
            BattleEvent::PokeballWiggled { .. } => Some("The Pokéball wiggles...".to_string()),
            BattleEvent::PokemonBrokeFree => Some("The Pokémon broke free!".to_string()),
            BattleEvent::PokemonCaught { pokemon } => {
                Some(format!("Congratulations! You caught {}!", pokemon))
            }
            BattleEvent::PokemonEscaped => Some("Oh no! The Pokémon escaped!".to_string()),
        }
    }
}

/// Event bus for collecting battle events in the order they happened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = BattleEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Every non-silent event rendered as text, one entry per event.
    pub fn formatted(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Source of every random outcome in a game: wiggle trials and wild move
/// choice.
///
/// Outcomes are percentile rolls in `1..=100`. A live source draws them from
/// an OS- or seed-initialized `StdRng`; a scripted source replays a fixed list
/// and panics when it runs dry.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Live(StdRng),
    Scripted { outcomes: Vec<u8>, index: usize },
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    pub fn new_random() -> Self {
        Self {
            source: RngSource::Live(StdRng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Live(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        match &mut self.source {
            RngSource::Live(rng) => rng.random_range(1..=100),
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];

                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", outcome, reason);

                *index += 1;
                outcome
            }
        }
    }

    /// True with probability `percent / 100`.
    pub fn roll_percent(&mut self, percent: u8, reason: &str) -> bool {
        self.next_outcome(reason) <= percent
    }

    /// Uniform index in `0..len`.
    ///
    /// Scripted outcomes are taken modulo `len`, so a test can pass the index
    /// it wants directly.
    pub fn choose_index(&mut self, len: usize, reason: &str) -> usize {
        if len == 0 {
            return 0;
        }
        if let RngSource::Live(rng) = &mut self.source {
            return rng.random_range(0..len);
        }
        self.next_outcome(reason) as usize % len
    }
}
