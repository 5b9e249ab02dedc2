use crate::battle::catch::calculate_catch_events;
use crate::battle::runner::{BattleRunnerError, ExecutionResult, WildBattle};
use crate::battle::state::{BattleEvent, BattleStatus, TurnRng};
use crate::battle::stats::TypeChart;
use crate::config::{GameConfig, StarterTemplate};
use crate::errors::{GameError, GameResult};
use crate::player::Trainer;
use crate::world::World;
use schema::Move;
use std::fmt;

/// Things that happen outside of battle, in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Moved { location: String },
    BlockedPath,
    Arrived { location: String, description: String },
    GymLeaderPresent { leader: String },
    WildAppeared { pokemon: String },
    RosterListing { entries: Vec<String> },
    EmptyRosterListing,
    Money { amount: u32 },
    PokecenterHealed,
    MartWelcome,
}

impl GameEvent {
    /// True when this event means a battle has to be fought right away.
    pub fn forces_battle(&self) -> bool {
        matches!(self, GameEvent::WildAppeared { .. })
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Moved { location } => write!(f, "You move to {}", location),
            GameEvent::BlockedPath => write!(f, "You can't go that way."),
            GameEvent::Arrived {
                location,
                description,
            } => write!(f, "\n---\nYou are now in {}\n{}", location, description),
            GameEvent::GymLeaderPresent { leader } => write!(f, "{}", leader),
            GameEvent::WildAppeared { pokemon } => write!(f, "A wild {} appears!", pokemon),
            GameEvent::RosterListing { entries } => {
                write!(f, "Your Pokémon:")?;
                for entry in entries {
                    write!(f, "\n- {}", entry)?;
                }
                Ok(())
            }
            GameEvent::EmptyRosterListing => write!(f, "You have no Pokémon."),
            GameEvent::Money { amount } => write!(f, "You have {} Pokédollars.", amount),
            GameEvent::PokecenterHealed => write!(
                f,
                "Welcome to the Pokémon Center!\nYour Pokémon have been healed."
            ),
            GameEvent::MartWelcome => write!(
                f,
                "Welcome to the Poké Mart!\nHere's what we have for sale:\n(The shelves are empty.)"
            ),
        }
    }
}

/// One run of the game: the player, the world and the dice.
#[derive(Debug, Clone)]
pub struct Game {
    player: Trainer,
    world: World,
    chart: TypeChart,
    rng: TurnRng,
}

impl Game {
    pub fn new(player: Trainer, world: World, rng: TurnRng) -> Self {
        Self {
            player,
            world,
            chart: TypeChart::standard(),
            rng,
        }
    }

    /// Build the configured world and a player holding the chosen starter.
    pub fn from_config(
        config: &GameConfig,
        player_name: &str,
        starter: &StarterTemplate,
        rng: TurnRng,
    ) -> Self {
        let mut player = Trainer::new(player_name, config.start_location.clone())
            .with_money(config.starting_money);
        player.add_to_roster(config.create_starter(starter));

        Self::new(player, World::from_config(config), rng)
    }

    pub fn player(&self) -> &Trainer {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Trainer {
        &mut self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn current_location(&self) -> &str {
        &self.player.current_location
    }

    /// Leave the current location towards `direction`.
    ///
    /// An unknown direction changes nothing. A successful move explores the
    /// new location; if that announces a wild Pokémon the caller must run the
    /// battle before doing anything else.
    pub fn travel(&mut self, direction: &str) -> Vec<GameEvent> {
        let destination = match self.world.exit(&self.player.current_location, direction) {
            Some(destination) => destination.to_string(),
            None => {
                log::debug!(
                    "No exit '{}' from {}",
                    direction,
                    self.player.current_location
                );
                return vec![GameEvent::BlockedPath];
            }
        };

        log::info!(
            "{} travels {} from {} to {}",
            self.player.name,
            direction,
            self.player.current_location,
            destination
        );
        self.player.current_location = destination.clone();

        let mut events = vec![GameEvent::Moved {
            location: destination,
        }];
        events.extend(self.explore_location());
        events
    }

    /// Describe the current location and announce any roaming wild Pokémon.
    pub fn explore_location(&self) -> Vec<GameEvent> {
        let name = self.current_location();
        let Some(location) = self.world.location(name) else {
            log::warn!("Player is at unknown location '{}'", name);
            return Vec::new();
        };

        let mut events = vec![GameEvent::Arrived {
            location: location.name.clone(),
            description: location.description.clone(),
        }];
        if let Some(leader) = &location.gym_leader {
            events.push(GameEvent::GymLeaderPresent {
                leader: leader.to_string(),
            });
        }
        if let Some(wild) = self.world.wild_pokemon(name) {
            events.push(GameEvent::WildAppeared {
                pokemon: wild.name.clone(),
            });
        }
        events
    }

    /// Start a battle against the wild Pokémon at the current location.
    ///
    /// Nothing changes when this fails: an empty roster or an already
    /// fainted combatant simply means no battle takes place.
    pub fn start_wild_battle(&self) -> GameResult<(WildBattle, Vec<BattleEvent>)> {
        let location = self.current_location();
        let wild = self
            .world
            .wild_pokemon(location)
            .ok_or_else(|| GameError::NoWildPokemon {
                location: location.to_string(),
            })?;
        let lead = self.player.lead_pokemon().ok_or(GameError::EmptyRoster)?;

        WildBattle::start(location, lead, wild).map_err(|err| match err {
            BattleRunnerError::CombatantFainted { name } => {
                log::info!("Battle at {} skipped: {} has fainted", location, name);
                GameError::CombatantFainted { name }
            }
            other => other.into(),
        })
    }

    /// Current HP of both sides of `battle`.
    pub fn hp_report(&self, battle: &WildBattle) -> Option<BattleEvent> {
        let lead = self.player.lead_pokemon()?;
        let wild = self.world.wild_pokemon(battle.location())?;
        Some(BattleEvent::HpReport {
            player_hp: lead.current_hp(),
            opponent_hp: wild.current_hp(),
        })
    }

    /// Play one turn of `battle` with the player's chosen move.
    ///
    /// When the turn wins the battle a Pokéball is thrown straight away, and
    /// a successful catch moves the wild Pokémon into the roster.
    pub fn battle_turn(&mut self, battle: &mut WildBattle, player_move: Move) -> GameResult<ExecutionResult> {
        let location = battle.location().to_string();
        let player_pokemon = self
            .player
            .lead_pokemon_mut()
            .ok_or(BattleRunnerError::NoActivePokemon)?;
        let wild = self
            .world
            .wild_pokemon_mut(&location)
            .ok_or_else(|| BattleRunnerError::NoWildPokemon {
                location: location.clone(),
            })?;

        let mut result = battle.submit_move(player_pokemon, wild, player_move, &self.chart, &mut self.rng)?;
        if result.status != BattleStatus::PlayerWon {
            return Ok(result);
        }

        let wild_name = wild.name.clone();
        match calculate_catch_events(result.status, &wild_name, &mut self.rng) {
            Ok((attempt, events)) => {
                result.events.extend(events);
                if attempt.caught {
                    if let Some(caught) = self.world.take_wild_pokemon(&location) {
                        self.player.add_to_roster(caught);
                    }
                }
            }
            Err(err) => log::warn!("No catch attempt after battle: {}", err),
        }

        Ok(result)
    }

    /// Restore every roster Pokémon to full HP.
    pub fn visit_pokecenter(&mut self) -> Vec<GameEvent> {
        self.player.heal_roster();
        log::info!("Healed {} Pokémon", self.player.roster.len());
        vec![GameEvent::PokecenterHealed]
    }

    pub fn visit_mart(&self) -> Vec<GameEvent> {
        vec![GameEvent::MartWelcome]
    }

    pub fn show_pokemon(&self) -> Vec<GameEvent> {
        if self.player.roster.is_empty() {
            return vec![GameEvent::EmptyRosterListing];
        }
        vec![GameEvent::RosterListing {
            entries: self.player.roster.iter().map(|p| p.to_string()).collect(),
        }]
    }

    pub fn show_money(&self) -> Vec<GameEvent> {
        vec![GameEvent::Money {
            amount: self.player.money,
        }]
    }
}
